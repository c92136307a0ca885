use crate::domain::command::CommandOutput;
use crate::domain::error::LiberateResult;
use crate::infrastructure::adb::runner::CommandRunner;
use std::net::SocketAddrV4;

/// The adb command lines liberate needs, on top of a [`CommandRunner`]
pub struct Bridge<R> {
    runner: R,
}

impl<R: CommandRunner> Bridge<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// `adb devices -l`, failing on a non-zero exit
    pub async fn list_devices(&self) -> LiberateResult<String> {
        let output = self.runner.run_checked(&args(&["devices", "-l"])).await?;
        Ok(output.stdout)
    }

    /// `adb -s <id> tcpip <port>`
    pub async fn enable_tcpip(&self, id: &str, port: u16) -> LiberateResult<CommandOutput> {
        self.runner
            .run(&args(&["-s", id, "tcpip", &port.to_string()]))
            .await
    }

    /// `adb -s <id> shell ip -f inet addr show <interface>`
    pub async fn interface_address(
        &self,
        id: &str,
        interface: &str,
    ) -> LiberateResult<CommandOutput> {
        self.runner
            .run(&args(&[
                "-s", id, "shell", "ip", "-f", "inet", "addr", "show", interface,
            ]))
            .await
    }

    /// `adb connect <ip>:<port>`
    pub async fn connect(&self, address: SocketAddrV4) -> LiberateResult<CommandOutput> {
        self.runner
            .run(&args(&["connect", &address.to_string()]))
            .await
    }

    /// `adb -s <id> usb`
    pub async fn usb(&self, id: &str) -> LiberateResult<CommandOutput> {
        self.runner.run(&args(&["-s", id, "usb"])).await
    }
}

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
