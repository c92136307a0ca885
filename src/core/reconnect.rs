//! Switching a device between USB and the wireless listener.

use crate::core::device::{DeviceRecord, WIRELESS_PORT};
use crate::domain::error::{LiberateError, LiberateResult};
use crate::infrastructure::adb::{Bridge, CommandRunner};
use once_cell::sync::Lazy;
use regex::Regex;
use std::net::{Ipv4Addr, SocketAddrV4};
use tracing::{debug, info};

static IPV4: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b").expect("IPv4 pattern is valid")
});

/// Progress of one reconnection. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconnectState {
    Selected,
    ListenerEnabled,
    AddressDiscovered(Ipv4Addr),
    Connected(SocketAddrV4),
}

impl std::fmt::Display for ReconnectState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReconnectState::Selected => write!(f, "Selected"),
            ReconnectState::ListenerEnabled => write!(f, "ListenerEnabled"),
            ReconnectState::AddressDiscovered(ip) => write!(f, "AddressDiscovered({})", ip),
            ReconnectState::Connected(addr) => write!(f, "Connected({})", addr),
        }
    }
}

/// Drives the enable-listener, discover-address, connect sequence
pub struct ReconnectionDriver<'a, R> {
    bridge: &'a Bridge<R>,
    interface: String,
}

impl<'a, R: CommandRunner> ReconnectionDriver<'a, R> {
    pub fn new(bridge: &'a Bridge<R>, interface: impl Into<String>) -> Self {
        Self {
            bridge,
            interface: interface.into(),
        }
    }

    /// Move `device` onto the wireless listener and return the address it
    /// was connected on. Every step runs once; the first failure ends it.
    pub async fn liberate(&self, device: &DeviceRecord) -> LiberateResult<SocketAddrV4> {
        let mut state = ReconnectState::Selected;
        debug!("{}: {}", device.id, state);

        loop {
            state = match state {
                ReconnectState::Selected => {
                    self.enable_listener(device).await?;
                    ReconnectState::ListenerEnabled
                }
                ReconnectState::ListenerEnabled => {
                    ReconnectState::AddressDiscovered(self.discover_address(device).await?)
                }
                ReconnectState::AddressDiscovered(ip) => {
                    ReconnectState::Connected(self.connect(device, ip).await?)
                }
                ReconnectState::Connected(address) => {
                    info!("'{}' liberated on {}", device.display_name(), address);
                    return Ok(address);
                }
            };
            debug!("{}: {}", device.id, state);
        }
    }

    /// Switch a wirelessly attached device back to USB
    pub async fn disconnect(&self, device: &DeviceRecord) -> LiberateResult<()> {
        if !device.is_wireless() {
            return Err(LiberateError::NotWireless {
                model: device.display_name().to_string(),
            });
        }

        let output = self.bridge.usb(&device.id).await?;
        if !output.success() {
            return Err(LiberateError::DisconnectFailed {
                model: device.display_name().to_string(),
                output,
            });
        }
        info!("'{}' disconnected", device.display_name());
        Ok(())
    }

    async fn enable_listener(&self, device: &DeviceRecord) -> LiberateResult<()> {
        let output = self.bridge.enable_tcpip(&device.id, WIRELESS_PORT).await?;
        if output.success() {
            Ok(())
        } else {
            Err(LiberateError::ListenerEnableFailed {
                model: device.display_name().to_string(),
                output,
            })
        }
    }

    async fn discover_address(&self, device: &DeviceRecord) -> LiberateResult<Ipv4Addr> {
        let output = self
            .bridge
            .interface_address(&device.id, &self.interface)
            .await?;
        if !output.success() {
            return Err(LiberateError::AddressDiscoveryFailed {
                model: device.display_name().to_string(),
                output,
            });
        }

        match find_ipv4(&output.stdout) {
            Some(ip) => {
                debug!("IP address for {} is {}", device.display_name(), ip);
                Ok(ip)
            }
            None => Err(LiberateError::WirelessDisabled {
                model: device.display_name().to_string(),
            }),
        }
    }

    async fn connect(&self, device: &DeviceRecord, ip: Ipv4Addr) -> LiberateResult<SocketAddrV4> {
        let address = SocketAddrV4::new(ip, WIRELESS_PORT);
        let output = self.bridge.connect(address).await?;
        if output.success() {
            Ok(address)
        } else {
            Err(LiberateError::ConnectFailed {
                model: device.display_name().to_string(),
                address: ip.to_string(),
                output,
            })
        }
    }
}

/// First valid dotted-quad address in `text`
pub fn find_ipv4(text: &str) -> Option<Ipv4Addr> {
    IPV4.find_iter(text)
        .find_map(|found| found.as_str().parse::<Ipv4Addr>().ok())
}
