use crate::core::device::DeviceRecord;
use crate::domain::command::CommandOutput;
use thiserror::Error;

/// Liberate unified error type
#[derive(Error, Debug)]
pub enum LiberateError {
    #[error("'{tool}' (Android Debug Bridge) not found in path.")]
    ToolNotFound { tool: String },

    #[error("No connected devices found.")]
    NoDevicesFound,

    #[error("Malformed device line: '{line}'")]
    MalformedDeviceLine { line: String },

    #[error("Uh-oh! no device matched '{key}'.")]
    NoKeyMatch { key: String },

    #[error("Multiple devices matched '{key}'.")]
    AmbiguousKeyMatch {
        key: String,
        candidates: Vec<DeviceRecord>,
    },

    #[error("Command '{command}' failed with exit code {}", .output.exit_code)]
    CommandExecutionFailed {
        command: String,
        output: CommandOutput,
    },

    #[error("WiFi is turned off on '{model}', turn it on from your device's settings.")]
    WirelessDisabled { model: String },

    #[error("Unable to open port on '{model}'.")]
    ListenerEnableFailed { model: String, output: CommandOutput },

    #[error("Unable to read the WiFi address of '{model}'.")]
    AddressDiscoveryFailed { model: String, output: CommandOutput },

    #[error("Unable to connect to '{model}' via {address}. Are we on the same network?")]
    ConnectFailed {
        model: String,
        address: String,
        output: CommandOutput,
    },

    #[error("'{model}' is not connected via WiFi.")]
    NotWireless { model: String },

    #[error("Unable to disconnect '{model}'.")]
    DisconnectFailed { model: String, output: CommandOutput },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl LiberateError {
    /// Outcomes the operator can act on (plug in a device, refine the key,
    /// turn WiFi on). They are reported without a `Details...` section.
    pub fn is_operator_outcome(&self) -> bool {
        matches!(
            self,
            Self::NoDevicesFound
                | Self::NoKeyMatch { .. }
                | Self::AmbiguousKeyMatch { .. }
                | Self::WirelessDisabled { .. }
                | Self::NotWireless { .. }
        )
    }

    /// Process exit code for this error: 3 for operator outcomes, 1 otherwise.
    /// 2 is left to clap's usage errors.
    pub fn exit_code(&self) -> i32 {
        if self.is_operator_outcome() {
            3
        } else {
            1
        }
    }

    /// Output captured from the external tool, if this error carries any.
    pub fn diagnostics(&self) -> Option<&CommandOutput> {
        match self {
            Self::CommandExecutionFailed { output, .. }
            | Self::ListenerEnableFailed { output, .. }
            | Self::AddressDiscoveryFailed { output, .. }
            | Self::ConnectFailed { output, .. }
            | Self::DisconnectFailed { output, .. } => Some(output),
            _ => None,
        }
    }
}

pub type LiberateResult<T> = Result<T, LiberateError>;
