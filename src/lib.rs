//! Liberate Library
//!
//! Discovers Android devices attached to adb and switches a selected device
//! from USB to a wireless adb connection.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::core::{DeviceRecord, DeviceRegistry, ReconnectState, ReconnectionDriver, WIRELESS_PORT};
pub use domain::command::CommandOutput;
pub use domain::config::LiberateConfig;
pub use domain::error::{LiberateError, LiberateResult};
pub use infrastructure::adb::{Bridge, CommandRunner, ProcessRunner};
