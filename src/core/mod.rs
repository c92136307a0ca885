// Core module - Device parsing, lookup and reconnection
pub mod device;
pub mod parser;
pub mod reconnect;
pub mod registry;

pub use device::{DeviceRecord, UNAUTHORIZED_MODEL, WIRELESS_PORT};
pub use parser::parse_listing;
pub use reconnect::{ReconnectState, ReconnectionDriver};
pub use registry::DeviceRegistry;
