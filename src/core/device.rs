use serde::{Deserialize, Serialize};
use std::net::SocketAddrV4;

/// Port the wireless listener is opened on
pub const WIRELESS_PORT: u16 = 5555;

/// Model shown for devices that have not authorized this host
pub const UNAUTHORIZED_MODEL: &str = "[UNAUTHORIZED]";

/// One device as reported by the bridge tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Serial number or `host:port`, never empty
    pub id: String,
    /// Connection state (`device`, `offline`, `unauthorized`, ...)
    #[serde(default)]
    pub transport: String,
    /// Hardware codename from the `device:` tag
    #[serde(default)]
    pub device: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub model: String,
}

impl DeviceRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            transport: String::new(),
            device: String::new(),
            product: String::new(),
            model: String::new(),
        }
    }

    /// Whether the device is already attached over the wireless listener
    pub fn is_wireless(&self) -> bool {
        self.id
            .parse::<SocketAddrV4>()
            .map(|addr| addr.port() == WIRELESS_PORT)
            .unwrap_or(false)
    }

    /// Name used in operator-facing messages
    pub fn display_name(&self) -> &str {
        if self.model.is_empty() {
            &self.id
        } else {
            &self.model
        }
    }

    /// Case-insensitive substring match on id, transport, product and model.
    /// `key` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, key: &str) -> bool {
        [&self.id, &self.transport, &self.product, &self.model]
            .iter()
            .any(|field| !field.is_empty() && field.to_lowercase().contains(key))
    }

    pub fn matches(&self, key: &str) -> bool {
        self.matches_lowercase(&key.to_lowercase())
    }
}

impl std::fmt::Display for DeviceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {} | Device: {} | Product: {} | Model: {}",
            self.id, self.device, self.product, self.model
        )
    }
}
