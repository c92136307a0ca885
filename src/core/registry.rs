use crate::core::device::DeviceRecord;
use crate::core::parser::parse_listing;
use crate::domain::error::{LiberateError, LiberateResult};
use tracing::debug;

/// Devices attached during one invocation, ordered by model
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    devices: Vec<DeviceRecord>,
}

impl DeviceRegistry {
    /// Build a registry sorted case-insensitively by model. Devices with
    /// equal models keep their listing order.
    pub fn new(mut devices: Vec<DeviceRecord>) -> Self {
        devices.sort_by_cached_key(|device| device.model.to_lowercase());
        Self { devices }
    }

    /// Parse a raw `devices -l` listing and build the registry from it
    pub fn from_listing(raw: &str) -> LiberateResult<Self> {
        let registry = Self::new(parse_listing(raw)?);
        debug!("Registry holds {} device(s)", registry.len());
        Ok(registry)
    }

    /// All devices whose id, transport, product or model contains `key`,
    /// ignoring case
    pub fn find_by_key(&self, key: &str) -> Vec<&DeviceRecord> {
        let key = key.to_lowercase();
        self.devices
            .iter()
            .filter(|device| device.matches_lowercase(&key))
            .collect()
    }

    /// The single device matching `key`.
    ///
    /// Several matches are reported as [`LiberateError::AmbiguousKeyMatch`]
    /// with every candidate; the first one is never picked silently.
    pub fn resolve(&self, key: &str) -> LiberateResult<&DeviceRecord> {
        if key.trim().is_empty() {
            return Err(LiberateError::InvalidInput(
                "device key must not be empty".to_string(),
            ));
        }

        let mut matches = self.find_by_key(key);
        match matches.len() {
            0 => Err(LiberateError::NoKeyMatch {
                key: key.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(LiberateError::AmbiguousKeyMatch {
                key: key.to_string(),
                candidates: matches.into_iter().cloned().collect(),
            }),
        }
    }

    /// Devices already attached over the wireless listener
    pub fn wireless(&self) -> impl Iterator<Item = &DeviceRecord> {
        self.devices.iter().filter(|device| device.is_wireless())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeviceRecord> {
        self.devices.iter()
    }

    pub fn as_slice(&self) -> &[DeviceRecord] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl<'a> IntoIterator for &'a DeviceRegistry {
    type Item = &'a DeviceRecord;
    type IntoIter = std::slice::Iter<'a, DeviceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}
