use serde::{Deserialize, Serialize};

/// Liberate configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiberateConfig {
    /// Global configuration
    #[serde(default)]
    pub global: GlobalConfig,
    /// Bridge tool configuration
    #[serde(default)]
    pub bridge: BridgeConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// External bridge tool settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Executable name looked up on PATH, or an absolute path
    #[serde(default = "default_executable")]
    pub executable: String,
    /// Wireless network interface queried for the device address
    #[serde(default = "default_interface")]
    pub interface: String,
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_executable() -> String {
    "adb".to_string()
}

fn default_interface() -> String {
    "wlan0".to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            interface: default_interface(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = LiberateConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: LiberateConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.bridge.executable, "adb");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: LiberateConfig = toml::from_str(
            r#"
            [bridge]
            interface = "wlan1"
            "#,
        )
        .unwrap();

        assert_eq!(config.global.log_level, "warn");
        assert_eq!(config.bridge.executable, "adb");
        assert_eq!(config.bridge.interface, "wlan1");
    }

    #[test]
    fn test_empty_config() {
        let config: LiberateConfig = toml::from_str("").unwrap();
        assert_eq!(config.bridge.interface, "wlan0");
    }
}
