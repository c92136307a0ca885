use liberate::{CommandOutput, DeviceRecord, LiberateError, LiberateResult};
use std::error::Error;

/// Error handling tests
#[cfg(test)]
mod error_handling_tests {
    use super::*;

    fn captured() -> CommandOutput {
        CommandOutput {
            stdout: "* daemon started successfully".to_string(),
            stderr: "error: device offline".to_string(),
            exit_code: 1,
        }
    }

    #[test]
    fn test_error_types() {
        let errors = vec![
            LiberateError::ToolNotFound { tool: "adb".to_string() },
            LiberateError::NoDevicesFound,
            LiberateError::MalformedDeviceLine { line: "!!".to_string() },
            LiberateError::NoKeyMatch { key: "pixel".to_string() },
            LiberateError::AmbiguousKeyMatch {
                key: "pixel".to_string(),
                candidates: vec![DeviceRecord::new("a"), DeviceRecord::new("b")],
            },
            LiberateError::CommandExecutionFailed {
                command: "adb devices -l".to_string(),
                output: captured(),
            },
            LiberateError::WirelessDisabled { model: "Pixel".to_string() },
            LiberateError::ListenerEnableFailed { model: "Pixel".to_string(), output: captured() },
            LiberateError::ConnectFailed {
                model: "Pixel".to_string(),
                address: "10.0.0.2".to_string(),
                output: captured(),
            },
            LiberateError::NotWireless { model: "Pixel".to_string() },
            LiberateError::AddressDiscoveryFailed { model: "Pixel".to_string(), output: captured() },
            LiberateError::DisconnectFailed { model: "Pixel".to_string(), output: captured() },
            LiberateError::Config { message: "Config error".to_string() },
            LiberateError::InvalidInput("Invalid input".to_string()),
            LiberateError::Output("Output error".to_string()),
        ];

        for error in errors {
            let display = error.to_string();
            assert!(!display.is_empty(), "Error display should not be empty");
            assert!(error.exit_code() == 1 || error.exit_code() == 3);
        }

        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LiberateError>();
    }

    #[test]
    fn test_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "adb");
        let error: LiberateError = io_error.into();
        assert!(matches!(error, LiberateError::Io(_)));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_chain() {
        let root_cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Access denied");
        let error: LiberateError = root_cause.into();

        let mut current_error: &dyn Error = &error;
        let mut depth = 0;
        while let Some(source) = current_error.source() {
            current_error = source;
            depth += 1;
            if depth > 10 {
                break;
            }
        }

        assert!(depth > 0, "Should have at least one source error");
    }

    #[test]
    fn test_result_type() {
        fn find(key: &str) -> LiberateResult<String> {
            if key.is_empty() {
                Err(LiberateError::InvalidInput("empty key".to_string()))
            } else {
                Ok(key.to_string())
            }
        }

        assert_eq!(find("pixel").unwrap(), "pixel");
        assert!(find("").unwrap_err().to_string().contains("empty key"));
    }

    #[test]
    fn test_execution_failures_carry_diagnostics() {
        let error = LiberateError::ListenerEnableFailed {
            model: "Nexus 6".to_string(),
            output: captured(),
        };

        assert_eq!(error.to_string(), "Unable to open port on 'Nexus 6'.");
        assert_eq!(
            error.diagnostics().map(CommandOutput::diagnostic_text).as_deref(),
            Some("* daemon started successfully\nerror: device offline")
        );
    }

    #[test]
    fn test_command_failure_message_includes_exit_code() {
        let error = LiberateError::CommandExecutionFailed {
            command: "adb -s 51b64dcb shell ip -f inet addr show wlan0".to_string(),
            output: CommandOutput::failed(255, "error: closed"),
        };
        assert_eq!(
            error.to_string(),
            "Command 'adb -s 51b64dcb shell ip -f inet addr show wlan0' failed with exit code 255"
        );
    }

    #[test]
    fn test_error_formatting() {
        let error = LiberateError::Config {
            message: "Failed to parse config file /tmp/config.toml".to_string(),
        };

        let display = format!("{}", error);
        let debug = format!("{:?}", error);

        assert!(display.contains("Configuration error"));
        assert!(display.contains("Failed to parse"));
        assert_ne!(display, debug);
    }

    #[test]
    fn test_error_size() {
        let error_size = std::mem::size_of::<LiberateError>();
        assert!(error_size <= 160, "LiberateError too large: {} bytes", error_size);
    }
}
