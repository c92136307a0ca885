use crate::cli::args::{Action, Args};
use crate::cli::output::{ConsoleWriter, OutputWriter};
use crate::core::reconnect::ReconnectionDriver;
use crate::core::registry::DeviceRegistry;
use crate::domain::config::LiberateConfig;
use crate::domain::error::{LiberateError, LiberateResult};
use crate::infrastructure::adb::{locate_tool, Bridge, CommandRunner, ProcessRunner};
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging::{init_logging, parse_level};
use clap::CommandFactory;
use tracing::debug;

/// Execute CLI command
pub async fn execute_command(args: &Args, action: Action) -> LiberateResult<()> {
    let writer = ConsoleWriter::new(args.output);

    match action {
        Action::Help => {
            Args::command().print_help()?;
            println!();
            return Ok(());
        }
        Action::Version => {
            writer.write_message(&format!("liberate {}", env!("CARGO_PKG_VERSION")))?;
            return Ok(());
        }
        _ => {}
    }

    let config = load_config(args)?;

    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        parse_level(&config.global.log_level)
    };
    init_logging(level)?;

    let program = locate_tool(&config.bridge.executable)?;
    let bridge = Bridge::new(ProcessRunner::new(program));

    match action {
        Action::List => list_devices(&bridge, &writer).await,
        Action::Liberate(key) => liberate_device(&bridge, &config, &writer, &key).await,
        Action::Disconnect(key) => disconnect_device(&bridge, &config, &writer, &key).await,
        Action::Help | Action::Version => Ok(()),
    }
}

fn load_config(args: &Args) -> LiberateResult<LiberateConfig> {
    match &args.config {
        Some(path) => ConfigManager::with_path(path).load_config_from_path(path),
        None => ConfigManager::new().load_config(),
    }
}

/// Print the sorted device table. No attached devices is not a failure.
pub async fn list_devices<R: CommandRunner>(
    bridge: &Bridge<R>,
    writer: &dyn OutputWriter,
) -> LiberateResult<()> {
    let listing = bridge.list_devices().await?;
    match DeviceRegistry::from_listing(&listing) {
        Ok(registry) => {
            writer.write_devices(registry.as_slice())?;
            Ok(())
        }
        Err(LiberateError::NoDevicesFound) => {
            writer.write_warning(&LiberateError::NoDevicesFound.to_string())?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Resolve `key` to one device and move it onto the wireless listener
pub async fn liberate_device<R: CommandRunner>(
    bridge: &Bridge<R>,
    config: &LiberateConfig,
    writer: &dyn OutputWriter,
    key: &str,
) -> LiberateResult<()> {
    let registry = DeviceRegistry::from_listing(&bridge.list_devices().await?)?;
    let device = registry.resolve(key)?;
    debug!("Liberating {}", device);

    let driver = ReconnectionDriver::new(bridge, config.bridge.interface.as_str());
    driver.liberate(device).await?;

    writer.write_message(&format!("'{}' liberated!", device.display_name()))?;
    Ok(())
}

/// Resolve `key` to one wirelessly attached device and switch it back to USB
pub async fn disconnect_device<R: CommandRunner>(
    bridge: &Bridge<R>,
    config: &LiberateConfig,
    writer: &dyn OutputWriter,
    key: &str,
) -> LiberateResult<()> {
    let registry = DeviceRegistry::from_listing(&bridge.list_devices().await?)?;
    let device = registry.resolve(key)?;

    let driver = ReconnectionDriver::new(bridge, config.bridge.interface.as_str());
    driver.disconnect(device).await?;

    writer.write_message(&format!("'{}' disconnected.", device.display_name()))?;
    Ok(())
}

/// Report a terminal error: operator outcomes as warnings, everything else
/// as an error with the tool's captured output when there is any
pub fn report_error(writer: &dyn OutputWriter, error: &LiberateError) -> LiberateResult<()> {
    if error.is_operator_outcome() {
        debug!("{}", error);
        writer.write_warning(&error.to_string())?;
        if let LiberateError::AmbiguousKeyMatch { candidates, .. } = error {
            writer.write_candidates(candidates)?;
        }
    } else {
        let details = error.diagnostics().map(|output| output.diagnostic_text());
        writer.write_error(&error.to_string(), details.as_deref())?;
    }
    Ok(())
}
