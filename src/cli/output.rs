use crate::cli::args::OutputFormat;
use crate::core::device::DeviceRecord;
use std::io;
use tabled::{Table, Tabled};

/// Output writer trait for different formats
pub trait OutputWriter {
    fn write_devices(&self, devices: &[DeviceRecord]) -> Result<(), OutputError>;
    fn write_candidates(&self, devices: &[DeviceRecord]) -> Result<(), OutputError>;
    fn write_message(&self, message: &str) -> Result<(), OutputError>;
    fn write_warning(&self, warning: &str) -> Result<(), OutputError>;
    fn write_error(&self, error: &str, details: Option<&str>) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for crate::domain::error::LiberateError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render the device list in the configured format
    pub fn render_devices(&self, devices: &[DeviceRecord]) -> Result<String, OutputError> {
        let rendered = match self.format {
            OutputFormat::Text => {
                let mut text = format_row("Model", "Device", "Product", "ID");
                text.push('\n');
                for device in devices {
                    text.push_str(&format_row(
                        &device.model,
                        &device.device,
                        &device.product,
                        &device.id,
                    ));
                    text.push('\n');
                }
                text.push_str(&summary(devices.len()));
                text
            }
            OutputFormat::Json => serde_json::to_string_pretty(devices)?,
            OutputFormat::Table => {
                let table_data: Vec<DeviceTableRow> = devices.iter().map(DeviceTableRow::from).collect();
                format!("{}\n{}", Table::new(table_data), summary(devices.len()))
            }
            OutputFormat::Csv => {
                let mut csv = "model,device,product,id,transport".to_string();
                for device in devices {
                    csv.push_str(&format!(
                        "\n{},{},{},{},{}",
                        device.model, device.device, device.product, device.id, device.transport
                    ));
                }
                csv
            }
        };
        Ok(rendered)
    }
}

/// One fixed-width row: Model, Device, Product, ID
fn format_row(model: &str, device: &str, product: &str, id: &str) -> String {
    format!("{:<20} {:<16} {:<16} {}", model, device, product, id)
}

fn summary(count: usize) -> String {
    format!("{} device(s) found.", count)
}

impl OutputWriter for ConsoleWriter {
    fn write_devices(&self, devices: &[DeviceRecord]) -> Result<(), OutputError> {
        println!("{}", self.render_devices(devices)?);
        if self.format == OutputFormat::Text {
            println!();
        }
        Ok(())
    }

    fn write_candidates(&self, devices: &[DeviceRecord]) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(devices)?);
            }
            _ => {
                for device in devices {
                    println!("{}", device);
                }
            }
        }
        Ok(())
    }

    fn write_message(&self, message: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "message": message,
                    "level": "info"
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                println!("{}", message);
            }
        }
        Ok(())
    }

    fn write_warning(&self, warning: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "message": warning,
                    "level": "warn"
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                println!("{}", warning);
            }
        }
        Ok(())
    }

    fn write_error(&self, error: &str, details: Option<&str>) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "error": error,
                    "details": details,
                    "level": "error"
                });
                eprintln!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                eprintln!("{}", error);
                if let Some(details) = details {
                    eprintln!("Details...");
                    eprintln!("{}", details);
                }
            }
        }
        Ok(())
    }
}

/// Table row for the device list
#[derive(Tabled)]
struct DeviceTableRow {
    model: String,
    device: String,
    product: String,
    id: String,
    transport: String,
}

impl From<&DeviceRecord> for DeviceTableRow {
    fn from(device: &DeviceRecord) -> Self {
        Self {
            model: device.model.clone(),
            device: device.device.clone(),
            product: device.product.clone(),
            id: device.id.clone(),
            transport: device.transport.clone(),
        }
    }
}
