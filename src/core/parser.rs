//! Parser for the bridge tool's `devices -l` listing.
//!
//! This is the only code that looks at raw listing text. Everything else
//! works with [`DeviceRecord`] values, so a change in the tool's output
//! format is absorbed here.

use crate::core::device::{DeviceRecord, UNAUTHORIZED_MODEL};
use crate::domain::error::{LiberateError, LiberateResult};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Header the tool prints before the device lines
pub const LISTING_HEADER: &str = "List of devices attached";

/// Prefix of daemon start-up notices such as `* daemon started successfully *`
const DAEMON_NOTICE_MARKER: char = '*';

static DEVICE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.:\-]+$").expect("device id pattern is valid"));

/// Parse a raw listing into records, preserving line order.
///
/// Fails with [`LiberateError::NoDevicesFound`] when no device lines remain
/// after stripping, and with [`LiberateError::MalformedDeviceLine`] on the
/// first line without a usable id. A partial inventory is never returned.
pub fn parse_listing(raw: &str) -> LiberateResult<Vec<DeviceRecord>> {
    let lines = device_lines(raw);
    if lines.is_empty() {
        return Err(LiberateError::NoDevicesFound);
    }

    lines.into_iter().map(parse_line).collect()
}

fn device_lines(raw: &str) -> Vec<&str> {
    let mut lines = raw.lines().peekable();

    while let Some(line) = lines.peek() {
        let trimmed = line.trim();
        let preamble = trimmed.is_empty()
            || trimmed == LISTING_HEADER
            || trimmed.starts_with(DAEMON_NOTICE_MARKER);
        if !preamble {
            break;
        }
        lines.next();
    }

    lines.filter(|line| !line.trim().is_empty()).collect()
}

/// Parse one listing line, e.g.
/// `51b64dcb  device usb:1-12 product:A6020a40 model:Lenovo_A6020a40 device:A6020a40`
pub fn parse_line(line: &str) -> LiberateResult<DeviceRecord> {
    debug!("Device found! {}", line);

    let mut tokens = line.split_whitespace().peekable();

    let id = tokens
        .next()
        .filter(|token| DEVICE_ID.is_match(token))
        .ok_or_else(|| LiberateError::MalformedDeviceLine {
            line: line.to_string(),
        })?;

    let mut record = DeviceRecord::new(id);

    if let Some(token) = tokens.peek() {
        if !token.contains(':') {
            record.transport = token.to_string();
            tokens.next();
        }
    }

    for token in tokens {
        let Some((key, value)) = token.split_once(':') else {
            continue;
        };
        let value = value.replace('_', " ");
        match key {
            "device" => record.device = value,
            "product" => record.product = value,
            "model" => record.model = value,
            _ => {}
        }
    }

    if record.model.is_empty() && line.contains("unauthorized") {
        record.model = UNAUTHORIZED_MODEL.to_string();
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "\
List of devices attached
51b64dcb               device usb:1-12 product:A6020a40 model:Lenovo_A6020a40 device:A6020a40 transport_id:1
192.168.1.5:5555       device product:sailfish model:Pixel device:sailfish transport_id:2
emulator-5554          unauthorized usb:1-1 transport_id:3

";

    #[test]
    fn test_parse_listing() {
        let devices = parse_listing(LISTING).unwrap();
        assert_eq!(devices.len(), 3);

        assert_eq!(devices[0].id, "51b64dcb");
        assert_eq!(devices[0].transport, "device");
        assert_eq!(devices[0].device, "A6020a40");
        assert_eq!(devices[0].product, "A6020a40");
        assert_eq!(devices[0].model, "Lenovo A6020a40");

        assert_eq!(devices[1].id, "192.168.1.5:5555");
        assert!(devices[1].is_wireless());

        assert_eq!(devices[2].id, "emulator-5554");
        assert_eq!(devices[2].transport, "unauthorized");
        assert_eq!(devices[2].model, UNAUTHORIZED_MODEL);
        assert!(devices[2].product.is_empty());
    }

    #[test]
    fn test_daemon_notices_are_stripped() {
        let raw = "\
* daemon not running; starting now at tcp:5037
* daemon started successfully
List of devices attached
51b64dcb device product:A6020a40 model:Lenovo_A6020a40 device:A6020a40
";
        let devices = parse_listing(raw).unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].model, "Lenovo A6020a40");
    }

    #[test]
    fn test_header_only_is_no_devices() {
        let result = parse_listing("List of devices attached\n\n");
        assert!(matches!(result, Err(LiberateError::NoDevicesFound)));

        let result = parse_listing("");
        assert!(matches!(result, Err(LiberateError::NoDevicesFound)));
    }

    #[test]
    fn test_malformed_line_aborts_parse() {
        let raw = "\
List of devices attached
51b64dcb device model:Lenovo_A6020a40
??? garbage
";
        match parse_listing(raw) {
            Err(LiberateError::MalformedDeviceLine { line }) => assert_eq!(line, "??? garbage"),
            other => panic!("expected malformed line error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let record = parse_line("0123456789ABCDEF device usb:336592896X foo:bar model:Nexus_5").unwrap();
        assert_eq!(record.model, "Nexus 5");
        assert!(record.device.is_empty());
    }

    #[test]
    fn test_line_without_transport() {
        let record = parse_line("0123456789ABCDEF model:Nexus_5").unwrap();
        assert!(record.transport.is_empty());
        assert_eq!(record.model, "Nexus 5");
    }

    #[test]
    fn test_offline_device_keeps_empty_model() {
        let record = parse_line("0123456789ABCDEF offline").unwrap();
        assert_eq!(record.transport, "offline");
        assert!(record.model.is_empty());
    }

    #[test]
    fn test_model_present_wins_over_unauthorized_placeholder() {
        let record = parse_line("0123 unauthorized model:Pixel_7").unwrap();
        assert_eq!(record.model, "Pixel 7");
    }
}
