//! Event read loop.

use super::{open_device, CommandResult};
use evprobe_device::EventRecord;
use serde::Serialize;
use std::path::Path;

/// One event as printed with `--json`
#[derive(Debug, Serialize)]
struct EventLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<f64>,
    category: &'static str,
    category_code: u16,
    feature: &'static str,
    code: u16,
    value: i32,
}

impl From<&EventRecord<'_>> for EventLine {
    fn from(event: &EventRecord<'_>) -> Self {
        let feature = event.feature();
        EventLine {
            time: event
                .time()
                .map(|t| t.seconds as f64 + t.microseconds as f64 / 1_000_000.0),
            category: feature.category().name(),
            category_code: feature.category().code(),
            feature: feature.name(),
            code: feature.code(),
            value: event.value(),
        }
    }
}

/// Print decoded events until `count` is reached or the device goes away
pub fn events(path: &Path, json: bool, count: Option<usize>) -> CommandResult {
    let device = open_device(path)?;
    eprintln!("Reading events from {} ({})", path.display(), device.name()?);

    let mut seen = 0;
    while count.map_or(true, |n| seen < n) {
        let event = device.read_event()?;
        if json {
            println!("{}", serde_json::to_string(&EventLine::from(&event))?);
        } else {
            println!("{event}");
        }
        seen += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use evprobe_device::{Device, RawEvent};
    use evprobe_transport::mock::MockNode;

    #[test]
    fn test_json_line() {
        let device = Device::new(MockNode::new());
        let event = device.decode(&RawEvent::at(12, 500_000, 0x11, 0x02, 1));
        let line = serde_json::to_value(EventLine::from(&event)).unwrap();
        assert_eq!(line["category"], "LED");
        assert_eq!(line["feature"], "SCROLLL");
        assert_eq!(line["code"], 2);
        assert_eq!(line["value"], 1);
        assert_eq!(line["time"], 12.5);
    }

    #[test]
    fn test_json_line_unknown_code() {
        let device = Device::new(MockNode::new());
        let event = device.decode(&RawEvent::new(0x1e, 0x99, -1));
        let line = serde_json::to_value(EventLine::from(&event)).unwrap();
        assert_eq!(line["category"], evprobe_device::UNKNOWN_NAME);
        assert_eq!(line["category_code"], 0x1e);
        assert_eq!(line["value"], -1);
    }
}
