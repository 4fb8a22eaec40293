//! Feature scan across all event nodes.

use super::CommandResult;
use anyhow::Context;
use evprobe_device::{Device, DeviceError};
use evprobe_transport::list_event_nodes;
use tracing::warn;

/// Whether `device` has `feature` in `category`
fn supports(device: &Device, category: &str, feature: &str) -> Result<bool, DeviceError> {
    let Some(category) = device.find_category(category)? else {
        return Ok(false);
    };
    Ok(category.find_feature(feature)?.is_some())
}

/// Print path and name of every node supporting the feature
pub fn find(category: &str, feature: &str) -> CommandResult {
    let nodes = list_event_nodes().context("Failed to list event nodes")?;

    let mut found = 0;
    for path in nodes {
        let device = match Device::open(&path) {
            Ok(device) => device,
            Err(e) => {
                warn!("Skipping {}: {e}", path.display());
                continue;
            }
        };
        match supports(&device, category, feature) {
            Ok(true) => {
                let name = device.name().unwrap_or_default();
                println!("{} ({name})", path.display());
                found += 1;
            }
            Ok(false) => {}
            Err(e) => warn!("Skipping {}: {e}", path.display()),
        }
        device.close();
    }

    if found == 0 {
        eprintln!("No readable device supports {category} {feature}");
    }
    Ok(())
}
