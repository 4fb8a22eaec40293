//! Command handlers for the CLI application.
//!
//! - `query`: device dump (info)
//! - `find`: scan event nodes for a feature
//! - `events`: read loop
//! - `write`: send one event
//! - `morse`: Morse signaling on an indicator

pub mod events;
pub mod find;
pub mod morse;
pub mod query;
pub mod write;

use anyhow::{bail, Context};
use evprobe::config::Config;
use evprobe_device::Device;
use std::path::{Path, PathBuf};

/// Result type for command handlers
pub type CommandResult = anyhow::Result<()>;

/// Pick the device from `--device`, then from the config file
pub fn resolve_device(cli_device: Option<PathBuf>, config: &Config) -> anyhow::Result<PathBuf> {
    match cli_device.or_else(|| config.device.clone()) {
        Some(path) => Ok(path),
        None => bail!(
            "No device given. Pass --device /dev/input/eventN or set `device` in the config; \
             `evprobe find` lists candidates"
        ),
    }
}

/// Open a device, naming the path on failure
pub fn open_device(path: &Path) -> anyhow::Result<Device> {
    Device::open(path).with_context(|| format!("Failed to open {}", path.display()))
}
