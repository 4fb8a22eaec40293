//! Event node discovery
//!
//! One-shot scan of `/dev/input` for `event*` character devices.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::TransportError;

/// Directory holding evdev nodes
pub const INPUT_DIR: &str = "/dev/input";

/// List `event*` nodes under [`INPUT_DIR`], ordered by event number
pub fn list_event_nodes() -> Result<Vec<PathBuf>, TransportError> {
    list_event_nodes_in(Path::new(INPUT_DIR))
}

/// List `event*` nodes under `dir`, ordered by event number
pub fn list_event_nodes_in(dir: &Path) -> Result<Vec<PathBuf>, TransportError> {
    let mut nodes: Vec<(u32, PathBuf)> = fs::read_dir(dir)
        .map_err(|e| TransportError::from_open(dir.to_path_buf(), e))?
        .flatten()
        .filter_map(|entry| {
            let name = entry.file_name();
            let number = event_number(&name.to_string_lossy())?;
            Some((number, entry.path()))
        })
        .collect();
    nodes.sort_by_key(|(number, _)| *number);
    debug!("Found {} event nodes in {}", nodes.len(), dir.display());
    Ok(nodes.into_iter().map(|(_, path)| path).collect())
}

/// Parse the `N` out of `eventN`
fn event_number(file_name: &str) -> Option<u32> {
    file_name.strip_prefix("event")?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_number() {
        assert_eq!(event_number("event0"), Some(0));
        assert_eq!(event_number("event12"), Some(12));
        assert_eq!(event_number("mouse0"), None);
        assert_eq!(event_number("event"), None);
        assert_eq!(event_number("eventX"), None);
    }

    #[test]
    fn test_list_sorts_numerically() {
        let dir = std::env::temp_dir().join(format!("evprobe-discovery-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        for name in ["event10", "event2", "mice", "event0"] {
            fs::write(dir.join(name), b"").unwrap();
        }

        let nodes = list_event_nodes_in(&dir).unwrap();
        let names: Vec<String> = nodes
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["event0", "event2", "event10"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_list_missing_dir_fails() {
        let result = list_event_nodes_in(Path::new("/nonexistent/evprobe/input"));
        assert!(result.is_err());
    }
}
