//! In-memory device node for tests
//!
//! `MockNode` answers every query from configured state and records writes.
//! Clones share state, so a test can keep one handle while the device under
//! test owns another.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::TransportError;
use crate::raw_event::RawEvent;
use crate::types::{AxisParameters, BusIdentity, RepeatSettings};
use crate::DeviceNode;

/// One call to `write_raw_event`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrittenEvent {
    pub category: u16,
    pub code: u16,
    pub value: i32,
}

#[derive(Default)]
struct MockState {
    interface_version: u32,
    identity: BusIdentity,
    name: String,
    topology: String,
    unique_id: String,
    categories: Vec<u16>,
    features: HashMap<u16, Vec<u16>>,
    activation: HashMap<u16, Vec<u8>>,
    axes: HashMap<u16, AxisParameters>,
    repeat: Option<RepeatSettings>,
    keycodes: HashMap<u32, u32>,
    pending: VecDeque<RawEvent>,
    written: Vec<WrittenEvent>,
    disconnected: bool,
    closed: bool,
}

/// Scriptable stand-in for an evdev node
#[derive(Clone)]
pub struct MockNode {
    path: PathBuf,
    state: Arc<Mutex<MockState>>,
}

impl Default for MockNode {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNode {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from("/dev/input/mock0"),
            state: Arc::new(Mutex::new(MockState {
                interface_version: 0x010001,
                name: "Mock Input Device".to_string(),
                ..Default::default()
            })),
        }
    }

    pub fn with_name(self, name: &str) -> Self {
        self.state.lock().name = name.to_string();
        self
    }

    pub fn with_topology(self, topology: &str) -> Self {
        self.state.lock().topology = topology.to_string();
        self
    }

    pub fn with_unique_id(self, unique_id: &str) -> Self {
        self.state.lock().unique_id = unique_id.to_string();
        self
    }

    pub fn with_interface_version(self, version: u32) -> Self {
        self.state.lock().interface_version = version;
        self
    }

    pub fn with_identity(self, identity: BusIdentity) -> Self {
        self.state.lock().identity = identity;
        self
    }

    /// Supported codes for `category`; also marks the category supported
    pub fn with_features(self, category: u16, codes: &[u16]) -> Self {
        {
            let mut state = self.state.lock();
            if !state.categories.contains(&category) {
                state.categories.push(category);
            }
            state.features.insert(category, codes.to_vec());
        }
        self
    }

    /// Mark a category supported without listing features
    pub fn with_category(self, category: u16) -> Self {
        {
            let mut state = self.state.lock();
            if !state.categories.contains(&category) {
                state.categories.push(category);
            }
        }
        self
    }

    pub fn with_activation(self, category: u16, mask: &[u8]) -> Self {
        self.state.lock().activation.insert(category, mask.to_vec());
        self
    }

    pub fn with_axis(self, axis: u16, parameters: AxisParameters) -> Self {
        self.state.lock().axes.insert(axis, parameters);
        self
    }

    pub fn with_repeat(self, settings: RepeatSettings) -> Self {
        self.state.lock().repeat = Some(settings);
        self
    }

    pub fn with_keycode(self, scancode: u32, keycode: u32) -> Self {
        self.state.lock().keycodes.insert(scancode, keycode);
        self
    }

    /// Queue an event for `read_raw_event`
    pub fn push_event(&self, event: RawEvent) {
        self.state.lock().pending.push_back(event);
    }

    /// Replace the activation mask of a category
    pub fn set_activation(&self, category: u16, mask: &[u8]) {
        self.state.lock().activation.insert(category, mask.to_vec());
    }

    /// Make every subsequent call fail with `Disconnected`
    pub fn disconnect(&self) {
        self.state.lock().disconnected = true;
    }

    /// Whether `close` has been called on any clone
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Everything written so far, in order
    pub fn written(&self) -> Vec<WrittenEvent> {
        self.state.lock().written.clone()
    }

    fn check_connected(&self) -> Result<(), TransportError> {
        if self.state.lock().disconnected {
            return Err(TransportError::Disconnected);
        }
        Ok(())
    }
}

impl DeviceNode for MockNode {
    fn path(&self) -> &Path {
        &self.path
    }

    fn close(self: Box<Self>) {
        self.state.lock().closed = true;
    }

    fn interface_version(&self) -> Result<u32, TransportError> {
        self.check_connected()?;
        Ok(self.state.lock().interface_version)
    }

    fn bus_identity(&self) -> Result<BusIdentity, TransportError> {
        self.check_connected()?;
        Ok(self.state.lock().identity)
    }

    fn name(&self) -> Result<String, TransportError> {
        self.check_connected()?;
        Ok(self.state.lock().name.clone())
    }

    fn topology(&self) -> Result<String, TransportError> {
        self.check_connected()?;
        Ok(self.state.lock().topology.clone())
    }

    fn unique_id(&self) -> Result<String, TransportError> {
        self.check_connected()?;
        Ok(self.state.lock().unique_id.clone())
    }

    fn supported_categories(&self) -> Result<Vec<u16>, TransportError> {
        self.check_connected()?;
        Ok(self.state.lock().categories.clone())
    }

    fn supported_features(&self, category: u16) -> Result<Vec<u16>, TransportError> {
        self.check_connected()?;
        Ok(self
            .state
            .lock()
            .features
            .get(&category)
            .cloned()
            .unwrap_or_default())
    }

    fn activation_bitmask(&self, category: u16) -> Result<Vec<u8>, TransportError> {
        self.check_connected()?;
        Ok(self
            .state
            .lock()
            .activation
            .get(&category)
            .cloned()
            .unwrap_or_default())
    }

    fn axis_parameters(&self, axis: u16) -> Result<AxisParameters, TransportError> {
        self.check_connected()?;
        self.state
            .lock()
            .axes
            .get(&axis)
            .copied()
            .ok_or_else(|| TransportError::Unsupported(format!("axis 0x{axis:02X}")))
    }

    fn repeat_settings(&self) -> Result<RepeatSettings, TransportError> {
        self.check_connected()?;
        self.state
            .lock()
            .repeat
            .ok_or_else(|| TransportError::Unsupported("autorepeat".into()))
    }

    fn set_repeat_settings(&self, settings: RepeatSettings) -> Result<(), TransportError> {
        self.check_connected()?;
        self.state.lock().repeat = Some(settings);
        Ok(())
    }

    fn keycode_for_scancode(&self, scancode: u32) -> Result<u32, TransportError> {
        self.check_connected()?;
        self.state
            .lock()
            .keycodes
            .get(&scancode)
            .copied()
            .ok_or_else(|| TransportError::Unsupported(format!("scancode 0x{scancode:X}")))
    }

    fn set_keycode_for_scancode(&self, scancode: u32, keycode: u32) -> Result<(), TransportError> {
        self.check_connected()?;
        self.state.lock().keycodes.insert(scancode, keycode);
        Ok(())
    }

    /// Pops the next queued event; an empty queue reads as a disconnect
    fn read_raw_event(&self) -> Result<RawEvent, TransportError> {
        self.check_connected()?;
        self.state
            .lock()
            .pending
            .pop_front()
            .ok_or(TransportError::Disconnected)
    }

    fn write_raw_event(&self, category: u16, code: u16, value: i32) -> Result<(), TransportError> {
        self.check_connected()?;
        self.state.lock().written.push(WrittenEvent {
            category,
            code,
            value,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let node = MockNode::new();
        let handle = node.clone();
        node.write_raw_event(0x11, 0x02, 1).unwrap();
        assert_eq!(
            handle.written(),
            vec![WrittenEvent {
                category: 0x11,
                code: 0x02,
                value: 1
            }]
        );
    }

    #[test]
    fn test_disconnect_fails_queries() {
        let node = MockNode::new().with_features(0x01, &[30]);
        node.disconnect();
        assert!(matches!(
            node.supported_features(0x01),
            Err(TransportError::Disconnected)
        ));
    }

    #[test]
    fn test_events_read_in_order() {
        let node = MockNode::new();
        node.push_event(RawEvent::new(0x01, 30, 1));
        node.push_event(RawEvent::new(0x01, 30, 0));
        assert_eq!(node.read_raw_event().unwrap().value, 1);
        assert_eq!(node.read_raw_event().unwrap().value, 0);
        assert!(node.read_raw_event().is_err());
    }
}
