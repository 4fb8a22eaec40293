//! Device-node layer for Linux evdev input devices
//!
//! This crate owns everything that touches the kernel interface:
//!
//! - ioctl request numbers and the `struct input_event` layout
//! - Capability and activation bitmaps
//! - The [`DeviceNode`] trait, implemented by [`EvdevNode`] for real
//!   `/dev/input/event*` nodes and by `MockNode` (feature `mock`) for tests
//!
//! Names for codes are not known here; see the `evprobe-device` crate.

pub mod bitmask;
pub mod error;
pub mod ioctl;
pub mod protocol;
pub mod raw_event;
pub mod types;

mod discovery;
mod evdev_node;

#[cfg(feature = "mock")]
pub mod mock;

pub use discovery::{list_event_nodes, list_event_nodes_in, INPUT_DIR};
pub use error::TransportError;
pub use evdev_node::EvdevNode;
pub use raw_event::{RawEvent, RAW_EVENT_SIZE};
pub use types::{AxisParameters, BusIdentity, InterfaceVersion, RepeatSettings};

use std::path::Path;

/// An open input device node
///
/// All queries are answered by the kernel (or a test double) at call time;
/// nothing is cached. Methods take `&self` so a node can be shared between
/// a reader and a writer.
pub trait DeviceNode: Send + Sync {
    /// Filesystem path the node was opened from
    fn path(&self) -> &Path;

    /// Release the node; dropping it has the same effect
    fn close(self: Box<Self>);

    /// Packed evdev driver version
    fn interface_version(&self) -> Result<u32, TransportError>;

    /// Bus type, vendor, product and version
    fn bus_identity(&self) -> Result<BusIdentity, TransportError>;

    /// Human-readable device name
    fn name(&self) -> Result<String, TransportError>;

    /// Physical topology path (`EVIOCGPHYS`), empty if the driver sets none
    fn topology(&self) -> Result<String, TransportError>;

    /// Unique identifier (`EVIOCGUNIQ`), empty if the driver sets none
    fn unique_id(&self) -> Result<String, TransportError>;

    /// Codes of the supported event categories
    fn supported_categories(&self) -> Result<Vec<u16>, TransportError>;

    /// Codes the device supports within `category`
    fn supported_features(&self, category: u16) -> Result<Vec<u16>, TransportError>;

    /// Current state bitmap for a stateful category (keys, LEDs, sounds, switches)
    ///
    /// Bit `n` is bit `n % 8` of byte `n / 8`. A short bitmap means the
    /// missing bits are clear.
    fn activation_bitmask(&self, category: u16) -> Result<Vec<u8>, TransportError>;

    /// Parameters and current value of an absolute axis
    fn axis_parameters(&self, axis: u16) -> Result<AxisParameters, TransportError>;

    fn repeat_settings(&self) -> Result<RepeatSettings, TransportError>;

    fn set_repeat_settings(&self, settings: RepeatSettings) -> Result<(), TransportError>;

    /// Keycode the driver maps `scancode` to
    fn keycode_for_scancode(&self, scancode: u32) -> Result<u32, TransportError>;

    fn set_keycode_for_scancode(&self, scancode: u32, keycode: u32) -> Result<(), TransportError>;

    /// Block until the next event record arrives
    fn read_raw_event(&self) -> Result<RawEvent, TransportError>;

    /// Write one event record; the node stamps the time
    fn write_raw_event(&self, category: u16, code: u16, value: i32) -> Result<(), TransportError>;
}

/// Type alias for a boxed device node
pub type BoxedNode = Box<dyn DeviceNode>;
