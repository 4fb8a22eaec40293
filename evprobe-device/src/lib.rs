//! Capability and event model for evdev input devices
//!
//! A [`Device`] wraps one open device node and answers:
//!
//! - which event categories and features the device supports
//! - which keys, LEDs and sounds are currently active
//! - what the next event from the device is
//!
//! Codes are translated to names through a [`CodeRegistry`]. Categories and
//! features are cheap values borrowing the device they came from.

pub mod category;
pub mod error;
pub mod event;
pub mod feature;
pub mod registry;
pub mod tables;

pub use category::{active_codes, CategoryKind, FeatureCategory};
pub use error::DeviceError;
pub use event::{EventRecord, EventTime};
pub use feature::Feature;
pub use registry::{code_registry, CodeRegistry, UNKNOWN_NAME};

pub use evprobe_transport::{
    AxisParameters, BusIdentity, DeviceNode, InterfaceVersion, RawEvent, RepeatSettings,
};

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use evprobe_transport::protocol::ev;
use evprobe_transport::{BoxedNode, EvdevNode};
use tracing::{debug, trace};

/// Capability and event facade over one device node
///
/// Holds no state besides the node and the registry used for names.
pub struct Device {
    node: BoxedNode,
    registry: Arc<CodeRegistry>,
}

impl Device {
    /// Open an evdev node (e.g. `/dev/input/event3`)
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DeviceError> {
        let node = EvdevNode::open(path)?;
        Ok(Self::new(node))
    }

    /// Wrap an already open node, naming codes with the global registry
    pub fn new(node: impl DeviceNode + 'static) -> Self {
        Self::with_registry(node, code_registry())
    }

    /// Wrap an already open node with a specific registry
    pub fn with_registry(node: impl DeviceNode + 'static, registry: Arc<CodeRegistry>) -> Self {
        Self {
            node: Box::new(node),
            registry,
        }
    }

    /// Close the underlying node
    pub fn close(self) {
        debug!("Closing device {}", self.node.path().display());
        self.node.close();
    }

    pub fn registry(&self) -> &CodeRegistry {
        &self.registry
    }

    pub fn node(&self) -> &dyn DeviceNode {
        self.node.as_ref()
    }

    pub fn path(&self) -> &Path {
        self.node.path()
    }

    // === Identity ===

    pub fn interface_version(&self) -> Result<InterfaceVersion, DeviceError> {
        Ok(InterfaceVersion(self.node.interface_version()?))
    }

    pub fn bus_identity(&self) -> Result<BusIdentity, DeviceError> {
        Ok(self.node.bus_identity()?)
    }

    /// Name of the bus the device is attached to, `None` if uncatalogued
    pub fn bus_type_name(&self) -> Result<Option<&'static str>, DeviceError> {
        let identity = self.node.bus_identity()?;
        Ok(self.registry.bus_type_name(identity.bus_type))
    }

    pub fn vendor(&self) -> Result<u16, DeviceError> {
        Ok(self.node.bus_identity()?.vendor)
    }

    pub fn product(&self) -> Result<u16, DeviceError> {
        Ok(self.node.bus_identity()?.product)
    }

    pub fn version(&self) -> Result<u16, DeviceError> {
        Ok(self.node.bus_identity()?.version)
    }

    pub fn name(&self) -> Result<String, DeviceError> {
        Ok(self.node.name()?)
    }

    pub fn topology(&self) -> Result<String, DeviceError> {
        Ok(self.node.topology()?)
    }

    pub fn unique_id(&self) -> Result<String, DeviceError> {
        Ok(self.node.unique_id()?)
    }

    // === Capabilities ===

    /// Build a category of this device without checking support
    pub fn category(&self, code: u16) -> FeatureCategory<'_> {
        FeatureCategory::new(self, code)
    }

    pub fn supported_categories(&self) -> Result<BTreeSet<FeatureCategory<'_>>, DeviceError> {
        Ok(self
            .node
            .supported_categories()?
            .into_iter()
            .map(|code| self.category(code))
            .collect())
    }

    /// Supported category with the given name
    pub fn category_named(&self, name: &str) -> Result<FeatureCategory<'_>, DeviceError> {
        self.find_category(name)?
            .ok_or_else(|| DeviceError::NotSupported(format!("category {name}")))
    }

    /// Supported category with the given name, `None` if there is no match
    pub fn find_category(&self, name: &str) -> Result<Option<FeatureCategory<'_>>, DeviceError> {
        let Some(code) = self.registry.category_code(name) else {
            return Ok(None);
        };
        let supported = self.node.supported_categories()?;
        Ok(supported.contains(&code).then(|| self.category(code)))
    }

    /// Pressed keys and buttons
    pub fn activated_keys(&self) -> Result<BTreeSet<Feature<'_>>, DeviceError> {
        self.category(ev::KEY).activated_features()
    }

    /// Lit indicators
    pub fn activated_leds(&self) -> Result<BTreeSet<Feature<'_>>, DeviceError> {
        self.category(ev::LED).activated_features()
    }

    /// Sounds currently playing
    pub fn activated_sounds(&self) -> Result<BTreeSet<Feature<'_>>, DeviceError> {
        self.category(ev::SND).activated_features()
    }

    pub fn axis_parameters(&self, axis: u16) -> Result<AxisParameters, DeviceError> {
        Ok(self.node.axis_parameters(axis)?)
    }

    pub fn repeat_settings(&self) -> Result<RepeatSettings, DeviceError> {
        Ok(self.node.repeat_settings()?)
    }

    pub fn set_repeat_settings(&self, settings: RepeatSettings) -> Result<(), DeviceError> {
        debug!(
            "Setting autorepeat: delay {}ms, period {}ms",
            settings.delay_ms, settings.period_ms
        );
        Ok(self.node.set_repeat_settings(settings)?)
    }

    pub fn keycode_for_scancode(&self, scancode: u32) -> Result<u32, DeviceError> {
        Ok(self.node.keycode_for_scancode(scancode)?)
    }

    pub fn set_keycode_for_scancode(&self, scancode: u32, keycode: u32) -> Result<(), DeviceError> {
        debug!("Mapping scancode 0x{scancode:X} to keycode {keycode}");
        Ok(self.node.set_keycode_for_scancode(scancode, keycode)?)
    }

    // === Events ===

    /// Turn a raw record into an event of this device
    ///
    /// Never fails: uncatalogued codes give features named [`UNKNOWN_NAME`].
    pub fn decode(&self, raw: &RawEvent) -> EventRecord<'_> {
        let (seconds, microseconds) = raw.time();
        let feature = self.category(raw.category).feature(raw.code);
        EventRecord::with_time(
            feature,
            raw.value,
            EventTime {
                seconds,
                microseconds,
            },
        )
    }

    /// Block until the next event arrives and decode it
    pub fn read_event(&self) -> Result<EventRecord<'_>, DeviceError> {
        let raw = self.node.read_raw_event()?;
        let event = self.decode(&raw);
        trace!("{event}");
        Ok(event)
    }

    /// Send one event; the node stamps the time
    pub fn write_event(&self, category: u16, code: u16, value: i32) -> Result<(), DeviceError> {
        debug!("Writing event type 0x{category:02x} code 0x{code:02x} value {value}");
        Ok(self.node.write_raw_event(category, code, value)?)
    }
}

impl std::fmt::Debug for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Device")
            .field("path", &self.node.path())
            .finish()
    }
}
