//! Individual features

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::category::FeatureCategory;
use crate::error::DeviceError;
use crate::registry::UNKNOWN_NAME;

/// One addressable capability: a key, an LED, an axis
///
/// Identified by (category code, feature code); any code is a valid feature,
/// catalogued or not.
#[derive(Clone, Copy)]
pub struct Feature<'d> {
    category: FeatureCategory<'d>,
    code: u16,
}

impl<'d> Feature<'d> {
    pub(crate) fn new(category: FeatureCategory<'d>, code: u16) -> Self {
        Self { category, code }
    }

    pub fn category(&self) -> FeatureCategory<'d> {
        self.category
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    /// Registry name, `None` for an uncatalogued code
    pub fn known_name(&self) -> Option<&'static str> {
        self.category
            .device()
            .registry()
            .feature_name(self.category.code(), self.code)
    }

    /// Registry name, or [`UNKNOWN_NAME`]
    pub fn name(&self) -> &'static str {
        self.known_name().unwrap_or(UNKNOWN_NAME)
    }

    /// Send `value` for this feature to the device
    pub fn write_value(&self, value: i32) -> Result<(), DeviceError> {
        debug!("Writing {value} to {} {}", self.category.name(), self.name());
        self.category
            .device()
            .node()
            .write_raw_event(self.category.code(), self.code, value)?;
        Ok(())
    }

    /// Whether this feature is in its category's activated set
    pub fn is_activated(&self) -> Result<bool, DeviceError> {
        Ok(self.category.activated_features()?.contains(self))
    }
}

impl PartialEq for Feature<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.code == other.code
    }
}

impl Eq for Feature<'_> {}

impl Hash for Feature<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.category.hash(state);
        self.code.hash(state);
    }
}

impl PartialOrd for Feature<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Feature<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.category.code(), self.code).cmp(&(other.category.code(), other.code))
    }
}

impl fmt::Debug for Feature<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Feature")
            .field("category", &self.category.name())
            .field("name", &self.name())
            .field("code", &self.code)
            .finish()
    }
}

impl fmt::Display for Feature<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02x})", self.name(), self.code)
    }
}
