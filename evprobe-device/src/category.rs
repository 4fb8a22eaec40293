//! Feature categories and activation decoding

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use evprobe_transport::bitmask;
use evprobe_transport::protocol::ev;
use tracing::trace;

use crate::error::DeviceError;
use crate::feature::Feature;
use crate::registry::UNKNOWN_NAME;
use crate::Device;

/// Semantics of a category, selected by its code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Keys,
    Indicators,
    Sound,
    AbsoluteAxis,
    RelativeAxis,
    Other,
}

impl CategoryKind {
    pub fn from_code(code: u16) -> Self {
        match code {
            ev::KEY => CategoryKind::Keys,
            ev::LED => CategoryKind::Indicators,
            ev::SND => CategoryKind::Sound,
            ev::ABS => CategoryKind::AbsoluteAxis,
            ev::REL => CategoryKind::RelativeAxis,
            _ => CategoryKind::Other,
        }
    }

    /// Whether the category has a per-feature on/off state to query
    pub fn supports_activation(self) -> bool {
        matches!(
            self,
            CategoryKind::Keys | CategoryKind::Indicators | CategoryKind::Sound
        )
    }
}

/// Codes among `supported` whose bit is set in `mask`
///
/// Bits for unsupported codes are ignored, so the result is always a subset
/// of `supported`.
pub fn active_codes(supported: &BTreeSet<u16>, mask: &[u8]) -> BTreeSet<u16> {
    supported
        .iter()
        .copied()
        .filter(|&code| bitmask::test_bit(mask, code))
        .collect()
}

/// One event category of a device
///
/// Borrows the device it was queried from. Equality and ordering use the
/// category code only.
#[derive(Clone, Copy)]
pub struct FeatureCategory<'d> {
    device: &'d Device,
    code: u16,
}

impl<'d> FeatureCategory<'d> {
    pub(crate) fn new(device: &'d Device, code: u16) -> Self {
        Self { device, code }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn kind(&self) -> CategoryKind {
        CategoryKind::from_code(self.code)
    }

    pub fn device(&self) -> &'d Device {
        self.device
    }

    /// Registry name, `None` for an uncatalogued category
    pub fn known_name(&self) -> Option<&'static str> {
        self.device.registry().category_name(self.code)
    }

    /// Registry name, or [`UNKNOWN_NAME`]
    pub fn name(&self) -> &'static str {
        self.known_name().unwrap_or(UNKNOWN_NAME)
    }

    /// Build a feature of this category without checking support
    pub fn feature(&self, code: u16) -> Feature<'d> {
        Feature::new(*self, code)
    }

    /// Features the device supports in this category
    pub fn supported_features(&self) -> Result<BTreeSet<Feature<'d>>, DeviceError> {
        Ok(self
            .supported_codes()?
            .into_iter()
            .map(|code| self.feature(code))
            .collect())
    }

    /// Supported feature with the given name
    ///
    /// Fails with `NotSupported` both when the name is unknown and when the
    /// device lacks the feature.
    pub fn feature_named(&self, name: &str) -> Result<Feature<'d>, DeviceError> {
        self.find_feature(name)?.ok_or_else(|| {
            DeviceError::NotSupported(format!("{} feature {name}", self.name()))
        })
    }

    /// Supported feature with the given name, `None` if there is no match
    pub fn find_feature(&self, name: &str) -> Result<Option<Feature<'d>>, DeviceError> {
        let Some(code) = self.device.registry().feature_code(self.code, name) else {
            return Ok(None);
        };
        let supported = self.supported_codes()?;
        Ok(supported.contains(&code).then(|| self.feature(code)))
    }

    /// Features currently active (pressed keys, lit LEDs, playing sounds)
    pub fn activated_features(&self) -> Result<BTreeSet<Feature<'d>>, DeviceError> {
        if !self.kind().supports_activation() {
            return Err(DeviceError::UnsupportedSemantics {
                category: self.name().to_string(),
            });
        }
        let supported = self.supported_codes()?;
        let mask = self.device.node().activation_bitmask(self.code)?;
        let active = active_codes(&supported, &mask);
        trace!(category = self.code, active = active.len(), "decoded activation");
        Ok(active.into_iter().map(|code| self.feature(code)).collect())
    }

    fn supported_codes(&self) -> Result<BTreeSet<u16>, DeviceError> {
        Ok(self
            .device
            .node()
            .supported_features(self.code)?
            .into_iter()
            .collect())
    }
}

impl PartialEq for FeatureCategory<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for FeatureCategory<'_> {}

impl Hash for FeatureCategory<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for FeatureCategory<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FeatureCategory<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

impl fmt::Debug for FeatureCategory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureCategory")
            .field("name", &self.name())
            .field("code", &self.code)
            .finish()
    }
}

impl fmt::Display for FeatureCategory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02x})", self.name(), self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[u16]) -> BTreeSet<u16> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_kind_from_code() {
        assert_eq!(CategoryKind::from_code(ev::KEY), CategoryKind::Keys);
        assert_eq!(CategoryKind::from_code(ev::LED), CategoryKind::Indicators);
        assert_eq!(CategoryKind::from_code(ev::SND), CategoryKind::Sound);
        assert_eq!(CategoryKind::from_code(ev::ABS), CategoryKind::AbsoluteAxis);
        assert_eq!(CategoryKind::from_code(ev::REL), CategoryKind::RelativeAxis);
        assert_eq!(CategoryKind::from_code(ev::SW), CategoryKind::Other);
        assert_eq!(CategoryKind::from_code(0x1e), CategoryKind::Other);
    }

    #[test]
    fn test_activation_flag() {
        assert!(CategoryKind::Keys.supports_activation());
        assert!(CategoryKind::Indicators.supports_activation());
        assert!(CategoryKind::Sound.supports_activation());
        assert!(!CategoryKind::AbsoluteAxis.supports_activation());
        assert!(!CategoryKind::RelativeAxis.supports_activation());
        assert!(!CategoryKind::Other.supports_activation());
    }

    #[test]
    fn test_active_codes_single_bit() {
        assert_eq!(active_codes(&codes(&[0, 1, 2]), &[0x02]), codes(&[1]));
    }

    #[test]
    fn test_active_codes_zero_and_full_masks() {
        let supported = codes(&[0, 3, 9, 15]);
        assert!(active_codes(&supported, &[0x00, 0x00]).is_empty());
        assert_eq!(active_codes(&supported, &[0xff, 0xff]), supported);
    }

    #[test]
    fn test_active_codes_ignores_unsupported_and_out_of_range() {
        // Bit 4 set but unsupported; code 40 lies past the mask
        let supported = codes(&[1, 40]);
        assert_eq!(active_codes(&supported, &[0x12]), codes(&[1]));
    }
}
