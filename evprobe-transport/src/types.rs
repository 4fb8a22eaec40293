//! Common types for the device-node layer

use std::fmt;

/// Bus identity as reported by `EVIOCGID`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BusIdentity {
    /// `BUS_*` code
    pub bus_type: u16,
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
}

/// Packed evdev driver version (`EVIOCGVERSION`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceVersion(pub u32);

impl InterfaceVersion {
    pub fn major(&self) -> u32 {
        self.0 >> 16
    }

    pub fn minor(&self) -> u32 {
        (self.0 >> 8) & 0xff
    }

    pub fn patch(&self) -> u32 {
        self.0 & 0xff
    }
}

impl fmt::Display for InterfaceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())
    }
}

/// Absolute axis parameters (`struct input_absinfo`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisParameters {
    /// Current axis value
    pub value: i32,
    pub minimum: i32,
    pub maximum: i32,
    /// Noise filter threshold
    pub fuzz: i32,
    /// Dead zone around the center
    pub flat: i32,
    /// Units per mm (or per radian for rotational axes)
    pub resolution: i32,
}

/// Key autorepeat settings (`EVIOCGREP` / `EVIOCSREP`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepeatSettings {
    /// Hold time before the first repeat
    pub delay_ms: u32,
    /// Interval between repeats
    pub period_ms: u32,
}
