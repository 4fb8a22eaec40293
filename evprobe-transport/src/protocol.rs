//! evdev protocol constants
//!
//! Values from `linux/input-event-codes.h` that the device-node layer needs
//! to size bitmaps and pick state ioctls. Symbolic names for every code live
//! in the device crate's code registry.

/// Event type (feature category) codes
pub mod ev {
    pub const SYN: u16 = 0x00;
    pub const KEY: u16 = 0x01;
    pub const REL: u16 = 0x02;
    pub const ABS: u16 = 0x03;
    pub const MSC: u16 = 0x04;
    pub const SW: u16 = 0x05;
    pub const LED: u16 = 0x11;
    pub const SND: u16 = 0x12;
    pub const REP: u16 = 0x14;
    pub const FF: u16 = 0x15;
    pub const PWR: u16 = 0x16;
    pub const FF_STATUS: u16 = 0x17;
    pub const MAX: u16 = 0x1f;
}

/// Highest valid code per event type
pub mod max {
    pub const SYN: u16 = 0x0f;
    pub const KEY: u16 = 0x2ff;
    pub const REL: u16 = 0x0f;
    pub const ABS: u16 = 0x3f;
    pub const MSC: u16 = 0x07;
    pub const SW: u16 = 0x11;
    pub const LED: u16 = 0x0f;
    pub const SND: u16 = 0x07;
    pub const REP: u16 = 0x01;
    pub const FF: u16 = 0x7f;
}

/// Highest code a feature bitmap for `category` can contain
///
/// Unknown categories get the KEY range, the largest one the kernel defines.
pub fn max_code(category: u16) -> u16 {
    match category {
        ev::SYN => max::SYN,
        ev::KEY => max::KEY,
        ev::REL => max::REL,
        ev::ABS => max::ABS,
        ev::MSC => max::MSC,
        ev::SW => max::SW,
        ev::LED => max::LED,
        ev::SND => max::SND,
        ev::REP => max::REP,
        ev::FF => max::FF,
        _ => max::KEY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_code_known_categories() {
        assert_eq!(max_code(ev::KEY), 0x2ff);
        assert_eq!(max_code(ev::LED), 0x0f);
        assert_eq!(max_code(ev::ABS), 0x3f);
    }

    #[test]
    fn test_max_code_unknown_category_falls_back_to_key_range() {
        assert_eq!(max_code(0x1e), max::KEY);
    }
}
