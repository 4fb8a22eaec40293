//! evprobe: inspect and drive Linux evdev input devices
//!
//! The capability/event model lives in `evprobe-device`; this crate holds
//! the CLI configuration and the Morse signaling logic.

pub mod config;
pub mod morse;
