//! Raw event record codec
//!
//! The device node delivers and accepts events as fixed-size
//! `struct input_event` records:
//!
//! ```text
//! struct input_event {
//!     struct timeval time;   // seconds, microseconds (native long)
//!     __u16 type;            // feature category
//!     __u16 code;            // feature code
//!     __s32 value;
//! };
//! ```

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::error::TransportError;

/// Size of one record on the wire
pub const RAW_EVENT_SIZE: usize = std::mem::size_of::<RawEvent>();

/// One `struct input_event`, byte-compatible with the kernel layout
#[derive(Clone, Copy, PartialEq, Eq, Default, IntoBytes, FromBytes, KnownLayout, Immutable)]
#[repr(C)]
pub struct RawEvent {
    pub seconds: libc::c_long,
    pub microseconds: libc::c_long,
    pub category: u16,
    pub code: u16,
    pub value: i32,
}

impl RawEvent {
    /// Build an unstamped record (time fields zero)
    pub fn new(category: u16, code: u16, value: i32) -> Self {
        Self {
            seconds: 0,
            microseconds: 0,
            category,
            code,
            value,
        }
    }

    /// Build a record with an explicit timestamp
    pub fn at(seconds: i64, microseconds: i64, category: u16, code: u16, value: i32) -> Self {
        Self {
            seconds: seconds as libc::c_long,
            microseconds: microseconds as libc::c_long,
            category,
            code,
            value,
        }
    }

    /// Build a record stamped with the current wall-clock time
    pub fn stamped(category: u16, code: u16, value: i32) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            seconds: now.as_secs() as libc::c_long,
            microseconds: now.subsec_micros() as libc::c_long,
            category,
            code,
            value,
        }
    }

    /// Decode one record from exactly [`RAW_EVENT_SIZE`] bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransportError> {
        Self::read_from_bytes(bytes).map_err(|_| TransportError::ShortRead {
            expected: RAW_EVENT_SIZE,
            actual: bytes.len(),
        })
    }

    /// Timestamp as (seconds, microseconds)
    pub fn time(&self) -> (i64, i64) {
        (self.seconds as i64, self.microseconds as i64)
    }
}

impl fmt::Debug for RawEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RawEvent {{ time: {}.{:06}, type: 0x{:02X}, code: 0x{:03X}, value: {} }}",
            self.seconds, self.microseconds, self.category, self.code, self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_kernel_struct() {
        assert_eq!(RAW_EVENT_SIZE, std::mem::size_of::<libc::input_event>());
    }

    #[test]
    fn test_decode_from_kernel_bytes() {
        let kernel = libc::input_event {
            time: libc::timeval {
                tv_sec: 1_700_000_000,
                tv_usec: 250_000,
            },
            type_: 0x11,
            code: 0x02,
            value: 1,
        };
        // SAFETY: input_event is plain old data with no padding on Linux targets
        let bytes = unsafe {
            std::slice::from_raw_parts(
                &kernel as *const libc::input_event as *const u8,
                std::mem::size_of::<libc::input_event>(),
            )
        };

        let event = RawEvent::from_bytes(bytes).unwrap();
        assert_eq!(event.time(), (1_700_000_000, 250_000));
        assert_eq!(event.category, 0x11);
        assert_eq!(event.code, 0x02);
        assert_eq!(event.value, 1);
    }

    #[test]
    fn test_negative_value_survives_bytes() {
        let event = RawEvent::new(0x02, 0x08, -3);
        let decoded = RawEvent::from_bytes(event.as_bytes()).unwrap();
        assert_eq!(decoded.value, -3);
    }

    #[test]
    fn test_truncated_record_is_short_read() {
        let event = RawEvent::new(0x01, 0x1e, 1);
        let err = RawEvent::from_bytes(&event.as_bytes()[..RAW_EVENT_SIZE - 1]).unwrap_err();
        assert!(matches!(
            err,
            TransportError::ShortRead { expected, actual }
                if expected == RAW_EVENT_SIZE && actual == RAW_EVENT_SIZE - 1
        ));
    }

    #[test]
    fn test_stamped_sets_time() {
        let event = RawEvent::stamped(0x11, 0x00, 0);
        assert!(event.seconds > 0);
        assert!((0..1_000_000).contains(&event.microseconds));
    }
}
