//! Linux evdev device node (`/dev/input/event*`)

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use zerocopy::IntoBytes;

use crate::bitmask;
use crate::error::TransportError;
use crate::ioctl;
use crate::protocol::{ev, max, max_code};
use crate::raw_event::{RawEvent, RAW_EVENT_SIZE};
use crate::types::{AxisParameters, BusIdentity, RepeatSettings};
use crate::DeviceNode;

/// Buffer size for the name/phys/uniq string queries
const STRING_QUERY_LEN: usize = 256;

const BITS_PER_WORD: usize = libc::c_ulong::BITS as usize;

/// An open evdev character device
pub struct EvdevNode {
    file: File,
    path: PathBuf,
}

impl EvdevNode {
    /// Open a node for reading and writing
    ///
    /// Falls back to read-only when the node is not writable by this user;
    /// writes on such a node fail with an I/O error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TransportError> {
        let path = path.as_ref();
        match OpenOptions::new().read(true).write(true).open(path) {
            Ok(file) => {
                debug!("Opened {} read-write", path.display());
                Ok(Self {
                    file,
                    path: path.to_path_buf(),
                })
            }
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                debug!("{} not writable, retrying read-only", path.display());
                Self::open_read_only(path)
            }
            Err(e) => Err(TransportError::from_open(path.to_path_buf(), e)),
        }
    }

    /// Open a node for reading only
    pub fn open_read_only(path: impl AsRef<Path>) -> Result<Self, TransportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TransportError::from_open(path.to_path_buf(), e))?;
        debug!("Opened {} read-only", path.display());
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    fn ioctl(
        &self,
        request: &'static str,
        number: libc::c_ulong,
        arg: *mut libc::c_void,
    ) -> Result<libc::c_int, TransportError> {
        trace!(request, "ioctl on {}", self.path.display());
        // SAFETY: every caller passes a buffer at least as large as the size
        // encoded in `number`, and the fd stays open for the call.
        let ret = unsafe { libc::ioctl(self.file.as_raw_fd(), number as _, arg) };
        if ret < 0 {
            return Err(TransportError::from_ioctl(request, io::Error::last_os_error()));
        }
        Ok(ret)
    }

    fn query_string(
        &self,
        request: &'static str,
        number: libc::c_ulong,
    ) -> Result<String, TransportError> {
        let mut buf = [0u8; STRING_QUERY_LEN];
        self.ioctl(request, number, buf.as_mut_ptr().cast())?;
        let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
    }

    /// Fetch a bitmap covering codes `0..=max_code`
    fn query_bitmap(
        &self,
        request: &'static str,
        number_for_len: impl Fn(usize) -> libc::c_ulong,
        max_code: u16,
    ) -> Result<Vec<u8>, TransportError> {
        let words = max_code as usize / BITS_PER_WORD + 1;
        let mut buf: Vec<libc::c_ulong> = vec![0; words];
        let len = words * std::mem::size_of::<libc::c_ulong>();
        self.ioctl(request, number_for_len(len), buf.as_mut_ptr().cast())?;
        Ok(bitmask::from_words(&buf))
    }
}

impl DeviceNode for EvdevNode {
    fn path(&self) -> &Path {
        &self.path
    }

    fn close(self: Box<Self>) {
        debug!("Closing {}", self.path.display());
        drop(self.file);
    }

    fn interface_version(&self) -> Result<u32, TransportError> {
        let mut version: libc::c_int = 0;
        self.ioctl(
            "EVIOCGVERSION",
            ioctl::EVIOCGVERSION,
            (&mut version as *mut libc::c_int).cast(),
        )?;
        Ok(version as u32)
    }

    fn bus_identity(&self) -> Result<BusIdentity, TransportError> {
        let mut id = libc::input_id {
            bustype: 0,
            vendor: 0,
            product: 0,
            version: 0,
        };
        self.ioctl(
            "EVIOCGID",
            ioctl::EVIOCGID,
            (&mut id as *mut libc::input_id).cast(),
        )?;
        Ok(BusIdentity {
            bus_type: id.bustype,
            vendor: id.vendor,
            product: id.product,
            version: id.version,
        })
    }

    fn name(&self) -> Result<String, TransportError> {
        self.query_string("EVIOCGNAME", ioctl::eviocgname(STRING_QUERY_LEN))
    }

    fn topology(&self) -> Result<String, TransportError> {
        self.query_string("EVIOCGPHYS", ioctl::eviocgphys(STRING_QUERY_LEN))
    }

    fn unique_id(&self) -> Result<String, TransportError> {
        self.query_string("EVIOCGUNIQ", ioctl::eviocguniq(STRING_QUERY_LEN))
    }

    fn supported_categories(&self) -> Result<Vec<u16>, TransportError> {
        let mask = self.query_bitmap("EVIOCGBIT", |len| ioctl::eviocgbit(0, len), ev::MAX)?;
        Ok(bitmask::set_bits(&mask).filter(|&c| c <= ev::MAX).collect())
    }

    fn supported_features(&self, category: u16) -> Result<Vec<u16>, TransportError> {
        // EVIOCGBIT(0, ..) answers with the category bitmap, not SYN codes
        if category == ev::SYN || category > ev::MAX {
            return Err(TransportError::Unsupported(format!(
                "no feature bitmap for category 0x{category:02X}"
            )));
        }
        let limit = max_code(category);
        let mask = self.query_bitmap("EVIOCGBIT", |len| ioctl::eviocgbit(category, len), limit)?;
        Ok(bitmask::set_bits(&mask).filter(|&c| c <= limit).collect())
    }

    fn activation_bitmask(&self, category: u16) -> Result<Vec<u8>, TransportError> {
        match category {
            ev::KEY => self.query_bitmap("EVIOCGKEY", ioctl::eviocgkey, max::KEY),
            ev::LED => self.query_bitmap("EVIOCGLED", ioctl::eviocgled, max::LED),
            ev::SND => self.query_bitmap("EVIOCGSND", ioctl::eviocgsnd, max::SND),
            ev::SW => self.query_bitmap("EVIOCGSW", ioctl::eviocgsw, max::SW),
            _ => Err(TransportError::Unsupported(format!(
                "no state query for category 0x{category:02X}"
            ))),
        }
    }

    fn axis_parameters(&self, axis: u16) -> Result<AxisParameters, TransportError> {
        if axis > max::ABS {
            return Err(TransportError::Unsupported(format!(
                "absolute axis 0x{axis:02X} out of range"
            )));
        }
        let mut info = libc::input_absinfo {
            value: 0,
            minimum: 0,
            maximum: 0,
            fuzz: 0,
            flat: 0,
            resolution: 0,
        };
        self.ioctl(
            "EVIOCGABS",
            ioctl::eviocgabs(axis),
            (&mut info as *mut libc::input_absinfo).cast(),
        )?;
        Ok(AxisParameters {
            value: info.value,
            minimum: info.minimum,
            maximum: info.maximum,
            fuzz: info.fuzz,
            flat: info.flat,
            resolution: info.resolution,
        })
    }

    fn repeat_settings(&self) -> Result<RepeatSettings, TransportError> {
        let mut rate: [libc::c_uint; 2] = [0; 2];
        self.ioctl("EVIOCGREP", ioctl::EVIOCGREP, rate.as_mut_ptr().cast())?;
        Ok(RepeatSettings {
            delay_ms: rate[0],
            period_ms: rate[1],
        })
    }

    fn set_repeat_settings(&self, settings: RepeatSettings) -> Result<(), TransportError> {
        let mut rate: [libc::c_uint; 2] = [settings.delay_ms, settings.period_ms];
        self.ioctl("EVIOCSREP", ioctl::EVIOCSREP, rate.as_mut_ptr().cast())?;
        Ok(())
    }

    fn keycode_for_scancode(&self, scancode: u32) -> Result<u32, TransportError> {
        let mut mapping: [libc::c_uint; 2] = [scancode, 0];
        self.ioctl("EVIOCGKEYCODE", ioctl::EVIOCGKEYCODE, mapping.as_mut_ptr().cast())?;
        Ok(mapping[1])
    }

    fn set_keycode_for_scancode(&self, scancode: u32, keycode: u32) -> Result<(), TransportError> {
        let mut mapping: [libc::c_uint; 2] = [scancode, keycode];
        self.ioctl("EVIOCSKEYCODE", ioctl::EVIOCSKEYCODE, mapping.as_mut_ptr().cast())?;
        Ok(())
    }

    fn read_raw_event(&self) -> Result<RawEvent, TransportError> {
        let mut buf = [0u8; RAW_EVENT_SIZE];
        let n = (&self.file).read(&mut buf).map_err(TransportError::from_io)?;
        if n == 0 {
            return Err(TransportError::Disconnected);
        }
        let event = RawEvent::from_bytes(&buf[..n])?;
        trace!(?event, "read");
        Ok(event)
    }

    fn write_raw_event(&self, category: u16, code: u16, value: i32) -> Result<(), TransportError> {
        let event = RawEvent::stamped(category, code, value);
        let n = (&self.file)
            .write(event.as_bytes())
            .map_err(TransportError::from_io)?;
        if n != RAW_EVENT_SIZE {
            return Err(TransportError::ShortWrite {
                expected: RAW_EVENT_SIZE,
                actual: n,
            });
        }
        trace!(?event, "wrote");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_node_is_open_error() {
        let result = EvdevNode::open("/dev/input/event-does-not-exist");
        assert!(matches!(result, Err(TransportError::Open { .. })));
    }

    #[test]
    #[ignore] // requires a readable /dev/input/event0
    fn test_query_first_node() {
        let node = EvdevNode::open("/dev/input/event0").unwrap();
        let version = node.interface_version().unwrap();
        assert!(version >> 16 >= 1);
        let categories = node.supported_categories().unwrap();
        assert!(categories.contains(&ev::SYN));
        eprintln!("{}: {:?}", node.name().unwrap(), categories);
    }
}
