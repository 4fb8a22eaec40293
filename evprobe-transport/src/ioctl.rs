// evdev ioctl request numbers
// From linux/input.h:
// #define EVIOCGVERSION      _IOR('E', 0x01, int)
// #define EVIOCGID           _IOR('E', 0x02, struct input_id)
// #define EVIOCGREP          _IOR('E', 0x03, unsigned int[2])
// #define EVIOCSREP          _IOW('E', 0x03, unsigned int[2])
// #define EVIOCGKEYCODE      _IOR('E', 0x04, unsigned int[2])
// #define EVIOCSKEYCODE      _IOW('E', 0x04, unsigned int[2])
// #define EVIOCGNAME(len)    _IOC(_IOC_READ, 'E', 0x06, len)
// #define EVIOCGPHYS(len)    _IOC(_IOC_READ, 'E', 0x07, len)
// #define EVIOCGUNIQ(len)    _IOC(_IOC_READ, 'E', 0x08, len)
// #define EVIOCGKEY(len)     _IOC(_IOC_READ, 'E', 0x18, len)
// #define EVIOCGLED(len)     _IOC(_IOC_READ, 'E', 0x19, len)
// #define EVIOCGSND(len)     _IOC(_IOC_READ, 'E', 0x1a, len)
// #define EVIOCGSW(len)      _IOC(_IOC_READ, 'E', 0x1b, len)
// #define EVIOCGBIT(ev,len)  _IOC(_IOC_READ, 'E', 0x20 + (ev), len)
// #define EVIOCGABS(abs)     _IOR('E', 0x40 + (abs), struct input_absinfo)

use std::mem::size_of;

const EVDEV_MAGIC: u8 = b'E';

const IOC_WRITE: u32 = 1;
const IOC_READ: u32 = 2;

/// Direction: 2 bits at 30-31, Size: 14 bits at 16-29, Type: 8 bits at 8-15, Nr: 8 bits at 0-7
const fn ioc(dir: u32, nr: u32, size: usize) -> libc::c_ulong {
    let size = (size as u32) & 0x3FFF;
    let typ = EVDEV_MAGIC as u32;
    ((dir << 30) | (size << 16) | (typ << 8) | nr) as libc::c_ulong
}

pub const EVIOCGVERSION: libc::c_ulong = ioc(IOC_READ, 0x01, size_of::<libc::c_int>());
pub const EVIOCGID: libc::c_ulong = ioc(IOC_READ, 0x02, size_of::<libc::input_id>());
pub const EVIOCGREP: libc::c_ulong = ioc(IOC_READ, 0x03, size_of::<[libc::c_uint; 2]>());
pub const EVIOCSREP: libc::c_ulong = ioc(IOC_WRITE, 0x03, size_of::<[libc::c_uint; 2]>());
pub const EVIOCGKEYCODE: libc::c_ulong = ioc(IOC_READ, 0x04, size_of::<[libc::c_uint; 2]>());
pub const EVIOCSKEYCODE: libc::c_ulong = ioc(IOC_WRITE, 0x04, size_of::<[libc::c_uint; 2]>());

pub const fn eviocgname(len: usize) -> libc::c_ulong {
    ioc(IOC_READ, 0x06, len)
}

pub const fn eviocgphys(len: usize) -> libc::c_ulong {
    ioc(IOC_READ, 0x07, len)
}

pub const fn eviocguniq(len: usize) -> libc::c_ulong {
    ioc(IOC_READ, 0x08, len)
}

pub const fn eviocgkey(len: usize) -> libc::c_ulong {
    ioc(IOC_READ, 0x18, len)
}

pub const fn eviocgled(len: usize) -> libc::c_ulong {
    ioc(IOC_READ, 0x19, len)
}

pub const fn eviocgsnd(len: usize) -> libc::c_ulong {
    ioc(IOC_READ, 0x1a, len)
}

pub const fn eviocgsw(len: usize) -> libc::c_ulong {
    ioc(IOC_READ, 0x1b, len)
}

pub const fn eviocgbit(category: u16, len: usize) -> libc::c_ulong {
    ioc(IOC_READ, 0x20 + category as u32, len)
}

pub const fn eviocgabs(axis: u16) -> libc::c_ulong {
    ioc(IOC_READ, 0x40 + axis as u32, size_of::<libc::input_absinfo>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ioctl_numbers() {
        // Expected values from C on x86_64
        assert_eq!(EVIOCGVERSION, 0x80044501, "EVIOCGVERSION mismatch");
        assert_eq!(EVIOCGID, 0x80084502, "EVIOCGID mismatch");
        assert_eq!(EVIOCGREP, 0x80084503, "EVIOCGREP mismatch");
        assert_eq!(EVIOCSREP, 0x40084503, "EVIOCSREP mismatch");
        assert_eq!(EVIOCGKEYCODE, 0x80084504, "EVIOCGKEYCODE mismatch");
        assert_eq!(eviocgname(256), 0x81004506, "EVIOCGNAME(256) mismatch");
        assert_eq!(eviocgkey(96), 0x80604518, "EVIOCGKEY(96) mismatch");
        assert_eq!(eviocgbit(0, 4), 0x80044520, "EVIOCGBIT(0, 4) mismatch");
        assert_eq!(eviocgabs(0), 0x80184540, "EVIOCGABS(0) mismatch");
    }

    #[test]
    fn test_eviocgbit_offsets_by_category() {
        assert_eq!(eviocgbit(0x11, 8) & 0xff, 0x31);
    }
}
