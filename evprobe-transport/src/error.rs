//! Device-node error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the device-node layer
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ioctl {request} failed: {source}")]
    Ioctl {
        request: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Device disconnected")]
    Disconnected,

    #[error("Short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    #[error("Short write: expected {expected} bytes, wrote {actual}")]
    ShortWrite { expected: usize, actual: usize },

    #[error("Operation not supported by device node: {0}")]
    Unsupported(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl TransportError {
    /// Classify a failed ioctl by errno
    pub(crate) fn from_ioctl(request: &'static str, source: io::Error) -> Self {
        match source.raw_os_error() {
            Some(libc::ENODEV) => TransportError::Disconnected,
            Some(libc::EACCES) | Some(libc::EPERM) => {
                TransportError::PermissionDenied(format!("{request}: {source}"))
            }
            _ => TransportError::Ioctl { request, source },
        }
    }

    /// Classify a failed open by errno
    pub(crate) fn from_open(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => {
                TransportError::PermissionDenied(format!("{}: {source}", path.display()))
            }
            _ => TransportError::Open { path, source },
        }
    }

    /// Classify a failed read/write on an open node
    pub(crate) fn from_io(source: io::Error) -> Self {
        match source.raw_os_error() {
            Some(libc::ENODEV) => TransportError::Disconnected,
            _ => TransportError::Io(source),
        }
    }
}
