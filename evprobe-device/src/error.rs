//! Device model error types

use evprobe_transport::TransportError;
use thiserror::Error;

/// Errors from capability and event operations
#[derive(Error, Debug)]
pub enum DeviceError {
    /// Device node error, passed through unchanged
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Named category or feature is unknown or absent on this device
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Activation query on a category without on/off state
    #[error("Category {category} has no activation state")]
    UnsupportedSemantics { category: String },
}

impl DeviceError {
    /// True for the lookup failure callers are expected to probe for
    pub fn is_not_supported(&self) -> bool {
        matches!(self, DeviceError::NotSupported(_))
    }
}
