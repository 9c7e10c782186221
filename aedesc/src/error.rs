//! Error types for aedesc operations.

use crate::desc::DescType;
use thiserror::Error;

/// Main error type for descriptor decoding and coercion.
#[derive(Error, Debug)]
pub enum Error {
    /// The byte stream or payload is malformed: a bad magic header, a length
    /// field inconsistent with the remaining bytes, a fixed-width payload of
    /// the wrong size, or undecodable text.
    #[error("corrupt data: {reason}")]
    CorruptData { reason: String },

    /// The descriptor is well-formed but its type tag or value does not admit
    /// the requested target kind.
    #[error("cannot coerce '{dtype}' to {target}")]
    UnsupportedCoercion {
        dtype: DescType,
        target: &'static str,
    },
}

impl Error {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        Self::CorruptData {
            reason: reason.into(),
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
