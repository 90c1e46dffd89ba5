//! Error types for the snaplook crate
//!
//! This module defines the error types used throughout the crate,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains. Note that the
//! runtime failure modes of the overlay core itself (a native `init()`
//! returning false, an activate attempted before the bridge is ready, a
//! deferred init outliving its request) are deliberately *not* errors:
//! they are non-fatal state transitions that are logged and absorbed, so
//! only the configuration I/O surface can produce an `Err`.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the snaplook crate
#[derive(Debug, Error)]
pub enum SnaplookError {
    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for snaplook operations
pub type Result<T> = std::result::Result<T, SnaplookError>;
