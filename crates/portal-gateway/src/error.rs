use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures of the interactive sign-in / sign-out surface.
///
/// Timeouts are classified by the session layer racing the provider call;
/// the provider itself only reports cancellation, popup blocking, or its
/// own error codes.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Sign-in was cancelled by the user {location}")]
    Cancelled { location: ErrorLocation },

    #[error("Sign-in popup was blocked by the browser {location}")]
    Blocked { location: ErrorLocation },

    #[error("Authentication timed out after {timeout_ms}ms {location}")]
    TimedOut {
        timeout_ms: u64,
        location: ErrorLocation,
    },

    #[error("Provider error ({code}): {message} {location}")]
    Provider {
        code: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Creates a Cancelled error at caller location.
    #[track_caller]
    pub fn cancelled() -> Self {
        Self::Cancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates a Blocked error at caller location.
    #[track_caller]
    pub fn blocked() -> Self {
        Self::Blocked {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates a TimedOut error at caller location.
    #[track_caller]
    pub fn timed_out(timeout_ms: u64) -> Self {
        Self::TimedOut {
            timeout_ms,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates a Provider error at caller location.
    #[track_caller]
    pub fn provider<C: Into<String>, M: Into<String>>(code: C, message: M) -> Self {
        Self::Provider {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Failures of the external document/blob store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Read failed for {key}: {message} {location}")]
    ReadFailed {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Write failed for {key}: {message} {location}")]
    WriteFailed {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Blob not found: {key} {location}")]
    BlobNotFound { key: String, location: ErrorLocation },
}

impl StoreError {
    /// Creates a ReadFailed error at caller location.
    #[track_caller]
    pub fn read_failed<K: std::fmt::Display, M: Into<String>>(key: K, message: M) -> Self {
        Self::ReadFailed {
            key: key.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates a WriteFailed error at caller location.
    #[track_caller]
    pub fn write_failed<K: std::fmt::Display, M: Into<String>>(key: K, message: M) -> Self {
        Self::WriteFailed {
            key: key.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates a BlobNotFound error at caller location.
    #[track_caller]
    pub fn blob_not_found<K: std::fmt::Display>(key: K) -> Self {
        Self::BlobNotFound {
            key: key.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type AuthResult<T> = std::result::Result<T, AuthError>;
pub type StoreResult<T> = std::result::Result<T, StoreError>;
