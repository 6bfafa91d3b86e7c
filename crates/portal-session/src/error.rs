use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use portal_core::CoreError;
use portal_gateway::{AuthError, StoreError};
use thiserror::Error;

/// Failures surfaced by user-initiated session operations.
///
/// The passive decision pipeline never produces these - it degrades
/// internally and always reaches a decision.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Not authenticated {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Validation failed: {source}")]
    Validation {
        #[source]
        source: CoreError,
    },

    #[error("Authentication failed: {source}")]
    Auth {
        #[source]
        source: AuthError,
    },

    #[error("Store operation failed: {source}")]
    Store {
        #[source]
        source: StoreError,
    },
}

impl SessionError {
    /// Creates a NotAuthenticated error at caller location.
    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The sign-in failure underneath, if that is what this is.
    pub fn auth_error(&self) -> Option<&AuthError> {
        match self {
            Self::Auth { source } => Some(source),
            _ => None,
        }
    }
}

impl From<CoreError> for SessionError {
    fn from(source: CoreError) -> Self {
        Self::Validation { source }
    }
}

impl From<AuthError> for SessionError {
    fn from(source: AuthError) -> Self {
        Self::Auth { source }
    }
}

impl From<StoreError> for SessionError {
    fn from(source: StoreError) -> Self {
        Self::Store { source }
    }
}

pub type Result<T> = StdResult<T, SessionError>;
