//! User-visible messaging for session outcomes.
//!
//! The reconciler only classifies failures; the strings shown to the
//! member live here.

use portal_gateway::AuthError;
use portal_session::SessionError;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification for the toast slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

impl Toast {
    pub fn success<T: Into<String>, M: Into<String>>(title: T, message: M) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error<T: Into<String>, M: Into<String>>(title: T, message: M) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn signed_in() -> Self {
        Self::success("Success", "You have successfully signed in!")
    }

    pub fn signed_out() -> Self {
        Self::success("Success", "You have been signed out.")
    }

    pub fn profile_completed() -> Self {
        Self::success("Success", "Profile completed successfully!")
    }

    pub fn profile_updated() -> Self {
        Self::success("Success", "Profile updated successfully!")
    }

    pub fn profile_required() -> Self {
        Self::error("Profile Required", "Please complete your profile to continue.")
    }

    /// Map a failed sign-in to the message the member sees.
    pub fn sign_in_failed(error: &SessionError) -> Self {
        let message = match error.auth_error() {
            Some(AuthError::Cancelled { .. }) => {
                "Sign-in was cancelled. Please try again.".to_string()
            }
            Some(AuthError::Blocked { .. }) => {
                "Pop-up was blocked by the browser. Please enable pop-ups for this site."
                    .to_string()
            }
            Some(AuthError::TimedOut { .. }) => {
                "Authentication timed out. Please check your internet connection and try again."
                    .to_string()
            }
            Some(AuthError::Provider { code, .. }) => {
                format!("Authentication error ({code}). Please try again.")
            }
            None => "Failed to sign in.".to_string(),
        };

        Self::error("Sign-in Failed", message)
    }

    /// Generic mapping for failed user actions (sign-out, profile writes).
    pub fn action_failed(error: &SessionError) -> Self {
        Self::error("Error", error.to_string())
    }
}
