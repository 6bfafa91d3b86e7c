use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Mutually exclusive UI modes the application can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UiMode {
    /// Public site shown; a signed-in user may still browse it
    #[default]
    Public,
    /// Blocking profile-completion requirement
    ProfileGate,
    /// Gated dashboard
    Dashboard,
}

impl UiMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::ProfileGate => "profile_gate",
            Self::Dashboard => "dashboard",
        }
    }
}

impl FromStr for UiMode {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "public" => Ok(Self::Public),
            "profile_gate" => Ok(Self::ProfileGate),
            "dashboard" => Ok(Self::Dashboard),
            _ => Err(CoreError::InvalidUiMode {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UiMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
