//! Identity handed back by the federated sign-in provider.

use crate::UserId;

use serde::{Deserialize, Serialize};

const FALLBACK_FIRST_NAME: &str = "User";

/// A signed-in user as the identity provider reports it.
///
/// Immutable for the lifetime of a session; the session layer drops it on
/// sign-out. Everything beyond the id is best-effort provider metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub uid: UserId,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

impl UserIdentity {
    pub fn new(uid: UserId) -> Self {
        Self {
            uid,
            display_name: None,
            email: None,
            photo_url: None,
        }
    }

    /// Split the display name into (first, last) for seeding a profile.
    ///
    /// First whitespace token becomes the first name, the remaining tokens
    /// joined become the last name. A missing or blank display name falls
    /// back to ("User", "").
    pub fn name_parts(&self) -> (String, String) {
        let display_name = self.display_name.as_deref().unwrap_or("");
        let mut tokens = display_name.split_whitespace();

        let first = tokens
            .next()
            .filter(|t| !t.is_empty())
            .unwrap_or(FALLBACK_FIRST_NAME)
            .to_string();
        let last = tokens.collect::<Vec<_>>().join(" ");

        (first, last)
    }
}
