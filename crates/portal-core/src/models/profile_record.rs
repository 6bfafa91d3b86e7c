//! Profile document - one per user, owned by the external document store.

use crate::{UserId, UserIdentity};

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A member profile as stored in the document store.
///
/// Timestamps are assigned by the store on write; a record that has never
/// been persisted carries `None` for both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub uid: UserId,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub interests: BTreeSet<String>,
    #[serde(default)]
    pub bio: String,
    pub photo_url: Option<String>,
    pub is_profile_complete: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProfileRecord {
    /// An empty record shell for `uid`, used by upserting writers.
    pub fn blank(uid: UserId) -> Self {
        Self {
            uid,
            email: None,
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            institution: String::new(),
            education: String::new(),
            experience: String::new(),
            interests: BTreeSet::new(),
            bio: String::new(),
            photo_url: None,
            is_profile_complete: false,
            created_at: None,
            updated_at: None,
        }
    }

    /// Seed a fresh, incomplete profile from provider identity metadata.
    pub fn seed(identity: &UserIdentity) -> Self {
        let (first_name, last_name) = identity.name_parts();

        let mut record = Self::blank(identity.uid.clone());
        record.email = identity.email.clone();
        record.first_name = first_name;
        record.last_name = last_name;
        record.photo_url = identity.photo_url.clone();
        record
    }

    /// Full name as shown in logged-in UI slots.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        name.trim().to_string()
    }
}
