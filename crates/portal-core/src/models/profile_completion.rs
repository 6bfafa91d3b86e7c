use crate::{CoreError, Result as CoreErrorResult};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The required fields a member must supply before full application access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCompletion {
    pub phone: String,
    pub institution: String,
    pub education: String,
    pub experience: String,
    pub interests: BTreeSet<String>,
}

impl ProfileCompletion {
    /// Every field is required; blank-after-trim counts as missing.
    pub fn validate(&self) -> CoreErrorResult<()> {
        let required = [
            ("phone", &self.phone),
            ("institution", &self.institution),
            ("education", &self.education),
            ("experience", &self.experience),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::validation(format!("{field} is required")));
            }
        }

        if self.interests.is_empty() {
            return Err(CoreError::validation("at least one interest is required"));
        }

        Ok(())
    }
}
