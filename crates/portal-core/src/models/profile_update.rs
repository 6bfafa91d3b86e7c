use crate::{ProfileCompletion, ProfileRecord};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Partial merge payload for a profile write.
///
/// `None` fields are left untouched by the store; this is the unit of every
/// profile mutation (completion, edit form, avatar URL update).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub institution: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub interests: Option<BTreeSet<String>>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub is_profile_complete: Option<bool>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the present fields into `record`. Timestamps are the store's
    /// concern, not this type's.
    pub fn apply_to(&self, record: &mut ProfileRecord) {
        if let Some(first_name) = &self.first_name {
            record.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            record.last_name = last_name.clone();
        }
        if let Some(phone) = &self.phone {
            record.phone = phone.clone();
        }
        if let Some(institution) = &self.institution {
            record.institution = institution.clone();
        }
        if let Some(education) = &self.education {
            record.education = education.clone();
        }
        if let Some(experience) = &self.experience {
            record.experience = experience.clone();
        }
        if let Some(interests) = &self.interests {
            record.interests = interests.clone();
        }
        if let Some(bio) = &self.bio {
            record.bio = bio.clone();
        }
        if let Some(photo_url) = &self.photo_url {
            record.photo_url = Some(photo_url.clone());
        }
        if let Some(is_profile_complete) = self.is_profile_complete {
            record.is_profile_complete = is_profile_complete;
        }
    }

    /// The edit-profile form payload (name, phone, institution, bio).
    pub fn edit_form(
        first_name: String,
        last_name: String,
        phone: String,
        institution: String,
        bio: String,
    ) -> Self {
        Self {
            first_name: Some(first_name),
            last_name: Some(last_name),
            phone: Some(phone),
            institution: Some(institution),
            bio: Some(bio),
            ..Self::default()
        }
    }
}

impl From<ProfileCompletion> for ProfileUpdate {
    fn from(completion: ProfileCompletion) -> Self {
        Self {
            phone: Some(completion.phone),
            institution: Some(completion.institution),
            education: Some(completion.education),
            experience: Some(completion.experience),
            interests: Some(completion.interests),
            is_profile_complete: Some(true),
            ..Self::default()
        }
    }
}
