use portal_core::{ProfileRecord, UserIdentity};

/// What the reconciler knows about the profile at decision time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProfileSnapshot {
    /// No record exists (or none has been seen yet)
    #[default]
    Absent,
    /// The fetch raced a timeout or failed; treat as incomplete but never
    /// overwrite a real record on this basis
    Unknown,
    /// The fetched record
    Loaded(ProfileRecord),
}

impl ProfileSnapshot {
    /// Only a loaded record can satisfy the completeness gate.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Loaded(record) if record.is_profile_complete)
    }

    pub fn record(&self) -> Option<&ProfileRecord> {
        match self {
            Self::Loaded(record) => Some(record),
            _ => None,
        }
    }
}

/// Session state owned exclusively by the reconciler. Transient, never
/// persisted; other components receive it through published decisions,
/// not by reading shared globals.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub identity: Option<UserIdentity>,
    pub profile: ProfileSnapshot,
    /// One-shot intent: route to the dashboard once sign-in settles.
    /// Set only by an explicit sign-in that asked for it; cleared exactly
    /// once, when the dashboard is shown or the intent is abandoned.
    pub pending_redirect: bool,
}
