use portal_core::{ProfileRecord, UiMode, UserIdentity};

/// What the reconciler publishes after every committed transition.
///
/// A pure snapshot for the view layer: which mode to present plus the
/// identity/profile data its display slots need.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decision {
    pub mode: UiMode,
    pub identity: Option<UserIdentity>,
    pub profile: Option<ProfileRecord>,
}

impl Decision {
    pub fn signed_in(&self) -> bool {
        self.identity.is_some()
    }
}
