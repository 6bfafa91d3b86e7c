mod tab_nav;

use portal_core::{ProfileRecord, UserId, UserIdentity};

pub(crate) fn identity(uid: &str, display_name: Option<&str>) -> UserIdentity {
    UserIdentity {
        uid: UserId::new(uid),
        display_name: display_name.map(String::from),
        email: Some(format!("{uid}@example.com")),
        photo_url: None,
    }
}

pub(crate) fn seeded(identity: &UserIdentity) -> ProfileRecord {
    ProfileRecord::seed(identity)
}
