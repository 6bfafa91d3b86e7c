mod blobs;
mod profiles;

use portal_core::{UserId, UserIdentity};

pub(crate) fn account(uid: &str, display_name: &str) -> UserIdentity {
    UserIdentity {
        uid: UserId::new(uid),
        display_name: Some(display_name.to_string()),
        email: Some(format!("{uid}@example.com")),
        photo_url: None,
    }
}
