
use crate::SessionReconciler;

use portal_config::ReconcilerConfig;
use portal_core::{ProfileCompletion, ProfileRecord, UserId, UserIdentity};
use portal_gateway::{MemoryBlobStore, MemoryIdentityGateway, MemoryProfileStore};

use std::sync::Arc;

pub(crate) type TestReconciler =
    SessionReconciler<MemoryIdentityGateway, MemoryProfileStore, MemoryBlobStore>;

pub(crate) struct Harness {
    pub gateway: MemoryIdentityGateway,
    pub profiles: MemoryProfileStore,
    pub blobs: MemoryBlobStore,
    pub reconciler: Arc<TestReconciler>,
}

pub(crate) fn identity(uid: &str, display_name: Option<&str>) -> UserIdentity {
    UserIdentity {
        uid: UserId::new(uid),
        display_name: display_name.map(String::from),
        email: Some(format!("{uid}@example.com")),
        photo_url: None,
    }
}

pub(crate) fn test_config() -> ReconcilerConfig {
    ReconcilerConfig {
        profile_fetch_timeout_ms: 100,
        sign_in_timeout_ms: 1_000,
    }
}

pub(crate) fn harness_with_config(account: UserIdentity, config: ReconcilerConfig) -> Harness {
    let gateway = MemoryIdentityGateway::new(account);
    let profiles = MemoryProfileStore::new();
    let blobs = MemoryBlobStore::new();
    let reconciler = Arc::new(SessionReconciler::new(
        gateway.clone(),
        profiles.clone(),
        blobs.clone(),
        config,
    ));

    Harness {
        gateway,
        profiles,
        blobs,
        reconciler,
    }
}

pub(crate) fn harness(account: UserIdentity) -> Harness {
    harness_with_config(account, test_config())
}

/// A record that already passed the completion gate.
pub(crate) fn complete_record(account: &UserIdentity) -> ProfileRecord {
    let mut record = ProfileRecord::seed(account);
    let completion = ProfileCompletion {
        phone: "555-0100".into(),
        institution: "MIT".into(),
        education: "MSc".into(),
        experience: "5 years".into(),
        interests: ["robotics"].iter().map(|t| t.to_string()).collect(),
    };
    portal_core::ProfileUpdate::from(completion).apply_to(&mut record);
    record
}
