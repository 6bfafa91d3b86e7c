use crate::tests::account;
use crate::{MemoryProfileStore, ProfileStore, StoreError};

use portal_core::{ProfileCompletion, ProfileRecord, ProfileUpdate, UserId};

use std::time::Duration;

fn completion() -> ProfileCompletion {
    ProfileCompletion {
        phone: "555-0100".into(),
        institution: "MIT".into(),
        education: "MSc".into(),
        experience: "5 years".into(),
        interests: ["robotics"].iter().map(|t| t.to_string()).collect(),
    }
}

#[tokio::test]
async fn given_empty_store_when_seed_created_then_timestamps_assigned() {
    let store = MemoryProfileStore::new();
    let identity = account("u1", "Ana Lopez");
    let uid = identity.uid.clone();

    store
        .create(&uid, ProfileRecord::seed(&identity))
        .await
        .unwrap();

    let record = store.get(&uid).await.unwrap().expect("record expected");
    assert_eq!(record.first_name, "Ana");
    assert_eq!(record.last_name, "Lopez");
    assert!(record.created_at.is_some());
    assert!(record.updated_at.is_some());
    assert!(!record.is_profile_complete);
}

#[tokio::test]
async fn given_completed_profile_when_seeded_again_then_not_regressed() {
    let store = MemoryProfileStore::new();
    let identity = account("u1", "Ana Lopez");
    let uid = identity.uid.clone();

    store
        .create(&uid, ProfileRecord::seed(&identity))
        .await
        .unwrap();
    store
        .update(&uid, ProfileUpdate::from(completion()))
        .await
        .unwrap();

    // Second seed write for the same id: no duplicate, no overwrite
    store
        .create(&uid, ProfileRecord::seed(&identity))
        .await
        .unwrap();

    assert_eq!(store.len().await, 1);
    let record = store.get(&uid).await.unwrap().unwrap();
    assert!(record.is_profile_complete);
    assert_eq!(record.phone, "555-0100");
}

#[tokio::test]
async fn given_existing_record_when_seeded_then_only_missing_fields_fill() {
    let store = MemoryProfileStore::new();
    let identity = account("u1", "Ana Lopez");
    let uid = identity.uid.clone();

    let mut existing = ProfileRecord::seed(&identity);
    existing.first_name = "Anita".into();
    existing.photo_url = None;
    store.insert(existing).await;

    let mut seed = ProfileRecord::seed(&identity);
    seed.photo_url = Some("https://example.com/ana.png".into());
    store.create(&uid, seed).await.unwrap();

    let record = store.get(&uid).await.unwrap().unwrap();
    assert_eq!(record.first_name, "Anita");
    assert_eq!(
        record.photo_url.as_deref(),
        Some("https://example.com/ana.png")
    );
}

#[tokio::test]
async fn given_missing_record_when_updated_then_upserted() {
    let store = MemoryProfileStore::new();
    let uid = UserId::new("u2");

    store
        .update(
            &uid,
            ProfileUpdate {
                phone: Some("555-0101".into()),
                ..ProfileUpdate::default()
            },
        )
        .await
        .unwrap();

    let record = store.get(&uid).await.unwrap().expect("record expected");
    assert_eq!(record.phone, "555-0101");
    assert!(record.created_at.is_some());
}

#[tokio::test]
async fn given_update_when_applied_then_created_at_preserved() {
    let store = MemoryProfileStore::new();
    let identity = account("u1", "Ana Lopez");
    let uid = identity.uid.clone();

    store
        .create(&uid, ProfileRecord::seed(&identity))
        .await
        .unwrap();
    let created_at = store.get(&uid).await.unwrap().unwrap().created_at;

    store
        .update(
            &uid,
            ProfileUpdate {
                bio: Some("Researcher".into()),
                ..ProfileUpdate::default()
            },
        )
        .await
        .unwrap();

    let record = store.get(&uid).await.unwrap().unwrap();
    assert_eq!(record.created_at, created_at);
    assert_eq!(record.bio, "Researcher");
}

#[tokio::test]
async fn given_failing_writes_when_create_then_error() {
    let store = MemoryProfileStore::new();
    let identity = account("u1", "Ana Lopez");
    store.set_fail_writes(true);

    let result = store
        .create(&identity.uid, ProfileRecord::seed(&identity))
        .await;

    assert!(matches!(result, Err(StoreError::WriteFailed { .. })));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn given_latency_when_get_raced_with_shorter_timeout_then_elapses() {
    let store = MemoryProfileStore::new();
    store.set_latency(Duration::from_millis(200)).await;

    let result =
        tokio::time::timeout(Duration::from_millis(20), store.get(&UserId::new("u1"))).await;

    assert!(result.is_err());
}
