use crate::{ProfileStore, StoreError, StoreResult};

use portal_core::{ProfileRecord, ProfileUpdate, UserId};

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

/// In-memory profile document store.
///
/// Implements the merge-upsert contract: `create` fills only fields the
/// existing record is missing and never regresses the completion flag,
/// `update` merges the present fields of the payload. Timestamps are
/// assigned here, playing the part of server timestamps.
#[derive(Clone, Default)]
pub struct MemoryProfileStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    records: Mutex<HashMap<UserId, ProfileRecord>>,
    latency: Mutex<Duration>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay applied to every operation.
    pub async fn set_latency(&self, latency: Duration) {
        *self.inner.latency.lock().await = latency;
    }

    /// Make reads fail until reset.
    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make writes fail until reset.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Insert a record directly, bypassing latency and failure injection.
    pub async fn insert(&self, mut record: ProfileRecord) {
        let now = Utc::now();
        record.created_at.get_or_insert(now);
        record.updated_at.get_or_insert(now);
        self.inner
            .records
            .lock()
            .await
            .insert(record.uid.clone(), record);
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.records.lock().await.is_empty()
    }

    async fn apply_latency(&self) {
        let latency = *self.inner.latency.lock().await;
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

/// Fill the fields `existing` is missing from `seed`.
///
/// The completion flag is deliberately untouched: a second seed write must
/// never reopen a completed profile.
fn merge_missing(existing: &mut ProfileRecord, seed: &ProfileRecord) {
    if existing.email.is_none() {
        existing.email = seed.email.clone();
    }
    if existing.first_name.is_empty() {
        existing.first_name = seed.first_name.clone();
    }
    if existing.last_name.is_empty() {
        existing.last_name = seed.last_name.clone();
    }
    if existing.phone.is_empty() {
        existing.phone = seed.phone.clone();
    }
    if existing.institution.is_empty() {
        existing.institution = seed.institution.clone();
    }
    if existing.education.is_empty() {
        existing.education = seed.education.clone();
    }
    if existing.experience.is_empty() {
        existing.experience = seed.experience.clone();
    }
    if existing.interests.is_empty() {
        existing.interests = seed.interests.clone();
    }
    if existing.bio.is_empty() {
        existing.bio = seed.bio.clone();
    }
    if existing.photo_url.is_none() {
        existing.photo_url = seed.photo_url.clone();
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get(&self, uid: &UserId) -> StoreResult<Option<ProfileRecord>> {
        self.apply_latency().await;

        if self.inner.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::read_failed(uid, "simulated read failure"));
        }

        Ok(self.inner.records.lock().await.get(uid).cloned())
    }

    async fn create(&self, uid: &UserId, seed: ProfileRecord) -> StoreResult<()> {
        self.apply_latency().await;

        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::write_failed(uid, "simulated write failure"));
        }

        let now = Utc::now();
        let mut records = self.inner.records.lock().await;

        match records.entry(uid.clone()) {
            Entry::Vacant(slot) => {
                let mut record = seed;
                record.uid = uid.clone();
                record.created_at = Some(now);
                record.updated_at = Some(now);
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                merge_missing(existing, &seed);
                existing.updated_at = Some(now);
            }
        }

        Ok(())
    }

    async fn update(&self, uid: &UserId, changes: ProfileUpdate) -> StoreResult<()> {
        self.apply_latency().await;

        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::write_failed(uid, "simulated write failure"));
        }

        let now = Utc::now();
        let mut records = self.inner.records.lock().await;

        let record = records
            .entry(uid.clone())
            .or_insert_with(|| ProfileRecord::blank(uid.clone()));
        changes.apply_to(record);
        record.created_at.get_or_insert(now);
        record.updated_at = Some(now);

        Ok(())
    }
}
