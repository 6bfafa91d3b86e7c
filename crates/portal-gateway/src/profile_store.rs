//! Contract with the external document store holding profile records.

use crate::StoreResult;

use portal_core::{ProfileRecord, ProfileUpdate, UserId};

use async_trait::async_trait;

/// Profile document access, keyed by user id.
///
/// Both writes are idempotent upserts: `create` merges only fields the
/// existing record is missing (a completed profile is never regressed),
/// `update` merges the present fields of the payload. The store assigns
/// `created_at`/`updated_at`.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, uid: &UserId) -> StoreResult<Option<ProfileRecord>>;

    async fn create(&self, uid: &UserId, seed: ProfileRecord) -> StoreResult<()>;

    async fn update(&self, uid: &UserId, changes: ProfileUpdate) -> StoreResult<()>;
}
