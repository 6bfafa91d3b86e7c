//! Contract with the external blob store (avatar images).

use crate::StoreResult;

use async_trait::async_trait;

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store bytes under a key, replacing any previous content.
    async fn upload(&self, key: &str, bytes: Vec<u8>) -> StoreResult<()>;

    /// Resolve the public URL for an uploaded key.
    async fn resolve_url(&self, key: &str) -> StoreResult<String>;
}
