use crate::{BlobStore, StoreError, StoreResult};

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

const PUBLIC_URL_PREFIX: &str = "memory://blobs";

/// In-memory blob store resolving `memory://` URLs.
#[derive(Clone, Default)]
pub struct MemoryBlobStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of a stored blob, if present.
    pub async fn size(&self, key: &str) -> Option<usize> {
        self.inner.blobs.lock().await.get(key).map(Vec::len)
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn upload(&self, key: &str, bytes: Vec<u8>) -> StoreResult<()> {
        self.inner.blobs.lock().await.insert(key.to_string(), bytes);
        Ok(())
    }

    async fn resolve_url(&self, key: &str) -> StoreResult<String> {
        let blobs = self.inner.blobs.lock().await;
        if !blobs.contains_key(key) {
            return Err(StoreError::blob_not_found(key));
        }
        Ok(format!("{PUBLIC_URL_PREFIX}/{key}"))
    }
}
