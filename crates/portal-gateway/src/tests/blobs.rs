use crate::{BlobStore, MemoryBlobStore, StoreError};

#[tokio::test]
async fn given_uploaded_blob_when_resolved_then_url_contains_key() {
    let blobs = MemoryBlobStore::new();

    blobs
        .upload("profile-pictures/u1", vec![1, 2, 3])
        .await
        .unwrap();
    let url = blobs.resolve_url("profile-pictures/u1").await.unwrap();

    assert!(url.ends_with("profile-pictures/u1"));
    assert_eq!(blobs.size("profile-pictures/u1").await, Some(3));
}

#[tokio::test]
async fn given_second_upload_when_same_key_then_replaces_content() {
    let blobs = MemoryBlobStore::new();

    blobs.upload("k", vec![1, 2, 3]).await.unwrap();
    blobs.upload("k", vec![9]).await.unwrap();

    assert_eq!(blobs.size("k").await, Some(1));
}

#[tokio::test]
async fn given_unknown_key_when_resolved_then_not_found() {
    let blobs = MemoryBlobStore::new();

    let result = blobs.resolve_url("missing").await;

    assert!(matches!(result, Err(StoreError::BlobNotFound { .. })));
}
