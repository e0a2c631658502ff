#![cfg(test)]
use std::{path::PathBuf, sync::Arc};

use crate::storage::{DocumentStore, JsonDocumentStore};

pub fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("catalog_{}_{}.json", tag, uuid::Uuid::new_v4()))
}

/// Fresh store on a unique temp file; the caller owns cleanup of the path.
pub async fn temp_store(tag: &str) -> (Arc<dyn DocumentStore>, PathBuf) {
    let path = temp_path(tag);
    let store: Arc<dyn DocumentStore> =
        JsonDocumentStore::connect(&path).await.expect("connect temp store");
    (store, path)
}
