use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use models::Document;
use serde::Serialize;
use tokio::{fs, sync::RwLock};
use tracing::{debug, error, info, warn};

use super::{DocumentStore, ReadFn, UpdateFn};
use crate::errors::ServiceError;

/// JSON file-backed document store.
///
/// The file is read once on `connect` and kept in memory behind a single
/// `RwLock`. Every committed update rewrites the whole file through a temp
/// file and a rename, while holding the write lock, so there is exactly one
/// writer at a time and the file on disk is never half-written.
pub struct JsonDocumentStore {
    inner: RwLock<Document>,
    file_path: PathBuf,
}

impl JsonDocumentStore {
    /// Load the document from `path`.
    ///
    /// A missing (or blank) file yields an empty document which is written out
    /// immediately. A file that cannot be read or parsed is an error.
    pub async fn connect<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();

        let doc = match fs::read(&file_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => {
                warn!(path = %file_path.display(), "document file is empty; starting with empty collections");
                let doc = Document::default();
                write_document(&file_path, &doc).await?;
                doc
            }
            Ok(bytes) => serde_json::from_slice::<Document>(&bytes).map_err(|e| {
                error!(path = %file_path.display(), error = %e, "malformed document file");
                ServiceError::Storage(format!("malformed document {}: {e}", file_path.display()))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %file_path.display(), "document file not found; creating an empty one");
                if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).await.map_err(ServiceError::storage)?;
                }
                let doc = Document::default();
                write_document(&file_path, &doc).await?;
                doc
            }
            Err(e) => {
                error!(path = %file_path.display(), error = %e, "cannot read document file");
                return Err(ServiceError::storage(e));
            }
        };

        info!(
            path = %file_path.display(),
            products = doc.products.len(),
            categories = doc.categories.len(),
            favorites = doc.favorites.len(),
            authenticated_users = doc.authenticated_users.len(),
            "document store connected"
        );
        Ok(Arc::new(Self { inner: RwLock::new(doc), file_path }))
    }
}

#[async_trait]
impl DocumentStore for JsonDocumentStore {
    async fn snapshot(&self) -> Result<Document, ServiceError> {
        Ok(self.inner.read().await.clone())
    }

    async fn read(&self, f: ReadFn<'_>) -> Result<(), ServiceError> {
        let doc = self.inner.read().await;
        f(&*doc);
        Ok(())
    }

    async fn update(&self, f: UpdateFn<'_>) -> Result<(), ServiceError> {
        let mut doc = self.inner.write().await;
        let mut draft = doc.clone();
        f(&mut draft)?;
        write_document(&self.file_path, &draft).await?;
        *doc = draft;
        debug!(path = %self.file_path.display(), "document committed");
        Ok(())
    }
}

fn encode(doc: &Document) -> Result<Vec<u8>, ServiceError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser).map_err(ServiceError::storage)?;
    Ok(buf)
}

async fn write_document(path: &Path, doc: &Document) -> Result<(), ServiceError> {
    let data = encode(doc)?;
    let tmp = temp_path_for(path);
    if let Err(e) = fs::write(&tmp, data).await {
        error!(path = %tmp.display(), error = %e, "failed to write document");
        return Err(persist_failed());
    }
    if let Err(e) = fs::rename(&tmp, path).await {
        error!(path = %path.display(), error = %e, "failed to replace document");
        let _ = fs::remove_file(&tmp).await;
        return Err(persist_failed());
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

// io details stay in the log
fn persist_failed() -> ServiceError {
    ServiceError::Storage("failed to persist document".into())
}
