//! Storage abstractions for the service layer.
//!
//! `DocumentStore` is the seam every service talks to. Reads and writes run
//! closures against the whole document under the store's lock; `update`
//! commits only if the closure succeeds and the document was persisted.

pub mod json_document_store;

use async_trait::async_trait;
use models::Document;

use crate::errors::ServiceError;

pub use json_document_store::JsonDocumentStore;

pub type ReadFn<'a> = Box<dyn FnOnce(&Document) + Send + 'a>;
pub type UpdateFn<'a> = Box<dyn FnOnce(&mut Document) -> Result<(), ServiceError> + Send + 'a>;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Owned copy of the current document.
    async fn snapshot(&self) -> Result<Document, ServiceError>;
    /// Run `f` against the committed document.
    async fn read(&self, f: ReadFn<'_>) -> Result<(), ServiceError>;
    /// Run `f` against a draft and commit it once persisted.
    async fn update(&self, f: UpdateFn<'_>) -> Result<(), ServiceError>;
}

/// Typed read helper over [`DocumentStore::read`].
pub async fn query<T, F>(store: &dyn DocumentStore, f: F) -> Result<T, ServiceError>
where
    T: Send,
    F: FnOnce(&Document) -> T + Send,
{
    let mut out: Option<T> = None;
    store
        .read(Box::new(|doc: &Document| {
            out = Some(f(doc));
        }))
        .await?;
    out.ok_or_else(|| ServiceError::Storage("read produced no result".into()))
}

/// Typed write helper over [`DocumentStore::update`].
pub async fn mutate<T, F>(store: &dyn DocumentStore, f: F) -> Result<T, ServiceError>
where
    T: Send,
    F: FnOnce(&mut Document) -> Result<T, ServiceError> + Send,
{
    let mut out: Option<T> = None;
    store
        .update(Box::new(|doc: &mut Document| {
            out = Some(f(doc)?);
            Ok(())
        }))
        .await?;
    out.ok_or_else(|| ServiceError::Storage("update produced no result".into()))
}
