//! Generic document-store trait for identifier-keyed persistence.

use async_trait::async_trait;

use crate::result::AppResult;

/// Identifier-keyed CRUD over one document type.
///
/// The store assigns identifiers on insert and enforces any uniqueness
/// constraints the document type carries, reporting violations as
/// [`ErrorKind::Conflict`](crate::error::ErrorKind::Conflict). Each write
/// replaces the whole document at once; readers never observe a partially
/// written document. Entity-specific lookups live on sub-traits.
#[async_trait]
pub trait DocumentStore<Doc, Draft, Id>: Send + Sync + 'static
where
    Doc: Send + Sync + 'static,
    Draft: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find a document by its identifier.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Doc>>;

    /// Return every document in the store's natural listing order.
    async fn find_all(&self) -> AppResult<Vec<Doc>>;

    /// Insert a new document built from `draft` and return it with its
    /// assigned identifier.
    async fn insert(&self, draft: &Draft) -> AppResult<Doc>;

    /// Replace the stored document that has the same identifier as `doc`.
    /// Returns `None` if no such document exists.
    async fn update_by_id(&self, doc: &Doc) -> AppResult<Option<Doc>>;

    /// Delete a document by identifier. Returns `true` if one was removed.
    async fn delete_by_id(&self, id: Id) -> AppResult<bool>;

    /// Count stored documents.
    async fn count(&self) -> AppResult<u64>;
}
