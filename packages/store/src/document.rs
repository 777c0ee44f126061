use crate::StoreError;

/// A document's schemaless field map, keyed by field name.
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// Async contract for a document-oriented store.
///
/// Documents are untyped [`Fields`] maps grouped into named collections and
/// identified by a store-assigned id. Implementations live in sibling modules
/// ([`crate::memory`], [`crate::file_store`]); a hosted backend would slot in
/// the same way. Every method completes exactly once with success xor
/// failure.
pub trait DocumentStore {
    /// Every document in `collection` as `(id, fields)`, ordered by id.
    fn list(
        &self,
        collection: &str,
    ) -> impl std::future::Future<Output = Result<Vec<(String, Fields)>, StoreError>>;

    /// Create a document; the store assigns and returns a fresh unique id.
    fn create(
        &self,
        collection: &str,
        fields: Fields,
    ) -> impl std::future::Future<Output = Result<String, StoreError>>;

    /// Replace the document's entire field set. Missing documents are
    /// created, per document-store `set` semantics.
    fn set_fields(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;

    /// Delete the document. Deleting an id that is already gone is a silent
    /// success.
    fn delete(
        &self,
        collection: &str,
        id: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
