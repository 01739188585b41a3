//! Storage backend abstraction for the document store.
//!
//! This module defines the seam between the [`DocumentStore`](crate::store::DocumentStore)
//! facade and a concrete storage implementation.
//!
//! # Overview
//!
//! The [`StoreBackend`] trait provides a synchronous interface for the three repository
//! operations (lookup, upsert, search) plus a couple of housekeeping methods.
//! Implementations are required to be thread-safe (`Send + Sync`): concurrent callers
//! may invoke any method at any time.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances

use std::{fmt::Debug, sync::Arc};

use crate::{
    document::Document,
    error::DocumentStoreResult,
    query::SearchRequest,
};

/// Abstract interface for document storage backends.
///
/// # Thread Safety
///
/// Implementations must serialize mutation of their identifier-keyed mapping so that
/// concurrent `upsert`, `get` and `scan` calls never observe a partially applied save,
/// and identifier minting must never hand out the same identifier twice.
///
/// # Error Handling
///
/// Operations return [`DocumentStoreResult<T>`](crate::error::DocumentStoreResult).
/// Absence is not an error: `get` returns `Ok(None)` and `scan` returns an empty list.
pub trait StoreBackend: Send + Sync + Debug {
    /// Looks up a document by its exact identifier.
    fn get(&self, id: &str) -> DocumentStoreResult<Option<Document>>;

    /// Creates or replaces a document.
    ///
    /// If `document.id` names a stored document, the stored `created` value is copied
    /// into `document` and the stored entry is replaced wholesale. Otherwise a fresh
    /// identifier is minted and the document is inserted under it.
    ///
    /// # Returns
    ///
    /// The document as stored, with its final identifier and `created` value.
    fn upsert(&self, document: Document) -> DocumentStoreResult<Document>;

    /// Returns every stored document matching all populated criteria of `request`.
    ///
    /// Result order is unspecified.
    fn scan(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>>;

    /// Returns the number of stored documents.
    fn len(&self) -> DocumentStoreResult<usize>;

    /// Removes every stored document. The identifier counter is not reset.
    fn clear(&self) -> DocumentStoreResult<()>;
}

impl<B> StoreBackend for &B
where
    B: StoreBackend + ?Sized,
{
    fn get(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        (**self).get(id)
    }

    fn upsert(&self, document: Document) -> DocumentStoreResult<Document> {
        (**self).upsert(document)
    }

    fn scan(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>> {
        (**self).scan(request)
    }

    fn len(&self) -> DocumentStoreResult<usize> {
        (**self).len()
    }

    fn clear(&self) -> DocumentStoreResult<()> {
        (**self).clear()
    }
}

impl<B> StoreBackend for Box<B>
where
    B: StoreBackend + ?Sized,
{
    fn get(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        (**self).get(id)
    }

    fn upsert(&self, document: Document) -> DocumentStoreResult<Document> {
        (**self).upsert(document)
    }

    fn scan(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>> {
        (**self).scan(request)
    }

    fn len(&self) -> DocumentStoreResult<usize> {
        (**self).len()
    }

    fn clear(&self) -> DocumentStoreResult<()> {
        (**self).clear()
    }
}

impl<B> StoreBackend for Arc<B>
where
    B: StoreBackend + ?Sized,
{
    fn get(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        (**self).get(id)
    }

    fn upsert(&self, document: Document) -> DocumentStoreResult<Document> {
        (**self).upsert(document)
    }

    fn scan(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>> {
        (**self).scan(request)
    }

    fn len(&self) -> DocumentStoreResult<usize> {
        (**self).len()
    }

    fn clear(&self) -> DocumentStoreResult<()> {
        (**self).clear()
    }
}

/// Factory trait for constructing backend instances.
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    fn build(self) -> DocumentStoreResult<Self::Backend>;
}
