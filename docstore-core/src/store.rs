//! Main document store interface.
//!
//! [`DocumentStore`] is the component the surrounding request layer talks to. It wraps a
//! [`StoreBackend`] and exposes the repository surface:
//!
//! - [`DocumentStore::find_by_id`] - exact lookup, `Ok(None)` when absent
//! - [`DocumentStore::save`] - upsert preserving the original creation time
//! - [`DocumentStore::search`] - multi-criteria filter over all stored documents
//!
//! The `*_json` variants accept and return `serde_json::Value` payloads and reject
//! null or malformed input with [`DocumentStoreError::InvalidArgument`].
//!
//! # Example
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//!
//! let store = DocumentStore::new(InMemoryStore::new());
//! let saved = store.save(document)?;
//! assert!(store.find_by_id(saved.id().unwrap())?.is_some());
//! ```

use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::{
    backend::StoreBackend,
    document::{Document, DocumentExt},
    error::{DocumentStoreError, DocumentStoreResult},
    query::SearchRequest,
};

/// A document store bound to a specific backend implementation.
///
/// Share one store between request handlers by wrapping the backend in an `Arc`
/// (or by cloning a backend whose clones share state, such as the in-memory one).
#[derive(Debug)]
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
}

/// A document store whose backend is selected at runtime.
pub type DynDocumentStore = DocumentStore<Box<dyn StoreBackend>>;

impl<B: StoreBackend> DocumentStore<B> {
    /// Creates a new document store with the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Looks up a document by identifier.
    ///
    /// Identifiers that were never issued simply yield `Ok(None)`.
    #[instrument(level = "debug", skip(self))]
    pub fn find_by_id(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        let found = self.backend.get(id)?;
        trace!(found = found.is_some(), "lookup finished");

        Ok(found)
    }

    /// Creates or replaces a document.
    ///
    /// A document without an identifier, or with one the store does not know, is
    /// inserted under a freshly minted identifier. A document whose identifier is
    /// already stored replaces that entry, keeping the stored `created` value.
    ///
    /// # Returns
    ///
    /// The document as stored.
    #[instrument(level = "debug", skip_all, fields(id = document.id()))]
    pub fn save(&self, document: Document) -> DocumentStoreResult<Document> {
        let saved = self.backend.upsert(document)?;
        debug!(id = saved.id(), "document saved");

        Ok(saved)
    }

    /// Returns every document matching all populated criteria of `request`.
    ///
    /// Result order is unspecified.
    #[instrument(level = "debug", skip_all)]
    pub fn search(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>> {
        let documents = self.backend.scan(request)?;
        debug!(
            matched = documents.len(),
            unconstrained = request.is_unconstrained(),
            "search finished"
        );

        Ok(documents)
    }

    /// Returns the number of stored documents.
    pub fn count(&self) -> DocumentStoreResult<usize> {
        self.backend.len()
    }

    /// Looks up a document by identifier and returns it as JSON.
    pub fn find_by_id_json(&self, id: &str) -> DocumentStoreResult<Option<Value>> {
        self.find_by_id(id)?
            .map(|document| document.to_json())
            .transpose()
    }

    /// Saves a document supplied as a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::InvalidArgument`] if the payload is `null`, is not
    /// an object, or lacks a required field.
    pub fn save_json(&self, payload: Value) -> DocumentStoreResult<Value> {
        let document = match payload {
            Value::Null => {
                return Err(DocumentStoreError::invalid_argument("document must not be null"));
            }
            Value::Object(_) => Document::from_json(payload).map_err(|err| {
                DocumentStoreError::invalid_argument(format!("malformed document: {err}"))
            })?,
            _ => {
                return Err(DocumentStoreError::invalid_argument("document must be a JSON object"));
            }
        };

        self.save(document)?.to_json()
    }

    /// Runs a search supplied as a JSON payload.
    ///
    /// An empty object is an unconstrained search.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::InvalidArgument`] if the payload is `null` or malformed.
    pub fn search_json(&self, payload: Value) -> DocumentStoreResult<Vec<Value>> {
        if payload.is_null() {
            return Err(DocumentStoreError::invalid_argument("search request must not be null"));
        }

        let request: SearchRequest = serde_json::from_value(payload).map_err(|err| {
            DocumentStoreError::invalid_argument(format!("malformed search request: {err}"))
        })?;

        self.search(&request)?
            .iter()
            .map(DocumentExt::to_json)
            .collect()
    }
}

impl<B: StoreBackend + 'static> DocumentStore<B> {
    /// Converts this store into a dynamically dispatched one.
    pub fn into_dyn(self) -> DynDocumentStore {
        let backend: Box<dyn StoreBackend> = Box::new(self.backend);
        DocumentStore::new(backend)
    }
}

impl<B: StoreBackend + Clone> Clone for DocumentStore<B> {
    fn clone(&self) -> Self {
        Self::new(self.backend.clone())
    }
}
