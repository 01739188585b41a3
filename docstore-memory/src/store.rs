//! In-memory storage implementation for the document store.
//!
//! This module provides a backend that keeps documents in a `HashMap` keyed by
//! identifier, guarded by a read-write lock, and mints new identifiers from an
//! atomic counter.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::trace;

use docstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    query::SearchRequest,
};

use crate::evaluator::DocumentEvaluator;

type DocumentMap = HashMap<String, Document>;

/// Thread-safe in-memory document storage backend.
///
/// # Thread Safety
///
/// `InMemoryStore` is cloneable and uses `Arc`-wrapped internal state, so it can be
/// injected into any number of request handlers. Clones share the same documents and
/// the same identifier counter.
///
/// A save holds the write lock for its whole check-then-write sequence, so concurrent
/// saves under the same identifier never lose the preserved `created` value and a
/// search never observes a half-applied save.
///
/// # Performance
///
/// Searches scan every stored document (no indexing).
///
/// # Example
///
/// ```ignore
/// use docstore_memory::InMemoryStore;
/// use docstore::backend::StoreBackend;
///
/// let store = InMemoryStore::new();
/// let saved = store.upsert(document)?;
/// assert_eq!(saved.id(), Some("1"));
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// document_id -> document
    documents: Arc<RwLock<DocumentMap>>,
    /// Last minted identifier
    counter: Arc<AtomicU64>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store whose first minted identifier is `"1"`.
    pub fn new() -> Self {
        Self::with_config(InMemoryStoreConfig::default())
    }

    /// Creates a new empty store from the given configuration.
    pub fn with_config(config: InMemoryStoreConfig) -> Self {
        Self {
            documents: Arc::new(RwLock::new(DocumentMap::with_capacity(config.initial_capacity))),
            counter: Arc::new(AtomicU64::new(config.id_seed)),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom options.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }

    fn mint_id(&self) -> DocumentStoreResult<String> {
        self.counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .map(|last| (last + 1).to_string())
            .map_err(|_| DocumentStoreError::Backend("identifier counter exhausted".to_string()))
    }
}

impl StoreBackend for InMemoryStore {
    fn get(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        Ok(self.documents.read().get(id).cloned())
    }

    fn upsert(&self, mut document: Document) -> DocumentStoreResult<Document> {
        let mut documents = self.documents.write();

        let existing = document.id.as_deref().and_then(|id| documents.get(id));

        let id = match existing {
            Some(stored) => {
                document.created = stored.created;
                trace!(id = document.id(), "replacing stored document");
                document.id.clone().unwrap_or_default()
            }
            None => {
                let id = self.mint_id()?;
                trace!(id = %id, discarded = document.id(), "minted identifier");
                document.id = Some(id.clone());
                id
            }
        };

        documents.insert(id, document.clone());

        Ok(document)
    }

    fn scan(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>> {
        let documents = self.documents.read();

        DocumentEvaluator::filter_documents(documents.values(), request)
    }

    fn len(&self) -> DocumentStoreResult<usize> {
        Ok(self.documents.read().len())
    }

    fn clear(&self) -> DocumentStoreResult<()> {
        self.documents.write().clear();

        Ok(())
    }
}

/// Configuration for [`InMemoryStore`].
///
/// Deserializable so the surrounding service can embed it in its own settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InMemoryStoreConfig {
    /// Number of documents to pre-allocate room for.
    pub initial_capacity: usize,
    /// Starting value of the identifier counter. The first minted identifier is `id_seed + 1`.
    pub id_seed: u64,
}

/// Builder for constructing [`InMemoryStore`] instances.
///
/// # Example
///
/// ```ignore
/// use docstore_memory::InMemoryStore;
/// use docstore::backend::StoreBackendBuilder;
///
/// let store = InMemoryStore::builder()
///     .initial_capacity(1024)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStoreBuilder {
    config: InMemoryStoreConfig,
}

impl InMemoryStoreBuilder {
    /// Replaces the whole configuration.
    pub fn config(mut self, config: InMemoryStoreConfig) -> Self {
        self.config = config;
        self
    }

    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    pub fn id_seed(mut self, seed: u64) -> Self {
        self.config.id_seed = seed;
        self
    }
}

impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] instance.
    ///
    /// This always succeeds and returns a freshly initialized store.
    fn build(self) -> DocumentStoreResult<Self::Backend> {
        Ok(InMemoryStore::with_config(self.config))
    }
}
