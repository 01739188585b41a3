//! Convenient re-exports of commonly used types from docstore.
//!
//! ```ignore
//! use docstore::prelude::*;
//! ```

pub use docstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::{Author, Document, DocumentBuilder, DocumentExt},
    error::{DocumentStoreError, DocumentStoreResult},
    query::{Criterion, SearchRequest, SearchRequestBuilder, SearchVisitor},
    store::{DocumentStore, DynDocumentStore},
};
