//! Main docstore crate providing an in-memory document repository.
//!
//! This crate is the primary entry point. It re-exports the core types from
//! `docstore-core` and the in-memory backend from `docstore-memory`.
//!
//! # Features
//!
//! - **Upsert** - Save creates a document or replaces it wholesale, keeping its original creation time
//! - **Point lookup** - `find_by_id` distinguishes found from absent without errors
//! - **Multi-criteria search** - Title prefixes, content substrings, author ids and a creation window
//!
//! # Quick Start
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//! use chrono::{TimeZone, Utc};
//!
//! fn main() -> DocumentStoreResult<()> {
//!     let store = DocumentStore::new(InMemoryStore::new());
//!
//!     let report = store.save(
//!         Document::builder()
//!             .title("Report1")
//!             .content("Revenue grew")
//!             .author(Author::new("u1", "Alice"))
//!             .created(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())
//!             .build()?,
//!     )?;
//!
//!     let results = store.search(
//!         &SearchRequest::builder()
//!             .title_prefix("Report")
//!             .author_id("u1")
//!             .build(),
//!     )?;
//!
//!     assert_eq!(results, vec![report]);
//!     Ok(())
//! }
//! ```
//!
//! # Dynamic Dispatch
//!
//! A store can be converted into a [`DynDocumentStore`](store::DynDocumentStore) when
//! the backend is chosen at runtime:
//!
//! ```ignore
//! let store = DocumentStore::new(InMemoryStore::new()).into_dyn();
//! ```
//!
//! # Backends
//!
//! - [`memory`] - In-memory storage

pub mod prelude;

pub use docstore_core::{backend, document, error, query, store};

// Re-export the timestamp and JSON crates used in the public API
pub use chrono;
pub use serde_json;

/// In-memory storage backend implementations.
pub mod memory {
    pub use docstore_memory::{InMemoryStore, InMemoryStoreBuilder, InMemoryStoreConfig};
}
