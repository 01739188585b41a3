//! In-memory document storage backend for docstore.
//!
//! This crate provides a thread-safe, in-memory implementation of the `StoreBackend` trait.
//! Nothing is persisted: a process restart loses every document.
//!
//! # Features
//!
//! - **Thread-safe access** - Documents live behind a read-write lock, saves are fully serialized
//! - **Collision-free identifiers** - New identifiers come from an atomic, monotonic counter
//! - **Full search support** - Every criterion of a `SearchRequest`, evaluated by linear scan
//!
//! # Quick Start
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//!
//! fn main() -> DocumentStoreResult<()> {
//!     let store = DocumentStore::new(InMemoryStore::builder().build()?);
//!
//!     let saved = store.save(
//!         Document::builder()
//!             .title("Alpha")
//!             .author(Author::new("u1", "Alice"))
//!             .build()?,
//!     )?;
//!
//!     let found = store.search(&SearchRequest::builder().title_prefix("Al").build())?;
//!     assert_eq!(found, vec![saved]);
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as docstore_memory;

pub mod store;
mod evaluator;

pub use store::{InMemoryStore, InMemoryStoreBuilder, InMemoryStoreConfig};
