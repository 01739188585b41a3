//! An in-memory document repository core: create/update, point lookup and
//! multi-criteria search over a small, fixed set of document fields.
//!
//! This crate provides:
//!
//! - **Document model** ([`document`]) - The stored [`Document`](document::Document) entity and its [`Author`](document::Author)
//! - **Search requests** ([`query`]) - Optional, independently combinable filter criteria
//! - **Store backend abstraction** ([`backend`]) - The trait concrete storage implements
//! - **Document store** ([`store`]) - The `find_by_id` / `save` / `search` facade
//! - **Error handling** ([`error`]) - Error types and result types
//!
//! # Example
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//!
//! let store = DocumentStore::new(InMemoryStore::new());
//! let saved = store.save(
//!     Document::builder()
//!         .title("Alpha")
//!         .author(Author::new("u1", "Alice"))
//!         .build()?,
//! )?;
//!
//! assert_eq!(saved.id(), Some("1"));
//! ```

#[allow(unused_extern_crates)]
extern crate self as docstore_core;

pub mod backend;
pub mod document;
pub mod error;
pub mod query;
pub mod store;
