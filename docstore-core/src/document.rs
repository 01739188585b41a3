//! Core types for document representation and serialization.
//!
//! This module provides the [`Document`] entity stored by the repository, the [`Author`]
//! value it references, a fluent [`DocumentBuilder`], and utilities for converting
//! documents to and from JSON for the surrounding request layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value, to_value};

use crate::error::{DocumentStoreError, DocumentStoreResult};

/// A named entity referenced by documents.
///
/// Authors have no lifecycle of their own inside the store. They are opaque values
/// supplied by the caller and copied into every document that references them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    /// The author's identifier, matched by [`SearchRequest::author_ids`](crate::query::SearchRequest::author_ids).
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Author {
    /// Creates a new author value.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The primary stored entity.
///
/// A document without an `id` is new; the store mints an identifier for it on save.
/// Once a document is stored, its `created` timestamp never changes: re-saving under
/// the same identifier keeps the original value.
///
/// # Example
///
/// ```ignore
/// use docstore::document::{Author, Document};
///
/// let document = Document::builder()
///     .title("Quarterly report")
///     .content("Revenue grew")
///     .author(Author::new("u1", "Alice"))
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Identifier, `None` until the store assigns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub author: Author,
    /// Creation time. Preserved by the store across updates.
    pub created: DateTime<Utc>,
}

impl Document {
    /// Creates a new document builder.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// Returns the identifier as a string slice, if one is set.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns a copy of this document carrying the given identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Fluent builder for [`Document`].
///
/// `title` and `content` default to empty strings and `created` defaults to the
/// current time. The author is required.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    id: Option<String>,
    title: String,
    content: String,
    author: Option<Author>,
    created: Option<DateTime<Utc>>,
}

impl DocumentBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Builds the document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::InvalidArgument`] if no author was set.
    pub fn build(self) -> DocumentStoreResult<Document> {
        let author = self
            .author
            .ok_or_else(|| DocumentStoreError::invalid_argument("document author must be set"))?;

        Ok(Document {
            id: self.id,
            title: self.title,
            content: self.content,
            author,
            created: self.created.unwrap_or_else(Utc::now),
        })
    }
}

/// Extension trait providing JSON conversion for documents.
pub trait DocumentExt: Sized {
    /// Converts this document to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json(&self) -> DocumentStoreResult<Value>;

    /// Creates a document from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    fn from_json(value: Value) -> DocumentStoreResult<Self>;
}

impl DocumentExt for Document {
    fn to_json(&self) -> DocumentStoreResult<Value> {
        Ok(to_value(self)?)
    }

    fn from_json(value: Value) -> DocumentStoreResult<Self> {
        Ok(from_value(value)?)
    }
}
