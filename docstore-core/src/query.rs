//! Search request construction and the criterion visitor used to evaluate it.
//!
//! A [`SearchRequest`] carries five independent, optional criteria. A document matches
//! a request when it satisfies every populated criterion (logical AND across criteria)
//! and, within a multi-valued criterion, at least one of its values (logical OR).
//! An empty or absent criterion imposes no constraint.
//!
//! # Request Building
//!
//! ```ignore
//! use docstore::query::SearchRequest;
//!
//! let request = SearchRequest::builder()
//!     .title_prefix("Report")
//!     .author_id("u1")
//!     .created_from(from)
//!     .build();
//! ```
//!
//! # Evaluation
//!
//! Backends evaluate requests by implementing [`SearchVisitor`]. The default
//! [`SearchVisitor::visit_request`] walks the active criteria in a fixed order and
//! stops at the first one that fails.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DocumentStoreError;

/// A filter specification over stored documents.
///
/// The `Default` value is unconstrained and matches every document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// The title must start with at least one of these prefixes (case-sensitive).
    pub title_prefixes: Vec<String>,
    /// The content must contain at least one of these substrings (case-sensitive).
    pub contains_contents: Vec<String>,
    /// The author identifier must be one of these.
    pub author_ids: Vec<String>,
    /// Inclusive lower bound on `created`.
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created`.
    pub created_to: Option<DateTime<Utc>>,
}

/// A single populated criterion of a [`SearchRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion<'a> {
    TitlePrefixes(&'a [String]),
    ContainsContents(&'a [String]),
    AuthorIds(&'a [String]),
    CreatedFrom(DateTime<Utc>),
    CreatedTo(DateTime<Utc>),
}

impl SearchRequest {
    /// Creates an unconstrained request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new request builder for fluent construction.
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::new()
    }

    /// Returns `true` if no criterion is populated.
    pub fn is_unconstrained(&self) -> bool {
        self.criteria().next().is_none()
    }

    /// Iterates over the populated criteria in evaluation order.
    pub fn criteria(&self) -> impl Iterator<Item = Criterion<'_>> + '_ {
        let lists = [
            (!self.title_prefixes.is_empty())
                .then(|| Criterion::TitlePrefixes(&self.title_prefixes)),
            (!self.contains_contents.is_empty())
                .then(|| Criterion::ContainsContents(&self.contains_contents)),
            (!self.author_ids.is_empty()).then(|| Criterion::AuthorIds(&self.author_ids)),
            self.created_from.map(Criterion::CreatedFrom),
            self.created_to.map(Criterion::CreatedTo),
        ];

        lists.into_iter().flatten()
    }
}

/// Fluent builder for [`SearchRequest`].
///
/// List setters are additive: calling [`title_prefix`](Self::title_prefix) twice
/// yields a request matching either prefix.
#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    /// Creates a new builder with no criteria.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.request.title_prefixes.push(prefix.into());
        self
    }

    pub fn title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request
            .title_prefixes
            .extend(prefixes.into_iter().map(Into::into));
        self
    }

    pub fn contains_content(mut self, needle: impl Into<String>) -> Self {
        self.request.contains_contents.push(needle.into());
        self
    }

    pub fn contains_contents<I, S>(mut self, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request
            .contains_contents
            .extend(needles.into_iter().map(Into::into));
        self
    }

    pub fn author_id(mut self, author_id: impl Into<String>) -> Self {
        self.request.author_ids.push(author_id.into());
        self
    }

    pub fn author_ids<I, S>(mut self, author_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request
            .author_ids
            .extend(author_ids.into_iter().map(Into::into));
        self
    }

    /// Sets the inclusive lower bound on `created`.
    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.request.created_from = Some(from);
        self
    }

    /// Sets the inclusive upper bound on `created`.
    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.request.created_to = Some(to);
        self
    }

    /// Builds and returns the final request.
    pub fn build(self) -> SearchRequest {
        self.request
    }
}

/// Evaluates the criteria of a [`SearchRequest`] against some subject.
///
/// Each `visit_*` method is only called for populated criteria.
pub trait SearchVisitor {
    type Error: Into<DocumentStoreError>;

    fn visit_title_prefixes(&mut self, prefixes: &[String]) -> Result<bool, Self::Error>;
    fn visit_contains_contents(&mut self, needles: &[String]) -> Result<bool, Self::Error>;
    fn visit_author_ids(&mut self, author_ids: &[String]) -> Result<bool, Self::Error>;
    fn visit_created_from(&mut self, from: DateTime<Utc>) -> Result<bool, Self::Error>;
    fn visit_created_to(&mut self, to: DateTime<Utc>) -> Result<bool, Self::Error>;

    fn visit_criterion(&mut self, criterion: Criterion<'_>) -> Result<bool, Self::Error> {
        match criterion {
            Criterion::TitlePrefixes(prefixes) => self.visit_title_prefixes(prefixes),
            Criterion::ContainsContents(needles) => self.visit_contains_contents(needles),
            Criterion::AuthorIds(author_ids) => self.visit_author_ids(author_ids),
            Criterion::CreatedFrom(from) => self.visit_created_from(from),
            Criterion::CreatedTo(to) => self.visit_created_to(to),
        }
    }

    fn visit_request(&mut self, request: &SearchRequest) -> Result<bool, Self::Error> {
        for criterion in request.criteria() {
            if !self.visit_criterion(criterion)? {
                return Ok(false);
            }
        }

        Ok(true)
    }
}
