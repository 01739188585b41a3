//! Search request evaluation for in-memory document filtering.
//!
//! [`DocumentEvaluator`] checks a single document against the populated criteria of a
//! [`SearchRequest`], short-circuiting on the first criterion that fails.

use chrono::{DateTime, Utc};

use docstore_core::{
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    query::{SearchRequest, SearchVisitor},
};

pub(crate) struct DocumentEvaluator<'a> {
    document: &'a Document,
}

impl<'a> DocumentEvaluator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub fn evaluate(&mut self, request: &SearchRequest) -> DocumentStoreResult<bool> {
        self.visit_request(request)
    }

    /// Clones every document in `documents` that matches `request`.
    pub fn filter_documents(
        documents: impl IntoIterator<Item = &'a Document>,
        request: &SearchRequest,
    ) -> DocumentStoreResult<Vec<Document>> {
        // Nothing to evaluate, skip the per-document walk.
        if request.is_unconstrained() {
            return Ok(documents.into_iter().cloned().collect());
        }

        let mut matched = Vec::new();

        for document in documents {
            if DocumentEvaluator::new(document).evaluate(request)? {
                matched.push(document.clone());
            }
        }

        Ok(matched)
    }
}

impl<'a> SearchVisitor for DocumentEvaluator<'a> {
    type Error = DocumentStoreError;

    fn visit_title_prefixes(&mut self, prefixes: &[String]) -> Result<bool, Self::Error> {
        Ok(prefixes
            .iter()
            .any(|prefix| self.document.title.starts_with(prefix.as_str())))
    }

    fn visit_contains_contents(&mut self, needles: &[String]) -> Result<bool, Self::Error> {
        Ok(needles
            .iter()
            .any(|needle| self.document.content.contains(needle.as_str())))
    }

    fn visit_author_ids(&mut self, author_ids: &[String]) -> Result<bool, Self::Error> {
        Ok(author_ids
            .iter()
            .any(|author_id| *author_id == self.document.author.id))
    }

    fn visit_created_from(&mut self, from: DateTime<Utc>) -> Result<bool, Self::Error> {
        Ok(self.document.created >= from)
    }

    fn visit_created_to(&mut self, to: DateTime<Utc>) -> Result<bool, Self::Error> {
        Ok(self.document.created <= to)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use docstore_core::document::Author;

    use super::*;

    fn document(title: &str, content: &str, author: &str, created: DateTime<Utc>) -> Document {
        Document::builder()
            .title(title)
            .content(content)
            .author(Author::new(author, author.to_uppercase()))
            .created(created)
            .build()
            .unwrap()
    }

    fn at(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
    }

    fn matches(document: &Document, request: &SearchRequest) -> bool {
        DocumentEvaluator::new(document).evaluate(request).unwrap()
    }

    #[test]
    fn title_prefix_is_case_sensitive_and_any_of() {
        let alpha = document("Alpha", "", "u1", at(2020));

        assert!(matches(&alpha, &SearchRequest::builder().title_prefix("Al").build()));
        assert!(!matches(&alpha, &SearchRequest::builder().title_prefix("al").build()));
        assert!(matches(&alpha, &SearchRequest::builder().title_prefixes(["Be", "Alp"]).build()));
        assert!(matches(&alpha, &SearchRequest::builder().title_prefix("").build()));
    }

    #[test]
    fn content_substring() {
        let doc = document("t", "the quick brown fox", "u1", at(2020));

        assert!(matches(&doc, &SearchRequest::builder().contains_content("brown").build()));
        assert!(matches(&doc, &SearchRequest::builder().contains_contents(["cat", "fox"]).build()));
        assert!(!matches(&doc, &SearchRequest::builder().contains_content("Brown").build()));
    }

    #[test]
    fn author_membership() {
        let doc = document("t", "c", "u2", at(2020));

        assert!(matches(&doc, &SearchRequest::builder().author_ids(["u1", "u2"]).build()));
        assert!(!matches(&doc, &SearchRequest::builder().author_id("u1").build()));
    }

    #[test]
    fn created_bounds_are_inclusive() {
        let from = at(2020);
        let to = at(2021);
        let request = SearchRequest::builder().created_from(from).created_to(to).build();

        assert!(matches(&document("t", "c", "u1", from), &request));
        assert!(matches(&document("t", "c", "u1", to), &request));
        assert!(!matches(&document("t", "c", "u1", from - Duration::nanoseconds(1)), &request));
        assert!(!matches(&document("t", "c", "u1", to + Duration::nanoseconds(1)), &request));
    }

    #[test]
    fn criteria_combine_with_and() {
        let doc = document("Report1", "summary", "u1", at(2020));

        let by_author = |author: &str| {
            SearchRequest::builder()
                .title_prefix("Report")
                .author_id(author)
                .build()
        };

        assert!(matches(&doc, &by_author("u1")));
        assert!(!matches(&doc, &by_author("u2")));
    }

    #[test]
    fn filter_documents_with_unconstrained_request_keeps_all() {
        let docs = vec![document("a", "", "u1", at(2020)), document("b", "", "u2", at(2021))];

        let filtered =
            DocumentEvaluator::filter_documents(&docs, &SearchRequest::default()).unwrap();

        assert_eq!(filtered, docs);
    }
}
