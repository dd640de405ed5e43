//! The query model.

use serde::Serialize;

/// A free-text query: the raw string plus its derived lowercase terms.
///
/// Terms are whitespace-separated, lowercased, and de-duplicated while
/// preserving first-seen order. An empty or whitespace-only query has no
/// terms and means "no search": category-filtered browsing in title order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    /// The query as typed.
    raw: String,
    /// The whole query, lowercased and trimmed.
    lower: String,
    /// Distinct lowercase terms in first-seen order.
    terms: Vec<String>,
}

impl Query {
    /// Builds a query from raw user input.
    pub fn new(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        let mut terms: Vec<String> = Vec::new();
        for term in lower.split_whitespace() {
            if !terms.iter().any(|t| t == term) {
                terms.push(term.to_string());
            }
        }

        Self {
            raw: raw.to_string(),
            lower,
            terms,
        }
    }

    /// Returns true if this query means "no search".
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The query as typed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The whole query, lowercased and trimmed.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Distinct lowercase terms in first-seen order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}
