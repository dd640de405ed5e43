//! Match highlighting and terminal colors for ndx.
//!
//! This crate provides the [`Annotator`] that wraps query-term occurrences
//! in display text with marker strings, plus styled terminal output helpers
//! for headers and status messages.
//!
//! Annotation is idempotent: text inside an existing marked span is never
//! wrapped again, so re-annotating output (or annotating with a superset
//! query) cannot double-mark anything.

#![warn(missing_docs)]

use regex::{Regex, RegexBuilder};

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Green text (for success).
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Red text (for errors).
    pub const RED: &str = "\x1b[31m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reverse video on (for highlighted matches).
    pub const MARK: &str = "\x1b[7m";
    /// Reverse video off.
    pub const UNMARK: &str = "\x1b[27m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Minimum term length considered for highlighting; shorter terms produce
/// noisy single-letter marks.
const MIN_TERM_CHARS: usize = 2;

/// Wraps query-term occurrences in text with begin/end markers.
pub struct Annotator {
    /// Marker inserted before each match.
    open: String,
    /// Marker inserted after each match.
    close: String,
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator {
    /// Creates an annotator using ANSI reverse-video markers.
    pub fn new() -> Self {
        Self::with_markers(colors::MARK, colors::UNMARK)
    }

    /// Creates an annotator with custom markers.
    pub fn with_markers(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Marks every occurrence of the query's terms in `text`.
    ///
    /// Terms shorter than two characters are ignored, and terms are applied
    /// longest-first so a short term can't split a longer term's match.
    /// Matching is case-insensitive; the original casing is preserved.
    /// Already-marked spans are left untouched, making repeated annotation
    /// a no-op.
    pub fn annotate(&self, text: &str, query: &str) -> String {
        let lower = query.to_lowercase();
        let mut terms: Vec<&str> = Vec::new();
        for term in lower.split_whitespace() {
            if term.chars().count() >= MIN_TERM_CHARS && !terms.contains(&term) {
                terms.push(term);
            }
        }
        if terms.is_empty() {
            return text.to_string();
        }

        // Longest first, so "pain" can't break up a "painful" match
        terms.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut result = text.to_string();
        for term in terms {
            result = self.mark_term(&result, term);
        }
        result
    }

    /// Marks one term throughout `text`, skipping existing marked spans.
    fn mark_term(&self, text: &str, term: &str) -> String {
        let regex = term_regex(term);
        let mut result = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(open_at) = rest.find(self.open.as_str()) {
            let (outside, marked) = rest.split_at(open_at);
            self.mark_segment(&mut result, outside, &regex);

            // Copy the marked span through its close marker verbatim
            let span_end = marked[self.open.len()..]
                .find(self.close.as_str())
                .map_or(marked.len(), |at| self.open.len() + at + self.close.len());
            result.push_str(&marked[..span_end]);
            rest = &marked[span_end..];
        }

        self.mark_segment(&mut result, rest, &regex);
        result
    }

    /// Appends one unmarked segment to `result`, wrapping term matches.
    fn mark_segment(&self, result: &mut String, segment: &str, regex: &Regex) {
        let mut last = 0;
        for found in regex.find_iter(segment) {
            result.push_str(&segment[last..found.start()]);
            result.push_str(&self.open);
            result.push_str(found.as_str());
            result.push_str(&self.close);
            last = found.end();
        }
        result.push_str(&segment[last..]);
    }
}

/// Builds the case-insensitive literal matcher for one term.
fn term_regex(term: &str) -> Regex {
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .expect("escaped literal is a valid pattern")
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Formats text as a success message (green).
pub fn success(text: &str) -> String {
    format!("{}{}{}", colors::GREEN, text, colors::RESET)
}
