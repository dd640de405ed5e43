//! Per-field relevance scoring.
//!
//! A field only counts as matched when *every* query term occurs in it
//! (conjunctive gate); this keeps one popular term from surfacing irrelevant
//! records on multi-word queries. Matched fields accumulate independent,
//! additive bonuses, all multiplied by the field's weight, minus a small
//! penalty proportional to field length so long enumerable fields don't win
//! by sheer volume.

use ndx_config::ScoreWeights;

use crate::Query;

/// The outcome of scoring one field against a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldScore {
    /// Whether every query term occurred in the field.
    pub matched: bool,
    /// The weighted score; 0 when unmatched.
    pub score: f32,
}

impl FieldScore {
    /// The no-match outcome.
    const NONE: Self = Self {
        matched: false,
        score: 0.0,
    };
}

/// Scores one field of a record against a query.
///
/// `text` is the field's flat content (`None` when the field is absent) and
/// `weight` the field's multiplier. The bonuses, in order:
///
/// - whole query occurs as a substring: `phrase_bonus`
/// - field text equals the query exactly: `exact_bonus`, added on top of
///   the phrase bonus
/// - field text starts with the query: `prefix_bonus`
/// - per distinct term: word-boundary occurrences × `occurrence_bonus`,
///   `term_prefix_bonus` when the field starts with the term, and an
///   earliness bonus of `max(0, position_cap - first_occurrence)`
/// - minus `length × length_penalty`
pub fn score_field(
    text: Option<&str>,
    query: &Query,
    weight: f32,
    weights: &ScoreWeights,
) -> FieldScore {
    let Some(text) = text else {
        return FieldScore::NONE;
    };
    if text.is_empty() || query.is_empty() {
        return FieldScore::NONE;
    }

    let lower = text.to_lowercase();

    // Conjunctive gate: every term must occur somewhere in the field.
    if !query.terms().iter().all(|term| lower.contains(term.as_str())) {
        return FieldScore::NONE;
    }

    let mut score = 0.0;
    let raw_query = query.lower();

    if lower.contains(raw_query) {
        score += weights.phrase_bonus * weight;
    }
    if lower == raw_query {
        score += weights.exact_bonus * weight;
    }
    if lower.starts_with(raw_query) {
        score += weights.prefix_bonus * weight;
    }

    for term in query.terms() {
        let occurrences = word_boundary_count(&lower, term);
        score += occurrences as f32 * weights.occurrence_bonus * weight;

        if lower.starts_with(term.as_str()) {
            score += weights.term_prefix_bonus * weight;
        }

        if let Some(index) = lower.find(term.as_str()) {
            let position = lower[..index].chars().count() as f32;
            score += (weights.position_cap - position).max(0.0) * weight;
        }
    }

    score -= lower.chars().count() as f32 * weights.length_penalty * weight;

    FieldScore {
        matched: true,
        score,
    }
}

/// Counts occurrences of `term` in `text` that fall on word boundaries.
///
/// A boundary is the start/end of the text or a non-alphanumeric character.
/// Occurrences do not overlap.
fn word_boundary_count(text: &str, term: &str) -> usize {
    if term.is_empty() {
        return 0;
    }

    text.match_indices(term)
        .filter(|(index, matched)| {
            let before = text[..*index].chars().next_back();
            let after = text[index + matched.len()..].chars().next();
            before.is_none_or(|c| !c.is_alphanumeric())
                && after.is_none_or(|c| !c.is_alphanumeric())
        })
        .count()
}
