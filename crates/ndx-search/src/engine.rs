//! The search engine: filter, score, aggregate, order.

use std::cmp::Ordering;

use ndx_config::ScoreWeights;
use ndx_record::{CategoryFilter, Field, Record, Store};
use serde::Serialize;

use crate::{Query, score::score_field};

/// Per-query match metadata for one record.
///
/// Built fresh on every search; never attached to the store's records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchAnnotation {
    /// Aggregate score across all matched fields.
    pub score: f32,
    /// Fields that matched, in scoring order, each at most once.
    pub matched_fields: Vec<Field>,
    /// The raw query that produced this annotation.
    pub query: String,
}

/// One search result: a record reference plus optional match metadata.
///
/// `annotation` is present exactly when the search ran with a non-empty
/// query; empty-query browsing returns hits without annotations.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit<'s> {
    /// Position of the record in the store.
    pub index: usize,
    /// The matched record.
    pub record: &'s Record,
    /// Match metadata for the query that produced this hit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<MatchAnnotation>,
}

impl SearchHit<'_> {
    /// Returns the aggregate score, or 0 for unannotated hits.
    pub fn score(&self) -> f32 {
        self.annotation.as_ref().map_or(0.0, |a| a.score)
    }
}

/// Every searchable field paired with its weight under the given constants.
///
/// The order is the fixed scoring order: title first, definition next, then
/// the list fields at equal weight.
fn weighted_fields(weights: &ScoreWeights) -> [(Field, f32); 9] {
    [
        (Field::Title, weights.title_weight),
        (Field::Definition, weights.definition_weight),
        (Field::Characteristics, weights.list_weight),
        (Field::RelatedFactors, weights.list_weight),
        (Field::RiskFactors, weights.list_weight),
        (Field::AssociatedConditions, weights.list_weight),
        (Field::AtRiskPopulation, weights.list_weight),
        (Field::Outcomes, weights.list_weight),
        (Field::Interventions, weights.list_weight),
    ]
}

/// Searches the store for records matching a category filter and query.
///
/// With an empty query, every category-filtered record is returned without
/// annotations, ordered by case-insensitive title. With a non-empty query, a
/// record is a hit when *any* of its fields matches (each field gated on all
/// terms occurring in it); hits carry a fresh [`MatchAnnotation`] and are
/// ordered by aggregate score descending, ties broken by store order.
///
/// An empty result list is valid output, not an error.
pub fn search<'s>(
    store: &'s Store,
    filter: CategoryFilter,
    query: &Query,
    weights: &ScoreWeights,
) -> Vec<SearchHit<'s>> {
    let filtered = store
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.accepts(record.category()));

    if query.is_empty() {
        let mut hits: Vec<SearchHit<'s>> = filtered
            .map(|(index, record)| SearchHit {
                index,
                record,
                annotation: None,
            })
            .collect();
        hits.sort_by_cached_key(|hit| hit.record.title.to_lowercase());
        return hits;
    }

    let mut hits: Vec<SearchHit<'s>> = filtered
        .filter_map(|(index, record)| {
            score_record(record, query, weights).map(|annotation| SearchHit {
                index,
                record,
                annotation: Some(annotation),
            })
        })
        .collect();

    // Stable sort: ties keep store order, which makes results deterministic
    hits.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(Ordering::Equal)
    });

    hits
}

/// Scores one record across all weighted fields.
///
/// Returns `None` when no field matched. The aggregate is the sum of matched
/// field scores plus a flat title bonus when the title itself matched.
fn score_record(record: &Record, query: &Query, weights: &ScoreWeights) -> Option<MatchAnnotation> {
    let mut score = 0.0;
    let mut matched_fields = Vec::new();

    for (field, weight) in weighted_fields(weights) {
        let text = record.field_text(field);
        let outcome = score_field(text.as_deref(), query, weight, weights);
        if outcome.matched {
            score += outcome.score;
            matched_fields.push(field);
        }
    }

    if matched_fields.is_empty() {
        return None;
    }

    if matched_fields.contains(&Field::Title) {
        score += weights.title_match_bonus;
    }

    Some(MatchAnnotation {
        score,
        matched_fields,
        query: query.raw().to_string(),
    })
}
