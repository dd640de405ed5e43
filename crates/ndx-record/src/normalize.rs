//! Normalization of raw JSON records into the canonical schema.
//!
//! The source data accumulated several key spellings over time (`diagnosis`
//! vs `title`, `associated_condition` vs `associated_conditions`,
//! `suggested_noc_outcomes` vs `outcomes`, ...) and sometimes stores a list
//! field as a single string. This module accepts all of those shapes and
//! produces [`Record`]s with the canonical field set, so the search core
//! only ever sees one schema.

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::{Record, StoreError};

/// A record as it appears in the source JSON, with every historical key
/// variant accepted and every field optional.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawRecord {
    /// The title. `diagnosis` is the oldest spelling, `name` a brief one.
    #[serde(alias = "diagnosis", alias = "name")]
    title: Option<String>,
    /// The definition text.
    definition: Option<String>,
    /// The source page number.
    #[serde(alias = "page_num")]
    page: Option<u32>,
    /// Defining characteristics.
    #[serde(alias = "defining_characteristics")]
    #[serde_as(as = "OneOrMany<_>")]
    characteristics: Vec<String>,
    /// Related factors.
    #[serde(alias = "related_factor")]
    #[serde_as(as = "OneOrMany<_>")]
    related_factors: Vec<String>,
    /// Risk factors.
    #[serde(alias = "risk_factor")]
    #[serde_as(as = "OneOrMany<_>")]
    risk_factors: Vec<String>,
    /// Associated conditions.
    #[serde(alias = "associated_condition")]
    #[serde_as(as = "OneOrMany<_>")]
    associated_conditions: Vec<String>,
    /// At-risk population.
    #[serde(alias = "at_risk_populations")]
    #[serde_as(as = "OneOrMany<_>")]
    at_risk_population: Vec<String>,
    /// Suggested outcomes.
    #[serde(alias = "suggested_noc_outcomes", alias = "noc_outcomes")]
    #[serde_as(as = "OneOrMany<_>")]
    outcomes: Vec<String>,
    /// Suggested interventions.
    #[serde(alias = "suggested_nic_interventions", alias = "nic_interventions")]
    #[serde_as(as = "OneOrMany<_>")]
    interventions: Vec<String>,
}

impl RawRecord {
    /// Converts a raw record into the canonical form.
    ///
    /// `index` is the record's position in the source array, used for error
    /// reporting when the title is missing. Whitespace-only titles count as
    /// missing; list entries are kept verbatim.
    pub(crate) fn normalize(self, index: usize) -> Result<Record, StoreError> {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or(StoreError::MissingTitle { index })?;

        Ok(Record {
            title,
            definition: self.definition.filter(|d| !d.trim().is_empty()),
            page: self.page,
            characteristics: self.characteristics,
            related_factors: self.related_factors,
            risk_factors: self.risk_factors,
            associated_conditions: self.associated_conditions,
            at_risk_population: self.at_risk_population,
            outcomes: self.outcomes,
            interventions: self.interventions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parses a single raw record from a JSON literal.
    fn raw(json: &str) -> RawRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn accepts_historical_title_key() {
        let record = raw(r#"{"diagnosis": "Acute Pain"}"#).normalize(0).unwrap();
        assert_eq!(record.title, "Acute Pain");
    }

    #[test]
    fn accepts_canonical_title_key() {
        let record = raw(r#"{"title": "Acute Pain"}"#).normalize(0).unwrap();
        assert_eq!(record.title, "Acute Pain");
    }

    #[test]
    fn accepts_historical_list_keys() {
        let record = raw(
            r#"{
                "diagnosis": "Risk for Falls",
                "defining_characteristics": ["unsteady gait"],
                "associated_condition": ["anemia"],
                "suggested_noc_outcomes": ["fall prevention"],
                "suggested_nic_interventions": ["environment management"],
                "page_num": 219
            }"#,
        )
        .normalize(0)
        .unwrap();

        assert_eq!(record.characteristics, vec!["unsteady gait"]);
        assert_eq!(record.associated_conditions, vec!["anemia"]);
        assert_eq!(record.outcomes, vec!["fall prevention"]);
        assert_eq!(record.interventions, vec!["environment management"]);
        assert_eq!(record.page, Some(219));
    }

    #[test]
    fn accepts_string_where_list_expected() {
        let record = raw(r#"{"diagnosis": "Anxiety", "risk_factors": "stressors"}"#)
            .normalize(0)
            .unwrap();
        assert_eq!(record.risk_factors, vec!["stressors"]);
    }

    #[test]
    fn missing_title_reports_index() {
        let err = raw(r#"{"definition": "orphaned"}"#).normalize(7).unwrap_err();
        assert!(matches!(err, StoreError::MissingTitle { index: 7 }));
    }

    #[test]
    fn blank_title_counts_as_missing() {
        let err = raw(r#"{"title": "   "}"#).normalize(3).unwrap_err();
        assert!(matches!(err, StoreError::MissingTitle { index: 3 }));
    }

    #[test]
    fn blank_definition_normalizes_to_none() {
        let record = raw(r#"{"title": "Anxiety", "definition": ""}"#)
            .normalize(0)
            .unwrap();
        assert!(record.definition.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let record = raw(r#"{"title": "Anxiety", "legacy_flag": true}"#)
            .normalize(0)
            .unwrap();
        assert_eq!(record.title, "Anxiety");
    }
}
