//! The canonical record type and its searchable fields.

use std::{borrow::Cow, fmt};

use serde::Serialize;

use crate::Category;

/// A searchable field of a [`Record`].
///
/// The order of [`Field::ALL`] is the fixed order the search engine scores
/// fields in and the order matched-field lists are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The diagnosis title.
    Title,
    /// The free-text definition.
    Definition,
    /// Defining characteristics.
    Characteristics,
    /// Related factors.
    RelatedFactors,
    /// Risk factors.
    RiskFactors,
    /// Associated conditions.
    AssociatedConditions,
    /// At-risk population.
    AtRiskPopulation,
    /// Suggested outcomes.
    Outcomes,
    /// Suggested interventions.
    Interventions,
}

impl Field {
    /// All searchable fields in scoring order: title first, definition next,
    /// then the list-valued fields.
    pub const ALL: [Self; 9] = [
        Self::Title,
        Self::Definition,
        Self::Characteristics,
        Self::RelatedFactors,
        Self::RiskFactors,
        Self::AssociatedConditions,
        Self::AtRiskPopulation,
        Self::Outcomes,
        Self::Interventions,
    ];

    /// The list-valued fields, in scoring order.
    pub const LISTS: [Self; 7] = [
        Self::Characteristics,
        Self::RelatedFactors,
        Self::RiskFactors,
        Self::AssociatedConditions,
        Self::AtRiskPopulation,
        Self::Outcomes,
        Self::Interventions,
    ];

    /// Returns the human-readable section label for this field.
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Definition => "Definition",
            Self::Characteristics => "Characteristics",
            Self::RelatedFactors => "Related Factors",
            Self::RiskFactors => "Risk Factors",
            Self::AssociatedConditions => "Associated Conditions",
            Self::AtRiskPopulation => "At Risk Population",
            Self::Outcomes => "Outcomes",
            Self::Interventions => "Interventions",
        }
    }

    /// Returns the canonical snake_case key for this field.
    pub fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Definition => "definition",
            Self::Characteristics => "characteristics",
            Self::RelatedFactors => "related_factors",
            Self::RiskFactors => "risk_factors",
            Self::AssociatedConditions => "associated_conditions",
            Self::AtRiskPopulation => "at_risk_population",
            Self::Outcomes => "outcomes",
            Self::Interventions => "interventions",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The separator used when a list field is flattened to text for scoring
/// and display.
pub(crate) const LIST_SEPARATOR: &str = ", ";

/// One reference entry: a title, an optional definition, an optional source
/// page number, and the list-valued attribute fields.
///
/// Records are created once by the loader and never mutated. Absent fields
/// are represented as `None` or an empty list, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// The diagnosis title. Required.
    pub title: String,
    /// The free-text definition, if present in the source data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// The page number of the entry in the printed reference, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Defining characteristics.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub characteristics: Vec<String>,
    /// Related factors.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_factors: Vec<String>,
    /// Risk factors.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub risk_factors: Vec<String>,
    /// Associated conditions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub associated_conditions: Vec<String>,
    /// At-risk population.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub at_risk_population: Vec<String>,
    /// Suggested outcomes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outcomes: Vec<String>,
    /// Suggested interventions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interventions: Vec<String>,
}

impl Record {
    /// Creates a record with only a title; every other field empty.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            definition: None,
            page: None,
            characteristics: Vec::new(),
            related_factors: Vec::new(),
            risk_factors: Vec::new(),
            associated_conditions: Vec::new(),
            at_risk_population: Vec::new(),
            outcomes: Vec::new(),
            interventions: Vec::new(),
        }
    }

    /// Returns the category this record belongs to.
    pub fn category(&self) -> Category {
        Category::classify(&self.title)
    }

    /// Returns the entries of a list-valued field.
    ///
    /// Returns an empty slice for `Title` and `Definition`.
    pub fn list(&self, field: Field) -> &[String] {
        match field {
            Field::Title | Field::Definition => &[],
            Field::Characteristics => &self.characteristics,
            Field::RelatedFactors => &self.related_factors,
            Field::RiskFactors => &self.risk_factors,
            Field::AssociatedConditions => &self.associated_conditions,
            Field::AtRiskPopulation => &self.at_risk_population,
            Field::Outcomes => &self.outcomes,
            Field::Interventions => &self.interventions,
        }
    }

    /// Returns the flat text of a field for scoring and display.
    ///
    /// List fields are joined with [`LIST_SEPARATOR`]. Returns `None` when
    /// the field has no content.
    pub fn field_text(&self, field: Field) -> Option<Cow<'_, str>> {
        match field {
            Field::Title => Some(Cow::Borrowed(self.title.as_str())),
            Field::Definition => self.definition.as_deref().map(Cow::Borrowed),
            _ => {
                let list = self.list(field);
                if list.is_empty() {
                    None
                } else {
                    Some(Cow::Owned(list.join(LIST_SEPARATOR)))
                }
            }
        }
    }
}
