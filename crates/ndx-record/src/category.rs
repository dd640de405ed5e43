//! Diagnosis categories derived from title prefixes.
//!
//! Every record belongs to exactly one category, determined by a
//! case-insensitive prefix test on its title. Classification is a pure
//! function of the title and never changes after load.

use std::{fmt, str::FromStr};

use serde::Serialize;

/// The category of a diagnosis, derived from its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Titles starting with "risk for".
    Risk,
    /// Titles starting with "readiness for enhanced".
    Readiness,
    /// Everything else: an actual (problem-focused) diagnosis.
    Actual,
}

impl Category {
    /// Classifies a title into its category.
    ///
    /// Total and case-insensitive: every title maps to exactly one category.
    pub fn classify(title: &str) -> Self {
        let lower = title.to_lowercase();
        if lower.starts_with("risk for") {
            Self::Risk
        } else if lower.starts_with("readiness for enhanced") {
            Self::Readiness
        } else {
            Self::Actual
        }
    }

    /// Returns the lowercase name used in CLI arguments and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Risk => "risk",
            Self::Readiness => "readiness",
            Self::Actual => "actual",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category filter as selected by the user: a single category or all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Pass every record through.
    #[default]
    All,
    /// Only risk diagnoses.
    Risk,
    /// Only readiness diagnoses.
    Readiness,
    /// Only actual diagnoses.
    Actual,
}

impl CategoryFilter {
    /// Returns true if a record of the given category passes this filter.
    pub fn accepts(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Risk => category == Category::Risk,
            Self::Readiness => category == Category::Readiness,
            Self::Actual => category == Category::Actual,
        }
    }

    /// Returns the lowercase name used in CLI arguments and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Risk => "risk",
            Self::Readiness => "readiness",
            Self::Actual => "actual",
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "risk" => Ok(Self::Risk),
            "readiness" => Ok(Self::Readiness),
            "actual" => Ok(Self::Actual),
            other => Err(format!(
                "unknown category '{other}' (expected all, risk, readiness, or actual)"
            )),
        }
    }
}
