//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential
//! issues. Warnings are never fatal; the browser runs with whatever the
//! merged configuration says.

use std::fmt;

use crate::Config;

/// Viewport class names accepted in configuration.
const VIEWPORT_NAMES: &[&str] = &["default", "small", "very-small"];

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// The configured data file does not exist.
    DataFileMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The page size is zero, which disables pagination entirely.
    ZeroPageSize,
    /// The viewport name is not one of the known classes.
    UnknownViewport {
        /// The unrecognized value.
        value: String,
    },
    /// A scoring constant is negative.
    NegativeScoreConstant {
        /// Name of the constant.
        name: &'static str,
        /// Its configured value.
        value: f32,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataFileMissing { path } => {
                write!(f, "data file does not exist: {path}")
            }
            Self::ZeroPageSize => {
                write!(f, "page_size is 0; no records will be shown")
            }
            Self::UnknownViewport { value } => {
                write!(
                    f,
                    "unknown viewport '{value}' (expected one of: {})",
                    VIEWPORT_NAMES.join(", ")
                )
            }
            Self::NegativeScoreConstant { name, value } => {
                write!(f, "score constant '{name}' is negative ({value})")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - A configured data file that doesn't exist
/// - A zero page size
/// - An unknown viewport class name
/// - Negative scoring constants
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if let Some(ref data) = config.settings.data
        && !data.is_file()
    {
        warnings.push(ConfigWarning::DataFileMissing {
            path: data.display().to_string(),
        });
    }

    if config.settings.page_size == 0 {
        warnings.push(ConfigWarning::ZeroPageSize);
    }

    if !VIEWPORT_NAMES.contains(&config.settings.viewport.as_str()) {
        warnings.push(ConfigWarning::UnknownViewport {
            value: config.settings.viewport.clone(),
        });
    }

    let score = &config.score;
    let constants = [
        ("title_weight", score.title_weight),
        ("definition_weight", score.definition_weight),
        ("list_weight", score.list_weight),
        ("phrase_bonus", score.phrase_bonus),
        ("exact_bonus", score.exact_bonus),
        ("prefix_bonus", score.prefix_bonus),
        ("occurrence_bonus", score.occurrence_bonus),
        ("term_prefix_bonus", score.term_prefix_bonus),
        ("position_cap", score.position_cap),
        ("length_penalty", score.length_penalty),
        ("title_match_bonus", score.title_match_bonus),
    ];
    for (name, value) in constants {
        if value < 0.0 {
            warnings.push(ConfigWarning::NegativeScoreConstant { name, value });
        }
    }

    warnings
}
