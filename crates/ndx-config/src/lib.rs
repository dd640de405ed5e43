//! Configuration system for ndx.
//!
//! ndx uses TOML configuration files named `.ndx.toml`. Configuration is
//! resolved by walking up the directory tree from the current working
//! directory, collecting any `.ndx.toml` files found, then loading
//! `~/.ndx.toml` as the global config with lowest precedence. Everything has
//! a default, so running without any configuration file works.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawScoreWeights, RawSettings, parse_config_file, parse_config_str};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default records shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Default viewport class for the pagination window.
pub const DEFAULT_VIEWPORT: &str = "default";

/// Default data file name, looked up in the current directory when no
/// configuration or flag names one.
pub const DEFAULT_DATA_FILENAME: &str = "diagnoses.json";

/// Top-level merged configuration for ndx.
///
/// This represents the fully resolved configuration after merging all
/// discovered `.ndx.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General settings.
    pub settings: Settings,
    /// Relevance scoring constants.
    pub score: ScoreWeights,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant
    /// `.ndx.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence
    /// first. This is primarily useful for testing.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// This outputs the merged configuration in the same format as a
    /// `.ndx.toml` file, making it easy to see the effective configuration.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableConfig {
            settings: self.settings.clone(),
            score: self.score.clone(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// General settings for ndx.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the JSON record collection, resolved to an absolute path
    /// relative to the config file that set it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,
    /// Records shown per page.
    pub page_size: usize,
    /// Viewport class controlling how many page buttons are shown
    /// ("default", "small", or "very-small").
    pub viewport: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: None,
            page_size: DEFAULT_PAGE_SIZE,
            viewport: DEFAULT_VIEWPORT.to_string(),
        }
    }
}

/// Relevance scoring constants.
///
/// Only the relative relationships between these constants are behavioral
/// contracts (title outranks definition outranks list fields; exact beats
/// prefix beats occurrence); the magnitudes are tunable.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Weight multiplier for the title field.
    pub title_weight: f32,
    /// Weight multiplier for the definition field.
    pub definition_weight: f32,
    /// Weight multiplier for each list-valued field.
    pub list_weight: f32,
    /// Bonus when the whole query appears as a substring of the field.
    pub phrase_bonus: f32,
    /// Bonus when the field text equals the query exactly (added on top of
    /// the phrase bonus).
    pub exact_bonus: f32,
    /// Bonus when the field text starts with the query.
    pub prefix_bonus: f32,
    /// Bonus per word-boundary occurrence of a term.
    pub occurrence_bonus: f32,
    /// Bonus when the field text starts with a term.
    pub term_prefix_bonus: f32,
    /// Position bonus cap: a term's first occurrence at offset `i` earns
    /// `max(0, position_cap - i)`.
    pub position_cap: f32,
    /// Penalty per character of field text, discouraging sheer-volume
    /// matches in long enumerable fields.
    pub length_penalty: f32,
    /// Flat bonus added to a record's aggregate score when its title
    /// matched, beyond the title's base weight.
    pub title_match_bonus: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title_weight: 3.0,
            definition_weight: 2.0,
            list_weight: 1.0,
            phrase_bonus: 50.0,
            exact_bonus: 80.0,
            prefix_bonus: 30.0,
            occurrence_bonus: 10.0,
            term_prefix_bonus: 15.0,
            position_cap: 20.0,
            length_penalty: 0.05,
            title_match_bonus: 25.0,
        }
    }
}

/// Internal struct for TOML serialization of the effective configuration.
#[derive(Serialize)]
struct SerializableConfig {
    /// General settings.
    settings: Settings,
    /// Relevance scoring constants.
    score: ScoreWeights,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_defaults() {
        let settings = Settings::default();
        assert!(settings.data.is_none());
        assert_eq!(settings.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(settings.viewport, "default");
    }

    #[test]
    fn score_defaults_keep_relative_order() {
        let score = ScoreWeights::default();
        assert!(score.title_weight > score.definition_weight);
        assert!(score.definition_weight > score.list_weight);
        assert!(score.exact_bonus > score.phrase_bonus);
        assert!(score.phrase_bonus > score.prefix_bonus);
        assert!(score.title_match_bonus > 0.0);
        assert!(score.length_penalty > 0.0 && score.length_penalty < 1.0);
    }

    #[test]
    fn config_default_has_no_root() {
        let config = Config::default();
        assert!(config.config_root.is_none());
    }

    #[test]
    fn settings_to_toml_round_trips() {
        let config = Config::default();
        let toml_str = config.settings_to_toml();

        assert!(toml_str.contains("[settings]"));
        assert!(toml_str.contains("[score]"));
        assert!(toml_str.contains("page_size = 12"));

        let reparsed = parse_config_str(&toml_str, Path::new("effective.toml")).unwrap();
        assert_eq!(reparsed.settings.unwrap().page_size, Some(12));
    }
}
