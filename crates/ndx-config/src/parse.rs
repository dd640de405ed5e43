//! Configuration file parsing.
//!
//! Parses individual `.ndx.toml` files into intermediate `RawConfig`
//! structures that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// General settings section.
    pub settings: Option<RawSettings>,
    /// Scoring constants section.
    pub score: Option<RawScoreWeights>,
}

/// Raw general settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// Path to the JSON record collection, relative to this config file.
    pub data: Option<String>,
    /// Records shown per page.
    pub page_size: Option<usize>,
    /// Viewport class for the pagination window.
    pub viewport: Option<String>,
}

/// Raw scoring constants.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawScoreWeights {
    /// Weight multiplier for the title field.
    pub title_weight: Option<f32>,
    /// Weight multiplier for the definition field.
    pub definition_weight: Option<f32>,
    /// Weight multiplier for each list-valued field.
    pub list_weight: Option<f32>,
    /// Bonus when the whole query appears as a substring of the field.
    pub phrase_bonus: Option<f32>,
    /// Bonus when the field text equals the query exactly.
    pub exact_bonus: Option<f32>,
    /// Bonus when the field text starts with the query.
    pub prefix_bonus: Option<f32>,
    /// Bonus per word-boundary occurrence of a term.
    pub occurrence_bonus: Option<f32>,
    /// Bonus when the field text starts with a term.
    pub term_prefix_bonus: Option<f32>,
    /// Position bonus cap.
    pub position_cap: Option<f32>,
    /// Penalty per character of field text.
    pub length_penalty: Option<f32>,
    /// Flat aggregate bonus for title matches.
    pub title_match_bonus: Option<f32>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// This is used during discovery to stop traversal at root configs.
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
