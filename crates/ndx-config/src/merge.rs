//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving the data path.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::{
    Config, ScoreWeights, Settings,
    parse::{RawConfig, RawScoreWeights, RawSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first
/// (closest to CWD), lowest precedence last (global config). For every
/// setting, the first file that defines it wins. The `data` path is resolved
/// against the directory of the file that defined it.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    if configs.is_empty() {
        return Config::default();
    }

    let settings = merge_settings(configs);
    let score = merge_score(configs);
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);

    Config {
        settings,
        score,
        config_root,
    }
}

/// Merges general settings, taking the first defined value for each field.
fn merge_settings(configs: &[ParsedConfig]) -> Settings {
    let mut result = Settings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref settings) = parsed.config.settings {
            apply_raw_settings(&mut result, settings, &parsed.path);
        }
    }

    result
}

/// Applies raw settings to result, overwriting any present values.
fn apply_raw_settings(result: &mut Settings, raw: &RawSettings, config_path: &Path) {
    if let Some(ref v) = raw.data {
        result.data = Some(resolve_data_path(v, config_path));
    }
    if let Some(v) = raw.page_size {
        result.page_size = v;
    }
    if let Some(ref v) = raw.viewport {
        result.viewport = v.clone();
    }
}

/// Resolves a data path from a config file.
///
/// `~/` expands to the home directory; relative paths are resolved against
/// the directory containing the config file that set them.
fn resolve_data_path(value: &str, config_path: &Path) -> PathBuf {
    if let Some(rest) = value.strip_prefix("~/")
        && let Some(dirs) = BaseDirs::new()
    {
        return dirs.home_dir().join(rest);
    }

    let path = Path::new(value);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    match config_path.parent() {
        Some(parent) => parent.join(path),
        None => path.to_path_buf(),
    }
}

/// Merges scoring constants, taking the first defined value for each field.
fn merge_score(configs: &[ParsedConfig]) -> ScoreWeights {
    let mut result = ScoreWeights::default();

    for parsed in configs.iter().rev() {
        if let Some(ref score) = parsed.config.score {
            apply_raw_score(&mut result, score);
        }
    }

    result
}

/// Applies raw scoring constants to result.
fn apply_raw_score(result: &mut ScoreWeights, raw: &RawScoreWeights) {
    if let Some(v) = raw.title_weight {
        result.title_weight = v;
    }
    if let Some(v) = raw.definition_weight {
        result.definition_weight = v;
    }
    if let Some(v) = raw.list_weight {
        result.list_weight = v;
    }
    if let Some(v) = raw.phrase_bonus {
        result.phrase_bonus = v;
    }
    if let Some(v) = raw.exact_bonus {
        result.exact_bonus = v;
    }
    if let Some(v) = raw.prefix_bonus {
        result.prefix_bonus = v;
    }
    if let Some(v) = raw.occurrence_bonus {
        result.occurrence_bonus = v;
    }
    if let Some(v) = raw.term_prefix_bonus {
        result.term_prefix_bonus = v;
    }
    if let Some(v) = raw.position_cap {
        result.position_cap = v;
    }
    if let Some(v) = raw.length_penalty {
        result.length_penalty = v;
    }
    if let Some(v) = raw.title_match_bonus {
        result.title_match_bonus = v;
    }
}
