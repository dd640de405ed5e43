//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use ndx_config::{Config, DEFAULT_DATA_FILENAME};
use ndx_page::ViewportClass;
use ndx_record::Store;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Cached record store loaded for this invocation.
    store: Option<Store>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            store: None,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file
    /// is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            store: None,
        })
    }

    /// Resolves the data file path from the override flag, configuration,
    /// or the default filename in the current directory, in that order.
    ///
    /// Returns `None` when nothing names a collection.
    pub fn try_data_path(&self, override_path: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = override_path {
            return Some(path.to_path_buf());
        }
        if let Some(ref path) = self.config.settings.data {
            return Some(path.clone());
        }

        let fallback = self.cwd.join(DEFAULT_DATA_FILENAME);
        fallback.is_file().then_some(fallback)
    }

    /// Resolves the data file path or exits with a consistent error.
    pub fn data_path(&self, override_path: Option<&Path>) -> Result<PathBuf, ExitCode> {
        match self.try_data_path(override_path) {
            Some(path) => Ok(path),
            None => {
                eprintln!("error: no record collection configured");
                eprintln!(
                    "Pass --data <FILE>, set 'data' in .ndx.toml, or place {DEFAULT_DATA_FILENAME} in the current directory."
                );
                Err(ExitCode::FAILURE)
            }
        }
    }

    /// Returns the record store, loading it on first use.
    pub fn store(&mut self, override_path: Option<&Path>) -> Result<&Store, ExitCode> {
        if self.store.is_none() {
            let path = self.data_path(override_path)?;
            let store = match Store::load(&path) {
                Ok(store) => store,
                Err(e) => {
                    eprintln!("error: failed to load records: {e}");
                    return Err(ExitCode::FAILURE);
                }
            };
            self.store = Some(store);
        }

        Ok(self.store.as_ref().expect("store just set"))
    }

    /// Resolves the effective viewport class, preferring the CLI override.
    ///
    /// An unknown viewport name in configuration falls back to the default
    /// class; `ndx status` reports it as a warning.
    pub fn viewport(&self, override_viewport: Option<ViewportClass>) -> ViewportClass {
        override_viewport.unwrap_or_else(|| {
            self.config
                .settings
                .viewport
                .parse()
                .unwrap_or_default()
        })
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
