use std::{fs, path::Path};

use serde::Deserialize;

use crate::interpreter::evaluator::core::DEFAULT_MAX_DEPTH;

/// Default number of history entries kept by the calculator front end.
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Calculator settings, loadable from a JSON file.
///
/// Every field has a default, and the file may specify any subset of them.
/// A missing or malformed file never stops the calculator; it falls back to
/// the defaults and leaves a note in the log.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of entries kept in the calculation history.
    pub max_history: usize,
    /// Maximum expression nesting depth accepted by the evaluator.
    pub max_depth:   usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_history: DEFAULT_MAX_HISTORY,
               max_depth:   DEFAULT_MAX_DEPTH, }
    }
}

impl Config {
    /// Loads settings from a JSON file, falling back to defaults.
    ///
    /// Read or parse failures are logged and swallowed; the calculator
    /// should come up with sane settings no matter what is on disk.
    ///
    /// # Example
    /// ```
    /// use std::path::Path;
    ///
    /// use safecalc::config::Config;
    ///
    /// let config = Config::load_or_default(Path::new("does-not-exist.json"));
    /// assert_eq!(config.max_history, safecalc::config::DEFAULT_MAX_HISTORY);
    /// ```
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring malformed config file {}: {e}", path.display());
                    Self::default()
                },
            },
            Err(e) => {
                log::debug!("no config file at {}: {e}", path.display());
                Self::default()
            },
        }
    }
}
