//! Configuration: defaults, then a JSON file, then env/flags in the CLI.
//!
//! Every field has a default, so an empty `{}` file (or no file at all) gives
//! the storefront's stock behavior.
//!
//! ```json
//! {
//!   "catalog": "data/catalog.json",
//!   "search_page_size": 12,
//!   "weights": { "fuzzy_word": 10, "similarity_threshold": 0.75 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Browse, GRID_PAGE_SIZE, SEARCH_PAGE_SIZE};
use crate::error::ConfigError;
use crate::scoring::{ScoringWeights, MAX_RULE_WEIGHT};
use crate::search::SearchRanker;

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog export to load when none is given on the command line
    pub catalog: Option<PathBuf>,
    /// Point values for the ranking rules
    pub weights: ScoringWeights,
    /// Items per "load more" step on the category grid
    pub grid_page_size: usize,
    /// Items per "load more" step on the search results page
    pub search_page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            weights: ScoringWeights::default(),
            grid_page_size: GRID_PAGE_SIZE,
            search_page_size: SEARCH_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Load and validate a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::JsonError {
                path: path.to_path_buf(),
                source: e,
            })?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.weights.similarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::OutOfRange {
                field: "weights.similarity_threshold".to_string(),
                value: threshold,
                min: 0.0,
                max: 1.0,
            });
        }
        for (field, value) in self.weights.points() {
            if value > MAX_RULE_WEIGHT {
                return Err(ConfigError::WeightTooLarge {
                    field: format!("weights.{}", field),
                    value,
                    max: MAX_RULE_WEIGHT,
                });
            }
        }
        if self.grid_page_size == 0 {
            return Err(ConfigError::InvalidInteger {
                field: "grid_page_size".to_string(),
                value: self.grid_page_size,
                min: 0,
            });
        }
        if self.search_page_size == 0 {
            return Err(ConfigError::InvalidInteger {
                field: "search_page_size".to_string(),
                value: self.search_page_size,
                min: 0,
            });
        }
        Ok(())
    }

    /// Items a view of `browse` starts with and grows by on "load more".
    pub fn page_size(&self, browse: &Browse) -> usize {
        if browse.is_search() {
            self.search_page_size
        } else {
            self.grid_page_size
        }
    }

    /// A ranker using this config's weights.
    pub fn ranker(&self) -> SearchRanker {
        SearchRanker::new(self.weights)
    }
}
