//! Configuration for the migration pipeline.
//!
//! Configuration is stored in TOML format (`mdxgen.toml`). Every field has a
//! default, so a missing file is not an error; a malformed file is.
//!
//! ## Example Configuration File
//!
//! ```toml
//! page_size = 10
//! recent_count = 5
//! author = "Jane Doe"
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of posts per feed page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default capacity of the recent-posts selector.
pub const DEFAULT_RECENT_COUNT: usize = 5;

/// Pipeline configuration.
///
/// Loaded from an `mdxgen.toml` next to the input tree (or an explicit
/// `--config` path), falling back to defaults when no file exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of posts per generated feed page.
    pub page_size: usize,

    /// How many most-recently-updated posts the recent feed retains.
    ///
    /// Must be at least 2; the bounded selector refuses smaller capacities.
    pub recent_count: usize,

    /// Author used for posts whose front matter names none.
    pub author: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            recent_count: DEFAULT_RECENT_COUNT,
            author: "anonymous".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or return defaults if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, contains
    /// invalid TOML, or holds out-of-range values.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;
        Ok(())
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".into()));
        }
        if self.recent_count <= 1 {
            return Err(Error::Config("recent_count must be at least 2".into()));
        }
        Ok(())
    }
}
