//! Configuration management for bizquery.
//!
//! Configuration is an optional YAML file, `bizquery.yaml` in the working
//! directory unless another path is given. Every setting can be overridden on
//! the command line.
//!
//! ```yaml
//! data-file: data/yelp.jsonl
//! limit: 25
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "bizquery.yaml";

/// Default maximum number of records printed by `filter`
pub const DEFAULT_LIMIT: usize = 50;

/// Configuration file structure for bizquery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct QueryConfig {
    /// Path to the JSONL dataset, relative to the working directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Maximum number of records printed when listing
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl QueryConfig {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Resolve the configuration for a run.
    ///
    /// With an explicit path the file must exist. Without one, `bizquery.yaml`
    /// in `working_dir` is used when present and defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] for a missing explicit file, or any
    /// error from [`QueryConfig::load`].
    pub async fn load_or_default(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !fs::try_exists(path).await? {
                return Err(Error::ConfigNotFound(path.to_path_buf()));
            }
            tracing::debug!(path = %path.display(), "Loading configuration");
            return Self::load(path).await;
        }

        let default_path = working_dir.join(CONFIG_FILE_NAME);
        if fs::try_exists(&default_path).await? {
            tracing::debug!(path = %default_path.display(), "Loading configuration");
            Self::load(&default_path).await
        } else {
            tracing::debug!("No configuration file, using defaults");
            Ok(Self::default())
        }
    }
}
