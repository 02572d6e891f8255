//! Application context for CLI command execution.
//!
//! [`App`] resolves the configuration, finds the dataset and loads it into a
//! seed [`QueryChain`] that commands then filter.
//!
//! # Example
//!
//! ```no_run
//! use bizquery::app::App;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let app = App::load(Some(Path::new("yelp.jsonl")), None, Path::new(".")).await?;
//!     println!("{} businesses", app.chain().len());
//!     Ok(())
//! }
//! ```

use crate::config::QueryConfig;
use crate::error::{Error, Result};
use crate::loader::load_businesses;
use crate::query::QueryChain;
use bizquery_jsonl::Warning;
use std::path::{Path, PathBuf};

/// Application context for CLI operations.
#[derive(Debug)]
pub struct App {
    /// Every business in the dataset
    chain: QueryChain,

    /// Resolved configuration
    config: QueryConfig,

    /// Path the dataset was loaded from
    data_file: PathBuf,

    /// Lines skipped while loading
    warnings: Vec<Warning>,
}

impl App {
    /// Load configuration and dataset.
    ///
    /// The dataset is `data_file` when given, otherwise the configured
    /// `data-file`. Relative paths are resolved against `working_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration cannot be loaded
    /// - No dataset is given anywhere
    /// - The dataset cannot be read
    pub async fn load(
        data_file: Option<&Path>,
        config_file: Option<&Path>,
        working_dir: &Path,
    ) -> Result<Self> {
        let config = QueryConfig::load_or_default(config_file, working_dir).await?;

        let data_file = data_file
            .map(Path::to_path_buf)
            .or_else(|| config.data_file.clone())
            .ok_or(Error::NoDataset)?;
        let data_file = working_dir.join(data_file);

        let (chain, warnings) = load_businesses(&data_file).await?;

        Ok(Self {
            chain,
            config,
            data_file,
            warnings,
        })
    }

    /// The seed chain holding every loaded business.
    pub fn chain(&self) -> &QueryChain {
        &self.chain
    }

    /// The resolved configuration.
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// The dataset path.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Lines skipped while loading the dataset.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}
