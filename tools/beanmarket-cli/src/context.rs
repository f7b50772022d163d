//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use beanmarket_commerce::catalog::{sample_catalog, CatalogItem};
use beanmarket_commerce::Storefront;

use crate::catalog_file::CatalogFile;
use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or by searching upward.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Catalog items from the configured file, or the built-in sample.
    ///
    /// Relative catalog paths resolve against the config file's directory.
    pub fn catalog_items(&self) -> Result<Vec<CatalogItem>> {
        let Some(path) = &self.config.catalog.path else {
            return Ok(sample_catalog());
        };

        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(self.cwd.as_path());
        let path = base.join(path);

        tracing::debug!(path = %path.display(), "loading catalog file");
        CatalogFile::load(&path)?.into_items(self.config.session.currency)
    }

    /// Open a storefront session over the configured catalog.
    pub fn open_storefront(&self) -> Result<Storefront> {
        let items = self.catalog_items()?;
        Storefront::open(self.config.new_session(), items).context("Failed to open storefront")
    }
}

/// Find a config file in `start` or any parent directory.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}
