use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::{args::CommonArgs, logging::init_logging};
use crate::{
    config::{ConfigLoadResult, load_config},
    core::{CatalogHandle, LoadWarning, Translator, load_catalog_with},
};

/// Everything a catalog command needs: resolved settings and the loaded
/// catalog.
pub struct CliContext {
    pub handle: CatalogHandle,
    pub language: String,
    pub catalog_root: PathBuf,
    pub warnings: Vec<LoadWarning>,
    /// Number of catalog files read.
    pub files_loaded: usize,
    pub verbose: bool,
}

impl CliContext {
    /// Resolve config (flags override the config file) and load the catalog.
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        let ConfigLoadResult {
            config,
            options,
            from_file,
        } = load_config(&cwd)?;

        let debug = common.debug || config.debug;
        init_logging(common.verbose, debug);
        if !from_file {
            tracing::debug!("no config file found, using defaults");
        }

        let catalog_root = common
            .catalog_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.catalog_root));
        let language = common
            .lang
            .clone()
            .unwrap_or_else(|| config.default_language.clone());

        let report = load_catalog_with(&catalog_root, &options)
            .with_context(|| format!("Failed to load catalog from '{}'", catalog_root.display()))?;

        let handle = CatalogHandle::from_catalog(report.catalog);
        handle.set_debug(debug);

        Ok(Self {
            handle,
            language,
            catalog_root,
            warnings: report.warnings,
            files_loaded: report.files_loaded,
            verbose: common.verbose,
        })
    }

    pub fn translator(&self) -> Translator {
        self.handle.translator(&self.language)
    }
}
