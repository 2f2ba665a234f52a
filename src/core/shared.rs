//! Shared, reloadable catalog state.
//!
//! # Invariants
//!
//! 1. **Published catalogs are immutable**: a load builds a complete
//!    [`Catalog`] before swapping it in, so readers observe either the old or
//!    the new catalog and never a partially loaded one.
//!
//! 2. **Failed loads publish nothing**: on [`LoadError`] the previous catalog
//!    stays in place.
//!
//! 3. **Short read sections**: readers hold the lock only to clone the
//!    `Arc`; lookups and formatting run without it.

use std::{
    path::Path,
    sync::{
        Arc, PoisonError, RwLock,
        atomic::{AtomicBool, Ordering},
    },
};

use crate::core::{Catalog, LoadError, LoadOptions, LoadWarning, Translator, load_catalog_with};

/// Cheaply cloneable handle to a catalog and its debug flag.
///
/// Clones share state: a reload through one clone is visible to every
/// [`Translator`] created from any of them.
#[derive(Debug, Clone, Default)]
pub struct CatalogHandle {
    inner: Arc<Shared>,
}

#[derive(Debug, Default)]
struct Shared {
    catalog: RwLock<Arc<Catalog>>,
    debug: AtomicBool,
}

impl CatalogHandle {
    /// Create a handle holding an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(Shared {
                catalog: RwLock::new(Arc::new(catalog)),
                debug: AtomicBool::new(false),
            }),
        }
    }

    /// Load `root` and replace the current catalog with the result.
    ///
    /// Returns the non-fatal warnings collected while loading.
    pub fn load(&self, root: impl AsRef<Path>) -> Result<Vec<LoadWarning>, LoadError> {
        self.load_with(root, &LoadOptions::default())
    }

    pub fn load_with(
        &self,
        root: impl AsRef<Path>,
        options: &LoadOptions,
    ) -> Result<Vec<LoadWarning>, LoadError> {
        let report = load_catalog_with(root, options)?;
        self.replace(report.catalog);
        Ok(report.warnings)
    }

    /// Swap in `catalog`, returning the previous one.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let mut guard = self
            .inner
            .catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(catalog))
    }

    /// The catalog as of now. Later reloads do not affect the returned value.
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self
            .inner
            .catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Toggle logging of missing translations.
    pub fn set_debug(&self, enabled: bool) {
        self.inner.debug.store(enabled, Ordering::Relaxed);
    }

    pub fn debug_enabled(&self) -> bool {
        self.inner.debug.load(Ordering::Relaxed)
    }

    /// Create a translator for `language` reading through this handle.
    pub fn translator(&self, language: impl Into<String>) -> Translator {
        Translator::new(self.clone(), language)
    }
}
