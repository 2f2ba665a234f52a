//! Process-wide catalog for applications that want a single shared instance.
//!
//! These free functions operate on one lazily created [`CatalogHandle`].
//! Libraries and tests should prefer constructing their own handle.
//!
//! ```no_run
//! glossa::global::load("./locales")?;
//! glossa::global::debug(true);
//!
//! let t = glossa::global::new("en");
//! println!("{}", t.print("hello", &[]));
//! # Ok::<(), glossa::core::LoadError>(())
//! ```

use std::{path::Path, sync::LazyLock};

use crate::core::{CatalogHandle, LoadError, LoadWarning, Translator};

static GLOBAL: LazyLock<CatalogHandle> = LazyLock::new(CatalogHandle::new);

/// The process-wide handle.
pub fn handle() -> CatalogHandle {
    GLOBAL.clone()
}

/// Replace the process-wide catalog with the contents of `root`.
pub fn load(root: impl AsRef<Path>) -> Result<Vec<LoadWarning>, LoadError> {
    GLOBAL.load(root)
}

/// Toggle logging of missing translations.
pub fn debug(enabled: bool) {
    GLOBAL.set_debug(enabled);
}

/// Create a translator over the process-wide catalog.
pub fn new(language: impl Into<String>) -> Translator {
    GLOBAL.translator(language)
}
