//! Translation resolution engine.
//!
//! - `catalog`: namespace -> language table storage
//! - `parsers`: loading catalogs from disk
//! - `shared`: the cloneable handle translators read through
//! - `translator`: per-caller lookup and pluralization
//! - `format`: printf-style argument substitution

pub mod catalog;
pub mod format;
pub mod parsers;
pub mod shared;
pub mod translator;

pub use catalog::{Catalog, LanguageTable};
pub use format::{Arg, format};
pub use parsers::json::{
    LoadError, LoadOptions, LoadReport, LoadWarning, derive_namespace, load_catalog,
    load_catalog_with,
};
pub use shared::CatalogHandle;
pub use translator::{PluralBucket, Translator};
