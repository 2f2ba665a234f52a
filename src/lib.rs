//! Glossa - runtime string translation from JSON catalogs
//!
//! A catalog is a directory tree of flat JSON files. Each file becomes a
//! namespace named after its path (`en.json` -> `"en"`, `admin/fr.json` ->
//! `"admin/fr"`), and a [`core::Translator`] resolves message keys against
//! one namespace at a time, falling back to the key itself when nothing is
//! found.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog loading, lookup, pluralization and formatting
//! - `global`: Process-wide catalog convenience functions

pub mod cli;
pub mod config;
pub mod core;
pub mod global;
