//! Catalog file parsers.
//!
//! - `json`: walks a catalog root and parses `<namespace>.json` files

pub mod json;
