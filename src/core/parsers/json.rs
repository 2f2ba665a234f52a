use std::{
    fmt, fs, io,
    path::{Component, Path, PathBuf},
};

use glob::{Pattern, PatternError};
use rayon::prelude::*;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::{Catalog, LanguageTable};

/// Fatal errors from loading a catalog directory.
///
/// Per-file JSON problems are not errors; they are reported as
/// [`LoadWarning`]s and the load continues.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog root '{}' does not exist", .0.display())]
    RootNotFound(PathBuf),
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("failed to walk catalog directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A non-fatal problem found while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The file is not a JSON object; its namespace was not registered.
    Parse { file_path: PathBuf, error: String },
    /// A key held something other than a string and was skipped.
    NonStringValue {
        namespace: String,
        key: String,
        found: &'static str,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::Parse { file_path, error } => {
                write!(f, "failed to parse {}: {}", file_path.display(), error)
            }
            LoadWarning::NonStringValue {
                namespace,
                key,
                found,
            } => write!(
                f,
                "skipped [{}] {}: expected a string, found {}",
                namespace, key, found
            ),
        }
    }
}

/// Options controlling which files are loaded.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    ignores: Vec<Pattern>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip files whose root-relative path (e.g. `drafts/en.json`) matches
    /// any of `patterns`.
    pub fn with_ignores<I, S>(mut self, patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            self.ignores.push(Pattern::new(pattern.as_ref())?);
        }
        Ok(self)
    }

    fn is_ignored(&self, relative: &str) -> bool {
        self.ignores.iter().any(|pattern| pattern.matches(relative))
    }
}

/// A freshly loaded catalog together with what was skipped on the way.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub catalog: Catalog,
    pub warnings: Vec<LoadWarning>,
    /// Number of `.json` files read (including ones that failed to parse).
    pub files_loaded: usize,
}

struct CatalogSource {
    namespace: String,
    path: PathBuf,
    content: Vec<u8>,
}

/// Load every `.json` file under `root` into a new [`Catalog`].
pub fn load_catalog(root: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
    load_catalog_with(root, &LoadOptions::default())
}

pub fn load_catalog_with(
    root: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<LoadReport, LoadError> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(LoadError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(LoadError::NotADirectory(root.to_path_buf()));
    }

    // Reads happen in walk order so an I/O failure aborts before any parsing.
    let mut sources = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        // Suffix match: a file named exactly `.json` is a catalog too.
        if !entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(".json"))
        {
            continue;
        }
        let path = entry.path();
        let Some(relative) = relative_slash_path(root, path) else {
            continue;
        };
        if options.is_ignored(&relative) {
            debug!(file = %path.display(), "ignoring catalog file");
            continue;
        }

        let content = fs::read(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        sources.push(CatalogSource {
            namespace: namespace_from_relative(&relative),
            path: path.to_path_buf(),
            content,
        });
    }

    let parsed: Vec<_> = sources
        .par_iter()
        .map(|source| parse_language_table(&source.namespace, &source.content))
        .collect();

    let mut report = LoadReport {
        files_loaded: sources.len(),
        ..LoadReport::default()
    };
    for (source, result) in sources.into_iter().zip(parsed) {
        match result {
            Ok((table, skipped)) => {
                for warning in &skipped {
                    warn!("{}", warning);
                }
                report.warnings.extend(skipped);
                report.catalog.insert(source.namespace, table);
            }
            Err(error) => {
                let warning = LoadWarning::Parse {
                    file_path: source.path,
                    error: error.to_string(),
                };
                warn!("{}", warning);
                report.warnings.push(warning);
            }
        }
    }

    debug!(
        root = %root.display(),
        namespaces = report.catalog.len(),
        files = report.files_loaded,
        "loaded catalog"
    );
    Ok(report)
}

/// Parse one catalog file into a string table.
///
/// Fails when the content is not a JSON object. Non-string values are left
/// out of the table and returned as warnings.
pub fn parse_language_table(
    namespace: &str,
    content: &[u8],
) -> Result<(LanguageTable, Vec<LoadWarning>), serde_json::Error> {
    let object: Map<String, Value> = serde_json::from_slice(content)?;

    let mut table = LanguageTable::with_capacity(object.len());
    let mut warnings = Vec::new();
    for (key, value) in object {
        match value {
            Value::String(text) => {
                table.insert(key, text);
            }
            other => warnings.push(LoadWarning::NonStringValue {
                namespace: namespace.to_string(),
                key,
                found: value_kind(&other),
            }),
        }
    }
    Ok((table, warnings))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Derive the namespace of a catalog file.
///
/// Examples:
/// - `<root>/en.json` -> `"en"`
/// - `<root>/admin/fr.json` -> `"admin/fr"`
pub fn derive_namespace(root: &Path, path: &Path) -> Option<String> {
    relative_slash_path(root, path).map(|relative| namespace_from_relative(&relative))
}

/// Path of `path` below `root` with `/` separators.
fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}

fn namespace_from_relative(relative: &str) -> String {
    let trimmed = relative.trim_start_matches('/');
    trimmed.strip_suffix(".json").unwrap_or(trimmed).to_string()
}
