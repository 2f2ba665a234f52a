use std::collections::HashMap;

/// Message key -> translated string for one namespace.
pub type LanguageTable = HashMap<String, String>;

/// All loaded language tables, keyed by namespace (`"en"`, `"admin/fr"`).
///
/// A catalog is built once and then only read; reloading produces a new
/// catalog rather than mutating an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tables: HashMap<String, LanguageTable>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `table` under `namespace`, returning the table it replaced.
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        table: LanguageTable,
    ) -> Option<LanguageTable> {
        self.tables.insert(namespace.into(), table)
    }

    /// Look up `key` in `namespace`.
    pub fn get(&self, namespace: &str, key: &str) -> Option<&str> {
        self.tables
            .get(namespace)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    pub fn table(&self, namespace: &str) -> Option<&LanguageTable> {
        self.tables.get(namespace)
    }

    pub fn contains_namespace(&self, namespace: &str) -> bool {
        self.tables.contains_key(namespace)
    }

    /// Registered namespaces in sorted order.
    pub fn namespaces(&self) -> Vec<&str> {
        let mut namespaces: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        namespaces.sort_unstable();
        namespaces
    }

    /// Number of namespaces.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl FromIterator<(String, LanguageTable)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, LanguageTable)>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}
