//! Per-caller translation handle.
//!
//! Lookup policy:
//!
//! 1. A trailing string argument that names a loaded namespace selects that
//!    namespace for this call only and is not used for formatting.
//! 2. On a hit the stored message is returned, formatted when arguments were
//!    given and the message contains `%`.
//! 3. On a miss the key itself is the fallback, formatted under the same
//!    rule. With debug enabled the miss is logged.

use tracing::warn;

use crate::core::{Arg, Catalog, CatalogHandle, format};

/// Which message a count selects in [`Translator::plural`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralBucket {
    /// `count <= 0`
    Zero,
    /// `count == 1`
    One,
    /// `count > 1`
    Many,
}

impl PluralBucket {
    pub fn for_count(count: i64) -> Self {
        match count {
            i64::MIN..=0 => PluralBucket::Zero,
            1 => PluralBucket::One,
            _ => PluralBucket::Many,
        }
    }
}

/// Translates keys for one current language.
///
/// Cloning is cheap; each clone has its own language and shares the catalog.
#[derive(Debug, Clone)]
pub struct Translator {
    handle: CatalogHandle,
    language: String,
}

impl Translator {
    /// The language is not checked against the catalog; an unknown language
    /// simply misses on every lookup.
    pub fn new(handle: CatalogHandle, language: impl Into<String>) -> Self {
        Self {
            handle,
            language: language.into(),
        }
    }

    pub fn lang(&self) -> &str {
        &self.language
    }

    pub fn set_lang(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Translate `key` in the current language.
    ///
    /// # Examples
    ///
    /// ```
    /// use glossa::core::{Catalog, CatalogHandle};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.insert("en", [("greet".to_string(), "Hi %s".to_string())].into());
    /// catalog.insert("fr", [("greet".to_string(), "Salut %s".to_string())].into());
    /// let t = CatalogHandle::from_catalog(catalog).translator("en");
    ///
    /// assert_eq!(t.print("greet", &["Ann".into()]), "Hi Ann");
    /// assert_eq!(t.print("greet", &["Ann".into(), "fr".into()]), "Salut Ann");
    /// assert_eq!(t.print("Bye %s", &["Ann".into()]), "Bye Ann");
    /// ```
    pub fn print(&self, key: &str, args: &[Arg]) -> String {
        let catalog = self.handle.snapshot();
        if let Some((Arg::Str(language), rest)) = args.split_last()
            && catalog.contains_namespace(language)
        {
            return self.resolve(&catalog, language, key, rest);
        }
        self.resolve(&catalog, &self.language, key, args)
    }

    /// Translate `key` in `language`, ignoring the current language.
    ///
    /// Arguments are never inspected for a language override.
    pub fn print_in(&self, language: &str, key: &str, args: &[Arg]) -> String {
        let catalog = self.handle.snapshot();
        self.resolve(&catalog, language, key, args)
    }

    /// Pick the zero, one or many message for `count` and translate it.
    ///
    /// `count` becomes the first formatting argument. A leading empty-string
    /// value is a legacy placeholder and is dropped; other values are passed
    /// through, and a trailing namespace name still acts as an override.
    pub fn plural(&self, count: i64, zero: &str, one: &str, many: &str, values: &[Arg]) -> String {
        let values = match values.split_first() {
            Some((Arg::Str(first), rest)) if first.is_empty() => rest,
            _ => values,
        };

        let mut args = Vec::with_capacity(values.len() + 1);
        args.push(Arg::Int(count));
        args.extend_from_slice(values);

        let key = match PluralBucket::for_count(count) {
            PluralBucket::Zero => zero,
            PluralBucket::One => one,
            PluralBucket::Many => many,
        };
        self.print(key, &args)
    }

    fn resolve(&self, catalog: &Catalog, language: &str, key: &str, args: &[Arg]) -> String {
        let template = match catalog.get(language, key) {
            Some(value) => value,
            None => {
                if self.handle.debug_enabled() {
                    warn!(language, key, "missing translation");
                }
                key
            }
        };

        if !args.is_empty() && template.contains('%') {
            format(template, args)
        } else {
            template.to_string()
        }
    }
}
