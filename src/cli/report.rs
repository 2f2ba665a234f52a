//! Report formatting and printing utilities.
//!
//! Kept separate from the lookup engine so glossa can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{Catalog, LoadWarning};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural_word<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

/// Print each namespace with its key count, optionally followed by its keys.
pub fn print_namespaces(catalog: &Catalog, show_keys: bool) {
    print_namespaces_to(catalog, show_keys, &mut io::stdout().lock());
}

pub fn print_namespaces_to<W: Write>(catalog: &Catalog, show_keys: bool, writer: &mut W) {
    if catalog.is_empty() {
        let _ = writeln!(writer, "No namespaces loaded");
        return;
    }

    let namespaces = catalog.namespaces();
    let name_width = namespaces.iter().map(|ns| ns.width()).max().unwrap_or(0);

    for namespace in namespaces {
        let Some(table) = catalog.table(namespace) else {
            continue;
        };
        let padding = " ".repeat(name_width - namespace.width());
        let _ = writeln!(
            writer,
            "{}{}  {} {}",
            namespace.bold(),
            padding,
            table.len(),
            plural_word(table.len(), "key", "keys")
        );

        if show_keys {
            let mut keys: Vec<&String> = table.keys().collect();
            keys.sort();
            for key in keys {
                let _ = writeln!(writer, "    {}", key);
            }
        }
    }
}

/// Print every load warning.
pub fn print_warnings(warnings: &[LoadWarning]) {
    print_warnings_to(warnings, &mut io::stdout().lock());
}

pub fn print_warnings_to<W: Write>(warnings: &[LoadWarning], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
    }
}

/// Print a success message when the catalog loaded cleanly.
pub fn print_success(files: usize, namespaces: usize, root: &Path) {
    print_success_to(files, namespaces, root, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(files: usize, namespaces: usize, root: &Path, writer: &mut W) {
    let msg = format!(
        "Checked {} catalog {} ({} {}) in {} - no issues found",
        files,
        plural_word(files, "file", "files"),
        namespaces,
        plural_word(namespaces, "namespace", "namespaces"),
        root.display()
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print the number of problems found by `check`.
pub fn print_failure(problems: usize, files: usize) {
    print_failure_to(problems, files, &mut io::stdout().lock());
}

pub fn print_failure_to<W: Write>(problems: usize, files: usize, writer: &mut W) {
    let msg = format!(
        "{} {} found in {} catalog {}",
        problems,
        plural_word(problems, "problem", "problems"),
        files,
        plural_word(files, "file", "files")
    );
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), msg.red());
}

/// Point at `check` when a lookup command ran against a catalog with problems.
pub fn print_warning_hint(count: usize, verbose: bool) {
    print_warning_hint_to(count, verbose, &mut io::stderr().lock());
}

/// Print the warning hint to a custom writer.
pub fn print_warning_hint_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} catalog {} found (run {} for details)",
            "warning:".bold().yellow(),
            count,
            plural_word(count, "problem", "problems"),
            "glossa check".cyan()
        );
    }
}
