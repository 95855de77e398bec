//! CLI output formatting for an index build.
//!
//! A successful build prints a single summary line to stdout:
//!
//! ```text
//! Wrote 3 recipes to recipes.json
//! ```
//!
//! The per-recipe listing is a debug log, shown with `RUST_LOG=debug`:
//!
//! ```text
//! 001 recipe-001 Pasta alla Norma
//! 002 recipe-002 Risotto
//! 003 notes
//! ```
//!
//! [`format_summary`] and [`format_entry_lines`] are pure;
//! [`print_build_output`] does the writing.

use crate::index::RecipeEntry;
use log::debug;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Display title for an entry: English first, then Italian.
fn display_title(entry: &RecipeEntry) -> &str {
    if entry.title_en.is_empty() {
        entry.title_it.as_str()
    } else {
        entry.title_en.as_str()
    }
}

fn entry_line(pos: usize, entry: &RecipeEntry) -> String {
    match display_title(entry) {
        "" => format!("{} {}", format_index(pos), entry.id),
        title => format!("{} {} {}", format_index(pos), entry.id, title),
    }
}

/// The one line printed on success.
pub fn format_summary(count: usize, output_path: &Path) -> String {
    let noun = if count == 1 { "recipe" } else { "recipes" };
    format!("Wrote {} {} to {}", count, noun, output_path.display())
}

/// One `NNN id title` line per entry, in index order.
pub fn format_entry_lines(entries: &[RecipeEntry]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| entry_line(i + 1, entry))
        .collect()
}

/// Log the entry listing at debug level, then print the summary to stdout.
pub fn print_build_output(entries: &[RecipeEntry], output_path: &Path) {
    for line in format_entry_lines(entries) {
        debug!("{}", line);
    }
    println!("{}", format_summary(entries.len(), output_path));
}
