//! Centralized filename parsing for the `recipe-NNN.json` convention.
//!
//! Manifests are ordered by the integer embedded in their filename, not by
//! the filename string. `recipe-10.json` comes after `recipe-2.json`, and
//! anything that doesn't follow the convention (`notes.json`) sorts last.
//!
//! ## Recipe Ids
//!
//! Every index entry carries a short id. It comes from the manifest's own
//! `id` URI when there is one, otherwise from the source filename:
//! - `https://example.org/manifests/recipe-007.json` → `recipe-007`
//! - `https://example.org/iiif/recipe-007/` → `recipe-007`
//! - no `id`, stored as `recipe-003.json` → `recipe-003`

use regex::Regex;
use std::sync::LazyLock;

/// Sort key for files that don't match `recipe-<digits>.json`.
///
/// Equal to the largest integer a JSON number can hold exactly (2^53 - 1), so
/// every matched file sorts ahead of it.
pub const UNNUMBERED_SORT_KEY: u64 = 9_007_199_254_740_991;

static RE_RECIPE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)recipe-(\d+)\.json").unwrap());

/// Extract the recipe number from a filename like `recipe-12.json`.
///
/// Matching is case-insensitive and unanchored, mirroring a plain regex
/// search over the file name (`old-recipe-4.json` → `Some(4)`). Numbers too
/// large for `u64` count as unnumbered.
pub fn recipe_number(filename: &str) -> Option<u64> {
    RE_RECIPE_NUMBER
        .captures(filename)
        .and_then(|caps| caps[1].parse::<u64>().ok())
}

/// Ordering key for a manifest filename.
pub fn sort_key(filename: &str) -> u64 {
    // Numbers above 2^53 - 1 clamp to the sentinel and tie with unnumbered
    // files, keeping listing order among them instead of sorting after them.
    recipe_number(filename)
        .map(|n| n.min(UNNUMBERED_SORT_KEY))
        .unwrap_or(UNNUMBERED_SORT_KEY)
}

/// Whether a filename has a `.json` extension (any case).
pub fn is_json_file(filename: &str) -> bool {
    let bytes = filename.as_bytes();
    bytes.len() >= 5 && bytes[bytes.len() - 5..].eq_ignore_ascii_case(b".json")
}

/// Strip one trailing `.json` (any case). Other names are returned unchanged.
pub fn strip_json_suffix(name: &str) -> &str {
    if is_json_file(name) {
        &name[..name.len() - 5]
    } else {
        name
    }
}

/// Derive the id from a manifest `id` URI: last non-empty path segment,
/// `.json` stripped. `None` when nothing usable is left.
pub fn id_from_uri(uri: &str) -> Option<String> {
    uri.split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(strip_json_suffix)
        .filter(|id| !id.is_empty())
        .map(String::from)
}

/// Derive the recipe id, preferring the manifest's URI over the filename.
pub fn derive_id(manifest_id: Option<&str>, filename: &str) -> String {
    manifest_id
        .and_then(id_from_uri)
        .unwrap_or_else(|| strip_json_suffix(filename).to_string())
}
