//! Shared test utilities for the recipe-index test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let entries = build_index(&fixture_config(tmp.path())).unwrap();
//! let tiramisu = find_entry(&entries, "recipe-007");
//! assert_eq!(tiramisu.title_en, "Tiramisu");
//! ```

use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

use crate::config::BuildConfig;
use crate::index::{ManifestFile, RecipeEntry};

/// Pages base used by [`fixture_config`].
pub const FIXTURE_PAGES_BASE: &str = "https://recipes.test/site";

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/manifests/` to `<tmp>/manifests` and return the temp dir.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/manifests");
    let dst = tmp.path().join("manifests");
    std::fs::create_dir_all(&dst).unwrap();
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), dst.join(entry.file_name())).unwrap();
    }
    tmp
}

/// Config pointing at a fixture temp dir, with output next to `manifests/`.
pub fn fixture_config(root: &Path) -> BuildConfig {
    BuildConfig {
        manifests_dir: root.join("manifests"),
        output_path: root.join("recipes.json"),
        pages_base: FIXTURE_PAGES_BASE.to_string(),
    }
}

/// Write a manifest value as `dir/name`.
pub fn write_manifest(dir: &Path, name: &str, manifest: &Value) {
    std::fs::write(dir.join(name), serde_json::to_string(manifest).unwrap()).unwrap();
}

/// File names in the order the filesystem lists them.
pub fn listing_order(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect()
}

// =========================================================================
// Lookups and extractors
// =========================================================================

/// Find an entry by id. Panics if not found.
pub fn find_entry<'a>(entries: &'a [RecipeEntry], id: &str) -> &'a RecipeEntry {
    entries.iter().find(|e| e.id == id).unwrap_or_else(|| {
        let ids = entry_ids(entries);
        panic!("entry '{id}' not found. Available: {ids:?}")
    })
}

/// All entry ids in index order.
pub fn entry_ids(entries: &[RecipeEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}

/// File names of listed manifests, in order.
pub fn filenames(files: &[ManifestFile]) -> Vec<&str> {
    files.iter().map(|f| f.filename.as_str()).collect()
}
