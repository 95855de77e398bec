//! Manifest enumeration and index assembly.
//!
//! ```text
//! manifests/*.json  →  sort by recipe number  →  one RecipeEntry each  →  recipes.json
//! ```
//!
//! The whole index is built in memory before anything is written. A single
//! unreadable or malformed manifest aborts the build and leaves any existing
//! output file untouched.

use crate::config::BuildConfig;
use crate::iiif::{self, ManifestView};
use crate::naming;
use crate::urls;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("cannot list manifests directory {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read manifest {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cannot serialize index: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("cannot write index {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One recipe in the generated index.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeEntry {
    /// Short id: last segment of the manifest `id`, or the filename stem.
    pub id: String,
    /// `label` language map copied from the manifest, `{}` when absent.
    pub label: Value,
    /// `summary` language map copied from the manifest, `{}` when absent.
    pub summary: Value,
    /// Published URL of the manifest file itself.
    pub manifest: String,
    /// URL of the recipe's data file.
    pub data: String,
    /// Thumbnail image URL, empty when the manifest has none.
    pub thumbnail: String,
    pub title_it: String,
    pub title_en: String,
}

/// A manifest file found in the input directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestFile {
    pub filename: String,
    pub path: PathBuf,
}

/// List `*.json` files in `dir`, ordered by recipe number.
///
/// Files without a recipe number keep their directory-listing order after
/// all numbered ones (the sort is stable).
pub fn list_manifests(dir: &Path) -> Result<Vec<ManifestFile>, IndexError> {
    let list_err = |source| IndexError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let filename = entry.file_name().to_string_lossy().to_string();
        let path = entry.path();
        if naming::is_json_file(&filename) && path.is_file() {
            files.push(ManifestFile { filename, path });
        }
    }

    files.sort_by_key(|f| naming::sort_key(&f.filename));
    Ok(files)
}

/// Read and parse one manifest.
///
/// Content must be valid UTF-8; anything else is a read error, not a lossy
/// decode.
pub fn read_manifest(file: &ManifestFile) -> Result<Value, IndexError> {
    let content = fs::read_to_string(&file.path).map_err(|source| IndexError::Read {
        path: file.path.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| IndexError::Json {
        path: file.path.clone(),
        source,
    })
}

/// Assemble the index entry for one parsed manifest.
///
/// Pure: `filename` is only used for the id fallback and the manifest URL.
pub fn build_entry(filename: &str, manifest: &Value, pages_base: &str) -> RecipeEntry {
    let view = ManifestView::new(manifest);
    let id = naming::derive_id(view.id(), filename);

    let thumbnail = match iiif::first_match(&view, iiif::THUMBNAIL_STRATEGIES) {
        Some((source, value)) => {
            debug!("{filename}: thumbnail from {source}");
            value
        }
        None => {
            debug!("{filename}: no thumbnail found");
            String::new()
        }
    };

    let data = match iiif::first_match(&view, iiif::DATA_URL_STRATEGIES) {
        Some((source, value)) => {
            debug!("{filename}: data URL from {source}");
            value
        }
        None => urls::join(pages_base, &format!("data/{id}.json")),
    };

    let label = view.label().cloned().unwrap_or_else(empty_map);
    let summary = view.summary().cloned().unwrap_or_else(empty_map);

    RecipeEntry {
        title_it: iiif::pick_language(Some(&label), "it"),
        title_en: iiif::pick_language(Some(&label), "en"),
        manifest: urls::join(pages_base, &format!("manifests/{filename}")),
        data: urls::absolutize(pages_base, &data),
        thumbnail: urls::absolutize(pages_base, &thumbnail),
        id,
        label,
        summary,
    }
}

fn empty_map() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Build the full index from the configured manifests directory.
pub fn build_index(config: &BuildConfig) -> Result<Vec<RecipeEntry>, IndexError> {
    let files = list_manifests(&config.manifests_dir)?;
    info!(
        "found {} manifest(s) in {}",
        files.len(),
        config.manifests_dir.display()
    );

    let mut entries = Vec::with_capacity(files.len());
    for file in &files {
        let manifest = read_manifest(file)?;
        let entry = build_entry(&file.filename, &manifest, &config.pages_base);
        debug!("{} → {}", file.filename, entry.id);
        entries.push(entry);
    }
    Ok(entries)
}

/// Serialize entries as a pretty-printed JSON array with a trailing newline.
pub fn render_index(entries: &[RecipeEntry]) -> Result<String, IndexError> {
    let mut json = serde_json::to_string_pretty(entries).map_err(IndexError::Serialize)?;
    json.push('\n');
    Ok(json)
}

/// Write the rendered index to `path`, replacing any existing file.
pub fn write_index(path: &Path, entries: &[RecipeEntry]) -> Result<(), IndexError> {
    let json = render_index(entries)?;
    fs::write(path, json).map_err(|source| IndexError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the index and write it to the configured output path.
pub fn run(config: &BuildConfig) -> Result<Vec<RecipeEntry>, IndexError> {
    let entries = build_index(config)?;
    write_index(&config.output_path, &entries)?;
    Ok(entries)
}
