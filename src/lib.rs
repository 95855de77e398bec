//! # Recipe Index
//!
//! Builds a flat `recipes.json` index from a directory of per-recipe IIIF
//! Presentation 3 manifests, for a statically published recipe site.
//!
//! # Pipeline
//!
//! ```text
//! manifests/        list *.json, order by recipe-<N> number
//!   recipe-1.json   parse, pick id/label/summary/thumbnail/data
//!   recipe-2.json   ...
//!   notes.json      (unnumbered, last)
//!        ↓
//! recipes.json      pretty-printed array, fully regenerated each run
//! ```
//!
//! The build is sequential and fail-fast: the first unreadable or malformed
//! manifest stops it before anything is written.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`index`] | Enumeration, per-manifest entry assembly, writing the index |
//! | [`iiif`] | Loose manifest accessors and first-match extraction strategies |
//! | [`naming`] | `recipe-NNN.json` ordering and id derivation |
//! | [`urls`] | Absolute link building under the pages base |
//! | [`config`] | `BuildConfig` and the `PAGES_BASE` default |
//! | [`output`] | CLI summary formatting |
//!
//! # Loose Manifests
//!
//! Manifests are not validated. A missing or oddly shaped field degrades to
//! an empty value in the index instead of failing the build. Only I/O errors
//! and JSON syntax errors are fatal.

pub mod config;
pub mod iiif;
pub mod index;
pub mod naming;
pub mod output;
pub mod urls;

#[cfg(test)]
pub(crate) mod test_helpers;
