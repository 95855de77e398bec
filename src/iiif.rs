//! Loose, read-only access to IIIF Presentation 3 manifests.
//!
//! Manifests are authored by hand or exported from different tools, so the
//! shape of any field may vary. Nothing here validates a manifest. Every
//! accessor returns `Option` and a shape mismatch reads as "absent".
//!
//! ## Extraction strategies
//!
//! Fields with more than one possible source are resolved by an ordered list
//! of named [`Strategy`] functions, tried first-match-wins:
//!
//! ```text
//! thumbnail: thumbnail[0] (string or .id) → items[0].items[0].items[0].body.id
//! data:      metadata[*].value[lang][*] containing "/data/" and ending ".json"
//! ```
//!
//! The name of the winning strategy is only used for diagnostics.
//!
//! ## Language maps
//!
//! A language map is a JSON object from language code to an array of strings
//! (`{"it": ["Tiramisù"], "en": ["Tiramisu"]}`). Key order is document order.

use serde_json::{Map, Value};

/// JSON pointer to the painting body of the first canvas.
const PAINTING_BODY_POINTER: &str = "/items/0/items/0/items/0/body";

/// Marker a metadata value must contain to count as a data file link.
const DATA_PATH_MARKER: &str = "/data/";

/// Borrowed view over a parsed manifest.
#[derive(Debug, Clone, Copy)]
pub struct ManifestView<'a> {
    root: &'a Value,
}

impl<'a> ManifestView<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self { root }
    }

    fn field(&self, key: &str) -> Option<&'a Value> {
        self.root.get(key).filter(|v| is_present(v))
    }

    /// The manifest's declared `id` URI, if it is a non-empty string.
    pub fn id(&self) -> Option<&'a str> {
        self.field("id").and_then(Value::as_str)
    }

    /// The `label` language map, as written.
    pub fn label(&self) -> Option<&'a Value> {
        self.field("label")
    }

    /// The `summary` language map, as written.
    pub fn summary(&self) -> Option<&'a Value> {
        self.field("summary")
    }

    /// First entry of the `thumbnail` array.
    pub fn first_thumbnail(&self) -> Option<&'a Value> {
        self.field("thumbnail")
            .and_then(Value::as_array)
            .and_then(|thumbs| thumbs.first())
    }

    /// Painting body of the first annotation on the first canvas.
    pub fn painting_body(&self) -> Option<&'a Value> {
        self.root.pointer(PAINTING_BODY_POINTER)
    }

    /// `metadata` entries in document order. Empty when absent.
    pub fn metadata(&self) -> &'a [Value] {
        self.field("metadata")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Loose presence test for manifest fields.
///
/// `null`, `false`, `0` and `""` count as absent. Empty arrays and objects
/// are present.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A named way of pulling a value out of a manifest.
pub type Strategy = (&'static str, fn(&ManifestView<'_>) -> Option<String>);

/// Thumbnail sources, in priority order.
pub const THUMBNAIL_STRATEGIES: &[Strategy] = &[
    ("thumbnail", declared_thumbnail),
    ("painting-body", painting_body_id),
];

/// Data file link sources, in priority order.
pub const DATA_URL_STRATEGIES: &[Strategy] = &[("metadata", metadata_data_url)];

/// Run strategies in order and return the first non-empty result along with
/// the name of the strategy that produced it.
pub fn first_match(
    view: &ManifestView<'_>,
    strategies: &[Strategy],
) -> Option<(&'static str, String)> {
    strategies.iter().find_map(|(name, extract)| {
        extract(view)
            .filter(|value| !value.is_empty())
            .map(|value| (*name, value))
    })
}

/// `thumbnail[0]`, either a bare string or a resource with an `id`.
pub fn declared_thumbnail(view: &ManifestView<'_>) -> Option<String> {
    match view.first_thumbnail()? {
        Value::String(s) => Some(s.clone()),
        resource => resource_id(resource),
    }
}

/// `id` of the first canvas's painting body.
///
/// Only a single body resource counts: an array of bodies has no `id` of its
/// own and yields nothing.
pub fn painting_body_id(view: &ManifestView<'_>) -> Option<String> {
    resource_id(view.painting_body()?)
}

fn resource_id(resource: &Value) -> Option<String> {
    resource
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(String::from)
}

/// First metadata value that links to a file under `/data/`.
///
/// Scans entries in order, then language keys in document order, then the
/// strings under each key.
pub fn metadata_data_url(view: &ManifestView<'_>) -> Option<String> {
    view.metadata()
        .iter()
        .filter_map(|entry| entry.get("value").and_then(Value::as_object))
        .flat_map(language_map_strings)
        .find(|s| is_data_link(s))
        .map(String::from)
}

fn is_data_link(value: &str) -> bool {
    value.contains(DATA_PATH_MARKER) && value.ends_with(".json")
}

/// All strings of a language map, key by key. Only array values are read; a
/// key holding a bare string is skipped.
fn language_map_strings(map: &Map<String, Value>) -> impl Iterator<Item = &str> {
    map.values()
        .filter_map(Value::as_array)
        .flat_map(|items| items.iter().filter_map(Value::as_str))
}

/// Pick a display string from a language map.
///
/// Looks up `lang`, then `en`, then `it`, taking the first key whose value is
/// present. That lookup order is the same whichever language was asked for,
/// so asking for `en` on an Italian-only label returns the Italian text. The
/// resolved value is used if it is a string, or its first element if it is a
/// non-empty array of strings. Anything else gives `""`.
pub fn pick_language(map: Option<&Value>, lang: &str) -> String {
    let Some(map) = map.and_then(Value::as_object) else {
        return String::new();
    };
    let resolved = [lang, "en", "it"]
        .into_iter()
        .filter_map(|key| map.get(key))
        .find(|v| is_present(v));

    match resolved {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .first()
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}
