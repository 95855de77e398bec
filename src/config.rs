//! Build configuration.
//!
//! The library never reads the environment or the working directory on its
//! own. Everything it needs travels in a [`BuildConfig`]; the binary fills
//! one in from its defaults, `PAGES_BASE`, and any command-line overrides.
//!
//! ## Defaults
//!
//! ```text
//! manifests_dir = "manifests"       # input, relative to the working directory
//! output_path   = "recipes.json"    # output, relative to the working directory
//! pages_base    = $PAGES_BASE or DEFAULT_PAGES_BASE
//! ```

use std::path::PathBuf;

/// Environment variable overriding the public base URL.
pub const PAGES_BASE_ENV: &str = "PAGES_BASE";

/// Public base URL used when `PAGES_BASE` is unset or empty.
pub const DEFAULT_PAGES_BASE: &str = "https://recipes.github.io/ricettario";

pub const DEFAULT_MANIFESTS_DIR: &str = "manifests";
pub const DEFAULT_OUTPUT_PATH: &str = "recipes.json";

/// Everything one index build needs.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    /// Directory holding the `*.json` manifests.
    pub manifests_dir: PathBuf,
    /// Index file to write. Overwritten on every run.
    pub output_path: PathBuf,
    /// Prefix for every absolute link in the index. Not validated.
    pub pages_base: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            manifests_dir: PathBuf::from(DEFAULT_MANIFESTS_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            pages_base: DEFAULT_PAGES_BASE.to_string(),
        }
    }
}

impl BuildConfig {
    /// Default paths, pages base taken from `PAGES_BASE`.
    pub fn from_env() -> Self {
        let env_base = std::env::var(PAGES_BASE_ENV).ok();
        Self {
            pages_base: resolve_pages_base(env_base.as_deref()),
            ..Self::default()
        }
    }
}

/// Pick the pages base: an unset or empty override means the default.
pub fn resolve_pages_base(override_value: Option<&str>) -> String {
    match override_value {
        Some(base) if !base.is_empty() => base.to_string(),
        _ => DEFAULT_PAGES_BASE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_paths() {
        let config = BuildConfig::default();
        assert_eq!(config.manifests_dir, PathBuf::from("manifests"));
        assert_eq!(config.output_path, PathBuf::from("recipes.json"));
        assert_eq!(config.pages_base, DEFAULT_PAGES_BASE);
    }

    #[test]
    fn pages_base_unset_uses_default() {
        assert_eq!(resolve_pages_base(None), DEFAULT_PAGES_BASE);
    }

    #[test]
    fn pages_base_empty_uses_default() {
        assert_eq!(resolve_pages_base(Some("")), DEFAULT_PAGES_BASE);
    }

    #[test]
    fn pages_base_override_used_verbatim() {
        assert_eq!(resolve_pages_base(Some("not a url/")), "not a url/");
        assert_eq!(
            resolve_pages_base(Some("https://host/app")),
            "https://host/app"
        );
    }
}
