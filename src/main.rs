use clap::Parser;
use recipe_index::config::{self, BuildConfig};
use recipe_index::{index, output};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let hash = env!("RECIPE_INDEX_GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup, called exactly once
        Box::leak(format!("{} ({hash})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "recipe-index")]
#[command(about = "Build recipes.json from a directory of IIIF manifests")]
#[command(long_about = "\
Build recipes.json from a directory of IIIF manifests

Reads every *.json manifest, ordered by the number in recipe-<N>.json
(files without a number come last), and writes one index entry per
manifest:

  id         last segment of the manifest id, or the filename stem
  label      copied from the manifest
  summary    copied from the manifest
  manifest   <pages base>/manifests/<filename>
  data       metadata link containing /data/, or <pages base>/data/<id>.json
  thumbnail  thumbnail[0], or the first canvas image
  title_it   label in Italian
  title_en   label in English

The pages base comes from PAGES_BASE when set and non-empty.
Set RUST_LOG=debug to see how each manifest was resolved.")]
#[command(version = version_string())]
struct Cli {
    /// Directory of manifest files
    #[arg(long, default_value = config::DEFAULT_MANIFESTS_DIR)]
    manifests: PathBuf,

    /// Index file to write
    #[arg(long, default_value = config::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Public base URL for links (overrides PAGES_BASE)
    #[arg(long)]
    pages_base: Option<String>,
}

impl Cli {
    fn into_config(self) -> BuildConfig {
        let env_config = BuildConfig::from_env();
        BuildConfig {
            manifests_dir: self.manifests,
            output_path: self.output,
            pages_base: match self.pages_base {
                Some(base) => config::resolve_pages_base(Some(&base)),
                None => env_config.pages_base,
            },
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config();
    match index::run(&config) {
        Ok(entries) => {
            output::print_build_output(&entries, &config.output_path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
