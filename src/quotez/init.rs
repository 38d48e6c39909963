//! Resolves where the config and quote file live and wires up the API.

use crate::api::QuotezApi;
use crate::config::QuotezConfig;
use crate::store::fs::JsonFileStore;
use directories::ProjectDirs;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

/// Overrides the OS config directory.
pub const CONFIG_DIR_ENV: &str = "QUOTEZ_CONFIG_DIR";
pub const DEFAULT_QUOTES_FILENAME: &str = "quotes.json";

pub struct QuotezContext {
    pub api: QuotezApi<JsonFileStore, StdRng>,
    pub config: QuotezConfig,
}

/// The directory holding `config.json` and, by default, `quotes.json`.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    match ProjectDirs::from("com", "quotez", "quotez") {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => {
            log::warn!("could not determine a config directory, using the current one");
            PathBuf::from(".")
        }
    }
}

/// Quote file precedence: explicit path, then config, then the config dir default.
pub fn resolve_quotes_file(
    explicit: Option<&Path>,
    config: &QuotezConfig,
    config_dir: &Path,
) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| config.quotes_file.clone())
        .unwrap_or_else(|| config_dir.join(DEFAULT_QUOTES_FILENAME))
}

/// Seeded generators give repeatable picks; otherwise seed from the OS.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn initialize(quotes_file: Option<&Path>, seed: Option<u64>) -> QuotezContext {
    let dir = config_dir();
    let config = QuotezConfig::load_or_default(&dir);
    let quotes_file = resolve_quotes_file(quotes_file, &config, &dir);
    log::debug!("using quotes file {}", quotes_file.display());

    let api = QuotezApi::new(JsonFileStore::new(quotes_file), make_rng(seed));
    QuotezContext { api, config }
}
