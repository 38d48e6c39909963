use crate::error::{QuotezError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_FALLBACK_WIDTH: usize = 80;
pub const DEFAULT_MAX_BOX_WIDTH: usize = 90;

/// How a quote is laid out on the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    Plain,
    #[default]
    Bordered,
}

/// Configuration for quotez, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotezConfig {
    /// Quote file to use when `--file` is not given
    #[serde(default)]
    pub quotes_file: Option<PathBuf>,

    #[serde(default)]
    pub style: DisplayStyle,

    /// Width used when stdout is not a terminal
    #[serde(default = "default_fallback_width")]
    pub fallback_width: usize,

    /// Upper bound for the bordered style
    #[serde(default = "default_max_box_width")]
    pub max_box_width: usize,
}

fn default_fallback_width() -> usize {
    DEFAULT_FALLBACK_WIDTH
}

fn default_max_box_width() -> usize {
    DEFAULT_MAX_BOX_WIDTH
}

impl Default for QuotezConfig {
    fn default() -> Self {
        Self {
            quotes_file: None,
            style: DisplayStyle::default(),
            fallback_width: DEFAULT_FALLBACK_WIDTH,
            max_box_width: DEFAULT_MAX_BOX_WIDTH,
        }
    }
}

impl QuotezConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| QuotezError::Read {
            path: config_path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| QuotezError::Decode {
            path: config_path,
            source,
        })
    }

    /// Like [`QuotezConfig::load`], but a broken config only costs a warning.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        Self::load(config_dir).unwrap_or_else(|e| {
            log::warn!("ignoring config: {}", e);
            Self::default()
        })
    }
}
