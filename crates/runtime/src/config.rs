//! Where sheets come from and what they are called.
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use titans_content::SheetSet;

use crate::error::{Result, RuntimeError};
use crate::source::{LocalSource, RemoteSource, SheetSource};

/// Sheet source selection plus sheet names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub mode: SourceMode,
    pub sheets: SheetSet,
}

/// Backend the sheet payloads are read from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceMode {
    /// `<data_dir>/<sheet>.json` files holding unwrapped payloads.
    Local {
        #[serde(default = "SourceMode::default_data_dir")]
        data_dir: PathBuf,
    },
    /// The published spreadsheet, one gviz query per sheet.
    Remote {
        #[serde(default = "SourceMode::default_spreadsheet_id")]
        spreadsheet_id: String,
        #[serde(default = "SourceMode::default_base_url")]
        base_url: String,
    },
}

impl SourceMode {
    pub const DEFAULT_DATA_DIR: &'static str = "data";
    pub const DEFAULT_SPREADSHEET_ID: &'static str = "1WLa7X8h3O0-aGKxeAlCL7bnN8-FhGd3t7pz2RCzSg8c";
    pub const DEFAULT_BASE_URL: &'static str = "https://docs.google.com/spreadsheets/d";

    pub fn local() -> Self {
        SourceMode::Local {
            data_dir: Self::default_data_dir(),
        }
    }

    pub fn remote() -> Self {
        SourceMode::Remote {
            spreadsheet_id: Self::default_spreadsheet_id(),
            base_url: Self::default_base_url(),
        }
    }

    fn default_data_dir() -> PathBuf {
        PathBuf::from(Self::DEFAULT_DATA_DIR)
    }

    fn default_spreadsheet_id() -> String {
        Self::DEFAULT_SPREADSHEET_ID.to_string()
    }

    fn default_base_url() -> String {
        Self::DEFAULT_BASE_URL.to_string()
    }
}

impl Default for SourceMode {
    fn default() -> Self {
        Self::local()
    }
}

impl SourceConfig {
    pub fn new(mode: SourceMode, sheets: SheetSet) -> Self {
        Self { mode, sheets }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TITANS_SOURCE` - `local` or `remote` (default: local)
    /// - `TITANS_DATA_DIR` - Directory of `<sheet>.json` files (default: `data`)
    /// - `TITANS_SPREADSHEET_ID` - Spreadsheet to query in remote mode
    /// - `TITANS_BASE_URL` - Spreadsheet endpoint in remote mode
    /// - `TITANS_SHEET_HEROES` / `TITANS_SHEET_ITEMS` / `TITANS_SHEET_SKILLS` - Sheet names
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SourceConfig::from_env`] with a custom variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        config.mode = match read("TITANS_SOURCE").map(|v| v.to_ascii_lowercase()).as_deref() {
            Some("remote") => SourceMode::Remote {
                spreadsheet_id: read("TITANS_SPREADSHEET_ID")
                    .unwrap_or_else(SourceMode::default_spreadsheet_id),
                base_url: read("TITANS_BASE_URL").unwrap_or_else(SourceMode::default_base_url),
            },
            other => {
                if let Some(other) = other.filter(|v| *v != "local") {
                    tracing::warn!(value = other, "unknown TITANS_SOURCE, using local files");
                }
                SourceMode::Local {
                    data_dir: read("TITANS_DATA_DIR")
                        .map(PathBuf::from)
                        .unwrap_or_else(SourceMode::default_data_dir),
                }
            }
        };

        // Sheet names
        if let Some(name) = read("TITANS_SHEET_HEROES") {
            config.sheets.heroes = name;
        }
        if let Some(name) = read("TITANS_SHEET_ITEMS") {
            config.sheets.items = name;
        }
        if let Some(name) = read("TITANS_SHEET_SKILLS") {
            config.sheets.skills = name;
        }

        config
    }

    /// Builds the sheet source this configuration selects.
    pub fn source(&self) -> Arc<dyn SheetSource> {
        match &self.mode {
            SourceMode::Local { data_dir } => Arc::new(LocalSource::new(data_dir.clone())),
            SourceMode::Remote {
                spreadsheet_id,
                base_url,
            } => Arc::new(RemoteSource::new(base_url.clone(), spreadsheet_id.clone())),
        }
    }
}

/// Loader for source configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`SourceConfig`] from a TOML file; missing keys take defaults.
    pub fn load(path: &Path) -> Result<SourceConfig> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| RuntimeError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
