use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::catalog::DEFAULT_PAGE_SIZE;

/// Settings read from `config.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub catalog: CatalogConfig,
    pub data: DataConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Loop tick in milliseconds; notifications expire on ticks.
    pub tick_rate_ms: u64,
    /// Capture the mouse so the wheel scrolls results.
    pub mouse_enabled: bool,
    /// `"dark"` or `"light"`.
    pub theme: String,
}

/// Catalog source and browsing behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog to load instead of the bundled one.
    pub path: Option<PathBuf>,
    /// Records per page. Zero is treated as one.
    pub page_size: usize,
    /// Drop repeated records after each "load more".
    pub dedupe_on_load_more: bool,
}

/// Where logs are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Replaces the platform data dir.
    pub data_dir: Option<PathBuf>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_enabled: false,
            theme: "dark".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            page_size: DEFAULT_PAGE_SIZE.get(),
            dedupe_on_load_more: false,
        }
    }
}

/// Problems reading the config file.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read config at {}: {source}", .path.display())]
    #[diagnostic(code(shelfscan::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config at {}: {message}", .path.display())]
    #[diagnostic(
        code(shelfscan::config::parse),
        help("Fix or remove the file. Defaults are used until then.")
    )]
    Parse {
        path: PathBuf,
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
    },
}

impl AppConfig {
    /// Load from an explicit path. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config file at {}; using defaults", path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        match toml::from_str(&contents) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                Ok(Some(config))
            }
            Err(e) => Err(ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.message().to_string(),
                span: e.span().map(SourceSpan::from),
                src: NamedSource::new(path.display().to_string(), contents),
            }),
        }
    }

    /// Configured page size, never zero.
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.catalog.page_size).unwrap_or(NonZeroUsize::MIN)
    }

    /// `data.data_dir`, else the platform data dir.
    pub fn data_dir(&self) -> PathBuf {
        self.data.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("shelfscan"))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir().join("logs")
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("shelfscan").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
