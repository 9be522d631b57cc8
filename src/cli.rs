//! Command-line arguments. Flags override the config file.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::AppConfig;

/// Browse a book catalog in the terminal.
#[derive(Debug, Parser)]
#[command(name = "shelfscan", version, about, long_about = None)]
pub struct Cli {
    /// JSON catalog to browse. Defaults to the configured path, then the
    /// bundled sample catalog.
    pub catalog: Option<PathBuf>,

    /// Records per page.
    #[arg(long, short = 'p')]
    pub page_size: Option<usize>,

    /// Color theme.
    #[arg(long)]
    pub theme: Option<ThemeArg>,

    /// Drop repeated titles after each "load more".
    #[arg(long)]
    pub dedupe: bool,

    /// Config file to read instead of the default location.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl Cli {
    /// Config file to load.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(AppConfig::config_path)
    }

    /// Overlay flags onto `config`.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(path) = &self.catalog {
            config.catalog.path = Some(path.clone());
        }
        if let Some(size) = self.page_size {
            config.catalog.page_size = size;
        }
        if let Some(theme) = self.theme {
            config.tui.theme = match theme {
                ThemeArg::Dark => "dark",
                ThemeArg::Light => "light",
            }
            .to_string();
        }
        if self.dedupe {
            config.catalog.dedupe_on_load_more = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_catalog_overrides_config() {
        let cli = Cli::try_parse_from(["shelfscan", "books.json"]).unwrap();
        let mut config = AppConfig::default();
        config.catalog.path = Some(PathBuf::from("configured.json"));

        cli.apply(&mut config);

        assert_eq!(config.catalog.path, Some(PathBuf::from("books.json")));
        assert_eq!(config.catalog.page_size, 8);
    }

    #[test]
    fn test_flags_apply() {
        let cli = Cli::try_parse_from(["shelfscan", "-p", "3", "--theme", "light", "--dedupe"]).unwrap();
        let mut config = AppConfig::default();

        cli.apply(&mut config);

        assert!(config.catalog.path.is_none());
        assert_eq!(config.page_size().get(), 3);
        assert_eq!(config.tui.theme, "light");
        assert!(config.catalog.dedupe_on_load_more);
    }

    #[test]
    fn test_no_flags_leave_config_alone() {
        let cli = Cli::try_parse_from(["shelfscan"]).unwrap();
        let mut config = AppConfig::default();
        config.catalog.dedupe_on_load_more = true;
        cli.apply(&mut config);
        assert!(config.catalog.dedupe_on_load_more);
        assert_eq!(config.tui.theme, "dark");
    }

    #[test]
    fn test_rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["shelfscan", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn test_config_flag() {
        let cli = Cli::try_parse_from(["shelfscan", "--config", "/tmp/s.toml"]).unwrap();
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/s.toml"));
    }
}
