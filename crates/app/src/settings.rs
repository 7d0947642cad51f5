//! Resolves the extraction config and CLI overrides into grid types

use std::path::PathBuf;

use anyhow::{Context, Result};
use cardcut_config::{ExtractConfig, StrokeConfig, config_path_from_env};
use grid::{Color, GridShape, Margins, OverlayStyle, Stroke};
use tracing::info;

use crate::cli::Cli;

/// Geometry and strokes applied to every page of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub margins: Margins,
    pub shape: GridShape,
    pub style: OverlayStyle,
}

impl Settings {
    /// Load the config named on the command line or in the environment, then
    /// apply `--rows` and `--cols`.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        Self::resolve_with(cli, config_path_from_env())
    }

    /// Like [`Settings::resolve`] with the environment's config path passed in.
    /// `--config` wins over `env_path`.
    pub fn resolve_with(cli: &Cli, env_path: Option<PathBuf>) -> Result<Self> {
        let mut config = match cli.config.clone().or(env_path) {
            Some(path) => {
                info!("config: loading {}", path.display());
                ExtractConfig::load(&path).with_context(|| format!("loading config {}", path.display()))?
            }
            None => ExtractConfig::default(),
        };
        if let Some(rows) = cli.rows {
            config.rows = rows;
        }
        if let Some(cols) = cli.cols {
            config.cols = cols;
        }
        config.validate().context("applying command line overrides")?;
        Ok(Self::from(&config))
    }
}

impl From<&ExtractConfig> for Settings {
    fn from(config: &ExtractConfig) -> Self {
        let m = &config.margins;
        Self {
            margins: Margins::new(m.top, m.bottom, m.left, m.right),
            shape: GridShape::new(config.rows, config.cols),
            style: OverlayStyle {
                border: stroke(&config.border),
                grid: stroke(&config.grid),
            },
        }
    }
}

fn stroke(config: &StrokeConfig) -> Stroke {
    Stroke::new(config.thickness, Color::from(config.color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardcut_config::ConfigError;
    use clap::Parser;

    #[test]
    fn test_defaults_match_sheet_layout() {
        let settings = Settings::from(&ExtractConfig::default());
        assert_eq!(settings.margins, Margins::new(76, 76, 149, 149));
        assert_eq!(settings.shape, GridShape::new(3, 3));
        assert_eq!(settings.style, OverlayStyle::default());
    }

    fn write_config(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("cardcut-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_cli_overrides_shape() {
        let cli = Cli::try_parse_from(["cardcut", "--rows", "2", "--cols", "5", "page.png"]).unwrap();
        let settings = Settings::resolve_with(&cli, None).unwrap();
        assert_eq!(settings.shape, GridShape::new(2, 5));
        assert_eq!(settings.margins, Margins::new(76, 76, 149, 149));
    }

    #[test]
    fn test_zero_rows_rejected() {
        let cli = Cli::try_parse_from(["cardcut", "--rows", "0", "page.png"]).unwrap();
        let err = Settings::resolve_with(&cli, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::try_parse_from(["cardcut", "-c", "/nonexistent/cardcut.json", "page.png"]).unwrap();
        let err = Settings::resolve_with(&cli, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_env_path_used_without_flag() {
        let path = write_config("env", r#"{ "rows": 4 }"#);
        let cli = Cli::try_parse_from(["cardcut", "page.png"]).unwrap();
        let settings = Settings::resolve_with(&cli, Some(path.clone())).unwrap();
        assert_eq!(settings.shape, GridShape::new(4, 3));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_flag_wins_over_env_path() {
        let path = write_config("flag", r#"{ "cols": 2 }"#);
        let flag = path.to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["cardcut", "-c", flag.as_str(), "page.png"]).unwrap();
        let settings = Settings::resolve_with(&cli, Some(PathBuf::from("/nonexistent/env.json"))).unwrap();
        assert_eq!(settings.shape, GridShape::new(3, 2));
        std::fs::remove_file(path).unwrap();
    }
}
