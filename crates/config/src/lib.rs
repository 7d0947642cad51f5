//! Shared configuration for cardcut
//!
//! This crate is the single source of truth for how a scanned card sheet is
//! cut: the margins around the printed grid, the number of rows and columns,
//! and the strokes used for the verification overlay. Defaults match the
//! 3x3 print-and-play timeline sheets.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming a config file when `--config` is not given
pub const CONFIG_ENV_VAR: &str = "CARDCUT_CONFIG";

/// Default margins in pixels
pub const DEFAULT_TOP_MARGIN: u32 = 76;
pub const DEFAULT_BOTTOM_MARGIN: u32 = 76;
pub const DEFAULT_LEFT_MARGIN: u32 = 149;
pub const DEFAULT_RIGHT_MARGIN: u32 = 149;

/// Default grid shape
pub const DEFAULT_ROWS: u32 = 3;
pub const DEFAULT_COLS: u32 = 3;

/// Default stroke widths in pixels
pub const DEFAULT_BORDER_THICKNESS: u32 = 1;
pub const DEFAULT_GRID_THICKNESS: u32 = 3;

/// Opaque black
pub const DEFAULT_LINE_COLOR: [u8; 4] = [0, 0, 0, 255];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Insets around the printed grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginConfig {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP_MARGIN,
            bottom: DEFAULT_BOTTOM_MARGIN,
            left: DEFAULT_LEFT_MARGIN,
            right: DEFAULT_RIGHT_MARGIN,
        }
    }
}

/// One overlay stroke: width in pixels and RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeConfig {
    pub thickness: u32,
    #[serde(default = "default_line_color")]
    pub color: [u8; 4],
}

fn default_line_color() -> [u8; 4] {
    DEFAULT_LINE_COLOR
}

impl StrokeConfig {
    pub fn new(thickness: u32) -> Self {
        Self {
            thickness,
            color: DEFAULT_LINE_COLOR,
        }
    }
}

/// Everything needed to cut one kind of sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub margins: MarginConfig,
    pub rows: u32,
    pub cols: u32,
    /// Stroke for the four margin borders
    pub border: StrokeConfig,
    /// Stroke for the lines between cells
    pub grid: StrokeConfig,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            margins: MarginConfig::default(),
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            border: StrokeConfig::new(DEFAULT_BORDER_THICKNESS),
            grid: StrokeConfig::new(DEFAULT_GRID_THICKNESS),
        }
    }
}

impl ExtractConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject settings that can never describe a grid. Whether the margins fit
    /// a particular page is only known once the page is decoded.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.border.thickness == 0 || self.grid.thickness == 0 {
            return Err(ConfigError::Invalid("stroke thickness must be at least 1".into()));
        }
        Ok(())
    }
}

/// Config path from [`CONFIG_ENV_VAR`], if set and non-empty
pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractConfig::default();
        assert_eq!(config.margins.left, 149);
        assert_eq!(config.margins.top, 76);
        assert_eq!((config.rows, config.cols), (3, 3));
        assert_eq!(config.border.thickness, 1);
        assert_eq!(config.grid.thickness, 3);
        assert_eq!(config.grid.color, DEFAULT_LINE_COLOR);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ExtractConfig::from_json_str(r#"{ "rows": 2, "margins": { "left": 10 } }"#).unwrap();
        assert_eq!(config.rows, 2);
        assert_eq!(config.cols, DEFAULT_COLS);
        assert_eq!(config.margins.left, 10);
        assert_eq!(config.margins.right, DEFAULT_RIGHT_MARGIN);
    }

    #[test]
    fn test_stroke_color_from_json() {
        let config =
            ExtractConfig::from_json_str(r#"{ "grid": { "thickness": 5, "color": [255, 0, 0, 255] } }"#).unwrap();
        assert_eq!(config.grid, StrokeConfig { thickness: 5, color: [255, 0, 0, 255] });
        assert_eq!(config.border, StrokeConfig::new(DEFAULT_BORDER_THICKNESS));
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            ExtractConfig::from_json_str(r#"{ "cols": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ExtractConfig::from_json_str(r#"{ "border": { "thickness": 0 } }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(ExtractConfig::from_json_str("{ rows: 3"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ExtractConfig::load("/nonexistent/cardcut.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_serialize_round_trips_defaults() {
        let json = serde_json::to_string(&ExtractConfig::default()).unwrap();
        assert_eq!(ExtractConfig::from_json_str(&json).unwrap(), ExtractConfig::default());
    }
}
