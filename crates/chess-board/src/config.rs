//! Configuration file loading for the board driver.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How pieces are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    /// Unicode chess symbols (♔, ♟, ...).
    #[default]
    Unicode,
    /// FEN letters, uppercase for White.
    Ascii,
}

/// Board driver configuration.
///
/// Every field has a default, so an empty or partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Piece drawing style.
    pub glyphs: GlyphStyle,
    /// Draw file letters and rank numbers around the board.
    pub coordinates: bool,
    /// Position to start from instead of the standard setup.
    pub start_fen: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            glyphs: GlyphStyle::Unicode,
            coordinates: true,
            start_fen: None,
        }
    }
}

impl BoardConfig {
    /// Loads the configuration.
    ///
    /// With an explicit `path` the file must exist. Without one,
    /// [`Self::default_path()`] is read if present and defaults are used
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, or
    /// [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = Self::default_path();
                if !default.exists() {
                    tracing::debug!("no {} found, using defaults", default.display());
                    return Ok(Self::default());
                }
                default
            }
        };

        let content =
            std::fs::read_to_string(&config_path).map_err(|source| ConfigError::ReadError {
                path: config_path.clone(),
                source,
            })?;
        let config = toml::from_str(&content)?;
        tracing::info!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Returns the path of the configuration file read when none is given.
    pub fn default_path() -> PathBuf {
        PathBuf::from("board.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_full_config() {
        let config: BoardConfig = toml::from_str(
            r#"
glyphs = "ascii"
coordinates = false
start_fen = "4k3/8/8/8/8/8/8/4K3 w"
"#,
        )
        .unwrap();
        assert_eq!(config.glyphs, GlyphStyle::Ascii);
        assert!(!config.coordinates);
        assert_eq!(config.start_fen.as_deref(), Some("4k3/8/8/8/8/8/8/4K3 w"));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: BoardConfig = toml::from_str("").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.glyphs, GlyphStyle::Unicode);
        assert!(config.coordinates);
    }

    #[test]
    fn unknown_glyph_style_is_an_error() {
        let result: Result<BoardConfig, _> = toml::from_str("glyphs = \"emoji\"");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "glyphs = \"ascii\"").unwrap();
        let config = BoardConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.glyphs, GlyphStyle::Ascii);
        assert!(config.coordinates);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = BoardConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "coordinates = maybe").unwrap();
        let err = BoardConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
