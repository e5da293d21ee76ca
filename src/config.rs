use std::path::Path;

use tracing::warn;

use crate::core::BoardConfig;
use crate::error::ConfigError;
use crate::search::{SearchConfig, MAX_SEARCH_DEPTH};

/// Top-level engine configuration, loadable from TOML.
///
/// ```toml
/// [board]
/// columns = 7
/// rows = 6
///
/// [search]
/// depth = 5
/// alpha_beta = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;
        if !(1..=MAX_SEARCH_DEPTH).contains(&self.search.depth) {
            return Err(ConfigError::Validation(format!(
                "search.depth must be in 1..={MAX_SEARCH_DEPTH}, got {}",
                self.search.depth
            )));
        }
        Ok(())
    }

    /// Create a new config with custom board dimensions.
    pub fn with_board(mut self, columns: usize, rows: usize) -> Self {
        self.board = BoardConfig::new(columns, rows);
        self
    }

    /// Create a new config with custom search depth.
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search.depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board, BoardConfig::new(7, 6));
        assert_eq!(config.search.depth, 5);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str("[search]\ndepth = 3\n").unwrap();
        assert_eq!(config.search.depth, 3);
        assert!(config.search.alpha_beta);
        assert_eq!(config.board, BoardConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = EngineConfig::from_toml_str(
            "[board]\ncolumns = 9\nrows = 7\n\n[search]\ndepth = 4\nalpha_beta = false\n",
        )
        .unwrap();
        assert_eq!(config.board, BoardConfig::new(9, 7));
        assert_eq!(config.search, SearchConfig::default().with_depth(4).with_alpha_beta(false));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            EngineConfig::from_toml_str("[search]\ndepth = 0\n"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml_str("[board]\ncolumns = 2\n"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml_str("[board\n"),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let path = Path::new("/nonexistent/rust-boardgame.toml");
        assert_eq!(EngineConfig::load_or_default(path).unwrap(), EngineConfig::default());
        assert!(matches!(EngineConfig::load(path), Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default().with_board(8, 8).with_search_depth(2);
        assert_eq!(config.board.cell_count(), 64);
        assert_eq!(config.search.depth, 2);
    }
}
