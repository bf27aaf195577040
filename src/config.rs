//! Parser configuration.
//!
//! Loaded from a small TOML file:
//!
//! ```toml
//! grade_scale = "extended"
//! catalog = "data/catalog.toml"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::grades::GradeScale;
use crate::synonyms::{CatalogProvider, SynonymTable, load_table};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Which grade letters are recognized.
    pub grade_scale: GradeScale,
    /// Optional course catalog merged into the built-in synonyms.
    pub catalog: Option<PathBuf>,
}

impl ParserConfig {
    pub fn from_toml_str(toml_str: &str) -> ConfigResult<Self> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content)?;
        // Relative catalog paths are resolved against the config file.
        if let (Some(catalog), Some(dir)) = (&config.catalog, path.parent()) {
            if catalog.is_relative() {
                config.catalog = Some(dir.join(catalog));
            }
        }
        Ok(config)
    }

    /// Build the synonym table this configuration describes.
    pub fn synonym_table(&self) -> SynonymTable {
        match &self.catalog {
            Some(path) => load_table(&CatalogProvider::new(path)),
            None => SynonymTable::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.grade_scale, GradeScale::Standard);
        assert!(config.catalog.is_none());
        assert_eq!(ParserConfig::from_toml_str("").unwrap(), config);
    }

    #[test]
    fn parse_extended_scale() {
        let config = ParserConfig::from_toml_str("grade_scale = \"extended\"").unwrap();
        assert_eq!(config.grade_scale, GradeScale::Extended);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ParserConfig::from_toml_str("grading = \"strict\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn relative_catalog_resolves_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parser.toml");
        std::fs::write(&path, "catalog = \"catalog.toml\"").unwrap();
        let config = ParserConfig::load(&path).unwrap();
        assert_eq!(config.catalog, Some(dir.path().join("catalog.toml")));
    }

    #[test]
    fn missing_config_file() {
        let err = ParserConfig::load(Path::new("/nonexistent/parser.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn missing_catalog_falls_back_to_builtin() {
        let config = ParserConfig {
            catalog: Some(PathBuf::from("/nonexistent/catalog.toml")),
            ..Default::default()
        };
        assert_eq!(config.synonym_table(), SynonymTable::builtin());
    }
}
