use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};

/// Environment variable naming a TOML config file to load when no
/// `--config` flag is given.
pub const CONFIG_ENV_VAR: &str = "PATTERN_CATALOG_CONFIG";

/// Runtime settings for the catalog binaries.
///
/// ```toml
/// scratch_dir = "target/scratch"
/// color = false
/// verbose = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Directory the SRP demos write their text files into.
    pub scratch_dir: PathBuf,
    /// Colored headings in `catalog list`.
    pub color: bool,
    /// Debug-level diagnostics on stderr.
    pub verbose: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            scratch_dir: PathBuf::from("."),
            color: true,
            verbose: false,
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CatalogConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads from `explicit`, else from `$PATTERN_CATALOG_CONFIG`, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.scratch_dir.as_os_str().is_empty() {
            return Err(CatalogError::Config("scratch_dir must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.scratch_dir, PathBuf::from("."));
        assert!(config.color);
        assert!(!config.verbose);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CatalogConfig::from_toml_str("color = false").unwrap();
        assert!(!config.color);
        assert_eq!(config.scratch_dir, PathBuf::from("."));
    }

    #[test]
    fn test_full_toml() {
        let config = CatalogConfig::from_toml_str(
            "scratch_dir = \"/tmp/scratch\"\ncolor = false\nverbose = true\n",
        )
        .unwrap();
        assert_eq!(config.scratch_dir, PathBuf::from("/tmp/scratch"));
        assert!(config.verbose);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = CatalogConfig::from_toml_str("colour = true").unwrap_err();
        assert!(matches!(err, CatalogError::ConfigParse(_)));
    }

    #[test]
    fn test_empty_scratch_dir_rejected() {
        let err = CatalogConfig::from_toml_str("scratch_dir = \"\"").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "verbose = true").unwrap();
        let config = CatalogConfig::load(Some(file.path())).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = CatalogConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
