use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::HearthError;

/// Default catalog directory, relative to the working directory.
pub const DEFAULT_CATALOG_DIR: &str = "catalogs";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct CatalogConfig {
    pub dir: Option<PathBuf>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("hearthstead").join("config.toml"))
}

/// Reads the config at `path`. An absent or unreadable file falls back to
/// the defaults; a file that exists but fails to parse is an error.
fn load_config_at(path: &Path) -> Result<Config, HearthError> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Ok(Config::default());
    };

    Ok(toml::from_str(&content)?)
}

pub fn load_config() -> Result<Config, HearthError> {
    match config_path() {
        Some(path) => load_config_at(&path),
        None => Ok(Config::default()),
    }
}

/// CLI flag beats the config file, which beats the default directory.
pub fn resolve_catalog_dir(cli_dir: Option<PathBuf>) -> Result<PathBuf, HearthError> {
    if let Some(dir) = cli_dir {
        return Ok(dir);
    }
    Ok(load_config()?
        .catalog
        .dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_DIR)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_config_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_at(&dir.path().join("config.toml")).unwrap();
        assert!(config.catalog.dir.is_none());
    }

    #[test]
    fn catalog_dir_comes_from_the_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[catalog]\ndir = \"/srv/catalogs\"\n").unwrap();

        let config = load_config_at(&path).unwrap();
        assert_eq!(config.catalog.dir, Some(PathBuf::from("/srv/catalogs")));
    }

    #[test]
    fn malformed_config_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[catalog\ndir = 3\n").unwrap();

        let err = load_config_at(&path).unwrap_err();
        assert!(matches!(err, HearthError::Config(_)), "{err}");
    }
}
