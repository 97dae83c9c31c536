//! `config.toml` loading.
//!
//! Lookup order for the file itself: `--config`, then `REGVIEW_CONFIG`, then
//! `$XDG_CONFIG_HOME/regview/config.toml`. A missing file yields defaults.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::types::LogLevel;

pub const CONFIG_ENV: &str = "REGVIEW_CONFIG";

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Catalog JSON file
    #[serde(default)]
    pub catalog: Option<String>,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    #[serde(default)]
    pub level: Option<LogLevel>,

    /// Where logs go while the terminal UI is running
    #[serde(default)]
    pub file: Option<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load using the standard lookup order.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match resolve_config_path(explicit) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Catalog path with the command-line value taking precedence.
    pub fn catalog_path(&self, cli_override: Option<&str>) -> Option<PathBuf> {
        cli_override
            .or(self.catalog.as_deref())
            .map(expand_tilde)
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log.file.as_deref().map(expand_tilde)
    }
}

pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(expand_tilde(path));
    }
    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        return Some(expand_tilde(&path));
    }
    default_config_path()
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("regview").join("config.toml"))
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_full_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "catalog = \"/srv/catalog.json\"\n[log]\nlevel = \"debug\"\nfile = \"/tmp/regview.log\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.catalog.as_deref(), Some("/srv/catalog.json"));
        assert_eq!(config.log.level, Some(LogLevel::Debug));
        assert_eq!(config.log_file(), Some(PathBuf::from("/tmp/regview.log")));
    }

    #[test]
    fn test_unknown_key_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "catalogue = \"typo.json\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_cli_catalog_overrides_config() {
        let config = Config {
            catalog: Some("from-config.json".to_string()),
            ..Config::default()
        };
        assert_eq!(
            config.catalog_path(Some("from-cli.json")),
            Some(PathBuf::from("from-cli.json"))
        );
        assert_eq!(
            config.catalog_path(None),
            Some(PathBuf::from("from-config.json"))
        );
        assert_eq!(Config::default().catalog_path(None), None);
    }

    #[test]
    fn test_explicit_path_wins() {
        assert_eq!(
            resolve_config_path(Some("/etc/regview.toml")),
            Some(PathBuf::from("/etc/regview.toml"))
        );
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde("rel/~/path"), PathBuf::from("rel/~/path"));
    }
}
