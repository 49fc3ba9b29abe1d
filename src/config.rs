//! Layered configuration: built-in defaults, then the TOML file, then
//! `COREUM_FT_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;
use crate::cli::Cli;

/// Prefix of the environment variables read as configuration.
pub const ENV_PREFIX: &str = "COREUM_FT_";

const APP_DIR: &str = "coreum-ft";

/// Errors raised while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("could not determine the user {0} directory")]
    NoDir(&'static str),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the backend, endpoint paths are appended to it.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Store file; `None` uses the user data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,

    /// Log file; `None` uses the user state directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,
}

fn default_api_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            store_path: None,
            log_path: None,
        }
    }
}

impl Config {
    /// Resolves the configuration for `cli`.
    ///
    /// An explicit `--config` path must exist; the default config file is
    /// optional.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) if !path.is_file() => return Err(ConfigError::MissingFile(path.clone())),
            Some(path) => path.clone(),
            None => default_config_file()?,
        };
        Self::from_figment(Self::figment(&file).merge(Serialized::defaults(cli)))
    }

    /// Defaults, `file` and the environment, without command-line flags.
    pub fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        figment.extract().map_err(|e| ConfigError::Invalid(Box::new(e)))
    }

    /// Path of the log file, falling back to the user state directory.
    pub fn log_file(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_path {
            Some(path) => Ok(path.clone()),
            None => {
                let dir = dirs::state_dir()
                    .or_else(dirs::data_local_dir)
                    .ok_or(ConfigError::NoDir("state"))?;
                Ok(dir.join(APP_DIR).join("coreum-ft.log"))
            }
        }
    }
}

/// `$XDG_CONFIG_HOME/coreum-ft/config.toml` or the platform equivalent.
pub fn default_config_file() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoDir("config"))?;
    Ok(dir.join(APP_DIR).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, body).unwrap();
        path
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("coreum-ft").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::from_figment(Config::figment(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.api_url, DEFAULT_BASE_URL);
        assert_eq!(config.store_path, None);
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "api_url = \"http://node:9000/api\"\nstore_path = \"/var/lib/s.json\"\n",
        );
        let config = Config::from_figment(Config::figment(&path)).unwrap();
        assert_eq!(config.api_url, "http://node:9000/api");
        assert_eq!(config.store_path, Some(PathBuf::from("/var/lib/s.json")));
    }

    #[test]
    fn flags_override_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "api_url = \"http://file/api\"\nlog_path = \"f.log\"\n");
        let path_arg = path.to_string_lossy().into_owned();
        let config = Config::load(&cli(&[
            "--config",
            &path_arg,
            "--api-url",
            "http://flag/api",
        ]))
        .unwrap();
        assert_eq!(config.api_url, "http://flag/api");
        assert_eq!(config.log_path, Some(PathBuf::from("f.log")));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let missing_arg = missing.to_string_lossy().into_owned();
        let err = Config::load(&cli(&["--config", &missing_arg])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(p) if p == missing));
    }

    #[test]
    fn malformed_value_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "api_url = [\"a\", \"b\"]\n");
        let err = Config::from_figment(Config::figment(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn explicit_log_path_wins() {
        let config = Config {
            log_path: Some(PathBuf::from("/tmp/x.log")),
            ..Config::default()
        };
        assert_eq!(config.log_file().unwrap(), PathBuf::from("/tmp/x.log"));
    }
}
