use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing::metadata::LevelFilter;

#[derive(clap::Args, Debug, Clone, Default, Serialize)]
pub struct Verbosity {
    /// Increase verbosity, can be repeated up to 2 times
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Verbosity {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Command-line flags. Every set flag overrides the config file and the
/// environment.
#[derive(Debug, Default, Parser, Serialize)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity
    #[command(flatten)]
    #[serde(skip)]
    pub verbose: Verbosity,

    /// Base URL of the token management backend
    #[arg(long, value_name = "URL")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// JSON file holding the last issued denom
    #[arg(long = "store", value_name = "PATH")]
    #[serde(rename = "store_path", skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,

    /// Log file, defaults to the user state directory
    #[arg(long = "log-file", value_name = "PATH")]
    #[serde(rename = "log_path", skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// TOML config file, defaults to the user config directory
    #[arg(long, value_name = "PATH")]
    #[serde(skip)]
    pub config: Option<PathBuf>,
}
