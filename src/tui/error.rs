use crate::api::ApiError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Errors that end the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, log file, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted store could not be opened or read.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be resolved.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The backend client could not be built.
    #[error("API client error: {0}")]
    Api(#[from] ApiError),

    /// A global `tracing` subscriber was already installed.
    #[error("Logging error: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn wraps_layer_errors() {
        let err: AppError = StorageError::NoDataDir.into();
        assert!(err.to_string().starts_with("Storage error:"));

        let err: AppError = ConfigError::MissingFile(PathBuf::from("/x.toml")).into();
        assert_eq!(err.to_string(), "Config error: config file not found: /x.toml");

        let err: AppError = ApiError::InvalidBaseUrl {
            url: "x".into(),
            reason: "relative URL without a base".into(),
        }
        .into();
        assert!(err.to_string().starts_with("API client error: invalid API base URL"));
    }
}
