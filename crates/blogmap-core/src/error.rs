//! Error types for the blogmap core library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for blogmap.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Missing configuration file or invalid setting.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The content directory exists but could not be listed.
    #[error("Cannot read content directory {path}: {source}")]
    ContentDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A content file failed structural validation.
    #[error("Invalid content in {path}: {message}")]
    Content { path: PathBuf, message: String },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file or environment could not be read.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new content validation error.
    pub fn content(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Content {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CoreError::config("missing field");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_content_error() {
        let err = CoreError::content("blogs/post.json", "missing title");
        assert!(err.to_string().contains("Invalid content"));
        assert!(err.to_string().contains("blogs/post.json"));
    }

    #[test]
    fn test_content_dir_error_keeps_source() {
        let err = CoreError::ContentDir {
            path: PathBuf::from("blogs"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("blogs"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CoreError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }
}
