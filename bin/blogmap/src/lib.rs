//! blogmap CLI Library
//!
//! This library provides the command implementations for the blogmap binary.
//! It is designed to be used by the binary entry point while also exposing
//! public APIs for integration in other build tooling.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (generate, check)
//!
//! # Example
//!
//! ```no_run
//! use blogmap::cmd;
//!
//! // Regenerate public/sitemap.xml with the default settings
//! cmd::generate::run(None, None, None, None, None).unwrap();
//! ```

use std::path::Path;

use blogmap_core::config::DEFAULT_CONFIG_FILE;
use color_eyre::eyre::{Result, WrapErr};

pub mod cmd;

// Re-export core types for convenience
pub use blogmap_core::{Config, ContentItem};
pub use blogmap_generator::{GenerateStats, SitemapGenerator};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// blogmap::init_tracing(2); // Enable DEBUG level logging
/// ```
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Load the configuration.
///
/// An explicit `path` must exist and is read as TOML whatever its extension.
/// Without one, `blogmap.toml` in the working directory is used when present
/// and built-in defaults otherwise. In both cases `BLOGMAP__*` environment
/// variables override file values.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            tracing::debug!(?path, "Loading configuration");
            Config::load(path)
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            tracing::debug!(?path, exists = path.exists(), "Loading configuration");
            Config::load_or_default(path)
        }
    };

    config.wrap_err("Failed to load configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_explicit_missing() {
        let err = load_config(Some(Path::new("/nonexistent/blogmap.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("not found"));
    }

    #[test]
    fn test_load_config_explicit_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "[site]\nbase_url = \"https://example.com\"\n").expect("write");

        let config = load_config(Some(path.as_path())).expect("load");
        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.static_pages.len(), 5);
    }

    #[test]
    fn test_load_config_explicit_file_any_extension() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("site.conf");
        std::fs::write(&path, "[site]\nbase_url = \"https://example.com\"\n").expect("write");

        let config = load_config(Some(path.as_path())).expect("load");
        assert_eq!(config.site.base_url, "https://example.com");
    }

    #[test]
    fn test_load_config_explicit_file_must_parse() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("site");
        std::fs::write(&path, "not = [valid toml").expect("write");

        assert!(load_config(Some(path.as_path())).is_err());
    }
}
