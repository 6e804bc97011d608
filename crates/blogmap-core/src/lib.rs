//! blogmap Core Library
//!
//! Configuration, error handling and content scanning for the blogmap sitemap generator.

pub mod config;
pub mod content;
pub mod error;

pub use config::{ChangeFreq, Config, StaticPage};
pub use content::{ContentItem, PostMeta, scan_content_dir};
pub use error::{CoreError, Result};
