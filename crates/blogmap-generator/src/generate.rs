//! Sitemap generation.
//!
//! Scans the content directory and writes the sitemap document.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use blogmap_core::{Config, CoreError, scan_content_dir};
use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::{debug, info};

use crate::sitemap::SitemapDocument;

/// Sitemap generation errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// The sitemap file could not be written.
    #[error("failed to write sitemap to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content scanning or configuration error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateStats {
    /// Number of fixed pages written.
    pub static_entries: usize,

    /// Number of blog posts written.
    pub posts: usize,

    /// Where the sitemap was written.
    pub output: PathBuf,
}

/// Sitemap generator.
#[derive(Debug)]
pub struct SitemapGenerator {
    config: Config,
    date: Option<NaiveDate>,
}

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config, date: None }
    }

    /// Stamp entries with `date` instead of today's date.
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    fn date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Scan the content directory and build the document.
    pub fn document(&self, content_dir: &Path) -> Result<SitemapDocument> {
        let posts = scan_content_dir(content_dir, &self.config.content.suffix())?;
        Ok(SitemapDocument::for_site(&self.config, &posts, self.date()))
    }

    /// Generate the sitemap and overwrite `output` with it.
    pub fn generate(&self, content_dir: &Path, output: &Path) -> Result<GenerateStats> {
        debug!(
            content = %content_dir.display(),
            output = %output.display(),
            base_url = %self.config.site.base_url,
            "generating sitemap"
        );

        let doc = self.document(content_dir)?;
        let static_entries = self.config.static_pages.len();
        let posts = doc.len() - static_entries;

        let write_err = |source: std::io::Error| SitemapError::Write {
            path: output.to_path_buf(),
            source,
        };
        let mut file = File::create(output).map_err(write_err)?;
        doc.write_to(&mut file).map_err(write_err)?;

        info!(posts, output = %output.display(), "sitemap updated");

        Ok(GenerateStats {
            static_entries,
            posts,
            output: output.to_path_buf(),
        })
    }
}

/// Generate a sitemap for `base_url` using the default pages and content rules.
pub fn generate(content_dir: &Path, output: &Path, base_url: &str) -> Result<GenerateStats> {
    let mut config = Config::default();
    config.site.base_url = base_url.to_string();
    config.validate()?;

    SitemapGenerator::new(config).generate(content_dir, output)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
    }

    #[test]
    fn test_generate_counts_posts() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let blogs = dir.path().join("blogs");
        fs::create_dir(&blogs).expect("mkdir");
        fs::write(blogs.join("a.json"), "{}").expect("write");
        fs::write(blogs.join("b.json"), "{}").expect("write");
        let output = dir.path().join("sitemap.xml");

        let stats = SitemapGenerator::new(Config::default())
            .with_date(date())
            .generate(&blogs, &output)
            .expect("generate");

        assert_eq!(stats.static_entries, 5);
        assert_eq!(stats.posts, 2);
        assert_eq!(stats.output, output);
    }

    #[test]
    fn test_generate_missing_parent_is_write_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("missing").join("sitemap.xml");

        let err = SitemapGenerator::new(Config::default())
            .generate(&dir.path().join("blogs"), &output)
            .unwrap_err();

        assert!(matches!(err, SitemapError::Write { .. }));
        assert!(err.to_string().contains("sitemap.xml"));
    }

    #[test]
    fn test_generate_rejects_bad_base_url() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = generate(dir.path(), &dir.path().join("sitemap.xml"), "").unwrap_err();

        assert!(matches!(err, SitemapError::Core(_)));
    }

    #[test]
    fn test_document_uses_injected_date() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let doc = SitemapGenerator::new(Config::default())
            .with_date(date())
            .document(dir.path())
            .expect("document");

        assert!(doc.entries().iter().all(|e| e.lastmod == date()));
    }
}
