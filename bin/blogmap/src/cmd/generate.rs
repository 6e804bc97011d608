//! Generate command - writes the sitemap

use std::{path::Path, time::Instant};

use blogmap_generator::{GenerateStats, SitemapGenerator};
use chrono::NaiveDate;
use color_eyre::eyre::{Result, WrapErr};

use crate::load_config;

/// Run the generate command.
///
/// Flags override the matching configuration values.
pub fn run(
    config_path: Option<&Path>,
    content_dir: Option<&Path>,
    output: Option<&Path>,
    base_url: Option<&str>,
    date: Option<NaiveDate>,
) -> Result<GenerateStats> {
    let start = Instant::now();
    tracing::info!(
        ?config_path,
        ?content_dir,
        ?output,
        ?base_url,
        ?date,
        "Starting sitemap generation"
    );

    let mut config = load_config(config_path)?;

    // Override base URL if specified via CLI
    if let Some(url) = base_url {
        tracing::info!(base_url = url, "Overriding base URL from CLI");
        config.site.base_url = url.to_string();
        config.validate().wrap_err("Invalid --base-url")?;
    }

    tracing::debug!(?config, "Loaded configuration");

    let content_dir = content_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.content.dir.clone().into());
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.output.path.clone().into());

    let mut generator = SitemapGenerator::new(config);
    if let Some(date) = date {
        generator = generator.with_date(date);
    }

    let stats = generator
        .generate(&content_dir, &output)
        .wrap_err("Sitemap generation failed")?;

    println!("Sitemap updated with {} blogs.", stats.posts);

    let duration = start.elapsed();
    tracing::info!(?stats, ?duration, "Sitemap generation completed");

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_run_with_overrides() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let blogs = dir.path().join("blogs");
        fs::create_dir(&blogs).expect("mkdir");
        fs::write(blogs.join("hello-world.json"), "{}").expect("write");
        let output = dir.path().join("sitemap.xml");
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");

        let stats = run(
            None,
            Some(blogs.as_path()),
            Some(output.as_path()),
            Some("https://example.com"),
            Some(date),
        )
        .expect("generate");

        assert_eq!(stats.posts, 1);
        let xml = fs::read_to_string(&output).expect("read");
        assert!(xml.contains("<loc>https://example.com/blog/hello-world</loc>"));
        assert!(xml.contains("<lastmod>2024-05-01</lastmod>"));
    }

    #[test]
    fn test_run_rejects_invalid_base_url() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("sitemap.xml");

        let result = run(None, Some(dir.path()), Some(output.as_path()), Some("ftp://x"), None);

        assert!(result.is_err());
        assert!(!output.exists());
    }
}
