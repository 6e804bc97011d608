//! Check command - validate configuration and content

use std::path::Path;

use blogmap_core::{Config, scan_content_dir};
use color_eyre::eyre::{Result, bail};

use crate::load_config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Collected errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Collected warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration and all content files.
pub fn run(config_path: Option<&Path>, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and content");

    println!("Checking configuration...");
    let config = match load_config(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            c
        }
        Err(e) => {
            println!("  ✗ Configuration invalid: {e:#}");
            bail!("Validation failed: configuration error");
        }
    };

    let result = validate(&config);

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    // Determine exit status
    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Validate the content directory and output location of `config`.
pub fn validate(config: &Config) -> ValidationResult {
    let mut result = ValidationResult::default();

    println!("\nChecking content files...");
    validate_content_files(config, &mut result);

    println!("\nChecking output location...");
    check_output(config, &mut result);

    result
}

/// Validate every post file in the content directory.
///
/// Generation lists posts by filename alone; this is where their contents
/// are checked.
fn validate_content_files(config: &Config, result: &mut ValidationResult) {
    let dir = Path::new(&config.content.dir);
    if !dir.exists() {
        result.add_warning(format!(
            "Content directory does not exist: {}",
            config.content.dir
        ));
        println!("  ⚠ {} missing, sitemap will list static pages only", dir.display());
        return;
    }

    let items = match scan_content_dir(dir, &config.content.suffix()) {
        Ok(items) => items,
        Err(e) => {
            result.add_error(e.to_string());
            println!("  ✗ {e}");
            return;
        }
    };

    let mut failed = 0;
    for item in &items {
        match item.load_meta() {
            Ok(meta) if meta.slug != item.slug => {
                result.add_warning(format!(
                    "{}: slug \"{}\" differs from filename slug \"{}\"",
                    item.path.display(),
                    meta.slug,
                    item.slug
                ));
            }
            Ok(_) => {}
            Err(e) => {
                result.add_error(e.to_string());
                failed += 1;
            }
        }
    }

    if failed == 0 {
        println!("  ✓ All {} content files valid", items.len());
    } else {
        println!("  ✗ {failed}/{} content files have errors", items.len());
    }
}

/// Check that the sitemap can be written where configured.
fn check_output(config: &Config, result: &mut ValidationResult) {
    let output = Path::new(&config.output.path);

    if output.is_dir() {
        result.add_error(format!(
            "Output path is a directory: {}",
            config.output.path
        ));
        println!("  ✗ {} is a directory", output.display());
        return;
    }

    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            result.add_error(format!(
                "Output directory missing: {}",
                parent.display()
            ));
            println!("  ✗ {}/ missing", parent.display());
        }
        _ => println!("  ✓ {} writable location", output.display()),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn config_for(dir: &Path) -> Config {
        let mut config = Config::default();
        config.content.dir = dir.join("blogs").to_string_lossy().to_string();
        config.output.path = dir.join("sitemap.xml").to_string_lossy().to_string();
        config
    }

    #[test]
    fn test_valid_content_passes() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let blogs = dir.path().join("blogs");
        fs::create_dir(&blogs).expect("mkdir");
        fs::write(
            blogs.join("hello.json"),
            r#"{"title": "Hello", "slug": "hello"}"#,
        )
        .expect("write");

        let result = validate(&config_for(dir.path()));

        assert!(result.errors().is_empty());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let blogs = dir.path().join("blogs");
        fs::create_dir(&blogs).expect("mkdir");
        fs::write(blogs.join("broken.json"), "{ not json").expect("write");

        let result = validate(&config_for(dir.path()));

        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].contains("broken.json"));
    }

    #[test]
    fn test_slug_mismatch_is_warning() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let blogs = dir.path().join("blogs");
        fs::create_dir(&blogs).expect("mkdir");
        fs::write(
            blogs.join("hello.json"),
            r#"{"title": "Hello", "slug": "hello-world"}"#,
        )
        .expect("write");

        let result = validate(&config_for(dir.path()));

        assert!(result.errors().is_empty());
        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].contains("hello-world"));
    }

    #[test]
    fn test_missing_content_dir_is_warning() {
        let dir = tempfile::tempdir().expect("create temp dir");

        let result = validate(&config_for(dir.path()));

        assert!(result.errors().is_empty());
        assert_eq!(result.warnings().len(), 1);
    }

    #[test]
    fn test_missing_output_dir_is_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut config = config_for(dir.path());
        config.output.path = dir
            .path()
            .join("public")
            .join("sitemap.xml")
            .to_string_lossy()
            .to_string();

        let result = validate(&config);

        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].contains("Output directory missing"));
    }
}
