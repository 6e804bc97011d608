//! Sitemap configuration management.

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "blogmap.toml";

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "BLOGMAP";

/// Main configuration structure for blogmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Content directory settings.
    #[serde(default)]
    pub content: ContentConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Fixed pages listed ahead of the blog posts.
    #[serde(default = "default_static_pages")]
    pub static_pages: Vec<StaticPage>,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Origin prefixed to every URL (e.g., "https://example.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Content directory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding one file per published post.
    #[serde(default = "default_content_dir")]
    pub dir: String,

    /// File extension marking a post, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// URL path under which posts are served.
    #[serde(default = "default_blog_path")]
    pub blog_path: String,

    /// Change frequency stamped on every post.
    #[serde(default = "default_post_changefreq")]
    pub changefreq: ChangeFreq,

    /// Priority stamped on every post.
    #[serde(default = "default_post_priority")]
    pub priority: f32,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Destination of the sitemap document.
    #[serde(default = "default_output_path")]
    pub path: String,
}

/// A fixed site URL that is always listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticPage {
    /// Path relative to the base URL (e.g., "/privacy-policy").
    pub path: String,

    /// Change frequency hint.
    pub changefreq: ChangeFreq,

    /// Priority (0.0 to 1.0).
    pub priority: f32,
}

impl StaticPage {
    fn new(path: &str, changefreq: ChangeFreq, priority: f32) -> Self {
        Self {
            path: path.to_string(),
            changefreq,
            priority,
        }
    }
}

/// Change frequency for sitemap entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// Protocol spelling of the frequency.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://numguru.online".to_string()
}

fn default_content_dir() -> String {
    "src/content/blogs".to_string()
}

fn default_extension() -> String {
    "json".to_string()
}

fn default_blog_path() -> String {
    "/blog".to_string()
}

fn default_post_changefreq() -> ChangeFreq {
    ChangeFreq::Weekly
}

fn default_post_priority() -> f32 {
    0.7
}

fn default_output_path() -> String {
    "public/sitemap.xml".to_string()
}

fn default_static_pages() -> Vec<StaticPage> {
    vec![
        StaticPage::new("/", ChangeFreq::Daily, 1.0),
        StaticPage::new("/blog", ChangeFreq::Daily, 0.9),
        StaticPage::new("/privacy-policy", ChangeFreq::Monthly, 0.3),
        StaticPage::new("/terms-conditions", ChangeFreq::Monthly, 0.3),
        StaticPage::new("/refund-policy", ChangeFreq::Monthly, 0.3),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            content: ContentConfig::default(),
            output: OutputConfig::default(),
            static_pages: default_static_pages(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            extension: default_extension(),
            blog_path: default_blog_path(),
            changefreq: default_post_changefreq(),
            priority: default_post_priority(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl ContentConfig {
    /// Filename suffix selecting post files, including the dot.
    #[must_use]
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.'))
    }
}

impl Config {
    /// Load configuration from a TOML file that must exist.
    ///
    /// The file is parsed as TOML whatever its extension.
    /// `BLOGMAP__SECTION__KEY` environment variables override file values.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        Self::from_sources(path, true)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        Self::from_sources(path, false)
    }

    fn from_sources(path: &Path, required: bool) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let base_url = &self.site.base_url;
        if base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CoreError::config(
                "site.base_url must start with http:// or https://",
            ));
        }

        if base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        if self.content.extension.trim_start_matches('.').is_empty() {
            return Err(CoreError::config("content.extension cannot be empty"));
        }

        check_priority("content.priority", self.content.priority)?;
        for page in &self.static_pages {
            check_priority(&format!("static page {}", page.path), page.priority)?;
        }

        Ok(())
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Get the full URL of a blog post.
    pub fn post_url(&self, slug: &str) -> String {
        let blog = self.content.blog_path.trim_matches('/');
        if blog.is_empty() {
            self.url_for(slug)
        } else {
            self.url_for(&format!("{blog}/{slug}"))
        }
    }
}

// Priorities are written with one decimal place.
fn check_priority(what: &str, priority: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&priority) {
        return Err(CoreError::config(format!(
            "{what}: priority {priority} is outside 0.0..=1.0"
        )));
    }

    if ((priority * 10.0).round() - priority * 10.0).abs() > 1e-4 {
        return Err(CoreError::config(format!(
            "{what}: priority {priority} has more than one decimal place"
        )));
    }

    Ok(())
}
