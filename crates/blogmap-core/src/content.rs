//! Content directory scanning.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{CoreError, Result};

/// A published post discovered in the content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    /// URL slug: the filename with the content suffix removed.
    pub slug: String,

    /// Path of the file the slug was derived from.
    pub path: PathBuf,
}

impl ContentItem {
    /// Derive an item from a directory entry name.
    ///
    /// Returns `None` when the name does not end with `suffix`.
    pub fn from_name(dir: &Path, name: &str, suffix: &str) -> Option<Self> {
        let slug = name.strip_suffix(suffix)?;
        Some(Self {
            slug: slug.to_string(),
            path: dir.join(name),
        })
    }

    /// Read the file and check that it holds post metadata.
    pub fn load_meta(&self) -> Result<PostMeta> {
        let raw = fs::read_to_string(&self.path)?;
        let value: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|e| CoreError::content(&self.path, format!("invalid JSON: {e}")))?;

        if !value.is_object() {
            return Err(CoreError::content(&self.path, "expected a JSON object"));
        }

        serde_json::from_value(value).map_err(|e| CoreError::content(&self.path, e.to_string()))
    }
}

/// Metadata every post file is expected to carry.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMeta {
    /// Post title.
    pub title: String,

    /// Slug the site routes the post under.
    pub slug: String,

    /// Publication date as written in the file.
    #[serde(default)]
    pub date: Option<String>,
}

/// List the posts in `dir`, sorted by slug.
///
/// A missing directory yields no posts. Entries are selected by name only:
/// any entry whose name ends with `suffix` counts.
pub fn scan_content_dir(dir: &Path, suffix: &str) -> Result<Vec<ContentItem>> {
    if !dir.exists() {
        warn!(dir = %dir.display(), "content directory not found, listing no posts");
        return Ok(Vec::new());
    }

    let read_err = |source: std::io::Error| CoreError::ContentDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut items = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!(name = ?file_name, "skipping entry with non UTF-8 name");
            continue;
        };

        if let Some(item) = ContentItem::from_name(dir, name, suffix) {
            items.push(item);
        }
    }

    items.sort_by(|a, b| a.slug.cmp(&b.slug));
    debug!(dir = %dir.display(), count = items.len(), "scanned content directory");

    Ok(items)
}
