//! Sitemap document model.
//!
//! Builds the XML sitemap text for search engine crawlers.

use std::io::Write;

use blogmap_core::{ChangeFreq, Config, ContentItem};
use chrono::NaiveDate;

/// Sitemap protocol namespace.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// A sitemap URL entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Absolute URL.
    pub loc: String,

    /// Last modification date.
    pub lastmod: NaiveDate,

    /// Change frequency.
    pub changefreq: ChangeFreq,

    /// Priority (0.0 to 1.0).
    pub priority: f32,
}

impl SitemapEntry {
    /// Convert the entry to its `<url>` block.
    fn to_xml(&self) -> String {
        let mut xml = String::from("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&self.loc)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            self.lastmod.format("%Y-%m-%d")
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            self.changefreq.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", self.priority));
        xml.push_str("  </url>\n");
        xml
    }
}

/// Ordered list of sitemap entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitemapDocument {
    entries: Vec<SitemapEntry>,
}

impl SitemapDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the document for a site: static pages first, then one entry per post.
    #[must_use]
    pub fn for_site(config: &Config, posts: &[ContentItem], date: NaiveDate) -> Self {
        let mut doc = Self::new();

        for page in &config.static_pages {
            doc.push(SitemapEntry {
                loc: config.url_for(&page.path),
                lastmod: date,
                changefreq: page.changefreq,
                priority: page.priority,
            });
        }

        for post in posts {
            doc.push(SitemapEntry {
                loc: config.post_url(&post.slug),
                lastmod: date,
                changefreq: config.content.changefreq,
                priority: config.content.priority,
            });
        }

        doc
    }

    /// Append an entry.
    pub fn push(&mut self, entry: SitemapEntry) {
        self.entries.push(entry);
    }

    /// Entries in document order.
    #[must_use]
    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to sitemap XML.
    #[must_use]
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in &self.entries {
            xml.push_str(&entry.to_xml());
        }

        // no trailing newline after the root element
        xml.push_str("</urlset>");
        xml
    }

    /// Write the XML to a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.to_xml().as_bytes())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
