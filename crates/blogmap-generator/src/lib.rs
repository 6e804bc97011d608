//! blogmap Generator Library
//!
//! Sitemap generation engine for blogmap.
//!
//! # Modules
//!
//! - [`sitemap`] - Sitemap entries and XML serialization
//! - [`generate`] - Content scanning and sitemap file output

pub mod generate;
pub mod sitemap;

pub use generate::{GenerateStats, SitemapError, SitemapGenerator, generate};
pub use sitemap::{SitemapDocument, SitemapEntry};
