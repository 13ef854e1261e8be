//! `[sitemap]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [sitemap]
//! generate_robots_txt = true      # Write robots.txt next to the sitemap
//! generate_index_sitemap = true   # sitemap.xml is an index over sitemap-N.xml chunks
//! sitemap_size = 5000             # Max <url> entries per sitemap file
//! changefreq = "daily"            # always | hourly | daily | weekly | monthly | yearly | never
//! priority = 0.7                  # 0.0 ..= 1.0
//! auto_lastmod = true             # Stamp every entry with the build date
//! exclude = ["/buy/*"]            # Glob patterns removed from discovered pages
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Pages kept out of the sitemap: purchase redirects, landing pages, and
/// underscore-prefixed plugin docs partials.
pub const DEFAULT_EXCLUDE: [&str; 6] = [
    "/buy/*",
    "/landing/*",
    "/docs/plugins/sources/_*",
    "/docs/plugins/destinations/_*",
    "/docs/plugins/sources/*/_*",
    "/docs/plugins/destinations/*/_*",
];

/// Owned copy of [`DEFAULT_EXCLUDE`].
pub fn default_exclude() -> Vec<String> {
    DEFAULT_EXCLUDE.iter().map(|s| (*s).to_owned()).collect()
}

/// `<changefreq>` values accepted by the sitemap protocol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapSectionConfig {
    /// Write robots.txt alongside the sitemap.
    pub generate_robots_txt: bool,
    /// Write `sitemap.xml` as a sitemap index over numbered chunks.
    pub generate_index_sitemap: bool,
    /// Maximum number of `<url>` entries per sitemap file.
    pub sitemap_size: usize,
    pub changefreq: ChangeFreq,
    pub priority: f32,
    /// Stamp entries with the build date as `<lastmod>`.
    pub auto_lastmod: bool,
    /// Glob patterns (`*` wildcard) matched against discovered page routes.
    pub exclude: Vec<String>,
}

impl Default for SitemapSectionConfig {
    fn default() -> Self {
        Self {
            generate_robots_txt: true,
            generate_index_sitemap: true,
            sitemap_size: 5000,
            changefreq: ChangeFreq::default(),
            priority: 0.7,
            auto_lastmod: true,
            exclude: default_exclude(),
        }
    }
}

impl SitemapSectionConfig {
    pub const SITEMAP_SIZE: FieldPath = FieldPath::new("sitemap.sitemap_size");
    pub const PRIORITY: FieldPath = FieldPath::new("sitemap.priority");

    /// Validate numeric limits. Exclusion globs are passed through unchecked.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.sitemap_size == 0 {
            diag.error_with_hint(
                Self::SITEMAP_SIZE,
                "must be greater than 0",
                "the sitemap protocol allows up to 50000 urls per file",
            );
        }

        if !(0.0..=1.0).contains(&self.priority) {
            diag.error(
                Self::PRIORITY,
                format!("{} is out of range, must be within 0.0 and 1.0", self.priority),
            );
        }
    }
}
