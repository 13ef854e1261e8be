//! Sitemap configuration provider.
//!
//! [`SitemapConfig`] is the immutable value handed to the sitemap and
//! robots.txt writers: the site origin, the robots switch, exclusion globs,
//! robots policies, and the one derived input, the integration paths.
//!
//! ```ignore
//! let config = sitemap_config(Arc::new(JsonFileSource::new("integrations.json")));
//! let extra = config.additional_paths().await?;   // [{ loc: "/integrations/aws" }, ...]
//! ```

use crate::config::{RobotsTxtOptions, SiteConfig};
use crate::integrations::{IntegrationsPathSource, SourceError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Route prefix of every integration page.
pub const INTEGRATIONS_PREFIX: &str = "/integrations";

/// A site-relative sitemap location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub loc: String,
}

impl SitemapEntry {
    pub fn new(loc: impl Into<String>) -> Self {
        Self { loc: loc.into() }
    }
}

pub struct SitemapConfig {
    pub site_url: String,
    pub generate_robots_txt: bool,
    pub exclude: Vec<String>,
    pub robots_txt_options: RobotsTxtOptions,
    source: Arc<dyn IntegrationsPathSource>,
}

/// Production configuration of the marketing site, with integration paths
/// read from `source`.
pub fn sitemap_config(source: Arc<dyn IntegrationsPathSource>) -> SitemapConfig {
    SitemapConfig::from_site(&SiteConfig::default(), source)
}

impl SitemapConfig {
    /// Take the static fields from a loaded `sitemap.toml`.
    pub fn from_site(site: &SiteConfig, source: Arc<dyn IntegrationsPathSource>) -> Self {
        Self {
            site_url: site.site.origin().to_owned(),
            generate_robots_txt: site.sitemap.generate_robots_txt,
            exclude: site.sitemap.exclude.clone(),
            robots_txt_options: site.robots.clone(),
            source,
        }
    }

    /// Sitemap entries for every integration page, in source order.
    ///
    /// Slugs are neither filtered nor deduplicated. A failing source fails
    /// the call with its own error.
    pub async fn additional_paths(&self) -> Result<Vec<SitemapEntry>, SourceError> {
        let slugs = self.source.fetch_integration_slugs().await?;
        Ok(slugs
            .iter()
            .map(|slug| {
                SitemapEntry::new(format!(
                    "{INTEGRATIONS_PREFIX}/{}",
                    slug.segments().join("/")
                ))
            })
            .collect())
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}

impl fmt::Debug for SitemapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SitemapConfig")
            .field("site_url", &self.site_url)
            .field("generate_robots_txt", &self.generate_robots_txt)
            .field("exclude", &self.exclude)
            .field("robots_txt_options", &self.robots_txt_options)
            .field("source", &self.source.describe())
            .finish()
    }
}
