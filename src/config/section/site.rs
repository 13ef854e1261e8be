//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! url = "https://www.cloudquery.io"   # Absolute origin prefixed to every sitemap <loc>
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Production origin of the marketing site.
pub const DEFAULT_SITE_URL: &str = "https://www.cloudquery.io";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Absolute site origin (e.g., "https://example.com").
    pub url: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SITE_URL.into(),
        }
    }
}

impl SiteSectionConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");

    /// Origin without trailing slash, ready for `format!("{origin}{path}")`.
    pub fn origin(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must parse as an absolute URL
    /// - scheme must be http or https, and a host must be present
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }
}
