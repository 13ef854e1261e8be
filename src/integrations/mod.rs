//! Integration page slugs.
//!
//! The sitemap lists one `/integrations/...` page per slug reported by an
//! [`IntegrationsPathSource`]. Sources are injected, so builds can read a
//! JSON export, walk a content directory, or use a fixed list in tests.
//!
//! | Source             | Backing data                                 |
//! |--------------------|----------------------------------------------|
//! | [`StaticSource`]   | In-memory list (empty when unconfigured)     |
//! | [`JsonFileSource`] | `[{ "params": { "slug": [...] } }]` file     |
//! | [`DirectorySource`]| Directory tree of integration pages          |

mod dir;
mod error;
mod json;
mod source;

pub use dir::DirectorySource;
pub use error::SourceError;
pub use json::JsonFileSource;
pub use source::{IntegrationSlug, IntegrationsPathSource, StaticSource};

use crate::config::IntegrationsSectionConfig;
use std::sync::Arc;

/// Build the source named by `[integrations] source`.
///
/// Directories are walked, anything else is read as JSON. A path that does
/// not exist yet is treated as JSON so the read error surfaces at fetch time.
pub fn from_config(config: &IntegrationsSectionConfig) -> Arc<dyn IntegrationsPathSource> {
    match &config.source {
        Some(path) if path.is_dir() => Arc::new(DirectorySource::new(path)),
        Some(path) => Arc::new(JsonFileSource::new(path)),
        None => Arc::new(StaticSource::empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_config_picks_source() {
        let dir = TempDir::new().unwrap();

        let none = from_config(&IntegrationsSectionConfig::default());
        assert_eq!(none.describe(), "0 static slugs");

        let walk = from_config(&IntegrationsSectionConfig {
            source: Some(dir.path().to_path_buf()),
        });
        assert!(walk.describe().ends_with('/'));

        let json_path = dir.path().join("integrations.json");
        let json = from_config(&IntegrationsSectionConfig {
            source: Some(json_path.clone()),
        });
        assert_eq!(json.describe(), json_path.display().to_string());
    }
}
