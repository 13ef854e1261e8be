//! `[integrations]` section configuration.
//!
//! ```toml
//! [integrations]
//! source = "data/integrations.json"   # JSON slug list, or a directory of integration pages
//! ```
//!
//! Without a `source`, no integration paths are added to the sitemap.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationsSectionConfig {
    /// Where integration slugs come from (relative to site root, `~` expanded).
    pub source: Option<PathBuf>,
}
