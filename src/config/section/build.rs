//! `[build]` section configuration.
//!
//! ```toml
//! [build]
//! output = "out"      # Static export directory scanned for pages (relative to site root)
//! minify = false      # Minify generated XML
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Static export directory. Pages are discovered here and the sitemap
    /// and robots.txt are written into it.
    pub output: PathBuf,

    /// Strip indentation and newlines from generated XML.
    pub minify: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "out".into(),
            minify: false,
        }
    }
}
