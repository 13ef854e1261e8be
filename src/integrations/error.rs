//! Integrations source errors.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain integration slugs from a source.
///
/// Returned unchanged by `SitemapConfig::additional_paths`; the build
/// decides whether it is fatal.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read integrations from `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse integrations from `{0}`")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("failed to walk integrations directory `{0}`: {1}")]
    Walk(PathBuf, String),

    #[error("integrations source unavailable: {0}")]
    Unavailable(String),
}
