//! Slugs read from a JSON file.
//!
//! ```json
//! [
//!   { "params": { "slug": ["aws"] } },
//!   { "params": { "slug": ["aws", "postgresql"] } }
//! ]
//! ```

use super::{IntegrationSlug, IntegrationsPathSource, SourceError};
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl IntegrationsPathSource for JsonFileSource {
    async fn fetch_integration_slugs(&self) -> Result<Vec<IntegrationSlug>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| SourceError::Io(self.path.clone(), err))?;

        serde_json::from_str(&content).map_err(|err| SourceError::Parse(self.path.clone(), err))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
