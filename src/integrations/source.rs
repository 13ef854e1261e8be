//! The integrations source capability and its in-memory implementation.

use super::SourceError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Route parameters of one integration page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugParams {
    /// Path segments, e.g. `["aws", "s3"]`.
    pub slug: Vec<String>,
}

/// One integration page, shaped `{ "params": { "slug": [...] } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationSlug {
    pub params: SlugParams,
}

impl IntegrationSlug {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            params: SlugParams {
                slug: segments.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.params.slug
    }
}

/// Anything that can list the integration pages of the site.
#[async_trait]
pub trait IntegrationsPathSource: Send + Sync {
    /// Fetch every integration slug, in source order.
    async fn fetch_integration_slugs(&self) -> Result<Vec<IntegrationSlug>, SourceError>;

    /// Short label for log output.
    fn describe(&self) -> String;
}

/// Fixed slug list held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    slugs: Vec<IntegrationSlug>,
}

impl StaticSource {
    pub const fn new(slugs: Vec<IntegrationSlug>) -> Self {
        Self { slugs }
    }

    /// A source that yields no integrations.
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl IntegrationsPathSource for StaticSource {
    async fn fetch_integration_slugs(&self) -> Result<Vec<IntegrationSlug>, SourceError> {
        Ok(self.slugs.clone())
    }

    fn describe(&self) -> String {
        format!("{} static slugs", self.slugs.len())
    }
}
