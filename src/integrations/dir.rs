//! Slugs derived from a directory of integration pages.
//!
//! Each file below the root becomes one slug from its relative path,
//! without extension. `index.*` files stand for their directory:
//!
//! ```text
//! integrations/
//! ├── aws.mdx              -> ["aws"]
//! ├── aws/postgresql.mdx   -> ["aws", "postgresql"]
//! └── gcp/index.mdx        -> ["gcp"]
//! ```
//!
//! Only page files (`.md`, `.mdx`, `.html`) count; images and other assets
//! next to them are ignored. Hidden files are skipped, and the output is
//! sorted so builds are stable.

use super::{IntegrationSlug, IntegrationsPathSource, SourceError};
use async_trait::async_trait;
use jwalk::WalkDir;
use std::path::{Component, Path, PathBuf};

/// Extensions of files that are rendered as integration pages.
const PAGE_EXTENSIONS: &[&str] = &["md", "mdx", "html"];

#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl IntegrationsPathSource for DirectorySource {
    async fn fetch_integration_slugs(&self) -> Result<Vec<IntegrationSlug>, SourceError> {
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || scan_slugs(&root))
            .await
            .map_err(|err| SourceError::Unavailable(format!("directory scan task failed: {err}")))?
    }

    fn describe(&self) -> String {
        format!("{}/", self.root.display())
    }
}

fn scan_slugs(root: &Path) -> Result<Vec<IntegrationSlug>, SourceError> {
    if !root.is_dir() {
        return Err(SourceError::Walk(
            root.to_path_buf(),
            "not a directory".into(),
        ));
    }

    let mut slugs = Vec::new();
    for entry in WalkDir::new(root).skip_hidden(false) {
        let entry = entry.map_err(|err| SourceError::Walk(root.to_path_buf(), err.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if let Ok(relative) = path.strip_prefix(root)
            && let Some(segments) = slug_segments(relative)
        {
            slugs.push(segments);
        }
    }

    slugs.sort_unstable();
    slugs.dedup();
    Ok(slugs.into_iter().map(IntegrationSlug::new).collect())
}

/// `aws/postgresql.mdx` -> `["aws", "postgresql"]`; `None` for non-page
/// files, the root index and hidden entries.
fn slug_segments(relative: &Path) -> Option<Vec<String>> {
    let extension = relative.extension()?.to_str()?;
    if !PAGE_EXTENSIONS.contains(&extension) {
        return None;
    }

    let mut segments = Vec::new();
    for component in relative.with_extension("").components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str()?;
                if part.starts_with('.') {
                    return None;
                }
                segments.push(part.to_owned());
            }
            _ => return None,
        }
    }

    if segments.last().is_some_and(|last| last == "index") {
        segments.pop();
    }

    (!segments.is_empty()).then_some(segments)
}
