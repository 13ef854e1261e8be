//! Dotted TOML key names used in diagnostics.

/// Full key of a config field, e.g. `sitemap.sitemap_size`.
///
/// Sections declare these as associated constants so that diagnostics and
/// their tests refer to the same key:
///
/// ```ignore
/// impl SitemapSectionConfig {
///     pub const PRIORITY: FieldPath = FieldPath::new("sitemap.priority");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Table the key lives in (`sitemap` for `sitemap.priority`).
    pub fn section(&self) -> &'static str {
        self.0.split_once('.').map_or(self.0, |(section, _)| section)
    }
}
