//! Sitemap generation.
//!
//! Lists every discovered page that survives the exclusion globs, followed
//! by the additional integration paths, for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01T00:00:00Z</lastmod>
//!     <changefreq>daily</changefreq>
//!     <priority>0.7</priority>
//!   </url>
//! </urlset>
//! ```
//!
//! With `generate_index_sitemap`, entries are split into `sitemap-0.xml`,
//! `sitemap-1.xml`, ... of at most `sitemap_size` urls each, and
//! `sitemap.xml` becomes a `<sitemapindex>` pointing at them.

use super::{escape_xml, matcher::ExcludeMatcher, minify_xml};
use crate::config::{ChangeFreq, SiteConfig, SitemapSectionConfig};
use crate::provider::{SitemapConfig, SitemapEntry};
use crate::{debug, log};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// File name of the sitemap (or sitemap index) crawlers are pointed at.
pub const SITEMAP_FILENAME: &str = "sitemap.xml";

pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
    changefreq: Option<ChangeFreq>,
    priority: Option<f32>,
}

/// Result of [`Sitemap::write`].
#[derive(Debug, Default)]
pub struct WrittenSitemaps {
    /// Every file written, chunks first.
    pub files: Vec<PathBuf>,
    /// Absolute URLs to advertise in robots.txt.
    pub advertised: Vec<String>,
}

impl Sitemap {
    /// Assemble entries: kept pages in route order, then `additional` as given.
    ///
    /// Only discovered pages go through `matcher`; additional paths are
    /// listed verbatim.
    pub fn build(
        config: &SitemapConfig,
        options: &SitemapSectionConfig,
        matcher: &ExcludeMatcher,
        pages: &[String],
        additional: &[SitemapEntry],
        lastmod: Option<&str>,
    ) -> Self {
        let origin = config.site_url.trim_end_matches('/');

        let kept = pages.iter().filter(|route| {
            if !matcher.is_excluded(route) {
                return true;
            }
            debug!(
                "sitemap";
                "excluding {} ({})",
                route,
                matcher.matching(route).unwrap_or_default()
            );
            false
        });

        let urls = kept
            .map(String::as_str)
            .chain(additional.iter().map(|entry| entry.loc.as_str()))
            .map(|path| UrlEntry {
                loc: format!("{origin}{path}"),
                lastmod: lastmod.map(str::to_owned),
                changefreq: Some(options.changefreq),
                priority: Some(options.priority),
            })
            .collect();

        Self { urls }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Write the sitemap files into `site.build.output`.
    pub fn write(
        self,
        config: &SitemapConfig,
        site: &SiteConfig,
        lastmod: Option<&str>,
    ) -> Result<WrittenSitemaps> {
        let output = &site.build.output;
        let minify = site.build.minify;
        let origin = config.site_url.trim_end_matches('/');

        fs::create_dir_all(output)
            .with_context(|| format!("Failed to create output dir {}", output.display()))?;

        let size = site.sitemap.sitemap_size.max(1);
        let chunks: Vec<&[UrlEntry]> = if self.urls.is_empty() {
            vec![self.urls.as_slice()]
        } else {
            self.urls.chunks(size).collect()
        };

        let mut written = WrittenSitemaps::default();
        let single = !site.sitemap.generate_index_sitemap && chunks.len() == 1;
        remove_stale_chunks(output, if single { 0 } else { chunks.len() })?;

        if single {
            let path = output.join(SITEMAP_FILENAME);
            write_xml(&path, &urlset_xml(chunks[0]), minify)?;
            written.files.push(path);
            written
                .advertised
                .push(format!("{origin}/{SITEMAP_FILENAME}"));
            return Ok(written);
        }

        let mut chunk_urls = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            let name = format!("sitemap-{i}.xml");
            let path = output.join(&name);
            write_xml(&path, &urlset_xml(chunk), minify)?;
            written.files.push(path);
            chunk_urls.push(format!("{origin}/{name}"));
        }

        if site.sitemap.generate_index_sitemap {
            let path = output.join(SITEMAP_FILENAME);
            write_xml(&path, &index_xml(&chunk_urls, lastmod), minify)?;
            written.files.push(path);
            written
                .advertised
                .push(format!("{origin}/{SITEMAP_FILENAME}"));
        } else {
            written.advertised = chunk_urls;
        }

        Ok(written)
    }
}

/// Delete `sitemap-N.xml` files left by an earlier build with `N >= keep`.
fn remove_stale_chunks(output: &Path, keep: usize) -> Result<()> {
    let entries = fs::read_dir(output)
        .with_context(|| format!("Failed to read output dir {}", output.display()))?;

    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(index) = name.to_str().and_then(chunk_index) else {
            continue;
        };
        if index >= keep {
            let path = entry.path();
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove stale sitemap {}", path.display()))?;
            debug!("sitemap"; "removed stale {}", path.display());
        }
    }
    Ok(())
}

/// `sitemap-3.xml` -> `Some(3)`.
fn chunk_index(name: &str) -> Option<usize> {
    name.strip_prefix("sitemap-")?
        .strip_suffix(".xml")?
        .parse()
        .ok()
}

fn urlset_xml(urls: &[UrlEntry]) -> String {
    let mut xml = String::with_capacity(4096);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in urls {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_xml(&entry.loc));
        xml.push_str("</loc>\n");
        if let Some(lastmod) = &entry.lastmod {
            xml.push_str("    <lastmod>");
            xml.push_str(lastmod);
            xml.push_str("</lastmod>\n");
        }
        if let Some(changefreq) = entry.changefreq {
            xml.push_str("    <changefreq>");
            xml.push_str(changefreq.as_str());
            xml.push_str("</changefreq>\n");
        }
        if let Some(priority) = entry.priority {
            xml.push_str(&format!("    <priority>{priority}</priority>\n"));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn index_xml(sitemaps: &[String], lastmod: Option<&str>) -> String {
    let mut xml = String::with_capacity(256 + sitemaps.len() * 96);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<sitemapindex xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for loc in sitemaps {
        xml.push_str("  <sitemap>\n    <loc>");
        xml.push_str(&escape_xml(loc));
        xml.push_str("</loc>\n");
        if let Some(lastmod) = lastmod {
            xml.push_str("    <lastmod>");
            xml.push_str(lastmod);
            xml.push_str("</lastmod>\n");
        }
        xml.push_str("  </sitemap>\n");
    }

    xml.push_str("</sitemapindex>\n");
    xml
}

fn write_xml(path: &Path, xml: &str, minify: bool) -> Result<()> {
    let xml = minify_xml(xml.as_bytes(), minify);
    fs::write(path, &*xml)
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

    log!("sitemap"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EXCLUDE;
    use crate::integrations::StaticSource;
    use crate::provider::sitemap_config;
    use quick_xml::Reader;
    use quick_xml::events::Event;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn entry(loc: &str, lastmod: Option<&str>) -> UrlEntry {
        UrlEntry {
            loc: loc.to_string(),
            lastmod: lastmod.map(str::to_owned),
            changefreq: None,
            priority: None,
        }
    }

    fn config() -> SitemapConfig {
        sitemap_config(Arc::new(StaticSource::empty()))
    }

    fn build(pages: &[&str], additional: &[&str]) -> Sitemap {
        let config = config();
        let matcher = ExcludeMatcher::new(&config.exclude).unwrap();
        let pages: Vec<String> = pages.iter().map(|p| (*p).to_string()).collect();
        let additional: Vec<SitemapEntry> = additional.iter().map(|p| SitemapEntry::new(*p)).collect();
        Sitemap::build(
            &config,
            &SitemapSectionConfig::default(),
            &matcher,
            &pages,
            &additional,
            Some("2025-01-01T00:00:00Z"),
        )
    }

    fn site_in(dir: &Path) -> SiteConfig {
        let mut site = SiteConfig::default();
        site.build.output = dir.join("out");
        site
    }

    /// Returns (element names, text nodes) and fails on malformed XML.
    fn parse(xml: &str) -> (Vec<String>, Vec<String>) {
        let mut reader = Reader::from_str(xml);
        let mut names = Vec::new();
        let mut texts = Vec::new();
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) => {
                    names.push(String::from_utf8(e.name().as_ref().to_vec()).unwrap())
                }
                Event::Text(t) => {
                    let text = String::from_utf8(t.to_vec()).unwrap();
                    if !text.trim().is_empty() {
                        texts.push(text);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }
        (names, texts)
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = urlset_xml(&[]);

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_single_page() {
        let xml = urlset_xml(&[entry("https://example.com/", Some("2025-01-01"))]);

        assert!(xml.contains("<url>"));
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<lastmod>2025-01-01</lastmod>"));
        assert!(xml.contains("</url>"));
    }

    #[test]
    fn test_sitemap_without_optional_fields() {
        let xml = urlset_xml(&[entry("https://example.com/", None)]);

        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(!xml.contains("<lastmod>"));
        assert!(!xml.contains("<changefreq>"));
        assert!(!xml.contains("<priority>"));
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let xml = urlset_xml(&[entry("https://example.com/search?q=a&b=c", None)]);

        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
        parse(&xml);
    }

    #[test]
    fn test_build_filters_pages_and_appends_additional() {
        let sitemap = build(
            &["/", "/buy/pro", "/docs/plugins/sources/_intro", "/pricing"],
            &["/integrations/aws", "/integrations/aws"],
        );
        let xml = urlset_xml(&sitemap.urls);
        let (_, texts) = parse(&xml);
        let locs: Vec<&str> = texts
            .iter()
            .map(String::as_str)
            .filter(|t| t.starts_with("https://"))
            .collect();

        assert_eq!(sitemap.len(), 4);
        assert_eq!(
            locs,
            vec![
                "https://www.cloudquery.io/",
                "https://www.cloudquery.io/pricing",
                "https://www.cloudquery.io/integrations/aws",
                "https://www.cloudquery.io/integrations/aws",
            ]
        );
    }

    #[test]
    fn test_additional_paths_not_filtered() {
        let sitemap = build(&[], &["/buy/integration"]);
        assert_eq!(sitemap.len(), 1);
        assert_eq!(sitemap.urls[0].loc, "https://www.cloudquery.io/buy/integration");
    }

    #[test]
    fn test_build_applies_entry_defaults() {
        let sitemap = build(&["/"], &[]);
        let xml = urlset_xml(&sitemap.urls);

        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.contains("<priority>0.7</priority>"));
        assert!(xml.contains("<lastmod>2025-01-01T00:00:00Z</lastmod>"));
    }

    #[test]
    fn test_index_xml_structure() {
        let xml = index_xml(
            &[
                "https://example.com/sitemap-0.xml".to_string(),
                "https://example.com/sitemap-1.xml".to_string(),
            ],
            None,
        );
        let (names, texts) = parse(&xml);

        assert_eq!(names[0], "sitemapindex");
        assert_eq!(names.iter().filter(|n| *n == "sitemap").count(), 2);
        assert_eq!(
            texts,
            vec![
                "https://example.com/sitemap-0.xml",
                "https://example.com/sitemap-1.xml"
            ]
        );
    }

    #[test]
    fn test_write_with_index() {
        let dir = TempDir::new().unwrap();
        let site = site_in(dir.path());

        let written = build(&["/", "/pricing"], &["/integrations/aws"])
            .write(&config(), &site, None)
            .unwrap();

        let out = dir.path().join("out");
        assert_eq!(
            written.files,
            vec![out.join("sitemap-0.xml"), out.join(SITEMAP_FILENAME)]
        );
        assert_eq!(
            written.advertised,
            vec!["https://www.cloudquery.io/sitemap.xml"]
        );

        let index = fs::read_to_string(out.join(SITEMAP_FILENAME)).unwrap();
        assert!(index.contains("<loc>https://www.cloudquery.io/sitemap-0.xml</loc>"));
        let chunk = fs::read_to_string(out.join("sitemap-0.xml")).unwrap();
        assert_eq!(chunk.matches("<url>").count(), 3);
    }

    #[test]
    fn test_write_chunks_by_size() {
        let dir = TempDir::new().unwrap();
        let mut site = site_in(dir.path());
        site.sitemap.sitemap_size = 2;

        let written = build(&["/", "/a", "/b", "/c", "/d"], &[])
            .write(&config(), &site, Some("2025-01-01T00:00:00Z"))
            .unwrap();

        let out = dir.path().join("out");
        assert_eq!(written.files.len(), 4);
        for (i, expected) in [2, 2, 1].into_iter().enumerate() {
            let chunk = fs::read_to_string(out.join(format!("sitemap-{i}.xml"))).unwrap();
            assert_eq!(chunk.matches("<url>").count(), expected);
        }

        let index = fs::read_to_string(out.join(SITEMAP_FILENAME)).unwrap();
        assert_eq!(index.matches("<sitemap>").count(), 3);
        assert!(index.contains("<lastmod>2025-01-01T00:00:00Z</lastmod>"));
    }

    #[test]
    fn test_write_without_index_single_file() {
        let dir = TempDir::new().unwrap();
        let mut site = site_in(dir.path());
        site.sitemap.generate_index_sitemap = false;

        let written = build(&["/"], &[]).write(&config(), &site, None).unwrap();

        let out = dir.path().join("out");
        assert_eq!(written.files, vec![out.join(SITEMAP_FILENAME)]);
        let xml = fs::read_to_string(out.join(SITEMAP_FILENAME)).unwrap();
        assert!(xml.contains("<urlset"));
        assert!(!out.join("sitemap-0.xml").exists());
    }

    #[test]
    fn test_write_without_index_multiple_chunks() {
        let dir = TempDir::new().unwrap();
        let mut site = site_in(dir.path());
        site.sitemap.generate_index_sitemap = false;
        site.sitemap.sitemap_size = 1;

        let written = build(&["/", "/pricing"], &[])
            .write(&config(), &site, None)
            .unwrap();

        assert_eq!(
            written.advertised,
            vec![
                "https://www.cloudquery.io/sitemap-0.xml",
                "https://www.cloudquery.io/sitemap-1.xml"
            ]
        );
        assert!(!dir.path().join("out").join(SITEMAP_FILENAME).exists());
    }

    #[test]
    fn test_write_empty_sitemap() {
        let dir = TempDir::new().unwrap();
        let site = site_in(dir.path());

        let written = build(&[], &[]).write(&config(), &site, None).unwrap();
        assert_eq!(written.files.len(), 2);

        let chunk = fs::read_to_string(dir.path().join("out/sitemap-0.xml")).unwrap();
        assert!(!chunk.contains("<url>"));
    }

    #[test]
    fn test_chunk_index() {
        assert_eq!(chunk_index("sitemap-0.xml"), Some(0));
        assert_eq!(chunk_index("sitemap-12.xml"), Some(12));
        assert_eq!(chunk_index("sitemap.xml"), None);
        assert_eq!(chunk_index("sitemap-docs.xml"), None);
    }

    #[test]
    fn test_rebuild_removes_stale_chunks() {
        let dir = TempDir::new().unwrap();
        let mut site = site_in(dir.path());
        site.sitemap.sitemap_size = 1;
        let out = dir.path().join("out");

        build(&["/", "/a", "/b"], &[])
            .write(&config(), &site, None)
            .unwrap();
        assert!(out.join("sitemap-2.xml").exists());
        fs::write(out.join("sitemap-docs.xml"), "<urlset/>").unwrap();

        build(&["/"], &[]).write(&config(), &site, None).unwrap();
        assert!(out.join("sitemap-0.xml").exists());
        assert!(!out.join("sitemap-1.xml").exists());
        assert!(!out.join("sitemap-2.xml").exists());
        assert!(out.join("sitemap-docs.xml").exists());

        site.sitemap.generate_index_sitemap = false;
        build(&["/"], &[]).write(&config(), &site, None).unwrap();
        assert!(!out.join("sitemap-0.xml").exists());
        let xml = fs::read_to_string(out.join(SITEMAP_FILENAME)).unwrap();
        assert!(xml.contains("<urlset"));
    }

    #[test]
    fn test_write_minified() {
        let dir = TempDir::new().unwrap();
        let mut site = site_in(dir.path());
        site.build.minify = true;

        build(&["/"], &[]).write(&config(), &site, None).unwrap();

        let xml = fs::read_to_string(dir.path().join("out/sitemap-0.xml")).unwrap();
        assert!(!xml.contains('\n'));
        parse(&xml);
    }

    #[test]
    fn test_default_exclude_used_by_matcher() {
        assert_eq!(config().exclude, DEFAULT_EXCLUDE);
    }
}
