//! Build command: write the sitemap and robots.txt for an exported site.

use crate::config::SiteConfig;
use crate::generator::matcher::ExcludeMatcher;
use crate::generator::pages::discover_pages;
use crate::generator::robots::write_robots_txt;
use crate::generator::sitemap::{Sitemap, WrittenSitemaps};
use crate::integrations;
use crate::log;
use crate::provider::SitemapConfig;
use crate::utils::date::DateTimeUtc;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub pages: usize,
    pub additional: usize,
    pub urls: usize,
    pub sitemaps: WrittenSitemaps,
    pub robots: Option<PathBuf>,
}

/// Generate sitemap files (and robots.txt when enabled) for `site`.
///
/// The integrations source is read once; if it fails the build fails and
/// nothing is written.
pub async fn build_site(site: &SiteConfig) -> Result<BuildReport> {
    let config = SitemapConfig::from_site(site, integrations::from_config(&site.integrations));
    build_with(site, &config, DateTimeUtc::now()).await
}

async fn build_with(
    site: &SiteConfig,
    config: &SitemapConfig,
    now: DateTimeUtc,
) -> Result<BuildReport> {
    let matcher =
        ExcludeMatcher::new(&config.exclude).context("Failed to compile exclusion patterns")?;

    let pages = discover_pages(&site.build.output);
    log!("pages"; "found {} in {}", pages.len(), site.build.output.display());

    let additional = config.additional_paths().await.with_context(|| {
        format!(
            "Failed to load integration paths from {}",
            config.source_description()
        )
    })?;
    log!("integrations"; "{} paths from {}", additional.len(), config.source_description());

    let lastmod = site.sitemap.auto_lastmod.then(|| now.to_rfc3339());
    let sitemap = Sitemap::build(
        config,
        &site.sitemap,
        &matcher,
        &pages,
        &additional,
        lastmod.as_deref(),
    );
    let urls = sitemap.len();
    let sitemaps = sitemap.write(config, site, lastmod.as_deref())?;

    let robots = if config.generate_robots_txt {
        Some(write_robots_txt(
            config,
            &site.build.output,
            &sitemaps.advertised,
        )?)
    } else {
        None
    };

    Ok(BuildReport {
        pages: pages.len(),
        additional: additional.len(),
        urls,
        sitemaps,
        robots,
    })
}
