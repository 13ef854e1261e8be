//! robots.txt generation.
//!
//! ```text
//! # *
//! User-agent: *
//! Allow: /
//! Disallow: /buy/*
//!
//! # Host
//! Host: https://www.cloudquery.io
//!
//! # Sitemaps
//! Sitemap: https://www.cloudquery.io/sitemap.xml
//! ```

use crate::config::RobotsPolicy;
use crate::log;
use crate::provider::SitemapConfig;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

pub const ROBOTS_FILENAME: &str = "robots.txt";

/// Render robots.txt for `config`, advertising `sitemaps` before any
/// configured additional sitemaps.
pub fn render_robots_txt(config: &SitemapConfig, sitemaps: &[String]) -> String {
    let mut out = String::with_capacity(512);

    for policy in &config.robots_txt_options.policies {
        push_policy(&mut out, policy);
        out.push('\n');
    }

    let _ = writeln!(out, "# Host");
    let _ = writeln!(out, "Host: {}", config.site_url.trim_end_matches('/'));

    let extra = &config.robots_txt_options.additional_sitemaps;
    if !sitemaps.is_empty() || !extra.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "# Sitemaps");
        for sitemap in sitemaps.iter().chain(extra) {
            let _ = writeln!(out, "Sitemap: {sitemap}");
        }
    }

    out
}

fn push_policy(out: &mut String, policy: &RobotsPolicy) {
    let _ = writeln!(out, "# {}", policy.user_agent);
    let _ = writeln!(out, "User-agent: {}", policy.user_agent);
    if !policy.allow.is_empty() {
        let _ = writeln!(out, "Allow: {}", policy.allow);
    }
    for rule in &policy.disallow {
        let _ = writeln!(out, "Disallow: {rule}");
    }
    if let Some(delay) = policy.crawl_delay {
        let _ = writeln!(out, "Crawl-delay: {delay}");
    }
}

/// Write robots.txt into `output`.
pub fn write_robots_txt(
    config: &SitemapConfig,
    output: &Path,
    sitemaps: &[String],
) -> Result<PathBuf> {
    let path = output.join(ROBOTS_FILENAME);
    let content = render_robots_txt(config, sitemaps);

    fs::write(&path, content)
        .with_context(|| format!("Failed to write robots.txt to {}", path.display()))?;

    log!("robots"; "{}", ROBOTS_FILENAME);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::StaticSource;
    use crate::provider::sitemap_config;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn config() -> SitemapConfig {
        sitemap_config(Arc::new(StaticSource::empty()))
    }

    #[test]
    fn test_render_default_policy() {
        let robots = render_robots_txt(
            &config(),
            &["https://www.cloudquery.io/sitemap.xml".to_string()],
        );

        assert_eq!(
            robots,
            "# *\n\
             User-agent: *\n\
             Allow: /\n\
             Disallow: /buy/*\n\
             Disallow: /landing/*\n\
             Disallow: /docs/plugins/sources/_*\n\
             Disallow: /docs/plugins/destinations/_*\n\
             Disallow: /docs/plugins/sources/*/_*\n\
             Disallow: /docs/plugins/destinations/*/_*\n\
             \n\
             # Host\n\
             Host: https://www.cloudquery.io\n\
             \n\
             # Sitemaps\n\
             Sitemap: https://www.cloudquery.io/sitemap.xml\n"
        );
    }

    #[test]
    fn test_render_multiple_policies_and_extra_sitemaps() {
        let mut config = config();
        config.robots_txt_options.policies = vec![
            RobotsPolicy {
                user_agent: "Googlebot".into(),
                allow: String::new(),
                disallow: vec!["/private/*".into()],
                crawl_delay: Some(10),
            },
            RobotsPolicy::default(),
        ];
        config.robots_txt_options.additional_sitemaps =
            vec!["https://www.cloudquery.io/docs-sitemap.xml".into()];

        let robots = render_robots_txt(&config, &["https://www.cloudquery.io/sitemap.xml".into()]);

        assert!(robots.starts_with("# Googlebot\nUser-agent: Googlebot\nDisallow: /private/*\nCrawl-delay: 10\n\n# *\nUser-agent: *\nAllow: /\n\n"));
        assert!(robots.ends_with(
            "Sitemap: https://www.cloudquery.io/sitemap.xml\n\
             Sitemap: https://www.cloudquery.io/docs-sitemap.xml\n"
        ));
    }

    #[test]
    fn test_render_without_sitemaps() {
        let robots = render_robots_txt(&config(), &[]);
        assert!(robots.ends_with("# Host\nHost: https://www.cloudquery.io\n"));
        assert!(!robots.contains("Sitemap:"));
    }

    #[test]
    fn test_write_robots_txt() {
        let dir = TempDir::new().unwrap();
        let path = write_robots_txt(&config(), dir.path(), &[]).unwrap();

        assert_eq!(path, dir.path().join(ROBOTS_FILENAME));
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("User-agent: *"));
    }
}
