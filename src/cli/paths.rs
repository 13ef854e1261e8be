//! Paths command: print the additional integration paths as JSON.

use crate::cli::PathsArgs;
use crate::config::SiteConfig;
use crate::integrations;
use crate::provider::{SitemapConfig, SitemapEntry};
use anyhow::Result;

/// Fetch the additional sitemap paths for `site`.
pub async fn additional_paths(site: &SiteConfig) -> Result<Vec<SitemapEntry>> {
    let config = SitemapConfig::from_site(site, integrations::from_config(&site.integrations));
    Ok(config.additional_paths().await?)
}

/// Execute paths command
pub async fn run_paths(args: &PathsArgs, site: &SiteConfig) -> Result<()> {
    let paths = additional_paths(site).await?;
    println!("{}", format_paths(&paths, args.pretty)?);
    Ok(())
}

fn format_paths(paths: &[SitemapEntry], pretty: bool) -> Result<String> {
    let formatted = if pretty {
        serde_json::to_string_pretty(paths)?
    } else {
        serde_json::to_string(paths)?
    };
    Ok(formatted)
}
