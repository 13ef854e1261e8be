//! Check command: explain how routes are treated by the sitemap and robots.txt.

use crate::cli::CheckArgs;
use crate::config::SiteConfig;
use crate::generator::matcher::{ExcludeMatcher, glob_matches};
use crate::log;
use anyhow::{Context, Result};

/// How a single route is treated.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteVerdict {
    pub route: String,
    /// First exclusion glob that drops the route from the sitemap.
    pub excluded_by: Option<String>,
    /// User agent of the first robots policy disallowing the route.
    pub disallowed_for: Option<String>,
}

/// Execute check command
pub fn run_check(args: &CheckArgs, site: &SiteConfig) -> Result<()> {
    for verdict in check_routes(&args.routes, site)? {
        match &verdict.excluded_by {
            Some(pattern) => log!("sitemap"; "{} excluded by `{}`", verdict.route, pattern),
            None => log!("sitemap"; "{} listed", verdict.route),
        }
        match &verdict.disallowed_for {
            Some(agent) => log!("robots"; "{} disallowed for `{}`", verdict.route, agent),
            None => log!("robots"; "{} allowed", verdict.route),
        }
    }
    Ok(())
}

pub fn check_routes(routes: &[String], site: &SiteConfig) -> Result<Vec<RouteVerdict>> {
    let matcher = ExcludeMatcher::new(&site.sitemap.exclude)
        .context("Failed to compile exclusion patterns")?;

    Ok(routes
        .iter()
        .map(|route| {
            let route = normalize_route(route);
            RouteVerdict {
                excluded_by: matcher.matching(&route).map(str::to_owned),
                disallowed_for: site
                    .robots
                    .disallowing(&route, glob_matches)
                    .map(|policy| policy.user_agent.clone()),
                route,
            }
        })
        .collect())
}

/// `pricing/` and `/pricing` both check `/pricing`.
fn normalize_route(route: &str) -> String {
    let trimmed = route.trim().trim_matches('/');
    format!("/{trimmed}")
}
