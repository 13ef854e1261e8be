//! Page discovery in the static export directory.
//!
//! Every `.html` file becomes a route (see [`html_file_to_route`]). Error
//! pages, framework internals and API routes never belong in a sitemap and
//! are skipped before exclusion globs are applied.

use crate::debug;
use crate::utils::path::html_file_to_route;
use jwalk::WalkDir;
use std::path::Path;

/// Routes that are never listed.
const IGNORED_ROUTES: &[&str] = &["/404", "/500"];

/// Collect page routes from `output`, sorted.
///
/// A missing export directory yields no pages.
pub fn discover_pages(output: &Path) -> Vec<String> {
    if !output.is_dir() {
        debug!("pages"; "{} does not exist, no pages discovered", output.display());
        return Vec::new();
    }

    let mut routes: Vec<String> = WalkDir::new(output)
        .skip_hidden(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let path = e.path();
            let relative = path.strip_prefix(output).ok()?;
            html_file_to_route(relative)
        })
        .filter(|route| !is_ignored_route(route))
        .collect();

    routes.sort_unstable();
    routes.dedup();
    routes
}

fn is_ignored_route(route: &str) -> bool {
    IGNORED_ROUTES.contains(&route)
        || route.starts_with("/_")
        || route.starts_with("/.")
        || route == "/api"
        || route.starts_with("/api/")
}
