//! URL route utilities.
//!
//! Maps files of a static export onto the routes they are served at:
//!
//! | File                      | Route          |
//! |---------------------------|----------------|
//! | `index.html`              | `/`            |
//! | `pricing.html`            | `/pricing`     |
//! | `docs/index.html`         | `/docs`        |
//! | `docs/plugins/aws.html`   | `/docs/plugins/aws` |

use std::path::{Component, Path};

/// Convert an exported `.html` file, relative to the export root, into its route.
///
/// Returns `None` for non-HTML files and for paths that are not plain
/// relative paths (e.g. containing `..` or a root).
pub fn html_file_to_route(relative: &Path) -> Option<String> {
    if relative.extension().and_then(|e| e.to_str()) != Some("html") {
        return None;
    }

    let mut segments = Vec::new();
    for component in relative.with_extension("").components() {
        match component {
            Component::Normal(part) => segments.push(part.to_str()?.to_owned()),
            Component::CurDir => {}
            _ => return None,
        }
    }

    if segments.last().is_some_and(|last| last == "index") {
        segments.pop();
    }

    Some(format!("/{}", segments.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_maps_to_root() {
        assert_eq!(html_file_to_route(Path::new("index.html")), Some("/".into()));
    }

    #[test]
    fn test_plain_and_nested_pages() {
        assert_eq!(
            html_file_to_route(Path::new("pricing.html")),
            Some("/pricing".into())
        );
        assert_eq!(
            html_file_to_route(Path::new("docs/index.html")),
            Some("/docs".into())
        );
        assert_eq!(
            html_file_to_route(Path::new("docs/plugins/sources/aws.html")),
            Some("/docs/plugins/sources/aws".into())
        );
    }

    #[test]
    fn test_non_html_ignored() {
        assert_eq!(html_file_to_route(Path::new("robots.txt")), None);
        assert_eq!(html_file_to_route(Path::new("_next/static/app.js")), None);
        assert_eq!(html_file_to_route(Path::new("docs")), None);
    }

    #[test]
    fn test_parent_components_rejected() {
        assert_eq!(html_file_to_route(Path::new("../outside.html")), None);
    }
}
