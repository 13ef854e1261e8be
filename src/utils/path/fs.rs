//! Filesystem path normalization.

use std::path::{Component, Path, PathBuf};

/// Make `path` absolute and free of `.` / `..` segments.
///
/// Existing paths are canonicalized. The export directory often does not
/// exist yet, so other paths are anchored at the cwd and cleaned lexically.
pub fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };
    clean(&absolute)
}

fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `/..` stays `/`
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_absolute_path_cleaned() {
        assert_eq!(
            normalize_path(Path::new("/srv/website/./build/../out")),
            PathBuf::from("/srv/website/out")
        );
        assert_eq!(normalize_path(Path::new("/../out")), PathBuf::from("/out"));
    }

    #[test]
    fn test_relative_path_anchored_at_cwd() {
        let normalized = normalize_path(Path::new("missing-export-dir/out"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("missing-export-dir/out"));
    }

    #[test]
    fn test_existing_path_canonicalized() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("out");
        std::fs::create_dir(&nested).unwrap();

        assert_eq!(
            normalize_path(&nested.join("..").join("out")),
            nested.canonicalize().unwrap()
        );
    }
}
