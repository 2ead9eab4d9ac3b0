//! Path comparison helpers

use std::path::{Path, PathBuf};

/// Best-effort absolute form of `path`.
///
/// Canonicalizes when the path exists; otherwise joins it onto the current
/// directory so that a not-yet-written output file still compares sensibly.
fn absolutize(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            parent.canonicalize().map(|p| p.join(name)).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => std::env::current_dir().map(|cwd| cwd.join(path)).unwrap_or_else(|_| path.to_path_buf()),
    }
}

/// Whether two paths name the same file location.
pub fn same_location(a: &Path, b: &Path) -> bool {
    absolutize(a) == absolutize(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_same_location_through_dot_segments() {
        let tmp = TempDir::new().expect("tmp");
        fs::create_dir(tmp.path().join("configs")).expect("mkdir");
        let file = tmp.path().join("configs").join("a.conf");
        fs::write(&file, "").expect("write");

        let indirect = tmp.path().join("configs").join(".").join("a.conf");
        assert!(same_location(&file, &indirect));
    }

    #[test]
    fn test_missing_file_compares_by_parent() {
        let tmp = TempDir::new().expect("tmp");
        let a = tmp.path().join("merged.conf");
        let b = tmp.path().join(".").join("merged.conf");
        assert!(same_location(&a, &b));
        assert!(!same_location(&a, &tmp.path().join("other.conf")));
    }
}
