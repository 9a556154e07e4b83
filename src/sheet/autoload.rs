//! Convention-based piece discovery.
//!
//! A sheet named `buttons` picks up every PNG directly inside
//! `<sprite_pieces_path>/buttons/`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Check whether a path names a PNG file.
pub fn is_png(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("png")
}

/// Find the PNG files directly under `dir`.
///
/// Not recursive. A missing directory yields no files. Order follows
/// filesystem enumeration.
pub fn discover_pieces(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_png(p))
        .collect()
}

/// List the subdirectories of `root` that contain at least one PNG.
///
/// Sorted by name. Used to scaffold a manifest with one sheet per directory.
pub fn discover_sheet_dirs(root: &Path) -> Vec<String> {
    if !root.is_dir() {
        return Vec::new();
    }

    let mut names: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .filter(|e| !discover_pieces(e.path()).is_empty())
        .filter_map(|e| e.file_name().to_str().map(|s| s.to_string()))
        .collect();

    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_png() {
        assert!(is_png(Path::new("a/b.png")));
        assert!(!is_png(Path::new("a/b.gif")));
        assert!(!is_png(Path::new("a/png")));
    }

    #[test]
    fn test_discover_missing_directory() {
        assert!(discover_pieces(Path::new("/nonexistent/pieces/foo")).is_empty());
    }

    #[test]
    fn test_discover_only_direct_pngs() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ok.png"), b"").unwrap();
        fs::write(dir.path().join("cancel.png"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/deep.png"), b"").unwrap();

        let mut names: Vec<String> = discover_pieces(dir.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(names, vec!["cancel.png", "ok.png"]);
    }

    #[test]
    fn test_discover_sheet_dirs() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("icons")).unwrap();
        fs::create_dir_all(dir.path().join("buttons")).unwrap();
        fs::create_dir_all(dir.path().join("empty")).unwrap();
        fs::write(dir.path().join("icons/home.png"), b"").unwrap();
        fs::write(dir.path().join("buttons/ok.png"), b"").unwrap();
        fs::write(dir.path().join("loose.png"), b"").unwrap();

        assert_eq!(discover_sheet_dirs(dir.path()), vec!["buttons", "icons"]);
    }
}
