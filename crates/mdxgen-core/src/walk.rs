//! Filesystem traversal helpers for the content pass.
//!
//! The indices never touch the filesystem; everything they need from it
//! (visit order, per-directory markdown counts, emptiness) comes from here.
//! Traversal is depth-first with directories yielded before their contents
//! and entries sorted by file name, so category discovery order is
//! deterministic and parents always exist before their children.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Whether `path` names a markdown file.
#[must_use]
pub fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// Depth-first walk of `root`, directories before their contents, sorted by
/// file name. The root itself is not yielded.
pub fn walk(root: &Path) -> impl Iterator<Item = walkdir::DirEntry> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
}

/// Whether `dir` holds no markdown files anywhere in its subtree.
///
/// A directory with only non-markdown files, or only recursively-empty
/// subdirectories, counts as empty: it never becomes a category.
#[must_use]
pub fn is_dir_empty(dir: &Path) -> bool {
    !WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .any(|entry| entry.file_type().is_file() && is_markdown(entry.path()))
}

/// Recursive count of markdown files under `dir`.
///
/// Taken once per directory during traversal; this snapshot feeds the
/// category `total` and is intentionally independent of how many files
/// later parse into posts.
#[must_use]
pub fn count_markdowns(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file() && is_markdown(entry.path()))
        .count()
}

/// Path segments of `path` relative to `root`.
///
/// Returns an empty vector when `path` is not under `root`; the traversal
/// only ever passes paths it yielded itself.
#[must_use]
pub fn relative_segments(root: &Path, path: &Path) -> Vec<String> {
    path.strip_prefix(root)
        .map(|rel| {
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default()
}

/// Convenience: the relative segments of a file's containing directory.
#[must_use]
pub fn relative_dir_segments(root: &Path, path: &Path) -> Vec<String> {
    let parent = path.parent().map_or_else(PathBuf::new, Path::to_path_buf);
    relative_segments(root, &parent)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown(Path::new("a/post.md")));
        assert!(!is_markdown(Path::new("a/image.png")));
        assert!(!is_markdown(Path::new("a/md")));
    }

    #[test]
    fn test_walk_yields_dirs_before_contents() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a/one.md"));
        touch(&dir.path().join("a/b/two.md"));

        let visited: Vec<PathBuf> = walk(dir.path())
            .map(|e| e.path().strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        let pos = |p: &str| {
            visited
                .iter()
                .position(|v| v == Path::new(p))
                .unwrap_or(usize::MAX)
        };
        assert!(pos("a") < pos("a/one.md"));
        assert!(pos("a/b") < pos("a/b/two.md"));
    }

    #[test]
    fn test_dir_emptiness_is_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("empty/nested")).unwrap();
        touch(&dir.path().join("empty/notes.txt"));
        touch(&dir.path().join("full/deep/post.md"));

        assert!(is_dir_empty(&dir.path().join("empty")));
        assert!(!is_dir_empty(&dir.path().join("full")));
    }

    #[test]
    fn test_count_markdowns_recursive() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a/one.md"));
        touch(&dir.path().join("a/b/two.md"));
        touch(&dir.path().join("a/b/ignored.txt"));

        assert_eq!(count_markdowns(&dir.path().join("a")), 2);
        assert_eq!(count_markdowns(&dir.path().join("a/b")), 1);
    }

    #[test]
    fn test_relative_segments() {
        let root = Path::new("/blog");
        let path = Path::new("/blog/tech/rust/post.md");

        assert_eq!(
            relative_segments(root, path),
            vec!["tech", "rust", "post.md"]
        );
        assert_eq!(relative_dir_segments(root, path), vec!["tech", "rust"]);
        assert!(relative_segments(Path::new("/other"), path).is_empty());
    }
}
