use std::path::Path;
use walkdir::WalkDir;

/// Count every non-directory entry below `root`, best effort.
///
/// This drives the progress denominator only, so it deliberately differs
/// from the scan itself: the ignore set does not apply, and unreadable
/// subtrees contribute 0 instead of failing the count.
pub fn count_files(root: &Path) -> u64 {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| !e.file_type().is_dir())
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_counts_nested_files() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        File::create(dir.path().join("sub/b.txt")).unwrap();
        File::create(dir.path().join("sub/deeper/c.txt")).unwrap();

        assert_eq!(count_files(dir.path()), 3);
    }

    #[test]
    fn test_counts_inside_ignored_folders() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        File::create(dir.path().join("node_modules/pkg/index.js")).unwrap();
        File::create(dir.path().join("main.js")).unwrap();

        // The ignore set only affects the subfolder check, never the count
        assert_eq!(count_files(dir.path()), 2);
    }

    #[test]
    fn test_empty_directory_counts_zero() {
        let dir = TempDir::new().unwrap();
        assert_eq!(count_files(dir.path()), 0);
    }

    #[test]
    fn test_missing_root_counts_zero() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nowhere");
        assert_eq!(count_files(&missing), 0);
    }

    #[test]
    fn test_plain_file_root_counts_zero() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("lonely.txt");
        File::create(&file_path).unwrap();

        // Only entries strictly below the root count
        assert_eq!(count_files(&file_path), 0);
    }
}
