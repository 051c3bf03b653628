use std::collections::HashSet;
use std::path::PathBuf;

/// Folder names that never count as evidence of nested structure.
///
/// These only affect the subfolder check that picks between the deep and
/// flat scanning strategies; counting and scanning still descend into them.
pub const DEFAULT_IGNORED_FOLDERS: [&str; 5] = ["node_modules", ".git", ".next", "dist", "build"];

/// Configuration for scanning
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root directory to scan
    pub root: PathBuf,
    /// Folder names excluded from the subfolder-presence check
    pub ignore_names: HashSet<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignore_names: DEFAULT_IGNORED_FOLDERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ScanConfig {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ..Default::default()
        }
    }

    /// Extend the ignore set with additional folder names
    pub fn with_ignore_names(mut self, names: Vec<String>) -> Self {
        self.ignore_names.extend(names);
        self
    }

    /// Check if a folder name is excluded from the subfolder check
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore_names.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert!(config.is_ignored("node_modules"));
        assert!(config.is_ignored(".git"));
        assert!(config.is_ignored(".next"));
        assert!(config.is_ignored("dist"));
        assert!(config.is_ignored("build"));
        assert!(!config.is_ignored("src"));
    }

    #[test]
    fn test_config_builder() {
        let config = ScanConfig::new(PathBuf::from("/test"))
            .with_ignore_names(vec!["target".to_string(), "vendor".to_string()]);

        assert_eq!(config.root, PathBuf::from("/test"));
        assert!(config.is_ignored("target"));
        assert!(config.is_ignored("vendor"));
        // Defaults are kept when extending
        assert!(config.is_ignored("dist"));
    }
}
