use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Key under which loose files directly below the scan root are collected
pub const ROOT_FILES_KEY: &str = "root";

/// A folder tree summarized as filename lists grouped by folder.
///
/// Each key maps either to the files directly held under it or to a nested
/// structure one level deeper. Map keys keep insertion order so the
/// serialized output reads in traversal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileStructure {
    Files(Vec<String>),
    Nested(IndexMap<String, FileStructure>),
}

impl FileStructure {
    pub fn empty() -> Self {
        FileStructure::Nested(IndexMap::new())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FileStructure::Files(files) => files.is_empty(),
            FileStructure::Nested(children) => children.is_empty(),
        }
    }

    pub fn as_files(&self) -> Option<&[String]> {
        match self {
            FileStructure::Files(files) => Some(files),
            FileStructure::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&IndexMap<String, FileStructure>> {
        match self {
            FileStructure::Files(_) => None,
            FileStructure::Nested(children) => Some(children),
        }
    }

    /// Total number of filenames anywhere in the structure
    pub fn file_count(&self) -> usize {
        match self {
            FileStructure::Files(files) => files.len(),
            FileStructure::Nested(children) => children.values().map(|v| v.file_count()).sum(),
        }
    }
}

/// A relative path held as an explicit segment list.
///
/// Keys are kept as segments throughout the scan and only joined with `/`
/// at the grouping boundary, so a filename can never be confused with a
/// join artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SegmentPath(Vec<String>);

impl SegmentPath {
    /// The zero-segment path, which joins to the empty string
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// A new path one segment deeper
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.to_string());
        Self(segments)
    }

    /// Split off the leading segment when there are at least two.
    ///
    /// Paths of zero or one segments have no parent to group under and
    /// return `None`.
    pub fn split_parent(&self) -> Option<(&str, SegmentPath)> {
        if self.0.len() < 2 {
            return None;
        }
        Some((&self.0[0], SegmentPath(self.0[1..].to_vec())))
    }

    /// Slash-joined form used as a map key in the final output
    pub fn joined(&self) -> String {
        self.0.join("/")
    }
}

impl fmt::Display for SegmentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined())
    }
}

/// Result of a full scan
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Scanned root path
    pub root: PathBuf,
    /// The assembled folder/file structure
    pub structure: FileStructure,
    /// Scan statistics
    pub stats: ScanStats,
    /// Scan metadata
    pub metadata: ScanMetadata,
}

/// Statistics about a scan
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanStats {
    /// Files visited by the main scan (progress advances once per file)
    pub files_seen: u64,
    /// Loose files directly under the scan root
    pub root_files: usize,
    /// Top-level folders scanned with the recursive strategy
    pub deep_folders: usize,
    /// Top-level folders scanned with the flat strategy
    pub flat_folders: usize,
}

/// Scan metadata
#[derive(Debug, Clone, Serialize)]
pub struct ScanMetadata {
    pub scan_duration_ms: u64,
    pub files_per_second: f64,
    pub timestamp: String,
    pub tool_version: String,
}

impl Default for ScanMetadata {
    fn default() -> Self {
        Self {
            scan_duration_ms: 0,
            files_per_second: 0.0,
            timestamp: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
