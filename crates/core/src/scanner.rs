use crate::config::ScanConfig;
use crate::counter;
use crate::models::{
    FileStructure, ScanMetadata, ScanReport, ScanStats, SegmentPath, ROOT_FILES_KEY,
};
use crate::probe::{self, EntryKind, ProbeError};
use crate::progress::ProgressSink;
use indexmap::IndexMap;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

/// Flat mapping from segment paths to filename lists, before regrouping
pub type FlatMap = IndexMap<SegmentPath, Vec<String>>;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot access directory: {}", path.display())]
    TargetUnreachable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no files found in {}", path.display())]
    EmptyTarget { path: PathBuf },
}

impl ScanError {
    fn from_probe(err: ProbeError) -> Self {
        match err {
            ProbeError::NotAccessible { path, source } => {
                ScanError::TargetUnreachable { path, source }
            }
        }
    }
}

/// Main scanner for summarizing a directory tree.
///
/// Traversal is synchronous and depth-first. Failures below the target are
/// recovered locally by treating the offending subpath as empty; only the
/// target itself can fail a scan.
pub struct FolderScanner {
    config: ScanConfig,
}

impl FolderScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Verify the target and run the counting pre-pass.
    ///
    /// Returns the total file count used as the progress denominator.
    /// This is where both fatal conditions surface: an unreachable target
    /// and a target with zero files anywhere below it.
    pub fn prepare(&self) -> Result<u64, ScanError> {
        probe::classify(&self.config.root).map_err(ScanError::from_probe)?;

        let total = counter::count_files(&self.config.root);
        if total == 0 {
            return Err(ScanError::EmptyTarget {
                path: self.config.root.clone(),
            });
        }

        Ok(total)
    }

    /// Scan the target and return the assembled structure.
    ///
    /// Advances `progress` once per file visited; directories never count.
    pub fn scan(&self, progress: &dyn ProgressSink) -> Result<ScanReport, ScanError> {
        let start = Instant::now();
        let root = self.config.root.clone();

        let entries = probe::list_entries(&root).map_err(ScanError::from_probe)?;

        let mut structure: IndexMap<String, FileStructure> = IndexMap::new();
        let mut root_files: Vec<String> = Vec::new();
        let mut stats = ScanStats::default();

        for name in entries {
            let path = root.join(&name);

            match probe::classify(&path) {
                Ok(EntryKind::Directory) => {
                    if self.has_subfolders(&path) {
                        let flat =
                            self.scan_folder(&path, &SegmentPath::root(), progress, &mut stats);
                        if !flat.is_empty() {
                            stats.deep_folders += 1;
                            structure.insert(name, group_by_parent(flat));
                        }
                    } else {
                        let files = self.list_files(&path, progress, &mut stats);
                        if !files.is_empty() {
                            stats.flat_folders += 1;
                            structure.insert(name, FileStructure::Files(files));
                        }
                    }
                }
                Ok(EntryKind::File) => {
                    progress.advance();
                    stats.files_seen += 1;
                    root_files.push(name);
                }
                // Special files and mid-scan stat failures are skipped
                Ok(EntryKind::Other) | Err(_) => {}
            }
        }

        if !root_files.is_empty() {
            stats.root_files = root_files.len();
            structure.insert(ROOT_FILES_KEY.to_string(), FileStructure::Files(root_files));
        }

        let duration = start.elapsed();
        let metadata = ScanMetadata {
            scan_duration_ms: duration.as_millis() as u64,
            files_per_second: if duration.as_secs_f64() > 0.0 {
                stats.files_seen as f64 / duration.as_secs_f64()
            } else {
                0.0
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        };

        Ok(ScanReport {
            root,
            structure: FileStructure::Nested(structure),
            stats,
            metadata,
        })
    }

    /// Shallow check: does `path` hold at least one non-ignored subfolder?
    ///
    /// One level only. A folder whose only subfolder is named `dist` is
    /// treated as flat even when `dist` holds nested content, and that
    /// content is then never visited on the flat branch.
    fn has_subfolders(&self, path: &Path) -> bool {
        let entries = match probe::list_entries(path) {
            Ok(entries) => entries,
            Err(_) => return false,
        };

        entries.iter().any(|name| {
            !self.config.is_ignored(name)
                && matches!(probe::classify(&path.join(name)), Ok(EntryKind::Directory))
        })
    }

    /// Depth-first walk producing a flat mapping for a subtree.
    ///
    /// Child subtrees are merged first, then the files directly held by
    /// `path` itself are stored under `rel` (the zero-segment path for the
    /// subtree's own root). The ignore set does not apply here.
    fn scan_folder(
        &self,
        path: &Path,
        rel: &SegmentPath,
        progress: &dyn ProgressSink,
        stats: &mut ScanStats,
    ) -> FlatMap {
        let mut result = FlatMap::new();

        let entries = match probe::list_entries(path) {
            Ok(entries) => entries,
            Err(_) => return result,
        };

        for name in &entries {
            let child = path.join(name);
            if matches!(probe::classify(&child), Ok(EntryKind::Directory)) {
                for (key, files) in self.scan_folder(&child, &rel.child(name), progress, stats) {
                    // Sibling subtrees descend into disjoint prefixes
                    let _clash = result.insert(key, files);
                    debug_assert!(_clash.is_none(), "flat keys collided across sibling subtrees");
                }
            }
        }

        let files = self.collect_files(path, &entries, progress, stats);
        if !files.is_empty() {
            result.insert(rel.clone(), files);
        }

        result
    }

    /// Non-recursive file listing for a folder without subfolders
    fn list_files(
        &self,
        path: &Path,
        progress: &dyn ProgressSink,
        stats: &mut ScanStats,
    ) -> Vec<String> {
        match probe::list_entries(path) {
            Ok(entries) => self.collect_files(path, &entries, progress, stats),
            Err(_) => Vec::new(),
        }
    }

    fn collect_files(
        &self,
        path: &Path,
        entries: &[String],
        progress: &dyn ProgressSink,
        stats: &mut ScanStats,
    ) -> Vec<String> {
        let mut files = Vec::new();

        for name in entries {
            if matches!(probe::classify(&path.join(name)), Ok(EntryKind::File)) {
                progress.advance();
                stats.files_seen += 1;
                files.push(name.clone());
            }
        }

        files
    }
}

/// Regroup a flat mapping by leading path segment, one level deep.
///
/// Keys of zero or one segments pass through unchanged (the zero-segment
/// path becomes the literal `""` key). Deeper keys land under their first
/// segment with the remainder kept slash-joined, so the output never nests
/// beyond two tiers. A folder's own files win over a group already built
/// under the same name.
pub fn group_by_parent(flat: FlatMap) -> FileStructure {
    let mut grouped: IndexMap<String, FileStructure> = IndexMap::new();

    for (key, files) in flat {
        match key.split_parent() {
            None => {
                grouped.insert(key.joined(), FileStructure::Files(files));
            }
            Some((parent, rest)) => {
                let slot = grouped
                    .entry(parent.to_string())
                    .or_insert_with(FileStructure::empty);
                if let FileStructure::Nested(children) = slot {
                    children.insert(rest.joined(), FileStructure::Files(files));
                }
            }
        }
    }

    FileStructure::Nested(grouped)
}
