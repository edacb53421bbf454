/*!
 * Directory traversal and content collection
 */

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use walkdir::WalkDir;

use crate::config::Config;
use crate::ensure;
use crate::error::Result;
use crate::filter::{posix_path, PathFilter};
use crate::report::FileReportInfo;
use crate::types::ScanResult;
use crate::writer::OUTPUT_DIR;

/// Receives notifications after each traversal decision
///
/// All methods default to no-ops so implementations override only what they
/// need. Only the scanner calls these; the filter stays pure.
pub trait ScanObserver {
    /// A file passed selection and its content was collected
    fn file_collected(&self, rel_path: &Path) {
        let _ = rel_path;
    }

    /// A file was rejected by the selection rules
    fn file_rejected(&self, rel_path: &Path) {
        let _ = rel_path;
    }

    /// A selected file could not be decoded as text and was skipped
    fn file_unreadable(&self, rel_path: &Path) {
        let _ = rel_path;
    }

    /// An excluded directory was pruned without being visited
    fn directory_pruned(&self, rel_path: &Path) {
        let _ = rel_path;
    }
}

/// Observer that ignores every notification
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Scanner statistics
#[derive(Debug, Clone, Default)]
pub struct ScannerStatistics {
    /// Number of files collected
    pub files_collected: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Details for each collected file
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Scanner for directory contents
///
/// Performs one single-threaded depth-first pass over the target directory,
/// pruning excluded subtrees before descending into them.
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Selection oracle built from the configured rule set
    filter: PathFilter,
    /// Decision listener
    observer: Arc<dyn ScanObserver>,
    /// Statistics for the last scan
    statistics: ScannerStatistics,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, observer: Arc<dyn ScanObserver>) -> Self {
        let filter = PathFilter::new(config.rules.clone());
        Self {
            config,
            filter,
            observer,
            statistics: ScannerStatistics::default(),
        }
    }

    /// Get statistics for the last scan
    pub fn get_statistics(&self) -> ScannerStatistics {
        self.statistics.clone()
    }

    /// Scan the target directory and collect selected file contents
    ///
    /// A missing or non-directory target aborts before any traversal; errors
    /// on individual entries are absorbed once the walk has started.
    pub fn scan(&mut self) -> Result<ScanResult> {
        let root = fs::canonicalize(&self.config.target_dir)?;
        ensure!(
            root.is_dir(),
            PathNotFound,
            "not a directory: {}",
            root.display()
        );

        self.statistics = ScannerStatistics::default();
        let mut result = ScanResult::new(root.clone());
        self.scan_directory(&root, Path::new(""), &mut result)?;
        Ok(result)
    }

    /// Scan one directory level and recurse into retained subdirectories
    fn scan_directory(
        &mut self,
        abs_path: &Path,
        rel_path: &Path,
        result: &mut ScanResult,
    ) -> Result<()> {
        let entries: Vec<walkdir::DirEntry> = WalkDir::new(abs_path)
            .max_depth(1)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .collect();

        // Split into directories and files
        let (dirs, files): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|e| e.file_type().is_dir());

        for entry in dirs {
            let entry_name = entry.file_name().to_string_lossy().to_string();
            let new_rel_path = rel_path.join(&entry_name);

            // The artifact directory under the root is never walked, so a
            // rescan of the same tree yields identical results
            if rel_path.as_os_str().is_empty() && entry_name == OUTPUT_DIR {
                continue;
            }

            if !self.filter.should_descend(&new_rel_path) {
                self.observer.directory_pruned(&new_rel_path);
                continue;
            }

            if let Err(e) = self.scan_directory(entry.path(), &new_rel_path, result) {
                eprintln!("Error processing directory {}: {}", entry.path().display(), e);
            }
        }

        for entry in files {
            let entry_name = entry.file_name().to_string_lossy().to_string();
            let new_rel_path = rel_path.join(&entry_name);

            if !self.filter.should_select(&new_rel_path) {
                self.observer.file_rejected(&new_rel_path);
                continue;
            }

            self.collect_file(entry.path(), &new_rel_path, result);
        }

        Ok(())
    }

    /// Read a selected file and record it in the scan result
    ///
    /// Files that do not decode as UTF-8 text are skipped without failing the
    /// scan; a text aggregator has no use for binary payloads. The read goes
    /// through `fs::read_to_string`, which closes the handle on every path,
    /// including the decode-failure path.
    fn collect_file(&mut self, abs_path: &Path, rel_path: &Path, result: &mut ScanResult) {
        let content = match fs::read_to_string(abs_path) {
            Ok(content) => content,
            Err(_) => {
                self.observer.file_unreadable(rel_path);
                return;
            }
        };

        let rel = posix_path(rel_path);
        let lines = content.lines().count();
        let chars = content.chars().count();
        self.statistics.files_collected += 1;
        self.statistics.total_lines += lines;
        self.statistics.total_chars += chars;
        self.statistics
            .file_details
            .insert(rel.clone(), FileReportInfo { lines, chars });

        let is_readme = rel_path
            .file_name()
            .map(|n| n.to_string_lossy().eq_ignore_ascii_case("readme.md"))
            .unwrap_or(false);

        result.structure.push(rel.clone());
        if is_readme && result.readme.is_none() {
            // First README wins; its content lives only in `readme`
            result.readme = Some(content);
        } else {
            result.file_contents.insert(rel, content);
        }

        self.observer.file_collected(rel_path);
    }
}
