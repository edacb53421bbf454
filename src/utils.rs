/*!
 * Utility functions for FolderPrep
 */

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::Config;
use crate::filter::PathFilter;
use crate::writer::OUTPUT_DIR;

/// Count the files a scan would collect, for progress tracking
///
/// Mirrors the scanner's descend and selection rules. Decode failures cannot
/// be predicted here, so the count is an upper bound.
pub fn count_files(dir: &Path, config: &Config) -> u64 {
    let root = match fs::canonicalize(dir) {
        Ok(root) => root,
        Err(_) => return 0,
    };
    let filter = PathFilter::new(config.rules.clone());

    let walker = WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let rel = match entry.path().strip_prefix(&root) {
                Ok(rel) => rel,
                Err(_) => return true,
            };
            if rel.as_os_str().is_empty() {
                // The root itself
                return true;
            }
            if entry.file_type().is_dir() {
                rel != Path::new(OUTPUT_DIR) && filter.should_descend(rel)
            } else {
                true
            }
        });

    let mut count = 0;
    for entry in walker.filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            if let Ok(rel) = entry.path().strip_prefix(&root) {
                if filter.should_select(rel) {
                    count += 1;
                }
            }
        }
    }

    count
}
