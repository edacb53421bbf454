/*!
 * Path selection rules for FolderPrep
 */

use std::path::Path;

use glob_match::glob_match;

use crate::config::RuleSet;

/// Membership test for paths relative to the scan root
///
/// Built once from an immutable rule set. Holds no traversal state and
/// performs no I/O; the scanner owns all side effects.
pub struct PathFilter {
    rules: RuleSet,
}

impl PathFilter {
    /// Create a filter from a rule set
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Check whether the walker should descend into a directory
    ///
    /// Only the directory's own basename is tested against the exclude
    /// patterns; parent segments were already checked when their directories
    /// were entered. A pruned directory's contents are never visited and
    /// never reach the include patterns.
    pub fn should_descend(&self, dir_rel_path: &Path) -> bool {
        let name = match dir_rel_path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return true,
        };
        !self.rules.exclude.iter().any(|p| glob_match(p, &name))
    }

    /// Check whether a file should be collected
    ///
    /// Any path segment matching an exclude pattern vetoes the file. With no
    /// include patterns every non-excluded file is collected. Include
    /// patterns containing a `/` are matched against the full relative path
    /// (`*` stays within a segment, `**` crosses segments); patterns without
    /// a `/` are matched against the file name, so `*.py` also selects
    /// `subdir/test.py`.
    pub fn should_select(&self, file_rel_path: &Path) -> bool {
        let rel = posix_path(file_rel_path);

        for segment in rel.split('/') {
            if self.rules.exclude.iter().any(|p| glob_match(p, segment)) {
                return false;
            }
        }

        if self.rules.include.is_empty() {
            return true;
        }

        let basename = rel.rsplit('/').next().unwrap_or(rel.as_str());
        self.rules.include.iter().any(|pattern| {
            if pattern.contains('/') {
                glob_match(pattern, &rel)
            } else {
                glob_match(pattern, basename)
            }
        })
    }
}

/// Render a relative path with `/` separators regardless of platform
pub fn posix_path(path: &Path) -> String {
    path.iter()
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
