/*!
 * Configuration handling for FolderPrep
 */

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::error::Result;
use crate::{bail, ensure};

/// Command-line arguments for FolderPrep
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "folderprep",
    version = env!("CARGO_PKG_VERSION"),
    about = "Prepare directory contents for LLM analysis",
    long_about = "Scans a directory, filters its files through exclude/include glob rules, and writes a JSON summary plus a concatenated text dump into an `output` subdirectory, designed for providing context to Large Language Models (LLMs)."
)]
pub struct Args {
    /// Target directory to analyze
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Path to the YAML preset file with exclude/include patterns
    #[clap(long, default_value = "preset.yaml")]
    pub config: String,

    /// Comma-separated list of glob patterns to exclude (replaces preset excludes)
    #[clap(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Comma-separated list of glob patterns to include (replaces preset includes)
    #[clap(long, value_delimiter = ',')]
    pub include: Vec<String>,
}

/// Exclude/include pattern sets governing file selection
///
/// This is the shape of the optional YAML preset document:
///
/// ```yaml
/// exclude:
///   - node_modules
///   - "*.lock"
/// include:
///   - "*.rs"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuleSet {
    /// Glob patterns that veto any path segment they match
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Glob patterns collected files must match (empty = collect all)
    #[serde(default)]
    pub include: Vec<String>,
}

impl RuleSet {
    /// Load a rule set from a YAML preset file
    ///
    /// A missing file is not an error and yields the default (empty) rule
    /// set. A file that exists but fails to parse is a hard error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let rules: RuleSet = serde_yaml::from_str(&raw)?;
        Ok(rules)
    }

    /// Replace pattern lists with caller overrides
    ///
    /// Last writer wins per category: a non-empty override list replaces the
    /// corresponding preset list wholesale instead of merging with it.
    pub fn with_overrides(mut self, exclude: Vec<String>, include: Vec<String>) -> Self {
        if !exclude.is_empty() {
            self.exclude = exclude;
        }
        if !include.is_empty() {
            self.include = include;
        }
        self
    }

    /// Check that every pattern is structurally well-formed glob syntax
    pub fn validate(&self) -> Result<()> {
        for pattern in self.exclude.iter().chain(self.include.iter()) {
            check_pattern(pattern)?;
        }
        Ok(())
    }
}

/// Reject glob patterns that could never be written intentionally
///
/// `glob-match` accepts any string at match time, so the structural problems
/// are caught here: unterminated character classes or brace groups and a
/// dangling escape.
fn check_pattern(pattern: &str) -> Result<()> {
    ensure!(!pattern.trim().is_empty(), Pattern, "empty pattern");

    let mut in_class = false;
    let mut braces: u32 = 0;
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.next().is_none() {
                    bail!(Pattern, "'{}' ends with a dangling escape", pattern);
                }
            }
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '{' if !in_class => braces += 1,
            '}' if !in_class => {
                if braces == 0 {
                    bail!(Pattern, "'{}' has an unmatched '}}'", pattern);
                }
                braces -= 1;
            }
            _ => {}
        }
    }
    if in_class {
        bail!(Pattern, "'{}' has an unterminated character class", pattern);
    }
    if braces != 0 {
        bail!(Pattern, "'{}' has an unterminated brace group", pattern);
    }
    Ok(())
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to process
    pub target_dir: PathBuf,

    /// Selection rules assembled from the preset file and CLI overrides
    pub rules: RuleSet,
}

impl Config {
    /// Create configuration from command-line arguments
    ///
    /// Loads the preset document, applies CLI overrides, and validates the
    /// resulting pattern lists before any traversal starts.
    pub fn from_args(args: Args) -> Result<Self> {
        let rules =
            RuleSet::load(Path::new(&args.config))?.with_overrides(args.exclude, args.include);
        rules.validate()?;

        Ok(Self {
            target_dir: expand_user(&args.directory_path),
            rules,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.exists() && self.target_dir.is_dir(),
            PathNotFound,
            "target directory not found: {}",
            self.target_dir.display()
        );
        Ok(())
    }
}

/// Expand a leading `~` to the user's home directory
fn expand_user(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            if rest.is_empty() {
                return home;
            }
            if let Some(stripped) = rest.strip_prefix('/') {
                return home.join(stripped);
            }
        }
    }
    PathBuf::from(path)
}
