/*!
 * FolderPrep - Prepare directory contents for LLM analysis
 *
 * This library scans a directory tree, filters files through exclude/include
 * glob rules, and produces a JSON summary plus a concatenated text dump for
 * use as context for Large Language Models.
 */

pub mod config;
pub mod error;
pub mod filter;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config, RuleSet};
pub use error::{FolderPrepError, Result};
pub use filter::PathFilter;
pub use report::{FileReportInfo, ReportFormat, Reporter, ScanReport};
pub use scanner::{NoopObserver, ScanObserver, Scanner, ScannerStatistics};
pub use types::ScanResult;
pub use writer::OutputWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
