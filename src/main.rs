/*!
 * Command-line interface for FolderPrep
 */

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use folderprep::config::{Args, Config};
use folderprep::error::Result;
use folderprep::report::{ReportFormat, Reporter, ScanReport};
use folderprep::scanner::{ScanObserver, Scanner};
use folderprep::utils::count_files;
use folderprep::writer::OutputWriter;

/// Observer that drives the progress bar from scan decisions
struct ProgressObserver {
    progress: ProgressBar,
}

impl ProgressObserver {
    // Truncate long file names to avoid display issues
    fn display_name(rel_path: &Path) -> String {
        let name = rel_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if name.chars().count() > 40 {
            let tail: String = name
                .chars()
                .skip(name.chars().count().saturating_sub(37))
                .collect();
            format!("...{}", tail)
        } else {
            name
        }
    }
}

impl ScanObserver for ProgressObserver {
    fn file_collected(&self, rel_path: &Path) {
        self.progress.inc(1);
        self.progress
            .set_message(format!("Current file: {}", Self::display_name(rel_path)));
    }

    fn file_unreadable(&self, rel_path: &Path) {
        // Counted files that turn out not to be text still advance the bar
        self.progress.inc(1);
        self.progress
            .set_message(format!("Skipped (not text): {}", Self::display_name(rel_path)));
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Create and validate configuration
    let config = Config::from_args(args)?;
    config.validate()?;

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Setup");
    progress.set_message(format!(
        "📂 Scanning directory: {}",
        config.target_dir.display()
    ));

    // Count files for progress tracking
    let total_files = count_files(&config.target_dir, &config);
    progress.set_length(total_files);
    progress.set_prefix("📊 Processing");
    progress.set_message("Starting scan...");

    // Create scanner with the progress observer
    let observer = Arc::new(ProgressObserver {
        progress: progress.clone(),
    });
    let mut scanner = Scanner::new(config.clone(), observer);

    // Time scan and write together
    let start_time = Instant::now();

    let result = scanner.scan()?;

    let writer = OutputWriter::new(&result.root);
    let (json_file, text_file) = writer.write(&result)?;

    let total_duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // Prepare the scan report
    let stats = scanner.get_statistics();
    let scan_report = ScanReport {
        json_file: json_file.display().to_string(),
        text_file: text_file.display().to_string(),
        duration: total_duration,
        files_collected: stats.files_collected,
        total_lines: stats.total_lines,
        total_chars: stats.total_chars,
        file_details: stats.file_details,
    };

    // Create a reporter and print the report
    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&scan_report);

    Ok(())
}
