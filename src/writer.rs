/*!
 * JSON and text artifact generation for FolderPrep
 */

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::Result;
use crate::types::ScanResult;

/// Name of the artifact directory created under the scanned root
pub const OUTPUT_DIR: &str = "output";

/// JSON artifact file name
pub const ANALYSIS_FILE: &str = "folder_analysis_for_llm.json";

/// Text artifact file name
pub const CONTENTS_FILE: &str = "folder_contents_for_llm.txt";

/// Number of README characters quoted in the JSON summary
const README_PREVIEW_CHARS: usize = 500;

/// Summary shown when the scan found no README
const NO_README: &str = "No README found";

/// Questions a downstream model is asked to answer about the folder
static ANALYSIS_PROMPTS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "What is the main purpose of this project based on the README and file structure?",
        "What programming languages are primarily used in this project?",
        "Are there any interesting or unusual files or directories in the folder structure?",
        "Based on the file contents, what are the main features or functionalities of this project?",
        "How well is the project documented? Are there comments in the code and comprehensive README instructions?",
        "What dependencies or external libraries does this project rely on?",
        "How modular and maintainable does the codebase appear to be?",
        "Are there any potential security concerns visible in the folder structure or file contents?",
        "What aspects of this project might be particularly relevant for an LLM to focus on?",
        "How could this project's structure or documentation be improved for better LLM analysis?",
    ]
});

#[derive(Serialize)]
struct FolderInfo {
    path: String,
}

/// Document written to the JSON artifact; field order is the output order
#[derive(Serialize)]
struct FolderAnalysis {
    folder_info: FolderInfo,
    readme_summary: String,
    file_structure: Vec<String>,
    analysis_prompts: Vec<&'static str>,
}

/// Writer for scan artifacts
pub struct OutputWriter {
    /// Directory both artifacts are written into
    output_dir: PathBuf,
}

impl OutputWriter {
    /// Create a writer for the artifact directory under `root`
    pub fn new(root: &Path) -> Self {
        Self {
            output_dir: root.join(OUTPUT_DIR),
        }
    }

    /// Write both artifacts and return their paths (JSON first)
    pub fn write(&self, result: &ScanResult) -> Result<(PathBuf, PathBuf)> {
        fs::create_dir_all(&self.output_dir)?;
        let analysis = self.write_analysis(result)?;
        let contents = self.write_contents(result)?;
        Ok((analysis, contents))
    }

    /// Write the structured JSON summary document
    fn write_analysis(&self, result: &ScanResult) -> Result<PathBuf> {
        let readme_summary = match &result.readme {
            Some(readme) => {
                let preview: String = readme.chars().take(README_PREVIEW_CHARS).collect();
                format!("{}...", preview)
            }
            None => NO_README.to_string(),
        };

        let analysis = FolderAnalysis {
            folder_info: FolderInfo {
                path: result.root.display().to_string(),
            },
            readme_summary,
            file_structure: result.structure.clone(),
            analysis_prompts: ANALYSIS_PROMPTS.clone(),
        };

        let path = self.output_dir.join(ANALYSIS_FILE);
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &analysis)?;
        writer.flush()?;
        Ok(path)
    }

    /// Write the flat concatenated text dump
    ///
    /// The README comes first under a `=` fence, then every collected file
    /// under `-` fences, in discovery order.
    fn write_contents(&self, result: &ScanResult) -> Result<PathBuf> {
        let path = self.output_dir.join(CONTENTS_FILE);
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "Contents of folder: {}\n", result.root.display())?;

        if let Some(readme) = &result.readme {
            writeln!(writer, "README:")?;
            writeln!(writer, "{}", "=".repeat(50))?;
            write!(writer, "{}", readme)?;
            writeln!(writer, "\n\n{}\n", "=".repeat(50))?;
        }

        for rel_path in &result.structure {
            // The README was already emitted and has no entry here
            if let Some(content) = result.file_contents.get(rel_path) {
                writeln!(writer, "File: {}", rel_path)?;
                writeln!(writer, "{}", "-".repeat(50))?;
                write!(writer, "{}", content)?;
                writeln!(writer, "\n\n{}\n", "-".repeat(50))?;
            }
        }

        writer.flush()?;
        Ok(path)
    }
}
