/*!
 * Reporting functionality for project-reporter
 *
 * Stdout carries a single completion line. Everything else about the run,
 * including the files that had to be skipped, goes to the log.
 */

use std::time::Duration;

use tracing::{info, warn};

use crate::types::SkipReason;

/// A file the content pass could not read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Path relative to the scan root
    pub path: String,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Counters collected while writing the report
#[derive(Debug, Clone, Default)]
pub struct ScanStatistics {
    /// Files whose contents were written
    pub files_written: usize,
    /// Included files that could not be read
    pub skipped_files: Vec<SkippedFile>,
    /// Directory lines in the structure pass
    pub directories_listed: usize,
    /// Directories whose children could not be listed
    pub unreadable_directories: usize,
}

/// Summary of a finished run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Output file path
    pub output_file: String,
    /// Time taken to scan and write
    pub duration: Duration,
    /// Counters from the writer
    pub statistics: ScanStatistics,
}

/// Report generator for finished runs
#[derive(Debug, Default)]
pub struct Reporter;

impl Reporter {
    /// Create a new reporter
    pub fn new() -> Self {
        Self
    }

    /// The line printed once the report has been written
    pub fn completion_line(&self, report: &ScanReport) -> String {
        format!(
            "Aggregation complete. Output written to: {}",
            report.output_file
        )
    }

    /// Log the run summary and print the completion line to stdout
    pub fn print_report(&self, report: &ScanReport) {
        let stats = &report.statistics;

        info!(
            files_written = stats.files_written,
            files_skipped = stats.skipped_files.len(),
            directories = stats.directories_listed,
            unreadable_directories = stats.unreadable_directories,
            duration = ?report.duration,
            "Report written"
        );

        if !stats.skipped_files.is_empty() {
            warn!(
                "{} file(s) could not be read and were left out of the report",
                stats.skipped_files.len()
            );
            for skipped in &stats.skipped_files {
                info!(path = %skipped.path, reason = %skipped.reason, "Skipped");
            }
        }

        println!("{}", self.completion_line(report));
    }
}
