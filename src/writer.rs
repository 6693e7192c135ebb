/*!
 * Plain-text report writer for project-reporter
 *
 * The report is the content pass (one block per included file) followed by
 * the structure pass (the summarized directory tree).
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::report::{ScanStatistics, SkippedFile};
use crate::scanner::Scanner;
use crate::types::{ChildListing, TreeListing};

/// Title of the structure block
pub const STRUCTURE_TITLE: &str = "FULL DIRECTORY STRUCTURE";

const INDENT: &str = "    ";

/// Text writer for the report file
pub struct ReportWriter {
    /// Writer configuration
    config: Config,
}

impl ReportWriter {
    /// Create a new report writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Truncate the report file and write both passes into it
    pub fn write(&self, scanner: &Scanner) -> Result<ScanStatistics> {
        let file = File::create(self.config.output_path())?;
        let mut out = BufWriter::new(file);

        let statistics = self.write_to(scanner, &mut out)?;
        out.flush()?;

        Ok(statistics)
    }

    /// Write both passes into any sink
    pub fn write_to<W: Write>(&self, scanner: &Scanner, out: &mut W) -> io::Result<ScanStatistics> {
        let mut statistics = ScanStatistics::default();

        self.write_contents(scanner, out, &mut statistics)?;

        let tree = scanner.tree();
        statistics.directories_listed = tree.directories.len();
        statistics.unreadable_directories = tree
            .directories
            .iter()
            .filter(|dir| matches!(dir.children, ChildListing::Unreadable(_)))
            .count();
        write_structure(&tree, out)?;

        Ok(statistics)
    }

    /// Content pass: header and body for every readable included file
    fn write_contents<W: Write>(
        &self,
        scanner: &Scanner,
        out: &mut W,
        statistics: &mut ScanStatistics,
    ) -> io::Result<()> {
        for file in scanner.content_files() {
            // Read before writing the header so a skipped file leaves no trace
            match scanner.read_file(&file) {
                Ok(content) => {
                    write_file_block(out, &file.rel_path, &content)?;
                    statistics.files_written += 1;
                }
                Err(reason) => {
                    debug!(path = %file.rel_path, %reason, "Skipping unreadable file");
                    statistics.skipped_files.push(SkippedFile {
                        path: file.rel_path,
                        reason,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Write one `path / dashes / content` block
pub fn write_file_block<W: Write>(out: &mut W, rel_path: &str, content: &str) -> io::Result<()> {
    writeln!(out, "{}", rel_path)?;
    writeln!(out, "{}", "-".repeat(rel_path.chars().count()))?;
    write!(out, "{}\n\n", content)
}

/// Structure pass: title, root files, then each directory with its children
pub fn write_structure<W: Write>(tree: &TreeListing, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", STRUCTURE_TITLE)?;
    writeln!(out, "{}\n", "=".repeat(STRUCTURE_TITLE.len()))?;

    for name in &tree.root_files {
        writeln!(out, "{}", name)?;
    }

    for dir in &tree.directories {
        let indent = INDENT.repeat(dir.depth);
        writeln!(out, "{}{}/", indent, dir.name)?;

        match &dir.children {
            ChildListing::Summary(count) => {
                writeln!(out, "{}{}(directory contains {} items)", indent, INDENT, count)?;
            }
            ChildListing::Items(children) => {
                for child in children {
                    let suffix = if child.is_dir { "/" } else { "" };
                    writeln!(out, "{}{}{}{}", indent, INDENT, child.name, suffix)?;
                }
            }
            ChildListing::Unreadable(_) => {}
        }
    }

    write!(out, "\n\n")
}
