/*!
 * project-reporter - Concatenate a project's files into a single text report
 *
 * This library walks a directory tree, writes the contents of every
 * non-excluded text file under a path header, and appends a summarized
 * listing of the directory structure.
 */

pub mod config;
pub mod error;
pub mod filter;
pub mod report;
pub mod scanner;
pub mod types;
pub mod writer;


// Re-export main components for easier access
pub use config::Config;
pub use error::{ReporterError, Result};
pub use filter::ExclusionFilter;
pub use report::{Reporter, ScanReport, ScanStatistics};
pub use scanner::Scanner;
pub use types::{ChildEntry, ChildListing, ContentFile, DirectoryNode, Exclusion, SkipReason, TreeListing};
pub use writer::ReportWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
