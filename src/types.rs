/*!
 * Core types and data structures for project-reporter
 */

use std::fmt;
use std::io;
use std::path::PathBuf;

/// A regular file selected for the content pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFile {
    /// Absolute path on disk
    pub path: PathBuf,
    /// Path relative to the scan root, rendered with `/` separators
    pub rel_path: String,
}

/// Why a filter rejected an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// The entry is the running tool itself
    SelfPath,
    /// The entry is the report being written
    OutputFile,
    /// Extension is in the excluded set
    Extension,
    /// Base name is in the excluded set
    FileName,
    /// Some relative path segment is in the excluded set
    PathSegment,
}

/// Why a file or directory could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// File is not valid UTF-8
    NotUtf8,
    /// Any other I/O failure
    Io(io::ErrorKind),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotUtf8 => write!(f, "not valid UTF-8"),
            SkipReason::Io(kind) => write!(f, "{}", kind),
        }
    }
}

impl From<io::Error> for SkipReason {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::InvalidData => SkipReason::NotUtf8,
            kind => SkipReason::Io(kind),
        }
    }
}

/// One direct child shown beneath a directory line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEntry {
    /// Base name
    pub name: String,
    /// Whether the child is itself a directory
    pub is_dir: bool,
}

/// What is shown beneath a directory line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildListing {
    /// Every filtered child, sorted by name
    Items(Vec<ChildEntry>),
    /// Child count above the item limit
    Summary(usize),
    /// Children could not be enumerated
    Unreadable(SkipReason),
}

/// A directory line in the structure pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    /// Base name
    pub name: String,
    /// Indent level; the root's immediate children are at 0
    pub depth: usize,
    /// Summary of its direct children
    pub children: ChildListing,
}

/// Everything the structure pass prints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeListing {
    /// Names of root-level files, sorted
    pub root_files: Vec<String>,
    /// Directory lines in lexicographic path order
    pub directories: Vec<DirectoryNode>,
}
