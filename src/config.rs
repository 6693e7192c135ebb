/*!
 * Configuration handling for project-reporter
 *
 * The tool takes no options: every rule lives in the compiled-in tables below
 * and is copied into a [`Config`] value once at startup.
 */

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use clap::Parser;
use once_cell::sync::Lazy;

use crate::error::{Result, ResultExt};
use crate::{bail, ensure};

/// Name of the report written under the scan root
pub const DEFAULT_OUTPUT_FILE: &str = "file_contents_report.txt";

/// Child count above which a directory is summarized instead of listed
pub const DEFAULT_ITEM_LIMIT: usize = 10;

/// Path segments (directory or file names) excluded anywhere in the tree
pub static DEFAULT_EXCLUDED_SEGMENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "node_modules",
        "__pycache__",
        ".git",
        "ignore_this_file.txt",
        "tmp",
        "scripts",
        "logs",
        ".DS_Store",
        ".idea",
        "data",
        "_archive",
        "links",
        "objects",
        "daily_reporting",
        "models",
    ]
    .into_iter()
    .collect()
});

/// File extensions, including the leading dot
pub static DEFAULT_EXCLUDED_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [".pyc", ".log", ".DS_Store", ".env", ".example", ".json"]
        .into_iter()
        .collect()
});

/// Exact file names
pub static DEFAULT_EXCLUDED_FILES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "mcc_tasks_map.js",
        "sm_tasks_map.js",
        "secrets.txt",
        "draft.md",
        "index.js",
        ".env",
        ".gitignore",
        ".git",
        "migrate_tags.js",
        "migrate_tasks.js",
        "logging",
        "delta_sync.js",
    ]
    .into_iter()
    .collect()
});

/// Command-line interface; only `--help` and `--version` are recognised
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "project-reporter",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate a project's files and directory structure into a single report",
    long_about = "Walks the directory containing this executable, writes the contents of every \
                  non-excluded text file followed by a summarized directory tree into \
                  file_contents_report.txt. All behaviour is fixed at compile time."
)]
pub struct Args {}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory whose descendants are walked
    pub root: PathBuf,

    /// Resolved path of the running tool, never reported
    pub self_path: Option<PathBuf>,

    /// Report file name, relative to `root`
    pub output_file: PathBuf,

    /// Excluded path segments
    pub excluded_segments: HashSet<String>,

    /// Excluded extensions (with leading dot)
    pub excluded_extensions: HashSet<String>,

    /// Excluded exact file names
    pub excluded_files: HashSet<String>,

    /// Child count above which directories are summarized
    pub item_limit: usize,
}

impl Config {
    /// Build a configuration with the default tables for the given root
    pub fn new(root: impl Into<PathBuf>, self_path: Option<PathBuf>) -> Self {
        Self {
            root: root.into(),
            self_path,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            excluded_segments: to_owned_set(&DEFAULT_EXCLUDED_SEGMENTS),
            excluded_extensions: to_owned_set(&DEFAULT_EXCLUDED_EXTENSIONS),
            excluded_files: to_owned_set(&DEFAULT_EXCLUDED_FILES),
            item_limit: DEFAULT_ITEM_LIMIT,
        }
    }

    /// Configuration rooted at the directory containing the running executable
    pub fn for_executable() -> Result<Self> {
        let exe = std::env::current_exe()
            .and_then(|p| p.canonicalize())
            .with_context(|| "Failed to resolve the running executable")?;

        let Some(root) = exe.parent() else {
            bail!(Config, "Executable has no parent directory: {}", exe.display());
        };

        Ok(Self::new(root.to_path_buf(), Some(exe.clone())))
    }

    /// Absolute path of the report file
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_file)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.root.exists(),
            PathNotFound,
            "Scan root not found: {}",
            self.root.display()
        );
        ensure!(
            self.root.is_dir(),
            Config,
            "Scan root is not a directory: {}",
            self.root.display()
        );
        ensure!(
            is_relative_name(&self.output_file),
            Config,
            "Output file must be a relative path: {}",
            self.output_file.display()
        );

        Ok(())
    }
}

fn to_owned_set(table: &HashSet<&'static str>) -> HashSet<String> {
    table.iter().map(|s| s.to_string()).collect()
}

fn is_relative_name(path: &Path) -> bool {
    path.is_relative() && !path.as_os_str().is_empty()
}
