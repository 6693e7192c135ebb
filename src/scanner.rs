/*!
 * Directory and file scanning functionality
 *
 * Both passes walk the tree on their own and apply the [`ExclusionFilter`]
 * to every entry. Read failures come back as [`SkipReason`] values and the
 * caller decides what to do with them.
 */

use std::fs;
use std::path::{Path, MAIN_SEPARATOR};
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::filter::ExclusionFilter;
use crate::types::{ChildEntry, ChildListing, ContentFile, DirectoryNode, SkipReason, TreeListing};

/// Scanner for directory contents
pub struct Scanner {
    /// Exclusion rules, owning the scanner configuration
    filter: ExclusionFilter,
    /// Progress indicator
    pub progress: Arc<ProgressBar>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self {
            filter: ExclusionFilter::new(config),
            progress,
        }
    }

    /// Scanner configuration
    pub fn config(&self) -> &Config {
        self.filter.config()
    }

    /// Included regular files, depth first with siblings sorted by name
    pub fn content_files(&self) -> impl Iterator<Item = ContentFile> + '_ {
        self.walk()
            .filter(|entry| entry.path().is_file())
            .filter(move |entry| self.keep(entry.path()))
            .map(move |entry| ContentFile {
                rel_path: self.relative(entry.path()),
                path: entry.into_path(),
            })
    }

    /// Read a file as UTF-8 text with universal newlines
    pub fn read_file(&self, file: &ContentFile) -> Result<String, SkipReason> {
        self.progress.inc(1);
        self.progress
            .set_message(format!("Current file: {}", display_name(&file.rel_path)));

        let content = fs::read_to_string(&file.path)?;
        Ok(normalize_newlines(content))
    }

    /// Build the summarized directory tree
    pub fn tree(&self) -> TreeListing {
        self.progress.set_message("Listing directory structure");

        let directories = self
            .walk()
            .filter(|entry| entry.path().is_dir())
            .filter(|entry| self.keep(entry.path()))
            .map(|entry| DirectoryNode {
                name: entry.file_name().to_string_lossy().to_string(),
                depth: entry.depth() - 1,
                children: self.list_children(entry.path()),
            })
            .collect();

        TreeListing {
            root_files: self.root_files(),
            directories,
        }
    }

    /// Names of the included regular files directly under the root
    fn root_files(&self) -> Vec<String> {
        let children = match self.read_children(&self.config().root) {
            Ok(children) => children,
            Err(reason) => {
                debug!(root = %self.config().root.display(), %reason, "Root directory unreadable");
                return Vec::new();
            }
        };

        children
            .into_iter()
            .filter(|child| !child.is_dir && self.config().root.join(&child.name).is_file())
            .map(|child| child.name)
            .collect()
    }

    /// Direct children of `dir`, summarized when above the item limit
    fn list_children(&self, dir: &Path) -> ChildListing {
        match self.read_children(dir) {
            Ok(children) if children.len() > self.config().item_limit => {
                ChildListing::Summary(children.len())
            }
            Ok(children) => ChildListing::Items(children),
            Err(reason) => {
                debug!(dir = %dir.display(), %reason, "Skipping unreadable directory");
                ChildListing::Unreadable(reason)
            }
        }
    }

    /// Filtered direct children of `dir`, sorted by name
    fn read_children(&self, dir: &Path) -> Result<Vec<ChildEntry>, SkipReason> {
        let mut children = Vec::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !self.keep(&path) {
                continue;
            }
            children.push(ChildEntry {
                name: path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
                is_dir: path.is_dir(),
            });
        }

        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }

    /// Every entry below the root in lexicographic path order.
    ///
    /// Subtrees under an excluded segment are pruned; entries the walker
    /// cannot read are logged and dropped.
    fn walk(&self) -> impl Iterator<Item = DirEntry> + '_ {
        WalkDir::new(&self.config().root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !self.filter.has_excluded_segment(entry.path()))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!(error = %e, "Skipping unreadable entry");
                    None
                }
            })
    }

    fn keep(&self, path: &Path) -> bool {
        match self.filter.check(path) {
            Some(rule) => {
                trace!(path = %path.display(), ?rule, "Excluded");
                false
            }
            None => true,
        }
    }

    /// Path relative to the root with `/` separators
    fn relative(&self, path: &Path) -> String {
        let rel_path = path
            .strip_prefix(&self.config().root)
            .unwrap_or(path)
            .to_string_lossy();

        if MAIN_SEPARATOR == '/' {
            rel_path.into_owned()
        } else {
            rel_path.replace(MAIN_SEPARATOR, "/")
        }
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

// Truncate long names so the spinner stays on one line
fn display_name(rel_path: &str) -> String {
    let chars = rel_path.chars().count();
    if chars > 40 {
        let tail: String = rel_path.chars().skip(chars - 37).collect();
        format!("...{}", tail)
    } else {
        rel_path.to_string()
    }
}
