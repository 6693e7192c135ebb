/*!
 * Exclusion rules shared by the content and structure passes
 */

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::Config;
use crate::types::Exclusion;

/// Decides whether a filesystem entry is left out of the report
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    config: Config,
    /// Resolved report path; it may not exist yet when the filter is built
    output_path: PathBuf,
}

impl ExclusionFilter {
    /// Create a filter for the given configuration
    pub fn new(config: Config) -> Self {
        let root = fs::canonicalize(&config.root).unwrap_or_else(|_| config.root.clone());

        Self {
            output_path: root.join(&config.output_file),
            config,
        }
    }

    /// The configuration the rules come from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether `path` (located under the scan root) is excluded
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.check(path).is_some()
    }

    /// The first rule that rejects `path`, if any
    pub fn check(&self, path: &Path) -> Option<Exclusion> {
        if let Some(rule) = self.check_identity(path) {
            return Some(rule);
        }

        if let Some(suffix) = suffix(path) {
            if self.config.excluded_extensions.contains(&suffix) {
                return Some(Exclusion::Extension);
            }
        }

        if let Some(name) = path.file_name() {
            if self
                .config
                .excluded_files
                .contains(name.to_string_lossy().as_ref())
            {
                return Some(Exclusion::FileName);
            }
        }

        if self.has_excluded_segment(path) {
            return Some(Exclusion::PathSegment);
        }

        None
    }

    /// Whether any segment of `path` relative to the root is excluded.
    ///
    /// Every descendant of such a path is excluded too, so walkers prune on it.
    pub fn has_excluded_segment(&self, path: &Path) -> bool {
        let Ok(rel_path) = path.strip_prefix(&self.config.root) else {
            return false;
        };

        rel_path.components().any(|component| match component {
            Component::Normal(part) => self
                .config
                .excluded_segments
                .contains(part.to_string_lossy().as_ref()),
            _ => false,
        })
    }

    fn check_identity(&self, path: &Path) -> Option<Exclusion> {
        let resolved = fs::canonicalize(path).ok()?;

        if self.config.self_path.as_deref() == Some(resolved.as_path()) {
            return Some(Exclusion::SelfPath);
        }
        if resolved == self.output_path {
            return Some(Exclusion::OutputFile);
        }

        None
    }
}

/// Final extension including the leading dot; dot-files such as `.env` have none
pub fn suffix(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_string_lossy();
    if ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn config_for(root: &Path) -> Config {
        Config::new(root, None)
    }

    #[test]
    fn test_suffix() {
        assert_eq!(suffix(Path::new("a/b.json")).as_deref(), Some(".json"));
        assert_eq!(suffix(Path::new("archive.tar.gz")).as_deref(), Some(".gz"));
        assert_eq!(suffix(Path::new(".env")), None);
        assert_eq!(suffix(Path::new("Makefile")), None);
        assert_eq!(suffix(Path::new("trailing.")), None);
    }

    #[test]
    fn test_extension_is_case_sensitive() {
        let dir = tempdir().unwrap();
        let filter = ExclusionFilter::new(config_for(dir.path()));

        assert_eq!(
            filter.check(&dir.path().join("data.json")),
            Some(Exclusion::Extension)
        );
        assert_eq!(filter.check(&dir.path().join("DATA.JSON")), None);
    }

    #[test]
    fn test_file_name_and_segment_rules() {
        let dir = tempdir().unwrap();
        let filter = ExclusionFilter::new(config_for(dir.path()));

        assert_eq!(
            filter.check(&dir.path().join("src").join("index.js")),
            Some(Exclusion::FileName)
        );
        assert_eq!(
            filter.check(&dir.path().join(".gitignore")),
            Some(Exclusion::FileName)
        );
        assert_eq!(
            filter.check(&dir.path().join("web").join("node_modules").join("x.js")),
            Some(Exclusion::PathSegment)
        );
        // Segment names match files too
        assert_eq!(
            filter.check(&dir.path().join("ignore_this_file.txt")),
            Some(Exclusion::PathSegment)
        );
        assert_eq!(filter.check(&dir.path().join("src").join("main.rs")), None);
    }

    #[test]
    fn test_segments_are_relative_to_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("data");
        fs::create_dir(&root).unwrap();

        let filter = ExclusionFilter::new(config_for(&root));

        // "data" is excluded, but only below the root
        assert!(!filter.is_excluded(&root.join("notes.md")));
        assert!(filter.is_excluded(&root.join("data").join("notes.md")));
    }

    #[test]
    fn test_self_and_output_are_excluded() {
        let dir = tempdir().unwrap();
        let tool = dir.path().join("reporter");
        File::create(&tool).unwrap();
        File::create(dir.path().join("file_contents_report.txt")).unwrap();

        let config = Config::new(dir.path(), Some(fs::canonicalize(&tool).unwrap()));
        let filter = ExclusionFilter::new(config);

        assert_eq!(filter.check(&tool), Some(Exclusion::SelfPath));
        assert_eq!(
            filter.check(&dir.path().join("file_contents_report.txt")),
            Some(Exclusion::OutputFile)
        );
    }

    #[test]
    fn test_missing_path_is_not_an_error() {
        let dir = tempdir().unwrap();
        let filter = ExclusionFilter::new(config_for(dir.path()));

        assert!(!filter.is_excluded(&dir.path().join("does").join("not").join("exist.rs")));
    }
}
