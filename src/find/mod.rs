//! File discovery and glob matching
//!
//! The free functions run against the real filesystem. [`Finder`] exposes the
//! same operations over any [`FileSystem`], which is how tests count stats or
//! simulate entries that vanish mid-walk.

pub mod fs;
pub mod glob;
pub mod legacy;
pub mod matcher;
pub mod options;
pub mod orchestrator;
pub mod paths;
pub mod pattern;
pub mod rooter;
pub mod walker;

#[cfg(test)]
pub(crate) mod testing;

pub use fs::{EntryKind, FileSystem, StdFileSystem};
pub use glob::CompiledPattern;
pub use matcher::filter;
pub use options::{MatchOptions, WalkOptions};
pub use orchestrator::DEFAULT_ROOT_ENV;
pub use rooter::PatternFindInfo;

use crate::error::Result;

/// Engine bound to one filesystem implementation
#[derive(Debug, Clone, Default)]
pub struct Finder<F: FileSystem = StdFileSystem> {
    fs: F,
}

impl<F: FileSystem> Finder<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    pub fn walk(&self, root: &str, options: &WalkOptions) -> Result<Vec<String>> {
        walker::walk(&self.fs, root, options)
    }

    pub fn find_match(
        &self,
        default_root: Option<&str>,
        patterns: &[String],
        walk_options: &WalkOptions,
        match_options: &MatchOptions,
    ) -> Result<Vec<String>> {
        orchestrator::find_match(&self.fs, default_root, patterns, walk_options, match_options)
    }

    pub fn legacy_find_files(
        &self,
        root: &str,
        pattern: &str,
        include_files: bool,
        include_directories: bool,
    ) -> Result<Vec<String>> {
        let nocase = options::host_is_case_insensitive();
        legacy::legacy_find_files(&self.fs, root, pattern, include_files, include_directories, nocase)
    }

    /// Pure string matching; the filesystem is not consulted
    pub fn match_paths(
        &self,
        list: &[String],
        patterns: &[String],
        pattern_root: Option<&str>,
        options: &MatchOptions,
    ) -> Result<Vec<String>> {
        matcher::match_paths(list, patterns, pattern_root, options)
    }
}

/// Walk `root` on the real filesystem
pub fn walk(root: &str, options: &WalkOptions) -> Result<Vec<String>> {
    walker::walk(&StdFileSystem, root, options)
}

/// Filter a path list through ordered include/exclude patterns
pub fn match_paths(
    list: &[String],
    patterns: &[String],
    pattern_root: Option<&str>,
    options: &MatchOptions,
) -> Result<Vec<String>> {
    matcher::match_paths(list, patterns, pattern_root, options)
}

/// Find paths on the real filesystem selected by `patterns`
pub fn find_match(
    default_root: Option<&str>,
    patterns: &[String],
    walk_options: &WalkOptions,
    match_options: &MatchOptions,
) -> Result<Vec<String>> {
    orchestrator::find_match(&StdFileSystem, default_root, patterns, walk_options, match_options)
}

/// Evaluate a legacy `+:`/`-:` pattern string on the real filesystem,
/// case-insensitively on hosts with case-insensitive paths
pub fn legacy_find_files(
    root: &str,
    pattern: &str,
    include_files: bool,
    include_directories: bool,
) -> Result<Vec<String>> {
    let nocase = options::host_is_case_insensitive();
    legacy::legacy_find_files(&StdFileSystem, root, pattern, include_files, include_directories, nocase)
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryFs;
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn test_finder_runs_every_operation_on_its_filesystem() {
        let finder = Finder::new(
            MemoryFs::new()
                .dir("/proj")
                .file("/proj/Cargo.toml")
                .file("/proj/src/main.rs")
                .file("/proj/src/lib.rs"),
        );
        let walk_options = WalkOptions::default();
        let match_options = MatchOptions {
            nocase: false,
            ..MatchOptions::default()
        };

        let walked = finder.walk("/proj", &walk_options).unwrap();
        assert_eq!(walked.len(), 5);
        assert_eq!(finder.file_system().read_dir_calls(), 2);

        let found = finder
            .find_match(Some("/proj"), &strings(&["src/*.rs"]), &walk_options, &match_options)
            .unwrap();
        assert_eq!(found, strings(&["/proj/src/lib.rs", "/proj/src/main.rs"]));

        let legacy = finder.legacy_find_files("/proj", "**/*.toml", true, false).unwrap();
        assert_eq!(legacy, strings(&["/proj/Cargo.toml"]));

        let matched = finder
            .match_paths(&walked, &strings(&["**/main.rs"]), Some("/proj"), &match_options)
            .unwrap();
        assert_eq!(matched, strings(&["/proj/src/main.rs"]));
    }

    #[test]
    fn test_free_functions_use_the_real_filesystem() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("a.txt"), "").unwrap();
        let root = temp.path().to_str().unwrap();

        let walked = walk(root, &WalkOptions::default()).unwrap();
        assert_eq!(walked, vec![root.to_string(), format!("{root}/a.txt")]);

        let found = legacy_find_files(root, "*.txt", true, false).unwrap();
        assert_eq!(found, vec![format!("{root}/a.txt")]);
    }
}
