use serde::{Deserialize, Serialize};

/// Traversal policy for a single walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkOptions {
    /// Descend through symbolic links to directories
    pub follow_symbolic_links: bool,
    /// Follow the starting path when it is itself a symbolic link
    pub follow_specified_symbolic_link: bool,
    /// Record dangling links instead of failing on them
    pub allow_broken_symbolic_links: bool,
    /// Warn and continue when an entry disappears mid-walk
    pub skip_missing_files: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            follow_symbolic_links: true,
            follow_specified_symbolic_link: true,
            allow_broken_symbolic_links: false,
            skip_missing_files: false,
        }
    }
}

impl WalkOptions {
    pub(crate) fn trace(&self) {
        tracing::debug!(
            allow_broken_symbolic_links = self.allow_broken_symbolic_links,
            follow_specified_symbolic_link = self.follow_specified_symbolic_link,
            follow_symbolic_links = self.follow_symbolic_links,
            skip_missing_files = self.skip_missing_files,
            "walk options"
        );
    }
}

/// Glob dialect flags
///
/// Preprocessing rewrites `nocomment`, `nonegate`, `nobrace` and `flip_negate`
/// on a per-pattern clone, so one instance can drive a whole pattern list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Case-insensitive matching; also uppercases result keys for de-duplication
    pub nocase: bool,
    /// Treat `{a,b}` literally instead of expanding it
    pub nobrace: bool,
    /// Treat `**` as a plain `*`
    pub noglobstar: bool,
    /// Let wildcards match names starting with `.`
    pub dot: bool,
    /// Slash-free patterns match against the basename only
    pub match_base: bool,
    /// Do not treat a leading `#` as a comment
    pub nocomment: bool,
    /// Do not treat leading `!` as negation
    pub nonegate: bool,
    /// Invert the include/exclude meaning of `!`
    pub flip_negate: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            nocase: host_is_case_insensitive(),
            nobrace: true,
            noglobstar: false,
            dot: true,
            match_base: false,
            nocomment: false,
            nonegate: false,
            flip_negate: false,
        }
    }
}

impl MatchOptions {
    pub(crate) fn trace(&self) {
        tracing::debug!(
            nobrace = self.nobrace,
            noglobstar = self.noglobstar,
            dot = self.dot,
            nocase = self.nocase,
            match_base = self.match_base,
            nocomment = self.nocomment,
            nonegate = self.nonegate,
            flip_negate = self.flip_negate,
            "match options"
        );
    }

    /// Key used to de-duplicate paths under this case policy
    pub(crate) fn result_key(&self, path: &str) -> String {
        if self.nocase {
            path.to_uppercase()
        } else {
            path.to_string()
        }
    }
}

/// Case-insensitive filesystems are assumed on Windows only
pub fn host_is_case_insensitive() -> bool {
    cfg!(windows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_defaults() {
        let options = WalkOptions::default();
        assert!(options.follow_symbolic_links);
        assert!(options.follow_specified_symbolic_link);
        assert!(!options.allow_broken_symbolic_links);
        assert!(!options.skip_missing_files);
    }

    #[test]
    fn test_match_defaults() {
        let options = MatchOptions::default();
        assert!(options.dot);
        assert!(options.nobrace);
        assert!(!options.match_base);
        assert_eq!(options.nocase, cfg!(windows));
    }

    #[test]
    fn test_result_key_follows_case_policy() {
        let mut options = MatchOptions { nocase: false, ..Default::default() };
        assert_eq!(options.result_key("/a/File.txt"), "/a/File.txt");
        options.nocase = true;
        assert_eq!(options.result_key("/a/File.txt"), "/A/FILE.TXT");
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let options: WalkOptions =
            serde_json::from_str(r#"{"skip_missing_files": true}"#).unwrap();
        assert!(options.skip_missing_files);
        assert!(options.follow_symbolic_links);
    }
}
