//! Derive where a walk has to start for one include pattern

use super::glob::{has_magic, split_segments, unescape};
use super::options::MatchOptions;
use super::paths;
use super::pattern::is_basename_only;
use crate::error::{FindError, Result};

/// Search plan for a single brace-free include pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFindInfo {
    /// Pattern rooted at the default root, used to filter walk output
    pub adjusted_pattern: String,
    /// Deepest directory that can contain a match; empty means nothing to search
    pub find_path: String,
    /// Every segment is literal, so a single stat answers the pattern
    pub stat_only: bool,
}

pub fn find_info_from_pattern(default_root: &str, pattern: &str, options: &MatchOptions) -> Result<PatternFindInfo> {
    if default_root.is_empty() {
        return Err(FindError::InvalidArgument(
            "find_info_from_pattern() parameter \"default_root\" cannot be empty".to_string(),
        ));
    }
    if pattern.is_empty() {
        return Err(FindError::InvalidArgument(
            "find_info_from_pattern() parameter \"pattern\" cannot be empty".to_string(),
        ));
    }
    if !options.nobrace {
        return Err(FindError::InvalidArgument(
            "find_info_from_pattern() expects braces to be expanded already (nobrace)".to_string(),
        ));
    }

    if options.match_base && !paths::is_rooted(pattern) && is_basename_only(pattern) {
        // basename patterns match anywhere below the root, so they stay unrooted
        return Ok(PatternFindInfo {
            adjusted_pattern: pattern.to_string(),
            find_path: default_root.to_string(),
            stat_only: false,
        });
    }

    let segments = split_segments(pattern);
    let literal: Vec<String> = segments
        .iter()
        .take_while(|segment| !has_magic(segment))
        .map(|segment| unescape(segment))
        .collect();
    let stat_only = literal.len() == segments.len();

    let mut prefix = literal.join("/");
    if prefix.is_empty() && paths::is_rooted(pattern) {
        prefix.push(paths::SEPARATOR);
    }

    let find_path = if paths::is_rooted(pattern) {
        prefix
    } else if !prefix.is_empty() {
        paths::ensure_rooted(default_root, &prefix)?
    } else {
        default_root.to_string()
    };

    let find_path = if find_path.is_empty() {
        find_path
    } else {
        // appending a dummy name and taking its parent drops a trailing slash
        paths::normalize_separators(&paths::directory_name(&paths::ensure_rooted(&find_path, "_")?))
    };

    Ok(PatternFindInfo {
        adjusted_pattern: paths::ensure_pattern_rooted(default_root, pattern)?,
        find_path,
        stat_only,
    })
}
