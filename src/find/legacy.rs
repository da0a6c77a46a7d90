//! Semicolon-delimited `+:`/`-:` pattern strings
//!
//! An older pattern dialect that compiles each glob to an anchored regular
//! expression instead of matching segment by segment. Kept for callers that
//! still pass patterns such as `+:**/*.json;-:**/excluded/*`.

use super::fs::FileSystem;
use super::options::WalkOptions;
use super::paths;
use super::walker::walk;
use crate::error::{FindError, Result};
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;

const INCLUDE_PREFIX: &str = "+:";
const EXCLUDE_PREFIX: &str = "-:";
/// Placeholder for an escaped `;;` while splitting
const ESCAPED_SEMICOLON: char = '\0';

/// Find files and/or directories selected by a legacy pattern string.
///
/// Unrooted patterns are joined onto `root`. When neither kind is
/// requested, files are returned. `nocase` makes every pattern match
/// case-insensitively. The result is sorted and unique.
pub fn legacy_find_files<F: FileSystem + ?Sized>(
    fs: &F,
    root: &str,
    pattern: &str,
    include_files: bool,
    include_directories: bool,
    nocase: bool,
) -> Result<Vec<String>> {
    if pattern.is_empty() {
        return Err(FindError::InvalidArgument("pattern parameter cannot be empty".to_string()));
    }

    tracing::debug!("legacy find root: '{}'", root);
    tracing::debug!("pattern: '{}'", pattern);
    tracing::debug!("include files: '{}'", include_files);
    tracing::debug!("include directories: '{}'", include_directories);
    let include_files = include_files || !include_directories;

    let mut includes: Vec<String> = Vec::new();
    let mut excludes: Vec<Regex> = Vec::new();
    let escaped = pattern.replace(";;", &ESCAPED_SEMICOLON.to_string());
    for part in escaped.split(';') {
        if part.is_empty() {
            continue;
        }
        let part = part.replace(ESCAPED_SEMICOLON, ";");

        let (is_include, body) = if let Some(rest) = part.strip_prefix(INCLUDE_PREFIX) {
            (true, rest)
        } else if let Some(rest) = part.strip_prefix(EXCLUDE_PREFIX) {
            (false, rest)
        } else {
            (true, part.as_str())
        };

        if body.ends_with(paths::SEPARATOR) {
            return Err(FindError::InvalidPattern { pattern: body.to_string() });
        }

        let rooted = if !root.is_empty() && !paths::is_rooted(body) {
            paths::join(root, body)
        } else {
            body.to_string()
        };

        if is_include {
            includes.push(rooted);
        } else {
            excludes.push(convert_pattern_to_regex(&rooted, nocase)?);
        }
    }

    for include in &includes {
        tracing::debug!("include pattern: '{}'", include);
    }
    for exclude in &excludes {
        tracing::debug!("exclude pattern: {}", exclude);
    }

    let walk_options = WalkOptions {
        follow_symbolic_links: true,
        follow_specified_symbolic_link: false,
        allow_broken_symbolic_links: false,
        skip_missing_files: false,
    };

    let mut matched: BTreeSet<String> = BTreeSet::new();
    for include in &includes {
        let find_path = search_root(include);
        if find_path.is_empty() {
            continue;
        }

        let regex = convert_pattern_to_regex(include, nocase)?;
        for item in walk(fs, &find_path, &walk_options)? {
            if !(include_files && include_directories) {
                let is_dir = fs
                    .stat(&item)
                    .map_err(|err| FindError::from_io("stat", item.as_str(), err))?
                    .is_dir();
                if !((include_files && !is_dir) || (include_directories && is_dir)) {
                    continue;
                }
            }

            // "**/dir/**" only matches a directory with its trailing slash
            let alternate = format!("{item}/");
            let hits = |re: &Regex| re.is_match(&item) || (include_directories && re.is_match(&alternate));
            if hits(&regex) && !excludes.iter().any(|exclude| hits(exclude)) {
                matched.insert(item);
            }
        }
    }

    tracing::debug!("total matched: {}", matched.len());
    Ok(matched.into_iter().collect())
}

/// Directory to walk for one include: everything before the first wildcard,
/// cut back to its directory part
fn search_root(pattern: &str) -> String {
    match pattern.find(['*', '?']) {
        Some(index) => paths::directory_name(&pattern[..index]),
        None => paths::directory_name(pattern),
    }
}

/// Translate a legacy glob into an anchored regular expression
pub(crate) fn convert_pattern_to_regex(pattern: &str, nocase: bool) -> Result<Regex> {
    let translated = regex::escape(pattern)
        .replace(r"/\*\*/", "((/.+/)|(/))")
        .replace(r"\*\*", ".*")
        .replace(r"\*", "[^/]*")
        .replace(r"\?", "[^/]");

    RegexBuilder::new(&format!("^{translated}$"))
        .case_insensitive(nocase)
        .build()
        .map_err(|_| FindError::InvalidPattern {
            pattern: pattern.to_string(),
        })
}
