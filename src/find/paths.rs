//! String-level path helpers
//!
//! Everything here is lexical: no call touches the filesystem. Separators are
//! POSIX `/`.

use crate::error::{FindError, Result};

pub const SEPARATOR: char = '/';

/// True when `p` starts at the filesystem root
pub fn is_rooted(p: &str) -> bool {
    p.starts_with(SEPARATOR)
}

/// Collapse runs of separators into one
pub fn normalize_separators(p: &str) -> String {
    let mut normalized = String::with_capacity(p.len());
    let mut previous_was_separator = false;
    for c in p.chars() {
        if c == SEPARATOR {
            if previous_was_separator {
                continue;
            }
            previous_was_separator = true;
        } else {
            previous_was_separator = false;
        }
        normalized.push(c);
    }
    normalized
}

/// Lexically normalize a path: resolve `.` and `..`, collapse separators.
/// A trailing separator is preserved.
pub fn normalize(p: &str) -> String {
    if p.is_empty() {
        return ".".to_string();
    }

    let rooted = is_rooted(p);
    let trailing = p.ends_with(SEPARATOR);
    let mut segments: Vec<&str> = Vec::new();
    for segment in p.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }

    let mut normalized = segments.join("/");
    if rooted {
        normalized.insert(0, SEPARATOR);
    }
    if normalized.is_empty() {
        return if trailing { "./" } else { "." }.to_string();
    }
    if trailing && !normalized.ends_with(SEPARATOR) {
        normalized.push(SEPARATOR);
    }
    normalized
}

/// Join and normalize
pub fn join(base: &str, child: &str) -> String {
    match (base.is_empty(), child.is_empty()) {
        (true, true) => ".".to_string(),
        (true, false) => normalize(child),
        (false, true) => normalize(base),
        (false, false) => normalize(&format!("{base}/{child}")),
    }
}

/// Prefix `p` with `root` unless it is already rooted
pub fn ensure_rooted(root: &str, p: &str) -> Result<String> {
    if root.is_empty() {
        return Err(FindError::InvalidArgument(
            "ensure_rooted() parameter \"root\" cannot be empty".to_string(),
        ));
    }
    if p.is_empty() {
        return Err(FindError::InvalidArgument(
            "ensure_rooted() parameter \"p\" cannot be empty".to_string(),
        ));
    }

    if is_rooted(p) {
        return Ok(p.to_string());
    }
    if root.ends_with(SEPARATOR) {
        Ok(format!("{root}{p}"))
    } else {
        Ok(format!("{root}{SEPARATOR}{p}"))
    }
}

/// Like [`ensure_rooted`], but glob-escapes the root first so that
/// characters such as `*` or `[` in a directory name match literally.
pub fn ensure_pattern_rooted(root: &str, p: &str) -> Result<String> {
    if root.is_empty() {
        return Err(FindError::InvalidArgument(
            "ensure_pattern_rooted() parameter \"root\" cannot be empty".to_string(),
        ));
    }
    if p.is_empty() {
        return Err(FindError::InvalidArgument(
            "ensure_pattern_rooted() parameter \"p\" cannot be empty".to_string(),
        ));
    }

    if is_rooted(p) {
        return Ok(p.to_string());
    }
    ensure_rooted(&escape_glob(&normalize_separators(root)), p)
}

/// Escape glob metacharacters so the text matches itself
pub fn escape_glob(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut escaped = String::with_capacity(text.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            // only a '[' that would open a class needs escaping
            '[' if closes_in_segment(&chars[i + 1..]) => escaped.push_str("[[]"),
            '?' => escaped.push_str("[?]"),
            '*' => escaped.push_str("[*]"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn closes_in_segment(rest: &[char]) -> bool {
    rest.iter()
        .take_while(|&&c| c != SEPARATOR)
        .skip(1)
        .any(|&c| c == ']')
}

/// Parent directory with trailing separators trimmed, or empty when there is
/// no higher directory (bare file name, or the root itself).
pub fn directory_name(p: &str) -> String {
    if p.is_empty() {
        return String::new();
    }

    let p = normalize_separators(p);
    if !p.contains(SEPARATOR) || p == "/" {
        return String::new();
    }
    if let Some(stripped) = p.strip_suffix(SEPARATOR) {
        return stripped.to_string();
    }

    match p.rfind(SEPARATOR) {
        Some(0) => "/".to_string(),
        Some(index) => p[..index].to_string(),
        None => String::new(),
    }
}
