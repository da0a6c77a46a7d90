//! Glob compilation and matching
//!
//! Patterns are matched segment by segment, the way shell globs treat paths:
//! a wildcard never crosses `/`, a segment that is exactly `**` spans any
//! number of segments, and names starting with `.` get special treatment.
//! Each wildcard segment is compiled once with `globset`.
//!
//! Brace alternation is not handled here. By the time a pattern is compiled
//! its braces have been expanded (see [`super::pattern`]), so any `{` or `}`
//! left over matches literally.

use super::options::MatchOptions;
use crate::error::{FindError, Result};
use globset::{GlobBuilder, GlobMatcher};

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    GlobStar,
    Wild {
        matcher: GlobMatcher,
        explicit_dot: bool,
    },
}

/// A single compiled pattern
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pattern: String,
    segments: Vec<Segment>,
    nocase: bool,
    dot: bool,
    match_base: bool,
}

impl CompiledPattern {
    /// Compile `pattern` under `options`. Comment, negation and brace flags
    /// are ignored here; the caller has already dealt with them.
    pub fn new(pattern: &str, options: &MatchOptions) -> Result<Self> {
        let mut segments = Vec::new();
        for segment in split_segments(pattern) {
            let compiled = if segment == "**" && !options.noglobstar {
                Segment::GlobStar
            } else if !has_magic(segment) {
                Segment::Literal(unescape(segment))
            } else {
                let glob = GlobBuilder::new(&sanitize(segment))
                    .literal_separator(true)
                    .backslash_escape(true)
                    .case_insensitive(options.nocase)
                    .build()
                    .map_err(|source| FindError::Glob {
                        pattern: pattern.to_string(),
                        source,
                    })?;
                Segment::Wild {
                    matcher: glob.compile_matcher(),
                    explicit_dot: segment.starts_with('.'),
                }
            };
            segments.push(compiled);
        }

        Ok(Self {
            pattern: pattern.to_string(),
            segments,
            nocase: options.nocase,
            dot: options.dot,
            match_base: options.match_base,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Test one path
    pub fn is_match(&self, path: &str) -> bool {
        let file = split_segments(path);
        if self.match_base && self.segments.len() == 1 {
            let basename = file.last().copied().unwrap_or_default();
            return self.match_segments(&[basename], &self.segments);
        }
        self.match_segments(&file, &self.segments)
    }

    /// Keep the entries of `list` that match, in list order
    pub fn filter_list<'a>(&self, list: &'a [String]) -> Vec<&'a String> {
        list.iter().filter(|item| self.is_match(item)).collect()
    }

    fn match_segments(&self, file: &[&str], pattern: &[Segment]) -> bool {
        let mut fi = 0;
        let mut pi = 0;
        while fi < file.len() && pi < pattern.len() {
            match &pattern[pi] {
                Segment::GlobStar => {
                    let rest = &pattern[pi + 1..];
                    if rest.is_empty() {
                        // a trailing ** swallows everything except hidden segments
                        return file[fi..].iter().all(|f| !self.blocks_globstar(f));
                    }
                    for fr in fi..file.len() {
                        if self.match_segments(&file[fr..], rest) {
                            return true;
                        }
                        if self.blocks_globstar(file[fr]) {
                            break;
                        }
                    }
                    return false;
                }
                segment => {
                    if !self.segment_matches(segment, file[fi]) {
                        return false;
                    }
                }
            }
            fi += 1;
            pi += 1;
        }

        if fi == file.len() && pi == pattern.len() {
            return true;
        }
        // pattern exhausted: "a/" is matched by "a"
        pi == pattern.len() && fi == file.len() - 1 && file[fi].is_empty()
    }

    fn blocks_globstar(&self, name: &str) -> bool {
        name == "." || name == ".." || (!self.dot && name.starts_with('.'))
    }

    fn segment_matches(&self, segment: &Segment, name: &str) -> bool {
        match segment {
            Segment::Literal(literal) => {
                if self.nocase {
                    literal.to_lowercase() == name.to_lowercase()
                } else {
                    literal == name
                }
            }
            Segment::Wild { matcher, explicit_dot } => {
                if !explicit_dot {
                    if name == "." || name == ".." {
                        return false;
                    }
                    if !self.dot && name.starts_with('.') {
                        return false;
                    }
                }
                matcher.is_match(name)
            }
            Segment::GlobStar => true,
        }
    }
}

/// Split on `/`, dropping empty interior segments. A leading empty segment
/// (rooted path) and a trailing one (trailing separator) are kept.
pub(crate) fn split_segments(text: &str) -> Vec<&str> {
    let parts: Vec<&str> = text.split('/').collect();
    let last = parts.len() - 1;
    parts
        .into_iter()
        .enumerate()
        .filter(|(i, part)| !part.is_empty() || *i == 0 || *i == last)
        .map(|(_, part)| part)
        .collect()
}

/// True when the segment holds an unescaped `*`, `?` or a closed `[...]` class
pub(crate) fn has_magic(segment: &str) -> bool {
    let chars: Vec<char> = segment.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            '*' | '?' => return true,
            '[' if class_end(&chars, i).is_some() => return true,
            _ => {}
        }
        i += 1;
    }
    false
}

/// Drop glob escapes from a literal segment
pub(crate) fn unescape(segment: &str) -> String {
    let mut unescaped = String::with_capacity(segment.len());
    let mut chars = segment.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => unescaped.push(next),
                None => unescaped.push(c),
            }
        } else {
            unescaped.push(c);
        }
    }
    unescaped
}

/// Index of the `]` closing the class opened at `open`
fn class_end(chars: &[char], open: usize) -> Option<usize> {
    let mut i = open + 1;
    if matches!(chars.get(i), Some('!') | Some('^')) {
        i += 1;
    }
    // a ']' right after the opener is a member, not the end
    i += 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            ']' => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}

/// Rewrite a segment into globset syntax with shell semantics: literal
/// braces, unclosed `[` literal, `[^` as negation, `**` as `*`.
fn sanitize(segment: &str) -> String {
    let chars: Vec<char> = segment.chars().collect();
    let mut out = String::with_capacity(segment.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => match chars.get(i + 1) {
                Some(&next) => {
                    out.push('\\');
                    out.push(next);
                    i += 1;
                }
                None => out.push_str("\\\\"),
            },
            '{' => out.push_str("[{]"),
            '}' => out.push_str("[}]"),
            '*' => {
                out.push('*');
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.push('[');
                    let mut j = i + 1;
                    if matches!(chars[j], '!' | '^') {
                        out.push('!');
                        j += 1;
                    }
                    for &c in &chars[j..end] {
                        out.push(c);
                    }
                    out.push(']');
                    i = end;
                }
                None => out.push_str("[[]"),
            },
            c => out.push(c),
        }
        i += 1;
    }
    out
}
