//! Pattern preprocessing shared by `match_paths` and `find_match`
//!
//! A raw pattern goes through: trim, comment check, negation counting, brace
//! expansion. Each step turns its own flag off on a per-pattern copy of the
//! options, because a later step may produce text (a leading `#` or `!` out of
//! a brace group) that must not be reinterpreted.

use super::options::MatchOptions;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NUMERIC_SEQUENCE: Regex = Regex::new(r"^-?\d+\.\.-?\d+(?:\.\.-?\d+)?$").unwrap();
    static ref ALPHA_SEQUENCE: Regex = Regex::new(r"^[a-zA-Z]\.\.[a-zA-Z](?:\.\.-?\d+)?$").unwrap();
    static ref PADDED_NUMBER: Regex = Regex::new(r"^-?0\d").unwrap();
}

/// A pattern ready to be rooted and matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPattern {
    /// False for exclude patterns
    pub include: bool,
    /// Brace expansion output, trimmed, empties dropped
    pub variants: Vec<String>,
    /// Per-pattern options with comment, negation and brace handling switched off
    pub options: MatchOptions,
}

/// Run the preprocessing steps. Returns `None` for empty patterns and comments.
pub fn prepare(raw: &str, base: &MatchOptions) -> Option<PreparedPattern> {
    let pattern = raw.trim();
    if pattern.is_empty() {
        tracing::debug!("skipping empty pattern");
        return None;
    }

    let mut options = base.clone();
    if !options.nocomment && pattern.starts_with('#') {
        tracing::debug!("skipping comment");
        return None;
    }
    options.nocomment = true;

    let mut negate_count = 0;
    let mut pattern = pattern;
    if !options.nonegate {
        negate_count = pattern.chars().take_while(|&c| c == '!').count();
        pattern = &pattern[negate_count..];
        if negate_count > 0 {
            tracing::debug!("trimmed leading '!'. pattern: '{}'", pattern);
        }
    }

    let include = negate_count == 0
        || (negate_count % 2 == 0 && !options.flip_negate)
        || (negate_count % 2 == 1 && options.flip_negate);
    options.nonegate = true;
    options.flip_negate = false;

    let expanded = if options.nobrace {
        vec![pattern.to_string()]
    } else {
        tracing::debug!("expanding braces");
        expand_braces(pattern)
    };
    options.nobrace = true;

    let variants: Vec<String> = expanded
        .into_iter()
        .map(|variant| variant.trim().to_string())
        .filter(|variant| !variant.is_empty())
        .collect();
    if variants.len() != 1 || variants[0] != pattern {
        tracing::debug!("expanded patterns: {:?}", variants);
    }

    Some(PreparedPattern { include, variants, options })
}

/// True for a pattern with no separator that `match_base` applies to
pub fn is_basename_only(pattern: &str) -> bool {
    !pattern.contains('/')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sym {
    ch: char,
    escaped: bool,
}

impl Sym {
    fn literal(ch: char) -> Self {
        Self { ch, escaped: true }
    }

    fn is(self, ch: char) -> bool {
        !self.escaped && self.ch == ch
    }
}

/// Expand `{a,b}` alternation and `{1..3}` / `{a..c}` sequences.
///
/// Nested groups are supported. A group with neither a comma nor a sequence is
/// kept literally. `\{`, `\}`, `\,`, `\.` and `\\` escape one character and
/// lose their backslash; any other backslash is kept for the glob compiler.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let mut syms = lex(pattern);
    if syms.len() >= 2 && syms[0].is('{') && syms[1].is('}') {
        syms[0].escaped = true;
        syms[1].escaped = true;
    }

    expand(&syms, true)
        .into_iter()
        .map(|expansion| expansion.iter().map(|sym| sym.ch).collect())
        .collect()
}

fn lex(pattern: &str) -> Vec<Sym> {
    let mut syms = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(&next) = chars.peek() {
                if matches!(next, '\\' | '{' | '}' | ',' | '.') {
                    chars.next();
                    syms.push(Sym::literal(next));
                    continue;
                }
            }
        }
        syms.push(Sym { ch, escaped: false });
    }
    syms
}

fn expand(syms: &[Sym], top: bool) -> Vec<Vec<Sym>> {
    let Some((open, close)) = balanced(syms) else {
        return vec![syms.to_vec()];
    };

    let pre = &syms[..open];
    let body = &syms[open + 1..close];
    let post = &syms[close + 1..];

    // `${...}` is a variable reference, not a brace group
    if pre.last().is_some_and(|sym| sym.is('$')) {
        return vec![syms.to_vec()];
    }

    let sequence = parse_sequence(body);
    let is_options = body.iter().any(|sym| sym.is(','));

    if sequence.is_none() && !is_options {
        let mut head = pre.to_vec();
        head.push(Sym::literal('{'));
        head.extend_from_slice(body);
        head.push(Sym::literal('}'));
        return expand(post, false)
            .into_iter()
            .map(|tail| [head.as_slice(), tail.as_slice()].concat())
            .collect();
    }

    let posts = if post.is_empty() {
        vec![Vec::new()]
    } else {
        expand(post, false)
    };

    let alternatives: Vec<Vec<Sym>> = match &sequence {
        Some(items) => items
            .iter()
            .map(|item| item.chars().map(Sym::literal).collect())
            .collect(),
        None => {
            let parts = split_top_level(body);
            if parts.len() == 1 {
                // x{{a,b}}y => x{a}y x{b}y
                let inner: Vec<Vec<Sym>> = expand(&parts[0], false).into_iter().map(embrace).collect();
                if inner.len() == 1 {
                    return posts
                        .iter()
                        .map(|tail| [pre, inner[0].as_slice(), tail.as_slice()].concat())
                        .collect();
                }
                inner
            } else {
                parts.iter().flat_map(|part| expand(part, false)).collect()
            }
        }
    };

    let mut expansions = Vec::with_capacity(alternatives.len() * posts.len());
    for alternative in &alternatives {
        for tail in &posts {
            let expansion = [pre, alternative.as_slice(), tail.as_slice()].concat();
            if !top || sequence.is_some() || !expansion.is_empty() {
                expansions.push(expansion);
            }
        }
    }
    expansions
}

/// First complete `{...}` group. When the outermost `{` never closes, the
/// leftmost group that did close is used.
fn balanced(syms: &[Sym]) -> Option<(usize, usize)> {
    let mut stack = Vec::new();
    let mut fallback: Option<(usize, usize)> = None;
    for (i, sym) in syms.iter().enumerate() {
        if sym.is('{') {
            stack.push(i);
        } else if sym.is('}') {
            if let Some(open) = stack.pop() {
                if stack.is_empty() {
                    return Some((open, i));
                }
                if fallback.is_none_or(|(start, _)| open < start) {
                    fallback = Some((open, i));
                }
            }
        }
    }
    fallback
}

fn split_top_level(body: &[Sym]) -> Vec<Vec<Sym>> {
    let mut parts = vec![Vec::new()];
    let mut depth = 0usize;
    for &sym in body {
        if sym.is('{') {
            depth += 1;
        } else if sym.is('}') {
            depth = depth.saturating_sub(1);
        } else if sym.is(',') && depth == 0 {
            parts.push(Vec::new());
            continue;
        }
        if let Some(last) = parts.last_mut() {
            last.push(sym);
        }
    }
    parts
}

fn embrace(mut syms: Vec<Sym>) -> Vec<Sym> {
    syms.insert(0, Sym::literal('{'));
    syms.push(Sym::literal('}'));
    syms
}

fn parse_sequence(body: &[Sym]) -> Option<Vec<String>> {
    if body.iter().any(|sym| sym.escaped) {
        return None;
    }
    let text: String = body.iter().map(|sym| sym.ch).collect();

    if NUMERIC_SEQUENCE.is_match(&text) {
        let bounds: Vec<&str> = text.split("..").collect();
        let start: i64 = bounds[0].parse().ok()?;
        let end: i64 = bounds[1].parse().ok()?;
        let step = step_of(bounds.get(2))?;
        let width = bounds[0].len().max(bounds[1].len());
        let pad = PADDED_NUMBER.is_match(bounds[0]) || PADDED_NUMBER.is_match(bounds[1]);

        let items = stepped(start, end, step)
            .into_iter()
            .map(|value| if pad { zero_pad(value, width) } else { value.to_string() })
            .collect();
        return Some(items);
    }

    if ALPHA_SEQUENCE.is_match(&text) {
        let bounds: Vec<&str> = text.split("..").collect();
        let start = i64::from(u32::from(bounds[0].chars().next()?));
        let end = i64::from(u32::from(bounds[1].chars().next()?));
        let step = step_of(bounds.get(2))?;

        let items = stepped(start, end, step)
            .into_iter()
            .filter_map(|code| u32::try_from(code).ok().and_then(char::from_u32))
            .map(|c| if c == '\\' { String::new() } else { c.to_string() })
            .collect();
        return Some(items);
    }

    None
}

fn step_of(raw: Option<&&str>) -> Option<i64> {
    match raw {
        Some(raw) => Some(raw.parse::<i64>().ok()?.checked_abs()?.max(1)),
        None => Some(1),
    }
}

fn stepped(start: i64, end: i64, step: i64) -> Vec<i64> {
    let mut values = Vec::new();
    let mut current = Some(start);
    if end < start {
        while let Some(value) = current.filter(|value| *value >= end) {
            values.push(value);
            current = value.checked_sub(step);
        }
    } else {
        while let Some(value) = current.filter(|value| *value <= end) {
            values.push(value);
            current = value.checked_add(step);
        }
    }
    values
}

fn zero_pad(value: i64, width: usize) -> String {
    let digits = value.to_string();
    let need = width.saturating_sub(digits.len());
    if need == 0 {
        return digits;
    }
    let zeros = "0".repeat(need);
    match digits.strip_prefix('-') {
        Some(magnitude) => format!("-{zeros}{magnitude}"),
        None => format!("{zeros}{digits}"),
    }
}
