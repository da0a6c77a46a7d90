//! Apply an ordered include/exclude pattern list to an in-memory path list

use super::glob::CompiledPattern;
use super::options::MatchOptions;
use super::paths;
use super::pattern::{is_basename_only, prepare};
use crate::error::Result;
use std::collections::HashSet;

/// Filter `list` through `patterns`, applied left to right.
///
/// Include patterns add their matches from the full list, `!` patterns take
/// theirs away. Unrooted patterns are rooted at `pattern_root` when one is
/// given, except slash-free patterns under `match_base`. The result keeps the
/// order (and any duplicates) of `list`.
pub fn match_paths(
    list: &[String],
    patterns: &[String],
    pattern_root: Option<&str>,
    options: &MatchOptions,
) -> Result<Vec<String>> {
    tracing::debug!("pattern root: '{}'", pattern_root.unwrap_or_default());
    options.trace();

    let mut matched: HashSet<&str> = HashSet::new();
    for raw in patterns {
        tracing::debug!("pattern: '{}'", raw);
        let Some(prepared) = prepare(raw, options) else {
            continue;
        };

        for variant in &prepared.variants {
            let pattern = match pattern_root {
                Some(root)
                    if !root.is_empty()
                        && !paths::is_rooted(variant)
                        && (!prepared.options.match_base || !is_basename_only(variant)) =>
                {
                    let rooted = paths::ensure_rooted(root, variant)?;
                    tracing::debug!("rooted pattern: '{}'", rooted);
                    rooted
                }
                _ => variant.clone(),
            };

            let compiled = CompiledPattern::new(&pattern, &prepared.options)?;
            let hits = compiled.filter_list(list);
            tracing::debug!("{} matches", hits.len());
            if prepared.include {
                matched.extend(hits.into_iter().map(String::as_str));
            } else {
                for hit in hits {
                    matched.remove(hit.as_str());
                }
            }
        }
    }

    let result: Vec<String> = list
        .iter()
        .filter(|item| matched.contains(item.as_str()))
        .cloned()
        .collect();
    tracing::debug!("{} final results", result.len());
    Ok(result)
}

/// Compile one pattern into a reusable predicate.
///
/// No comment, negation or brace preprocessing happens here.
pub fn filter(pattern: &str, options: &MatchOptions) -> Result<CompiledPattern> {
    CompiledPattern::new(pattern, options)
}
