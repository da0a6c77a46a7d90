//! Pattern-driven search: plan, walk, filter and merge

use super::fs::FileSystem;
use super::glob::CompiledPattern;
use super::options::{MatchOptions, WalkOptions};
use super::paths;
use super::pattern::{is_basename_only, prepare};
use super::rooter::find_info_from_pattern;
use super::walker::walk;
use crate::error::{FindError, Result};
use std::collections::HashMap;
use std::io;

/// Environment variable consulted when no default root is passed
pub const DEFAULT_ROOT_ENV: &str = "SYSTEM_DEFAULTWORKINGDIRECTORY";

/// Find everything `patterns` select below `default_root`.
///
/// Patterns run in order. An include pattern is planned with
/// [`find_info_from_pattern`], answered with one stat when it is fully
/// literal, otherwise by walking its find path and filtering the walk.
/// An exclude pattern removes matches from what has been collected so far.
/// The returned paths are sorted and unique under the `nocase` key policy.
pub fn find_match<F: FileSystem + ?Sized>(
    fs: &F,
    default_root: Option<&str>,
    patterns: &[String],
    walk_options: &WalkOptions,
    match_options: &MatchOptions,
) -> Result<Vec<String>> {
    let default_root = paths::normalize_separators(&resolve_default_root(default_root)?);
    tracing::debug!("default root: '{}'", default_root);
    walk_options.trace();
    match_options.trace();

    // result key -> path as found
    let mut results: HashMap<String, String> = HashMap::new();
    for raw in patterns {
        tracing::debug!("pattern: '{}'", raw);
        let Some(prepared) = prepare(raw, match_options) else {
            continue;
        };
        let options = &prepared.options;

        for variant in &prepared.variants {
            if prepared.include {
                let info = find_info_from_pattern(&default_root, variant, options)?;
                tracing::debug!("find path: '{}'", info.find_path);
                if info.find_path.is_empty() {
                    tracing::debug!("skipping empty path");
                    continue;
                }

                tracing::debug!("stat only: '{}'", info.stat_only);
                let found = if info.stat_only {
                    match fs.stat(&info.find_path) {
                        Ok(_) => vec![info.find_path.clone()],
                        Err(err) if err.kind() == io::ErrorKind::NotFound => {
                            tracing::debug!("ENOENT");
                            Vec::new()
                        }
                        Err(err) => return Err(FindError::from_io("stat", info.find_path.as_str(), err)),
                    }
                } else {
                    walk(fs, &info.find_path, walk_options)?
                };
                tracing::debug!("found {} paths", found.len());

                if info.adjusted_pattern != *variant {
                    tracing::debug!("adjusted pattern: '{}'", info.adjusted_pattern);
                }
                let compiled = CompiledPattern::new(&info.adjusted_pattern, options)?;
                let hits = compiled.filter_list(&found);
                tracing::debug!("{} matches", hits.len());
                for hit in hits {
                    results.insert(options.result_key(hit), hit.clone());
                }
            } else {
                let pattern = if options.match_base && !paths::is_rooted(variant) && is_basename_only(variant) {
                    tracing::debug!("match base and basename only");
                    variant.clone()
                } else {
                    let rooted = paths::ensure_pattern_rooted(&default_root, variant)?;
                    tracing::debug!("after ensure_pattern_rooted, pattern: '{}'", rooted);
                    rooted
                };

                let compiled = CompiledPattern::new(&pattern, options)?;
                let current: Vec<String> = results.values().cloned().collect();
                let hits = compiled.filter_list(&current);
                tracing::debug!("{} matches", hits.len());
                for hit in hits {
                    results.remove(&options.result_key(hit));
                }
            }
        }
    }

    let mut found: Vec<String> = results.into_values().collect();
    found.sort();
    tracing::debug!("{} final results", found.len());
    Ok(found)
}

/// Explicit root, else [`DEFAULT_ROOT_ENV`], else the working directory
pub fn resolve_default_root(explicit: Option<&str>) -> Result<String> {
    let from_env = std::env::var(DEFAULT_ROOT_ENV).ok();
    pick_default_root(explicit, from_env)
}

fn pick_default_root(explicit: Option<&str>, from_env: Option<String>) -> Result<String> {
    if let Some(root) = explicit.filter(|root| !root.is_empty()) {
        return Ok(root.to_string());
    }
    if let Some(root) = from_env.filter(|root| !root.is_empty()) {
        return Ok(root);
    }
    let cwd = std::env::current_dir().map_err(|err| FindError::from_io("getcwd", ".", err))?;
    Ok(cwd.to_string_lossy().into_owned())
}
