//! Recursive directory traversal
//!
//! The walk runs on an explicit stack rather than the call stack, so tree
//! depth is bounded by heap, not by thread stack size. Output is pre-order
//! with children in the order the directory listing returned them.

use super::fs::{EntryKind, FileSystem};
use super::options::WalkOptions;
use super::paths;
use crate::error::{FindError, Result};
use std::io;

/// Stand-in for one frame of a recursive walk
#[derive(Debug)]
struct WalkStackEntry {
    path: String,
    /// Depth, root is 1. Used to trim the traversal chain when backtracking.
    level: usize,
}

/// Walk `root` and return every path reached, root first.
///
/// A root that does not exist yields an empty list instead of an error.
pub fn walk<F: FileSystem + ?Sized>(fs: &F, root: &str, options: &WalkOptions) -> Result<Vec<String>> {
    if root.is_empty() {
        tracing::debug!("no path specified");
        return Ok(Vec::new());
    }

    // normalize so the first entry is formatted like the joined children
    let root = paths::normalize(root);
    tracing::debug!("find path: '{}'", root);
    options.trace();

    if let Err(err) = fs.lstat(&root) {
        if err.kind() == io::ErrorKind::NotFound {
            tracing::debug!("0 results");
            return Ok(Vec::new());
        }
        return Err(FindError::from_io("lstat", root, err));
    }

    let mut result = Vec::new();
    let mut stack = vec![WalkStackEntry { path: root, level: 1 }];
    // canonical paths of the directories above the current entry
    let mut traversal_chain: Vec<String> = Vec::new();

    while let Some(entry) = stack.pop() {
        let is_root = entry.level == 1;
        let follow = options.follow_symbolic_links || (options.follow_specified_symbolic_link && is_root);

        let kind = match stat_entry(fs, &entry.path, follow, options.allow_broken_symbolic_links) {
            Ok(kind) => kind,
            Err(err) if err.is_not_found() && options.skip_missing_files => {
                tracing::warn!("No such file or directory: \"{}\" - skipping.", entry.path);
                continue;
            }
            Err(err) => return Err(err),
        };
        result.push(entry.path.clone());

        // an unfollowed link stats as a symlink, never as a directory
        if !kind.is_dir() {
            tracing::debug!("  {} (file)", entry.path);
            continue;
        }
        tracing::debug!("  {} (directory)", entry.path);

        if options.follow_symbolic_links {
            let real_path = fs
                .real_path(&entry.path)
                .map_err(|err| FindError::from_io("realpath", entry.path.as_str(), err))?;

            traversal_chain.truncate(entry.level - 1);
            if traversal_chain.contains(&real_path) {
                tracing::debug!("    cycle detected");
                continue;
            }
            traversal_chain.push(real_path);
        }

        let children = fs
            .read_dir(&entry.path)
            .map_err(|err| FindError::from_io("readdir", entry.path.as_str(), err))?;
        let child_level = entry.level + 1;
        for name in children.iter().rev() {
            stack.push(WalkStackEntry {
                path: paths::join(&entry.path, name),
                level: child_level,
            });
        }
    }

    tracing::debug!("{} results", result.len());
    Ok(result)
}

fn stat_entry<F: FileSystem + ?Sized>(
    fs: &F,
    path: &str,
    follow: bool,
    allow_broken_symbolic_links: bool,
) -> Result<EntryKind> {
    if !follow {
        return fs.lstat(path).map_err(|err| FindError::from_io("lstat", path, err));
    }

    match fs.stat(path) {
        Ok(kind) => Ok(kind),
        Err(err) if err.kind() == io::ErrorKind::NotFound => match fs.lstat(path) {
            Ok(EntryKind::Symlink) if allow_broken_symbolic_links => {
                tracing::debug!("  {} (broken symlink)", path);
                Ok(EntryKind::Symlink)
            }
            Ok(EntryKind::Symlink) => Err(FindError::BrokenSymlink { path: path.to_string() }),
            _ => Err(FindError::NotFound { path: path.to_string() }),
        },
        Err(err) => Err(FindError::from_io("stat", path, err)),
    }
}
