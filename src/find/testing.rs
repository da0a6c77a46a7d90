//! In-memory filesystem for deterministic engine tests

use super::fs::{EntryKind, FileSystem};
use std::cell::Cell;
use std::collections::{HashMap, VecDeque};
use std::io;

const MAX_LINK_HOPS: usize = 40;

#[derive(Debug, Clone)]
enum Node {
    File,
    Dir,
    Link(String),
}

/// Absolute-path tree with symlinks and call counters
#[derive(Debug, Default)]
pub(crate) struct MemoryFs {
    nodes: HashMap<String, Node>,
    listings: HashMap<String, Vec<String>>,
    stat_calls: Cell<usize>,
    walk_calls: Cell<usize>,
}

impl MemoryFs {
    pub(crate) fn new() -> Self {
        let mut fs = Self::default();
        fs.nodes.insert("/".to_string(), Node::Dir);
        fs
    }

    pub(crate) fn dir(mut self, path: &str) -> Self {
        self.insert(path, Node::Dir);
        self
    }

    pub(crate) fn file(mut self, path: &str) -> Self {
        self.insert(path, Node::File);
        self
    }

    pub(crate) fn link(mut self, path: &str, target: &str) -> Self {
        self.insert(path, Node::Link(target.to_string()));
        self
    }

    /// List `name` under `parent` without creating it, as if it vanished
    /// between the listing and the stat
    pub(crate) fn ghost(mut self, parent: &str, name: &str) -> Self {
        self.listings.entry(parent.to_string()).or_default().push(name.to_string());
        self
    }

    pub(crate) fn stat_calls(&self) -> usize {
        self.stat_calls.get()
    }

    pub(crate) fn read_dir_calls(&self) -> usize {
        self.walk_calls.get()
    }

    fn insert(&mut self, path: &str, node: Node) {
        let (parent, name) = match path.rfind('/') {
            Some(0) => ("/", &path[1..]),
            Some(index) => (&path[..index], &path[index + 1..]),
            None => panic!("memory fs paths must be absolute: {path}"),
        };
        if !self.nodes.contains_key(parent) {
            self.insert(parent, Node::Dir);
        }
        self.listings.entry(parent.to_string()).or_default().push(name.to_string());
        self.nodes.insert(path.to_string(), node);
    }

    fn resolve(&self, path: &str, follow_last: bool) -> io::Result<(String, &Node)> {
        let mut pending: VecDeque<String> = segments(path);
        let mut real = String::new();
        let mut hops = 0;

        while let Some(segment) = pending.pop_front() {
            let candidate = format!("{real}/{segment}");
            let node = self
                .nodes
                .get(&candidate)
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
            match node {
                Node::Link(target) if follow_last || !pending.is_empty() => {
                    hops += 1;
                    if hops > MAX_LINK_HOPS {
                        return Err(io::Error::other("too many levels of symbolic links"));
                    }
                    let mut redirected = segments(target);
                    redirected.extend(pending);
                    pending = redirected;
                    real.clear();
                }
                Node::File if !pending.is_empty() => {
                    return Err(io::Error::from(io::ErrorKind::NotFound));
                }
                _ => real = candidate,
            }
        }

        if real.is_empty() {
            real.push('/');
        }
        let node = &self.nodes[&real];
        Ok((real, node))
    }
}

fn segments(path: &str) -> VecDeque<String> {
    path.split('/').filter(|s| !s.is_empty()).map(str::to_string).collect()
}

fn kind_of(node: &Node) -> EntryKind {
    match node {
        Node::File => EntryKind::File,
        Node::Dir => EntryKind::Directory,
        Node::Link(_) => EntryKind::Symlink,
    }
}

impl FileSystem for MemoryFs {
    fn stat(&self, path: &str) -> io::Result<EntryKind> {
        self.stat_calls.set(self.stat_calls.get() + 1);
        self.resolve(path, true).map(|(_, node)| kind_of(node))
    }

    fn lstat(&self, path: &str) -> io::Result<EntryKind> {
        self.stat_calls.set(self.stat_calls.get() + 1);
        self.resolve(path, false).map(|(_, node)| kind_of(node))
    }

    fn read_dir(&self, path: &str) -> io::Result<Vec<String>> {
        self.walk_calls.set(self.walk_calls.get() + 1);
        let (real, node) = self.resolve(path, true)?;
        match node {
            Node::Dir => Ok(self.listings.get(&real).cloned().unwrap_or_default()),
            _ => Err(io::Error::other("not a directory")),
        }
    }

    fn real_path(&self, path: &str) -> io::Result<String> {
        self.resolve(path, true).map(|(real, _)| real)
    }
}
