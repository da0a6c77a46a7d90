//! Filesystem primitives consumed by the engine
//!
//! The walker, the orchestrator and the legacy adapter never touch `std::fs`
//! directly. They go through [`FileSystem`] so callers can inject an
//! instrumented or virtual implementation.

use std::fs;
use std::io;

/// Kind of a filesystem entry as reported by a stat call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Only reported by [`FileSystem::lstat`]
    Symlink,
    Other,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }

    fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// Stat, list and canonicalize primitives
pub trait FileSystem {
    /// Stat following symbolic links
    fn stat(&self, path: &str) -> io::Result<EntryKind>;

    /// Stat the entry itself, never following a final symbolic link
    fn lstat(&self, path: &str) -> io::Result<EntryKind>;

    /// Child names in host order. Names that are not valid UTF-8 are an
    /// `InvalidData` error.
    fn read_dir(&self, path: &str) -> io::Result<Vec<String>>;

    /// Canonical path with every symbolic link resolved
    fn real_path(&self, path: &str) -> io::Result<String>;
}

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn stat(&self, path: &str) -> io::Result<EntryKind> {
        Ok(EntryKind::from_file_type(fs::metadata(path)?.file_type()))
    }

    fn lstat(&self, path: &str) -> io::Result<EntryKind> {
        Ok(EntryKind::from_file_type(fs::symlink_metadata(path)?.file_type()))
    }

    fn read_dir(&self, path: &str) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let name = entry?.file_name().into_string().map_err(|name| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("entry name {name:?} in '{path}' is not valid UTF-8"),
                )
            })?;
            names.push(name);
        }
        Ok(names)
    }

    fn real_path(&self, path: &str) -> io::Result<String> {
        Ok(fs::canonicalize(path)?.to_string_lossy().into_owned())
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn stat(&self, path: &str) -> io::Result<EntryKind> {
        (**self).stat(path)
    }

    fn lstat(&self, path: &str) -> io::Result<EntryKind> {
        (**self).lstat(path)
    }

    fn read_dir(&self, path: &str) -> io::Result<Vec<String>> {
        (**self).read_dir(path)
    }

    fn real_path(&self, path: &str) -> io::Result<String> {
        (**self).real_path(path)
    }
}
