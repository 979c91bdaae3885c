//! This module provides the in-memory tree behind [`FakeFs`] together with
//! the builder operations that populate it.

use std::time::SystemTime;

use anyhow::bail;
use tracing::{debug, trace};

use crate::core::{Filesystem, utils};
use crate::error::{FsError, FsResult, Result};

use super::node::{Children, Node, Times};
use super::options::{DirOptions, FileContent};
use super::scope::Scope;
use super::stats::Stats;

/// An in-memory file system for tests that perform file system I/O.
///
/// `FakeFs` owns a tree of directories and files rooted at a single
/// directory. The tree is populated with the fluent builder operations
/// (`dir`, `file`, `touch`, `at`) and then queried through the
/// [`Filesystem`] operations, which report `ENOENT`, `ENOTDIR` and `EISDIR`
/// the way a POSIX file system does.
///
/// ### Paths
///
/// Paths are slash-delimited and always relative to the root: `""`, `"."`
/// and `"/"` denote the root, a leading `/` is ignored, empty and `.`
/// segments are skipped, `..` drops the previous segment.
///
/// ### Invariants
///
/// 1. **Root existence**: the root is always a directory.
/// 2. **Parent consistency**: every node but the root is a child of a
///    directory node.
/// 3. **Uniqueness**: names are unique within a directory, and children keep
///    the order in which they were created.
/// 4. **Fixed kind**: a node never turns from a file into a directory or
///    back.
///
/// ### Example
///
/// ```
/// use fake_fs::{Encoding, FakeFs, Filesystem};
///
/// # fn main() -> anyhow::Result<()> {
/// let mut fs = FakeFs::new();
/// fs.dir("a/b/c")?.file("a/hello.txt", "hello")?;
///
/// assert!(fs.stat_sync("a/b").unwrap().is_dir());
/// assert_eq!(fs.readdir_sync("a").unwrap(), vec!["b", "hello.txt"]);
/// assert_eq!(fs.read_file_to_string_sync("a/hello.txt", Encoding::Utf8).unwrap(), "hello");
/// assert_eq!(fs.read_file_sync("a").unwrap_err().code(), "EISDIR");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FakeFs {
    root: Node,
}

impl Default for FakeFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeFs {
    /// Creates an empty file system: the root directory only.
    pub fn new() -> Self {
        Self {
            root: Node::directory(Times::default()),
        }
    }

    /// Creates the directory at `path` and all its missing parents, like
    /// `mkdir -p`. An existing directory is left as it is.
    pub fn dir(&mut self, path: &str) -> Result<&mut Self> {
        self.dir_with(path, DirOptions::default())
    }

    /// Same as [`dir`](Self::dir), stamping the given timestamps on the
    /// directory if it did not exist before. Implicitly created parents get
    /// epoch timestamps; existing directories are never touched.
    pub fn dir_with(&mut self, path: &str, options: DirOptions) -> Result<&mut Self> {
        let segments = utils::segments(path);
        let Some((name, parents)) = segments.split_last() else {
            return Ok(self);
        };

        let children = self.parent_children_mut("mkdir", path, parents)?;
        match children.get(*name) {
            Some(node) if node.is_dir() => trace!(path, "directory already exists"),
            Some(_) => bail!("cannot create directory '{path}': a file exists at that path"),
            None => {
                debug!(path, "creating directory");
                children.insert(name.to_string(), Node::directory(options.times()));
            }
        }
        Ok(self)
    }

    /// Creates the file at `path`, creating missing parent directories.
    ///
    /// `content` is anything convertible into [`FileContent`]: text (stored
    /// with [`Encoding::Binary`](crate::Encoding::Binary)), text paired with
    /// an encoding, raw bytes, or [`FileOptions`](crate::FileOptions)
    /// carrying content and timestamps.
    ///
    /// An existing file is replaced in place: it keeps its position in the
    /// directory listing, while content and timestamps come from this call.
    pub fn file(&mut self, path: &str, content: impl Into<FileContent>) -> Result<&mut Self> {
        let segments = utils::segments(path);
        let Some((name, parents)) = segments.split_last() else {
            bail!("cannot create file '{path}': the path denotes the root directory");
        };
        let (bytes, times) = content.into().resolve()?;

        let children = self.parent_children_mut("open", path, parents)?;
        let node = Node::file(bytes, times);
        match children.get_mut(*name) {
            Some(existing) if existing.is_dir() => {
                bail!("cannot create file '{path}': a directory exists at that path")
            }
            Some(existing) => {
                debug!(path, "overwriting file");
                *existing = node;
            }
            None => {
                debug!(path, "creating file");
                children.insert(name.to_string(), node);
            }
        }
        Ok(self)
    }

    /// Creates an empty file at `path`.
    pub fn touch(&mut self, path: &str) -> Result<&mut Self> {
        self.file(path, FileContent::Empty)
    }

    /// Returns a builder that prefixes every path with `prefix`.
    ///
    /// ```
    /// use fake_fs::{FakeFs, Filesystem};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let mut fs = FakeFs::new();
    /// fs.at("home").touch(".gitignore")?.dir(".local")?;
    ///
    /// assert!(fs.stat_sync("home/.gitignore").unwrap().is_file());
    /// assert!(fs.stat_sync("home/.local").unwrap().is_dir());
    /// # Ok(())
    /// # }
    /// ```
    pub fn at(&mut self, prefix: &str) -> Scope<'_> {
        Scope::new(self, prefix)
    }

    /// Looks up the node at `path` without changing anything.
    fn resolve(&self, syscall: &'static str, path: &str) -> FsResult<&Node> {
        let mut node = &self.root;
        for segment in utils::segments(path) {
            let children = node
                .children()
                .ok_or_else(|| FsError::not_a_directory(syscall, path))?;
            node = children
                .get(segment)
                .ok_or_else(|| FsError::not_found(syscall, path))?;
        }
        Ok(node)
    }

    /// Walks `segments` from the root and returns the node they lead to.
    ///
    /// Every traversed node must be a directory (`ENOTDIR` otherwise). A
    /// missing segment is created as a directory when `create` is set and
    /// reported as `ENOENT` when it is not.
    fn walk_mut(
        &mut self,
        syscall: &'static str,
        path: &str,
        segments: &[&str],
        create: bool,
    ) -> FsResult<&mut Node> {
        let mut node = &mut self.root;
        for (depth, segment) in segments.iter().enumerate() {
            let children = node
                .children_mut()
                .ok_or_else(|| FsError::not_a_directory(syscall, path))?;
            if !children.contains_key(*segment) {
                if !create {
                    return Err(FsError::not_found(syscall, path));
                }
                debug!(
                    dir = %segments[..=depth].join("/"),
                    "creating missing parent directory"
                );
                children.insert(segment.to_string(), Node::directory(Times::default()));
            }
            node = children
                .get_mut(*segment)
                .ok_or_else(|| FsError::not_found(syscall, path))?;
        }
        Ok(node)
    }

    /// Creates the parent directories of `path` and returns the children of
    /// the innermost one.
    fn parent_children_mut(
        &mut self,
        syscall: &'static str,
        path: &str,
        parents: &[&str],
    ) -> FsResult<&mut Children> {
        self.walk_mut(syscall, path, parents, true)?
            .children_mut()
            .ok_or_else(|| FsError::not_a_directory(syscall, path))
    }
}

impl Filesystem for FakeFs {
    /// Fails with `ENOENT` if nothing exists at `path`, or with `ENOTDIR` if
    /// one of its ancestors is a file.
    fn stat_sync(&self, path: &str) -> FsResult<Stats> {
        self.resolve("stat", path)
            .map(Stats::of)
            .inspect_err(|err| trace!(%err, "stat failed"))
    }

    /// Fails with `ENOENT` on a missing path and with `ENOTDIR` on a file.
    fn readdir_sync(&self, path: &str) -> FsResult<Vec<String>> {
        self.resolve("scandir", path)
            .and_then(|node| {
                node.children()
                    .map(|children| children.keys().cloned().collect::<Vec<_>>())
                    .ok_or_else(|| FsError::not_a_directory("scandir", path))
            })
            .inspect_err(|err| trace!(%err, "readdir failed"))
    }

    /// Fails with `ENOENT` on a missing path and with `EISDIR` on a
    /// directory.
    fn read_file_sync(&self, path: &str) -> FsResult<Vec<u8>> {
        self.resolve("open", path)
            .and_then(|node| {
                node.content()
                    .map(<[u8]>::to_vec)
                    .ok_or_else(|| FsError::is_a_directory("open", path))
            })
            .inspect_err(|err| trace!(%err, "read failed"))
    }

    /// Unlike [`FakeFs::file`], never creates directories: the parent must
    /// exist (`ENOENT`), and the target must not be a directory (`EISDIR`).
    /// An existing file keeps its `atime`, a new file gets all three
    /// timestamps set to the current time; `mtime` and `ctime` are always
    /// set to the current time.
    fn write_file_sync(&mut self, path: &str, content: &[u8]) -> FsResult<()> {
        let segments = utils::segments(path);
        let Some((name, parents)) = segments.split_last() else {
            return Err(FsError::is_a_directory("open", path));
        };
        let now = SystemTime::now();

        let children = self
            .walk_mut("open", path, parents, false)?
            .children_mut()
            .ok_or_else(|| FsError::not_a_directory("open", path))?;
        match children.get_mut(*name) {
            Some(node) => {
                if !node.set_content(content, now) {
                    return Err(FsError::is_a_directory("open", path));
                }
            }
            None => {
                let times = Times {
                    atime: now,
                    mtime: now,
                    ctime: now,
                };
                children.insert(name.to_string(), Node::file(content.to_vec(), times));
            }
        }
        debug!(path, size = content.len(), "wrote file");
        Ok(())
    }
}
