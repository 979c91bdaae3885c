//! An in-memory fake file system for unit tests of code that performs file
//! system I/O. Nothing ever touches the disk.
//!
//! ### Overview
//!
//! `fake-fs` keeps a tree of directories and files in memory. Tests populate it
//! with a fluent builder (`dir`, `file`, `touch`, `at`) and hand it to the code
//! under test, which talks to it through the [`Filesystem`] trait: `stat`,
//! `readdir`, `exists`, `read_file` and `write_file`, each in a synchronous and
//! a deferred (future returning) flavour.
//!
//! **Key ideas**:
//! - **mkdir -p everywhere**: building a path creates its missing parents.
//! - **POSIX error kinds**: failures report `ENOENT`, `ENOTDIR` or `EISDIR`.
//! - **Deterministic**: unset timestamps read as the Unix epoch, directory
//!   listings keep creation order.
//! - **Deferred results**: async operations never complete on their first poll.
//!
//! ```
//! use fake_fs::{FakeFs, Filesystem};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut fs = FakeFs::new();
//! fs.dir("a")?.touch("b.txt")?;
//!
//! assert_eq!(fs.readdir_sync(".")?, vec!["a", "b.txt"]);
//! assert_eq!(fs.readdir_sync("b.txt").unwrap_err().code(), "ENOTDIR");
//! assert!(futures::executor::block_on(fs.exists("a")));
//! # Ok(())
//! # }
//! ```

mod core;
mod deferred;
mod encoding;
mod error;
mod vfs;

pub use crate::core::Filesystem;
pub use deferred::Deferred;
pub use encoding::Encoding;
pub use error::{EncodingError, ErrorKind, FsError, FsResult, Result};
pub use vfs::{Content, DirOptions, FakeFs, FileContent, FileOptions, NodeKind, Scope, Stats, Times};
