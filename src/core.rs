use crate::Stats;
use crate::deferred::Deferred;
use crate::encoding::Encoding;
use crate::error::FsResult;

/// File system operations that code under test is written against.
///
/// The synchronous operations are required. Each asynchronous variant is
/// provided on top of its synchronous counterpart: the work is done when the
/// variant is called, and its outcome is delivered through a [`Deferred`]
/// future which never completes on its first poll.
///
/// Errors always carry one of the [`ErrorKind`](crate::ErrorKind)s:
/// `ENOENT`, `ENOTDIR` or `EISDIR`.
pub trait Filesystem {
    /// Returns metadata of the node at `path`.
    fn stat_sync(&self, path: &str) -> FsResult<Stats>;

    /// Returns names of the children of the directory at `path`, in the order
    /// they were created.
    fn readdir_sync(&self, path: &str) -> FsResult<Vec<String>>;

    /// Returns the content of the file at `path`.
    fn read_file_sync(&self, path: &str) -> FsResult<Vec<u8>>;

    /// Replaces the content of the file at `path`, creating the file if its
    /// parent directory exists.
    fn write_file_sync(&mut self, path: &str, content: &[u8]) -> FsResult<()>;

    /// Returns the content of the file at `path` rendered as text.
    fn read_file_to_string_sync(&self, path: &str, encoding: Encoding) -> FsResult<String> {
        let bytes = self.read_file_sync(path)?;
        Ok(encoding.to_text(&bytes))
    }

    fn exists_sync(&self, path: &str) -> bool {
        self.stat_sync(path).is_ok()
    }

    fn stat(&self, path: &str) -> Deferred<FsResult<Stats>> {
        Deferred::new(self.stat_sync(path))
    }

    fn readdir(&self, path: &str) -> Deferred<FsResult<Vec<String>>> {
        Deferred::new(self.readdir_sync(path))
    }

    /// Resolves to `true` if anything exists at `path`. Never fails.
    fn exists(&self, path: &str) -> Deferred<bool> {
        Deferred::new(self.exists_sync(path))
    }

    fn read_file(&self, path: &str) -> Deferred<FsResult<Vec<u8>>> {
        Deferred::new(self.read_file_sync(path))
    }

    fn read_file_to_string(&self, path: &str, encoding: Encoding) -> Deferred<FsResult<String>> {
        Deferred::new(self.read_file_to_string_sync(path, encoding))
    }

    fn write_file(&mut self, path: &str, content: &[u8]) -> Deferred<FsResult<()>> {
        Deferred::new(self.write_file_sync(path, content))
    }
}

pub(crate) mod utils {
    /// Splits a slash-delimited path into its segments.
    ///
    /// Empty and `.` segments are skipped, `..` drops the previous segment
    /// and never climbs above the root. `""`, `"."` and `"/"` all denote the
    /// root and yield no segments.
    pub fn segments(path: &str) -> Vec<&str> {
        let mut result = Vec::new();
        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    result.pop();
                }
                name => result.push(name),
            }
        }
        result
    }

    /// Joins `path` onto `prefix` with a single separator.
    pub fn join(prefix: &str, path: &str) -> String {
        let prefix = prefix.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        match (prefix.is_empty(), path.is_empty()) {
            (true, _) => path.to_string(),
            (false, true) => prefix.to_string(),
            (false, false) => format!("{prefix}/{path}"),
        }
    }
}
