//! Error types reported by file system operations.

use std::fmt;
use std::io;

use thiserror::Error;

/// Kind of a failed file system operation.
///
/// The set is exhaustive for every read and write operation of
/// [`FakeFs`](crate::FakeFs). Codes follow the POSIX naming so that callers
/// written against a real file system can match on them unchanged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// `ENOENT`: no such file or directory.
    NotFound,
    /// `ENOTDIR`: a directory was expected, something else was found.
    NotADirectory,
    /// `EISDIR`: a file was expected, a directory was found.
    IsADirectory,
}

impl ErrorKind {
    /// Returns the conventional error code, e.g. `"ENOENT"`.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "ENOENT",
            ErrorKind::NotADirectory => "ENOTDIR",
            ErrorKind::IsADirectory => "EISDIR",
        }
    }

    /// Returns the Linux errno value for this kind.
    pub fn errno(self) -> i32 {
        match self {
            ErrorKind::NotFound => 2,
            ErrorKind::NotADirectory => 20,
            ErrorKind::IsADirectory => 21,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "no such file or directory",
            ErrorKind::NotADirectory => "not a directory",
            ErrorKind::IsADirectory => "illegal operation on a directory",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<ErrorKind> for io::ErrorKind {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NotFound => io::ErrorKind::NotFound,
            ErrorKind::NotADirectory => io::ErrorKind::NotADirectory,
            ErrorKind::IsADirectory => io::ErrorKind::IsADirectory,
        }
    }
}

/// Error returned by a failed file system operation.
///
/// Renders the way a POSIX-flavoured runtime does:
/// `ENOENT: no such file or directory, stat 'a/b'`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}: {}, {syscall} '{path}'", .kind.code(), .kind.description())]
pub struct FsError {
    kind: ErrorKind,
    syscall: &'static str,
    path: String,
}

impl FsError {
    pub fn new(kind: ErrorKind, syscall: &'static str, path: impl Into<String>) -> Self {
        Self {
            kind,
            syscall,
            path: path.into(),
        }
    }

    pub fn not_found(syscall: &'static str, path: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, syscall, path)
    }

    pub fn not_a_directory(syscall: &'static str, path: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotADirectory, syscall, path)
    }

    pub fn is_a_directory(syscall: &'static str, path: impl Into<String>) -> Self {
        Self::new(ErrorKind::IsADirectory, syscall, path)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Shortcut for `self.kind().code()`.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn errno(&self) -> i32 {
        self.kind.errno()
    }

    /// Name of the operation that failed (`stat`, `scandir`, `open`).
    pub fn syscall(&self) -> &'static str {
        self.syscall
    }

    /// Path exactly as the caller passed it.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl From<FsError> for io::Error {
    fn from(err: FsError) -> Self {
        io::Error::new(err.kind.into(), err)
    }
}

/// Failure to turn text into bytes with a given [`Encoding`](crate::Encoding).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodingError {
    #[error("unknown encoding: {0}")]
    Unknown(String),

    #[error("invalid base64 content: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid hex content: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Result of a file system operation.
pub type FsResult<T> = std::result::Result<T, FsError>;

/// Result of a tree building operation.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(ErrorKind::NotFound, "ENOENT", 2)]
    #[case(ErrorKind::NotADirectory, "ENOTDIR", 20)]
    #[case(ErrorKind::IsADirectory, "EISDIR", 21)]
    fn test_kind_codes(#[case] kind: ErrorKind, #[case] code: &str, #[case] errno: i32) {
        assert_eq!(kind.code(), code);
        assert_eq!(kind.errno(), errno);
        assert_eq!(kind.to_string(), code);
    }

    #[test]
    fn test_display_names_syscall_and_path() {
        let err = FsError::not_found("stat", "undefined");
        assert_eq!(
            err.to_string(),
            "ENOENT: no such file or directory, stat 'undefined'"
        );
        assert_eq!(err.code(), "ENOENT");
        assert_eq!(err.syscall(), "stat");
        assert_eq!(err.path(), "undefined");
    }

    #[test]
    fn test_into_io_error() {
        let err: io::Error = FsError::is_a_directory("open", "dir").into();
        assert_eq!(err.kind(), io::ErrorKind::IsADirectory);

        let err: io::Error = FsError::not_a_directory("scandir", "a.txt").into();
        assert_eq!(err.kind(), io::ErrorKind::NotADirectory);
        assert!(err.to_string().starts_with("ENOTDIR"));
    }
}
