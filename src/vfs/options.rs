//! Argument types of the tree building operations.

use std::time::SystemTime;

use crate::encoding::Encoding;
use crate::error::EncodingError;

use super::node::Times;

/// Timestamps applied to a directory created by
/// [`FakeFs::dir_with`](crate::FakeFs::dir_with).
///
/// ```
/// use std::time::{Duration, SystemTime};
/// use fake_fs::DirOptions;
///
/// let opts = DirOptions::new().mtime(SystemTime::UNIX_EPOCH + Duration::from_millis(10));
/// assert!(opts.atime.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirOptions {
    pub atime: Option<SystemTime>,
    pub mtime: Option<SystemTime>,
    pub ctime: Option<SystemTime>,
}

impl DirOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atime(mut self, time: SystemTime) -> Self {
        self.atime = Some(time);
        self
    }

    pub fn mtime(mut self, time: SystemTime) -> Self {
        self.mtime = Some(time);
        self
    }

    pub fn ctime(mut self, time: SystemTime) -> Self {
        self.ctime = Some(time);
        self
    }

    pub(crate) fn times(&self) -> Times {
        times_of(self.atime, self.mtime, self.ctime)
    }
}

/// Timestamps and content of a file created by
/// [`FakeFs::file`](crate::FakeFs::file).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileOptions {
    pub atime: Option<SystemTime>,
    pub mtime: Option<SystemTime>,
    pub ctime: Option<SystemTime>,
    pub content: Option<Content>,
}

impl FileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atime(mut self, time: SystemTime) -> Self {
        self.atime = Some(time);
        self
    }

    pub fn mtime(mut self, time: SystemTime) -> Self {
        self.mtime = Some(time);
        self
    }

    pub fn ctime(mut self, time: SystemTime) -> Self {
        self.ctime = Some(time);
        self
    }

    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub(crate) fn times(&self) -> Times {
        times_of(self.atime, self.mtime, self.ctime)
    }
}

fn times_of(
    atime: Option<SystemTime>,
    mtime: Option<SystemTime>,
    ctime: Option<SystemTime>,
) -> Times {
    let default = Times::default();
    Times {
        atime: atime.unwrap_or(default.atime),
        mtime: mtime.unwrap_or(default.mtime),
        ctime: ctime.unwrap_or(default.ctime),
    }
}

/// File content: raw bytes, stored verbatim, or text turned into bytes with
/// an [`Encoding`] when the file is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Bytes(Vec<u8>),
    Text { text: String, encoding: Encoding },
}

impl Content {
    pub fn text(text: impl Into<String>, encoding: Encoding) -> Self {
        Content::Text {
            text: text.into(),
            encoding,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodingError> {
        match self {
            Content::Bytes(bytes) => Ok(bytes.clone()),
            Content::Text { text, encoding } => encoding.to_bytes(text),
        }
    }
}

/// Text without an explicit encoding uses [`Encoding::Binary`].
impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::text(text, Encoding::default())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::text(text, Encoding::default())
    }
}

impl From<(&str, Encoding)> for Content {
    fn from((text, encoding): (&str, Encoding)) -> Self {
        Content::text(text, encoding)
    }
}

impl From<Vec<u8>> for Content {
    fn from(bytes: Vec<u8>) -> Self {
        Content::Bytes(bytes)
    }
}

impl From<&[u8]> for Content {
    fn from(bytes: &[u8]) -> Self {
        Content::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Content {
    fn from(bytes: &[u8; N]) -> Self {
        Content::Bytes(bytes.to_vec())
    }
}

/// Second argument of [`FakeFs::file`](crate::FakeFs::file): nothing, the
/// content itself, or an options record carrying content and timestamps.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FileContent {
    #[default]
    Empty,
    Data(Content),
    Options(FileOptions),
}

impl FileContent {
    /// Splits into the bytes to store and the timestamps to stamp.
    pub(crate) fn resolve(self) -> Result<(Vec<u8>, Times), EncodingError> {
        match self {
            FileContent::Empty => Ok((Vec::new(), Times::default())),
            FileContent::Data(content) => Ok((content.to_bytes()?, Times::default())),
            FileContent::Options(options) => {
                let bytes = match &options.content {
                    Some(content) => content.to_bytes()?,
                    None => Vec::new(),
                };
                Ok((bytes, options.times()))
            }
        }
    }
}

impl From<Content> for FileContent {
    fn from(content: Content) -> Self {
        FileContent::Data(content)
    }
}

impl From<FileOptions> for FileContent {
    fn from(options: FileOptions) -> Self {
        FileContent::Options(options)
    }
}

impl From<&str> for FileContent {
    fn from(text: &str) -> Self {
        FileContent::Data(text.into())
    }
}

impl From<String> for FileContent {
    fn from(text: String) -> Self {
        FileContent::Data(text.into())
    }
}

impl From<(&str, Encoding)> for FileContent {
    fn from(text: (&str, Encoding)) -> Self {
        FileContent::Data(text.into())
    }
}

impl From<Vec<u8>> for FileContent {
    fn from(bytes: Vec<u8>) -> Self {
        FileContent::Data(bytes.into())
    }
}

impl From<&[u8]> for FileContent {
    fn from(bytes: &[u8]) -> Self {
        FileContent::Data(bytes.into())
    }
}

impl<const N: usize> From<&[u8; N]> for FileContent {
    fn from(bytes: &[u8; N]) -> Self {
        FileContent::Data(bytes.into())
    }
}
