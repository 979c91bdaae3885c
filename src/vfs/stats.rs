use std::time::SystemTime;

use super::node::{Node, NodeKind};

/// Metadata snapshot of a node, as returned by `stat`.
///
/// A `Stats` is a copy: changing the file system afterwards does not change
/// an already returned value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Stats {
    kind: NodeKind,
    /// Content length for files, `None` for directories.
    pub size: Option<u64>,
    pub atime: SystemTime,
    pub mtime: SystemTime,
    pub ctime: SystemTime,
}

impl Stats {
    pub(crate) fn of(node: &Node) -> Stats {
        let times = node.times();
        Stats {
            kind: node.kind(),
            size: node.content().map(|content| content.len() as u64),
            atime: times.atime,
            mtime: times.mtime,
            ctime: times.ctime,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use crate::vfs::node::Times;

    #[test]
    fn test_file_stats() {
        let times = Times {
            ctime: SystemTime::UNIX_EPOCH + Duration::from_millis(123),
            ..Times::default()
        };
        let stats = Stats::of(&Node::file(vec![1, 2, 3], times));

        assert!(stats.is_file());
        assert!(!stats.is_dir());
        assert_eq!(stats.size, Some(3));
        assert_eq!(stats.ctime, SystemTime::UNIX_EPOCH + Duration::from_millis(123));
        assert_eq!(stats.mtime, SystemTime::UNIX_EPOCH);
    }

    #[test]
    fn test_directory_stats() {
        let stats = Stats::of(&Node::directory(Times::default()));
        assert_eq!(stats.kind(), NodeKind::Directory);
        assert!(stats.is_dir());
        assert_eq!(stats.size, None);
    }
}
