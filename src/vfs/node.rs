use std::time::SystemTime;

use hashlink::LinkedHashMap;

/// Type of a file system node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

/// Access, modification and change times of a node.
///
/// Every timestamp that was never set reads as `UNIX_EPOCH`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Times {
    pub atime: SystemTime,
    pub mtime: SystemTime,
    pub ctime: SystemTime,
}

impl Default for Times {
    fn default() -> Self {
        Self {
            atime: SystemTime::UNIX_EPOCH,
            mtime: SystemTime::UNIX_EPOCH,
            ctime: SystemTime::UNIX_EPOCH,
        }
    }
}

/// Children of a directory, in insertion order.
pub(crate) type Children = LinkedHashMap<String, Node>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NodeData {
    Directory(Children),
    File(Vec<u8>),
}

/// A single entry of the tree: a directory owning its children or a file
/// owning its content. The kind never changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node {
    data: NodeData,
    times: Times,
}

impl Node {
    pub fn directory(times: Times) -> Node {
        Node {
            data: NodeData::Directory(Children::new()),
            times,
        }
    }

    pub fn file(content: Vec<u8>, times: Times) -> Node {
        Node {
            data: NodeData::File(content),
            times,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::Directory(_) => NodeKind::Directory,
            NodeData::File(_) => NodeKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind() == NodeKind::Directory
    }

    pub fn times(&self) -> &Times {
        &self.times
    }

    pub fn children(&self) -> Option<&Children> {
        match &self.data {
            NodeData::Directory(children) => Some(children),
            NodeData::File(_) => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Children> {
        match &mut self.data {
            NodeData::Directory(children) => Some(children),
            NodeData::File(_) => None,
        }
    }

    pub fn content(&self) -> Option<&[u8]> {
        match &self.data {
            NodeData::File(content) => Some(content.as_slice()),
            NodeData::Directory(_) => None,
        }
    }

    /// Replaces the content of a file node, stamping `mtime` and `ctime`
    /// with `now`. Returns `false` for a directory, which is left untouched.
    pub fn set_content(&mut self, content: &[u8], now: SystemTime) -> bool {
        match &mut self.data {
            NodeData::File(old) => {
                *old = content.to_vec();
                self.times.mtime = now;
                self.times.ctime = now;
                true
            }
            NodeData::Directory(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    #[test]
    fn test_directory_node() {
        let node = Node::directory(Times::default());
        assert!(node.is_dir());
        assert_eq!(node.kind(), NodeKind::Directory);
        assert!(node.children().unwrap().is_empty());
        assert!(node.content().is_none());
        assert_eq!(node.times().mtime, SystemTime::UNIX_EPOCH);
    }

    #[test]
    fn test_file_node() {
        let node = Node::file(b"abc".to_vec(), Times::default());
        assert_eq!(node.kind(), NodeKind::File);
        assert_eq!(node.content(), Some(&b"abc"[..]));
        assert!(node.children().is_none());
    }

    #[test]
    fn test_set_content_stamps_times() {
        let later = SystemTime::UNIX_EPOCH + Duration::from_secs(5);
        let mut node = Node::file(Vec::new(), Times::default());

        assert!(node.set_content(b"new", later));
        assert_eq!(node.content(), Some(&b"new"[..]));
        assert_eq!(node.times().mtime, later);
        assert_eq!(node.times().ctime, later);
        assert_eq!(node.times().atime, SystemTime::UNIX_EPOCH);

        let mut dir = Node::directory(Times::default());
        assert!(!dir.set_content(b"new", later));
        assert_eq!(dir.times().mtime, SystemTime::UNIX_EPOCH);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut dir = Node::directory(Times::default());
        let children = dir.children_mut().unwrap();
        children.insert("z".to_string(), Node::directory(Times::default()));
        children.insert("a".to_string(), Node::file(Vec::new(), Times::default()));

        let names: Vec<_> = dir.children().unwrap().keys().cloned().collect();
        assert_eq!(names, vec!["z", "a"]);
    }
}
