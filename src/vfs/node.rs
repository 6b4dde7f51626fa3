use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Children of a folder, keyed by name.
pub type Folder = BTreeMap<String, Node>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

/// A node of the tree: either a file holding an opaque payload, or a folder of named children.
///
/// `Clone` is a deep copy: cloning a folder clones every descendant, so the copy never shares
/// structure with the original.
///
/// With serde, a string is a file and a map is a folder, which makes JSON literals convenient
/// for building fixtures:
///
/// ```
/// use treefs::Node;
///
/// let tree: Node = serde_json::from_str(r#"{"folder": {"subfile": "p"}, "over": "o"}"#).unwrap();
/// assert!(tree.is_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    File(String),
    Folder(Folder),
}

impl Node {
    /// Creates an empty folder node.
    pub fn folder() -> Node {
        Node::Folder(Folder::new())
    }

    pub fn entry_type(&self) -> EntryType {
        match self {
            Node::File(_) => EntryType::File,
            Node::Folder(_) => EntryType::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    pub fn view(&self) -> NodeRef<'_> {
        match self {
            Node::File(data) => NodeRef::File(data),
            Node::Folder(children) => NodeRef::Folder(children),
        }
    }
}

impl From<&str> for Node {
    fn from(data: &str) -> Self {
        Node::File(data.to_string())
    }
}

impl From<String> for Node {
    fn from(data: String) -> Self {
        Node::File(data)
    }
}

impl From<Folder> for Node {
    fn from(children: Folder) -> Self {
        Node::Folder(children)
    }
}

/// Borrowed view of a node inside the tree.
///
/// The root is a bare [`Folder`] rather than a [`Node`], so lookups hand out this view to cover
/// both.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NodeRef<'a> {
    File(&'a str),
    Folder(&'a Folder),
}

impl NodeRef<'_> {
    pub fn entry_type(&self) -> EntryType {
        match self {
            NodeRef::File(_) => EntryType::File,
            NodeRef::Folder(_) => EntryType::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, NodeRef::File(_))
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, NodeRef::Folder(_))
    }

    /// Deep-copies the viewed node out of the tree.
    pub fn to_node(self) -> Node {
        match self {
            NodeRef::File(data) => Node::File(data.to_string()),
            NodeRef::Folder(children) => Node::Folder(children.clone()),
        }
    }
}
