use super::node::{EntryType, NodeRef};

/// Metadata of a tree node, shaped after `std::fs::Metadata`.
///
/// The tree only knows files and folders; the device, link, FIFO and socket predicates exist for
/// parity with real filesystem APIs and always return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Stat {
    size: usize,
    entry_type: EntryType,
}

impl Stat {
    pub(crate) fn of(node: NodeRef<'_>) -> Stat {
        match node {
            NodeRef::File(data) => Stat {
                size: data.len(),
                entry_type: EntryType::File,
            },
            NodeRef::Folder(_) => Stat {
                size: 0,
                entry_type: EntryType::Directory,
            },
        }
    }

    /// Payload length in bytes for a file, `0` for a folder.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    pub fn is_directory(&self) -> bool {
        self.entry_type == EntryType::Directory
    }

    pub fn is_block_device(&self) -> bool {
        false
    }

    pub fn is_character_device(&self) -> bool {
        false
    }

    pub fn is_symbolic_link(&self) -> bool {
        false
    }

    pub fn is_fifo(&self) -> bool {
        false
    }

    pub fn is_socket(&self) -> bool {
        false
    }
}
