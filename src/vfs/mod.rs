mod node;
mod resolve;
mod stat;
mod tree_fs;

pub use node::{EntryType, Folder, Node, NodeRef};
pub use stat::Stat;
pub use tree_fs::TreeFS;
