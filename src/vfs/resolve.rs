//! Path resolution: locating the folder that holds a path's final segment.
//!
//! Resolution never dereferences the final segment and never checks that it exists; each
//! operation applies its own existence policy. The result is a key path rather than a live
//! reference, so an operation can resolve several paths against the tree before taking a mutable
//! borrow of it.

use log::trace;

use crate::core::{Result, utils};
use crate::error;

use super::node::{Folder, Node};

/// Key path from the root to the parent of the addressed node, plus the node's own name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Location {
    parents: Vec<String>,
    name: String,
}

impl Location {
    /// Name of the addressed node inside its parent; empty when the path denotes the root.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    pub fn parent<'a>(&self, root: &'a Folder) -> Result<&'a Folder> {
        descend(root, &self.parents)
    }

    pub fn parent_mut<'a>(&self, root: &'a mut Folder) -> Result<&'a mut Folder> {
        descend_mut(root, &self.parents)
    }
}

/// Normalizes `path` and walks every segment but the last.
///
/// Fails with `ENOENT` when an intermediate folder is missing and with `ENOTDIR` when an
/// intermediate segment is a file. Both carry the path walked up to the offending segment.
pub(crate) fn resolve<P: AsRef<str>>(root: &Folder, path: P) -> Result<Location> {
    let mut parents = utils::normalize(path.as_ref());
    let name = parents.pop().unwrap_or_default();
    descend(root, &parents)?;
    trace!("resolved {:?} to {:?} / {:?}", path.as_ref(), parents, name);
    Ok(Location { parents, name })
}

fn descend<'a>(root: &'a Folder, segments: &[String]) -> Result<&'a Folder> {
    let mut folder = root;
    for (i, key) in segments.iter().enumerate() {
        folder = match folder.get(key) {
            Some(Node::Folder(children)) => children,
            Some(Node::File(_)) => {
                return Err(error::not_a_directory(utils::join(&segments[..=i])));
            }
            None => return Err(error::not_found(utils::join(&segments[..=i]))),
        };
    }
    Ok(folder)
}

fn descend_mut<'a>(root: &'a mut Folder, segments: &[String]) -> Result<&'a mut Folder> {
    let mut folder = root;
    for (i, key) in segments.iter().enumerate() {
        folder = match folder.get_mut(key) {
            Some(Node::Folder(children)) => children,
            Some(Node::File(_)) => {
                return Err(error::not_a_directory(utils::join(&segments[..=i])));
            }
            None => return Err(error::not_found(utils::join(&segments[..=i]))),
        };
    }
    Ok(folder)
}
