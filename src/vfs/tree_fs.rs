//! This module provides a virtual filesystem (VFS) implementation over a nested map of files and
//! folders held entirely in memory.

use log::{debug, trace};

use crate::core::{FsBackend, Result, utils};
use crate::error;

use super::node::{EntryType, Folder, Node, NodeRef};
use super::resolve::{Location, resolve};
use super::stat::Stat;

/// A virtual file system that keeps a tree of files and folders in memory.
///
/// `TreeFS` offers a POSIX‑like interface (read, write, copy, unlink, stat, list, mkdir) over a
/// plain [`Folder`] map without touching the host filesystem, which makes it a disposable
/// filesystem for tests and build tooling.
///
/// ### Internal state
///
/// * `root`: the root folder. Files can only be created below it, never in its place.
///
/// ### Invariants
///
/// 1. **No aliasing**: Trees passed in through `write_tree()` and trees handed out by
///    `read_tree()` are deep copies; `copy()` deep-copies its source.
/// 2. **Check before mutate**: Every operation validates its paths and the kinds of the nodes
///    involved before changing anything, so a failed call leaves the tree as it was.
///
/// ### Thread Safety
///
/// This struct is **not thread‑safe by itself**. If concurrent access is required, wrap it in
/// a synchronization primitive (e.g., `Arc<Mutex<TreeFS>>`) at the application level.
///
/// ### Example
///
/// ```
/// use treefs::{FsBackend, TreeFS};
///
/// let mut fs = TreeFS::new();
///
/// fs.mkpath("/docs/drafts").unwrap();
/// fs.write_file("/docs/note.txt", "Hello").unwrap();
///
/// assert_eq!(fs.read_file("docs/./drafts/../note.txt").unwrap(), "Hello");
/// assert_eq!(fs.list_files("/").unwrap(), ["docs/note.txt"]);
///
/// fs.unlink("/docs/note.txt");
/// assert!(fs.list_files("/docs").unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeFS {
    root: Folder,
}

impl TreeFS {
    /// Creates new TreeFS instance with an empty root folder.
    pub fn new() -> Self {
        Self {
            root: Folder::new(),
        }
    }

    /// Creates a TreeFS that adopts `root` as its tree, without copying it.
    ///
    /// The adopted tree stays reachable through [`root()`](Self::root),
    /// [`root_mut()`](Self::root_mut) and [`into_root()`](Self::into_root).
    pub fn with_root(root: Folder) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Folder {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Folder {
        &mut self.root
    }

    pub fn into_root(self) -> Folder {
        self.root
    }

    /// Looks up the node at `path` without copying it.
    ///
    /// Returns `ENOENT` if it does not exist. The empty path yields the root folder.
    pub fn read_node<P: AsRef<str>>(&self, path: P) -> Result<NodeRef<'_>> {
        let path = path.as_ref();
        let location = resolve(&self.root, path)?;
        if location.is_root() {
            return Ok(NodeRef::Folder(&self.root));
        }
        location
            .parent(&self.root)?
            .get(location.name())
            .map(Node::view)
            .ok_or_else(|| error::not_found(path))
    }

    /// Mutable handle on the folder addressed by `location`.
    /// `path` is only used for error messages.
    fn folder_mut(&mut self, location: &Location, path: &str) -> Result<&mut Folder> {
        if location.is_root() {
            return Ok(&mut self.root);
        }
        match location.parent_mut(&mut self.root)?.get_mut(location.name()) {
            Some(Node::Folder(children)) => Ok(children),
            Some(Node::File(_)) => Err(error::not_a_directory(path)),
            None => Err(error::not_found(path)),
        }
    }
}

impl FsBackend for TreeFS {
    /// Returns a copy of the payload stored at `path`.
    ///
    /// # Errors
    /// * `ENOENT` - nothing exists at `path`.
    /// * `EISDIR` - `path` is a folder.
    fn read_file<P: AsRef<str>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        match self.read_node(path)? {
            NodeRef::File(data) => Ok(data.to_string()),
            NodeRef::Folder(_) => Err(error::is_a_directory(path)),
        }
    }

    /// Writes `data` to the file at `path`, replacing its entire content.
    /// The file is created if it does not exist; its parent folder must exist.
    ///
    /// # Errors
    /// * `EISDIR` - `path` is the root or an existing folder.
    /// * `ENOENT` / `ENOTDIR` - an ancestor is missing or is a file.
    fn write_file<P: AsRef<str>, D: Into<String>>(&mut self, path: P, data: D) -> Result<()> {
        let path = path.as_ref();
        let location = resolve(&self.root, path)?;
        if location.is_root() {
            return Err(error::is_a_directory(path));
        }

        let parent = location.parent_mut(&mut self.root)?;
        if let Some(Node::Folder(_)) = parent.get(location.name()) {
            return Err(error::is_a_directory(path));
        }

        debug!("write_file {}", path);
        parent.insert(location.name().to_string(), Node::File(data.into()));
        Ok(())
    }

    /// Returns a deep copy of the node at `path`. Files are legal and come back as
    /// [`Node::File`].
    fn read_tree<P: AsRef<str>>(&self, path: P) -> Result<Node> {
        Ok(self.read_node(path)?.to_node())
    }

    /// Installs a deep copy of `tree` at `path`.
    ///
    /// A [`Node::File`] behaves exactly like [`write_file()`](FsBackend::write_file). A folder
    /// replaces whatever folder is at `path`; written to the root, it replaces the whole tree.
    ///
    /// # Errors
    /// * `ENOTDIR` - a file occupies `path` (unlink it first).
    /// * `ENOENT` / `ENOTDIR` - an ancestor is missing or is a file.
    fn write_tree<P: AsRef<str>>(&mut self, path: P, tree: &Node) -> Result<()> {
        let children = match tree {
            Node::File(data) => return self.write_file(path, data.as_str()),
            Node::Folder(children) => children,
        };

        let path = path.as_ref();
        let location = resolve(&self.root, path)?;
        if location.is_root() {
            debug!("write_tree replaces root");
            self.root = children.clone();
            return Ok(());
        }

        let parent = location.parent_mut(&mut self.root)?;
        if let Some(Node::File(_)) = parent.get(location.name()) {
            return Err(error::not_a_directory(path));
        }

        debug!("write_tree {}", path);
        parent.insert(location.name().to_string(), Node::Folder(children.clone()));
        Ok(())
    }

    /// Copies the node at `src` to `dst`.
    ///
    /// # Behavior
    /// * **`dst` does not exist**: the copy is created under the name `dst` (copy to new name).
    /// * **`dst` is a folder**: the copy is inserted into it under the basename of `src`.
    ///   Copying the root into an existing folder replaces that folder with a copy of the root.
    /// * **`dst` is a file**: a file source overwrites it; a folder source is refused.
    ///
    /// # Errors
    /// * `ENOENT` - nothing exists at `src`.
    /// * `EEXIST` - `dst` is a folder that already holds the basename of `src`.
    /// * `ENOTDIR` - a folder was copied onto a file.
    fn copy<S: AsRef<str>, D: AsRef<str>>(&mut self, src: S, dst: D) -> Result<()> {
        let (src, dst) = (src.as_ref(), dst.as_ref());
        let basename = utils::normalize(src).pop().unwrap_or_default();
        let source = self.read_node(src)?.to_node();

        let target = resolve(&self.root, dst)?;
        let target_type = if target.is_root() {
            Some(EntryType::Directory)
        } else {
            target
                .parent(&self.root)?
                .get(target.name())
                .map(Node::entry_type)
        };

        debug!("copy {} -> {}", src, dst);
        match (target_type, source) {
            (None, source) => {
                target
                    .parent_mut(&mut self.root)?
                    .insert(target.name().to_string(), source);
            }
            (Some(EntryType::File), Node::Folder(_)) => {
                return Err(error::not_a_directory(format!("{}/{}", dst, basename)));
            }
            (Some(EntryType::File), file) => {
                target
                    .parent_mut(&mut self.root)?
                    .insert(target.name().to_string(), file);
            }
            (Some(EntryType::Directory), source) if basename.is_empty() => {
                // The source is the root itself. Onto the root, there is nothing to do.
                if !target.is_root() {
                    target
                        .parent_mut(&mut self.root)?
                        .insert(target.name().to_string(), source);
                }
            }
            (Some(EntryType::Directory), source) => {
                let folder = self.folder_mut(&target, dst)?;
                if folder.contains_key(&basename) {
                    return Err(error::already_exists(format!("{}/{}", dst, basename)));
                }
                folder.insert(basename, source);
            }
        }
        Ok(())
    }

    /// Returns the metadata of the node at `path`.
    ///
    /// # Errors
    /// * `ENOENT` - nothing exists at `path`.
    fn stat<P: AsRef<str>>(&self, path: P) -> Result<Stat> {
        Ok(Stat::of(self.read_node(path)?))
    }

    /// Removes the file or folder (with all its contents) at `path`.
    ///
    /// Never fails: when there is nothing at `path`, including when an ancestor is missing or is
    /// a file, nothing happens. The root cannot be removed; use [`empty()`](FsBackend::empty).
    fn unlink<P: AsRef<str>>(&mut self, path: P) {
        let path = path.as_ref();
        let Ok(location) = resolve(&self.root, path) else {
            trace!("unlink {}: unreachable, nothing to do", path);
            return;
        };
        if location.is_root() {
            return;
        }
        if let Ok(parent) = location.parent_mut(&mut self.root) {
            if parent.remove(location.name()).is_some() {
                debug!("unlink {}", path);
            }
        }
    }

    /// Returns the path of every file below the folder at `path`, relative to it.
    ///
    /// The traversal is depth-first, in key order within each folder. Folders themselves are not
    /// listed.
    ///
    /// # Errors
    /// * `ENOENT` - nothing exists at `path`.
    /// * `ENOTDIR` - `path` is a file.
    fn list_files<P: AsRef<str>>(&self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        match self.read_node(path)? {
            NodeRef::File(_) => Err(error::not_a_directory(path)),
            NodeRef::Folder(children) => {
                let mut files = Vec::new();
                collect_files(children, "", &mut files);
                Ok(files)
            }
        }
    }

    /// Creates an empty folder at `path`.
    ///
    /// # Errors
    /// * `EEXIST` - something (a file, a folder, or the root) already exists at `path`.
    /// * `ENOENT` / `ENOTDIR` - an ancestor is missing or is a file.
    fn mkdir<P: AsRef<str>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let location = resolve(&self.root, path)?;
        if location.is_root() {
            return Err(error::already_exists(path));
        }

        let parent = location.parent_mut(&mut self.root)?;
        if parent.contains_key(location.name()) {
            return Err(error::already_exists(path));
        }

        debug!("mkdir {}", path);
        parent.insert(location.name().to_string(), Node::folder());
        Ok(())
    }

    /// Creates the folder at `path` and all of its missing parents.
    /// Existing folders along the way are left untouched.
    ///
    /// # Errors
    /// * `ENOTDIR` - a segment of `path` exists as a file.
    fn mkpath<P: AsRef<str>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let segments = utils::normalize(path);

        // Folders are only created below the last existing segment, so a file conflict is always
        // detected before anything is inserted.
        let mut folder = &mut self.root;
        for (i, key) in segments.iter().enumerate() {
            folder = match folder.entry(key.clone()).or_insert_with(Node::folder) {
                Node::Folder(children) => children,
                Node::File(_) => {
                    return Err(error::not_a_directory(utils::join(&segments[..=i])));
                }
            };
        }

        debug!("mkpath {}", path);
        Ok(())
    }

    /// Removes all children of the folder at `path` (the root for `""` or `/`).
    ///
    /// # Errors
    /// * `ENOENT` - nothing exists at `path`.
    /// * `ENOTDIR` - `path` is a file.
    fn empty<P: AsRef<str>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let location = resolve(&self.root, path)?;
        let folder = self.folder_mut(&location, path)?;

        debug!("empty {} ({} entries)", path, folder.len());
        folder.clear();
        Ok(())
    }
}

/// Depth-first walk pushing the path of every file below `folder`.
fn collect_files(folder: &Folder, prefix: &str, files: &mut Vec<String>) {
    for (name, node) in folder {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", prefix, name)
        };
        match node {
            Node::File(_) => files.push(path),
            Node::Folder(children) => collect_files(children, &path, files),
        }
    }
}
