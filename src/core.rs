use crate::{Node, Stat};

/// Operations shared by every tree-backed store.
///
/// All paths are `/`-separated and normalized before they are resolved, so `a/./b/../c`,
/// `/a/c/` and `a//c` address the same node. The empty path (or `/`) denotes the root folder.
pub trait FsBackend {
    /// Returns the payload of the file at `path`.
    fn read_file<P: AsRef<str>>(&self, path: P) -> Result<String>;

    /// Creates or overwrites the file at `path`.
    fn write_file<P: AsRef<str>, D: Into<String>>(&mut self, path: P, data: D) -> Result<()>;

    /// Returns an independent copy of the node (file or folder) at `path`.
    fn read_tree<P: AsRef<str>>(&self, path: P) -> Result<Node>;

    /// Installs a copy of `tree` at `path`.
    fn write_tree<P: AsRef<str>>(&mut self, path: P, tree: &Node) -> Result<()>;

    /// Copies the node at `src` to `dst`.
    fn copy<S: AsRef<str>, D: AsRef<str>>(&mut self, src: S, dst: D) -> Result<()>;

    /// Returns the descriptor of the node at `path`.
    fn stat<P: AsRef<str>>(&self, path: P) -> Result<Stat>;

    /// Removes the node at `path` if there is one.
    fn unlink<P: AsRef<str>>(&mut self, path: P);

    /// Returns the paths of every file below the folder at `path`.
    fn list_files<P: AsRef<str>>(&self, path: P) -> Result<Vec<String>>;

    /// Creates an empty folder at `path`. The parent must already exist.
    fn mkdir<P: AsRef<str>>(&mut self, path: P) -> Result<()>;

    /// Creates the folder at `path` along with every missing ancestor.
    fn mkpath<P: AsRef<str>>(&mut self, path: P) -> Result<()>;

    /// Removes every child of the folder at `path`, keeping the folder itself.
    fn empty<P: AsRef<str>>(&mut self, path: P) -> Result<()>;
}

pub type Result<T> = std::result::Result<T, anyhow::Error>;

pub mod utils {
    /// Splits `path` on `/` and collapses `.`, `..` and empty segments.
    ///
    /// `..` drops the previously kept segment; at the top it is ignored, so a path can never
    /// climb above the root. An empty result denotes the root itself.
    pub fn normalize<P: AsRef<str>>(path: P) -> Vec<String> {
        let mut segments: Vec<String> = Vec::new();
        for segment in path.as_ref().split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                name => segments.push(name.to_string()),
            }
        }
        segments
    }

    /// Joins path segments with `/`.
    pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
        segments
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join("/")
    }

}
