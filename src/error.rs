//! Error kinds raised by the tree operations.
//!
//! Every failure is an [`FsError`] wrapped in an `anyhow::Error`. Callers are expected to branch
//! on the [`ErrorCode`] only; use [`ErrorCodeExt::code`] to get it back out of the error.

use std::fmt;

/// Machine-readable failure tag, named after the matching POSIX `errno`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// `ENOENT`: the node or one of its ancestors does not exist.
    NotFound,
    /// `ENOTDIR`: a file was found where a folder is required.
    NotADirectory,
    /// `EISDIR`: a folder (or the root) was found where a file is required.
    IsADirectory,
    /// `EEXIST`: the destination is already occupied.
    AlreadyExists,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "ENOENT",
            ErrorCode::NotADirectory => "ENOTDIR",
            ErrorCode::IsADirectory => "EISDIR",
            ErrorCode::AlreadyExists => "EEXIST",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {path}")]
pub struct FsError {
    code: ErrorCode,
    path: String,
}

impl FsError {
    pub fn new<P: Into<String>>(code: ErrorCode, path: P) -> Self {
        Self {
            code,
            path: path.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The offending path, as given by the caller or as far as resolution got.
    pub fn path(&self) -> &str {
        &self.path
    }
}

pub fn not_found<P: Into<String>>(path: P) -> anyhow::Error {
    FsError::new(ErrorCode::NotFound, path).into()
}

pub fn not_a_directory<P: Into<String>>(path: P) -> anyhow::Error {
    FsError::new(ErrorCode::NotADirectory, path).into()
}

pub fn is_a_directory<P: Into<String>>(path: P) -> anyhow::Error {
    FsError::new(ErrorCode::IsADirectory, path).into()
}

pub fn already_exists<P: Into<String>>(path: P) -> anyhow::Error {
    FsError::new(ErrorCode::AlreadyExists, path).into()
}

/// Recovers the [`ErrorCode`] from an `anyhow::Error` produced by this crate.
pub trait ErrorCodeExt {
    /// Returns `None` when the error did not originate from a tree operation.
    fn code(&self) -> Option<ErrorCode>;
}

impl ErrorCodeExt for anyhow::Error {
    fn code(&self) -> Option<ErrorCode> {
        self.downcast_ref::<FsError>().map(FsError::code)
    }
}
