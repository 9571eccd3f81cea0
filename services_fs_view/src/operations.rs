//! Filesystem operations
//!
//! This module defines the operations provided by the filesystem view service.

use fs_view::{FileSystemNode, NodeKind, Permissions};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during filesystem operations
///
/// The display text is what users see after a command prefix such as `ls: `.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperationError {
    /// A path segment does not exist
    #[error("Path not found")]
    PathNotFound { path: String },

    /// A directory was required (or traversed through) but a file was found
    #[error("Not a directory")]
    NotADirectory { path: String },

    /// A file was required but a directory was found
    #[error("Not a file")]
    NotAFile { path: String },

    /// The node's read permission is off
    #[error("Permission denied")]
    PermissionDenied { path: String },
}

impl OperationError {
    /// Returns the normalized path the error refers to
    pub fn path(&self) -> &str {
        match self {
            OperationError::PathNotFound { path }
            | OperationError::NotADirectory { path }
            | OperationError::NotAFile { path }
            | OperationError::PermissionDenied { path } => path,
        }
    }
}

/// A single entry in a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    /// Name of this entry
    pub name: String,
    /// Kind of node
    pub kind: NodeKind,
}

impl DirectoryEntry {
    /// Creates a new directory entry
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Metadata information about a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatInfo {
    /// Normalized path
    pub path: String,
    /// Node kind
    pub kind: NodeKind,
    /// Effective permissions
    pub permissions: Permissions,
    /// Content length in bytes (files only)
    pub size: Option<usize>,
    /// Entry count (directories only)
    pub entry_count: Option<usize>,
}

/// Filesystem operations trait
///
/// This trait defines the operations that can be performed on the filesystem view.
/// Every path is normalized before use; relative paths are taken from the root.
pub trait FileSystemOperations {
    /// Walk to the node at the given path
    ///
    /// The root path always succeeds.
    fn navigate(&self, path: &str) -> Result<&FileSystemNode, OperationError>;

    /// List directory contents in document order
    ///
    /// The read check comes before the kind check.
    fn list_directory(&self, path: &str) -> Result<Vec<DirectoryEntry>, OperationError>;

    /// Read file content verbatim
    fn read_file(&self, path: &str) -> Result<&str, OperationError>;

    /// Describe the node at the given path
    ///
    /// Does not require read permission.
    fn stat(&self, path: &str) -> Result<StatInfo, OperationError>;
}
