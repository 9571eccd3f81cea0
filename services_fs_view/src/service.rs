//! Filesystem View Service implementation
//!
//! This module provides the actual service that implements filesystem operations.

use crate::operations::{DirectoryEntry, FileSystemOperations, OperationError, StatInfo};
use fs_view::{FileSystemNode, PathResolver};

/// The Filesystem View Service
///
/// Borrows the root of a loaded tree and answers read-only queries about it.
#[derive(Debug, Clone, Copy)]
pub struct FileSystemViewService<'a> {
    root: &'a FileSystemNode,
}

impl<'a> FileSystemViewService<'a> {
    /// Creates a service over the given root node
    pub fn new(root: &'a FileSystemNode) -> Self {
        Self { root }
    }

    /// Returns the root node
    pub fn root(&self) -> &'a FileSystemNode {
        self.root
    }

    /// Walks to a node, keeping the borrow tied to the tree rather than the service
    fn walk(&self, normalized: &str) -> Result<&'a FileSystemNode, OperationError> {
        let mut current = self.root;
        for segment in PathResolver::segments(normalized) {
            let dir = current
                .as_directory()
                .ok_or_else(|| OperationError::NotADirectory {
                    path: normalized.to_string(),
                })?;
            current = dir
                .children
                .get(segment)
                .ok_or_else(|| OperationError::PathNotFound {
                    path: normalized.to_string(),
                })?;
        }
        Ok(current)
    }
}

impl FileSystemOperations for FileSystemViewService<'_> {
    fn navigate(&self, path: &str) -> Result<&FileSystemNode, OperationError> {
        self.walk(&PathResolver::normalize(path))
    }

    fn list_directory(&self, path: &str) -> Result<Vec<DirectoryEntry>, OperationError> {
        let normalized = PathResolver::normalize(path);
        let node = self.walk(&normalized)?;

        if !node.permissions().read {
            return Err(OperationError::PermissionDenied { path: normalized });
        }

        let dir = node
            .as_directory()
            .ok_or(OperationError::NotADirectory { path: normalized })?;

        Ok(dir
            .children
            .iter()
            .map(|(name, child)| DirectoryEntry::new(name, child.kind()))
            .collect())
    }

    fn read_file(&self, path: &str) -> Result<&str, OperationError> {
        let normalized = PathResolver::normalize(path);
        let node = self.walk(&normalized)?;

        let file = match node.as_file() {
            Some(file) => file,
            None => return Err(OperationError::NotAFile { path: normalized }),
        };

        if !node.permissions().read {
            return Err(OperationError::PermissionDenied { path: normalized });
        }

        Ok(&file.content)
    }

    fn stat(&self, path: &str) -> Result<StatInfo, OperationError> {
        let normalized = PathResolver::normalize(path);
        let node = self.walk(&normalized)?;

        let (size, entry_count) = match node {
            FileSystemNode::File(file) => (Some(file.content.len()), None),
            FileSystemNode::Directory(dir) => (None, Some(dir.children.len())),
        };

        Ok(StatInfo {
            path: normalized,
            kind: node.kind(),
            permissions: node.permissions(),
            size,
            entry_count,
        })
    }
}
