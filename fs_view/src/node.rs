//! Filesystem nodes
//!
//! This module defines the tree the terminal walks: files with content and
//! directories with named children.

use crate::path::PathResolver;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Free-form metadata attached to a node
///
/// Informational only; the engine never interprets it.
pub type Metadata = BTreeMap<String, serde_json::Value>;

fn default_read() -> bool {
    true
}

/// Access bits of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    /// Whether the node can be listed (directories) or read (files)
    #[serde(default = "default_read")]
    pub read: bool,
    /// Whether the node can be written; never checked by the engine
    #[serde(default)]
    pub write: bool,
    /// Whether the node can be executed; never checked by the engine
    #[serde(default)]
    pub execute: bool,
}

impl Permissions {
    /// Permissions applied when a node declares none
    pub const DEFAULT: Permissions = Permissions {
        read: true,
        write: false,
        execute: false,
    };

    /// Permissions that deny everything
    pub const NONE: Permissions = Permissions {
        read: false,
        write: false,
        execute: false,
    };
}

impl Default for Permissions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(self.read, 'r'),
            bit(self.write, 'w'),
            bit(self.execute, 'x')
        )
    }
}

/// Kind of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A file with content
    File,
    /// A directory with children
    Directory,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::File => write!(f, "file"),
            NodeKind::Directory => write!(f, "directory"),
        }
    }
}

/// A file node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    /// File content (may be empty)
    #[serde(default)]
    pub content: String,
    /// Declared permissions, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
    /// Informational metadata
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: Metadata,
}

impl FileNode {
    /// Creates a file with the given content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Sets the declared permissions
    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = Some(permissions);
        self
    }
}

/// A directory node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryNode {
    /// Child entries, in document order
    #[serde(default)]
    pub children: Children,
    /// Declared permissions, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
    /// Informational metadata
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: Metadata,
}

impl DirectoryNode {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a child, replacing any existing child with the same name
    pub fn with_child(mut self, name: impl Into<String>, node: impl Into<FileSystemNode>) -> Self {
        let name = name.into();
        let node = node.into();
        if self.children.contains(&name) {
            self.children.replace(&name, node);
        } else {
            self.children.insert(name, node);
        }
        self
    }

    /// Sets the declared permissions
    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = Some(permissions);
        self
    }
}

/// A node in the filesystem tree
///
/// Serialized with an internal `type` tag:
///
/// ```
/// use fs_view::{FileSystemNode, NodeKind};
///
/// let node: FileSystemNode = serde_json::from_str(
///     r#"{"type": "directory", "children": {"motd": {"type": "file", "content": "hi"}}}"#,
/// ).unwrap();
/// assert_eq!(node.kind(), NodeKind::Directory);
/// assert_eq!(node.child("motd").unwrap().kind(), NodeKind::File);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileSystemNode {
    /// A file
    File(FileNode),
    /// A directory
    Directory(DirectoryNode),
}

impl FileSystemNode {
    /// Returns the kind of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            FileSystemNode::File(_) => NodeKind::File,
            FileSystemNode::Directory(_) => NodeKind::Directory,
        }
    }

    /// Returns true if this node is a directory
    pub fn is_directory(&self) -> bool {
        matches!(self, FileSystemNode::Directory(_))
    }

    /// Returns true if this node is a file
    pub fn is_file(&self) -> bool {
        matches!(self, FileSystemNode::File(_))
    }

    /// Returns the effective permissions, filling in defaults
    pub fn permissions(&self) -> Permissions {
        let declared = match self {
            FileSystemNode::File(file) => file.permissions,
            FileSystemNode::Directory(dir) => dir.permissions,
        };
        declared.unwrap_or_default()
    }

    /// Returns the node's metadata
    pub fn metadata(&self) -> &Metadata {
        match self {
            FileSystemNode::File(file) => &file.metadata,
            FileSystemNode::Directory(dir) => &dir.metadata,
        }
    }

    /// Returns the directory payload, if this is a directory
    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            FileSystemNode::Directory(dir) => Some(dir),
            FileSystemNode::File(_) => None,
        }
    }

    /// Returns the file payload, if this is a file
    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            FileSystemNode::File(file) => Some(file),
            FileSystemNode::Directory(_) => None,
        }
    }

    /// Looks up a direct child by name (always `None` for files)
    pub fn child(&self, name: &str) -> Option<&FileSystemNode> {
        self.as_directory().and_then(|dir| dir.children.get(name))
    }
}

impl From<FileNode> for FileSystemNode {
    fn from(file: FileNode) -> Self {
        FileSystemNode::File(file)
    }
}

impl From<DirectoryNode> for FileSystemNode {
    fn from(dir: DirectoryNode) -> Self {
        FileSystemNode::Directory(dir)
    }
}

/// Children of a directory
///
/// Names are unique. Iteration follows insertion order, which for a loaded
/// tree is the order of the source document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Children {
    entries: Vec<(String, FileSystemNode)>,
}

impl Children {
    /// Creates an empty set of children
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a child
    ///
    /// Returns true if the child was added, false if the name already exists.
    pub fn insert(&mut self, name: String, node: FileSystemNode) -> bool {
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, node));
        true
    }

    /// Replaces an existing child in place
    ///
    /// Returns the previous node if the name existed.
    pub fn replace(&mut self, name: &str, node: FileSystemNode) -> Option<FileSystemNode> {
        self.entries
            .iter_mut()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, slot)| std::mem::replace(slot, node))
    }

    /// Gets a child by name
    pub fn get(&self, name: &str) -> Option<&FileSystemNode> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, node)| node)
    }

    /// Returns true if a child with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates children in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileSystemNode)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Counts the children
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no children
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Children {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, node) in &self.entries {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Children {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ChildrenVisitor;

        impl<'de> Visitor<'de> for ChildrenVisitor {
            type Value = Children;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of entry names to filesystem nodes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Children, A::Error> {
                let mut children = Children::new();
                while let Some((name, node)) = map.next_entry::<String, FileSystemNode>()? {
                    if !PathResolver::is_valid_name(&name) {
                        return Err(de::Error::custom(format!("invalid entry name: {:?}", name)));
                    }
                    if children.contains(&name) {
                        return Err(de::Error::custom(format!("duplicate entry name: {}", name)));
                    }
                    children.entries.push((name, node));
                }
                Ok(children)
            }
        }

        deserializer.deserialize_map(ChildrenVisitor)
    }
}
