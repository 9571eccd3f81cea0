//! # Filesystem View
//!
//! This crate provides the read-only filesystem tree the terminal navigates,
//! plus the pure path arithmetic used to move around it.
//!
//! ## Philosophy
//!
//! - **Loaded once, never mutated**: The tree comes from the system document and stays put
//! - **Parents own children**: No back-references, no shared ownership
//! - **Paths are strings until resolved**: Resolution is pure and never touches the tree
//!
//! ## Design
//!
//! - A [`FileSystemNode`] is either a file (with content) or a directory (with children)
//! - Directory children keep the order they had in the source document
//! - Missing permissions mean `read=true, write=false, execute=false`
//! - [`PathResolver`] handles `.`, `..`, absolute and relative paths without failing

pub mod node;
pub mod path;

pub use node::{Children, DirectoryNode, FileNode, FileSystemNode, Metadata, NodeKind, Permissions};
pub use path::PathResolver;
