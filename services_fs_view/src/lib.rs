//! # Filesystem View Service
//!
//! This service provides read-only filesystem operations over the loaded tree.
//!
//! ## Philosophy
//!
//! - The tree is borrowed, never mutated
//! - Failures are values (`OperationError`), never panics
//! - Permission checks happen here, not in the tree
//!
//! ## Operations
//!
//! - `navigate(path)`: Walk to a node
//! - `list_directory(path)`: List a readable directory
//! - `read_file(path)`: Read a readable file
//! - `stat(path)`: Describe a node without reading it

pub mod operations;
pub mod service;

pub use operations::{DirectoryEntry, FileSystemOperations, OperationError, StatInfo};
pub use service::FileSystemViewService;
