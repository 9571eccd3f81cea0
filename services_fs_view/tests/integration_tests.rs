//! Integration tests for filesystem view service
//!
//! These tests validate the complete read path:
//! - Loading a tree from JSON
//! - Resolving paths from a working directory
//! - Listing then reading what was listed
//! - Permission behaviour

use fs_view::{FileSystemNode, NodeKind, PathResolver};
use proptest::prelude::*;
use services_fs_view::{FileSystemOperations, FileSystemViewService, OperationError};

const TREE: &str = r#"{
    "type": "directory",
    "children": {
        "home": {
            "type": "directory",
            "children": {
                "guest": {
                    "type": "directory",
                    "children": {
                        "readme.txt": {"type": "file", "content": "Welcome."},
                        "todo.txt": {"type": "file", "content": ""},
                        "projects": {"type": "directory", "children": {}}
                    }
                }
            }
        },
        "var": {
            "type": "directory",
            "children": {
                "log": {
                    "type": "directory",
                    "permissions": {"read": false, "write": false},
                    "children": {
                        "auth.log": {"type": "file", "content": "denied"}
                    }
                }
            }
        }
    }
}"#;

fn load_tree() -> FileSystemNode {
    serde_json::from_str(TREE).unwrap()
}

#[test]
fn test_list_then_read_round_trip() {
    let tree = load_tree();
    let service = FileSystemViewService::new(&tree);
    let dir = "/home/guest";

    for entry in service.list_directory(dir).unwrap() {
        if entry.kind != NodeKind::File {
            continue;
        }
        let path = PathResolver::resolve(dir, &entry.name);
        let expected = &service
            .navigate(&path)
            .unwrap()
            .as_file()
            .unwrap()
            .content;
        assert_eq!(service.read_file(&path).unwrap(), expected);
    }
}

#[test]
fn test_empty_content_is_success() {
    let tree = load_tree();
    let service = FileSystemViewService::new(&tree);
    let path = PathResolver::resolve("/home/guest", "todo.txt");
    assert_eq!(service.read_file(&path), Ok(""));
}

#[test]
fn test_empty_directory_lists_nothing() {
    let tree = load_tree();
    let service = FileSystemViewService::new(&tree);
    assert!(service.list_directory("/home/guest/projects").unwrap().is_empty());
}

#[test]
fn test_listing_follows_document_order() {
    let tree = load_tree();
    let service = FileSystemViewService::new(&tree);
    let names: Vec<String> = service
        .list_directory("/home/guest")
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["readme.txt", "todo.txt", "projects"]);
}

#[test]
fn test_unreadable_directory_denies_listing() {
    let tree = load_tree();
    let service = FileSystemViewService::new(&tree);
    assert_eq!(
        service.list_directory("/var/log"),
        Err(OperationError::PermissionDenied {
            path: "/var/log".to_string()
        })
    );
}

#[test]
fn test_relative_walk_from_working_directory() {
    let tree = load_tree();
    let service = FileSystemViewService::new(&tree);
    let path = PathResolver::resolve("/home/guest/projects", "../readme.txt");
    assert_eq!(service.read_file(&path).unwrap(), "Welcome.");
}

proptest! {
    /// Navigation is a pure function of tree and path.
    #[test]
    fn prop_navigate_deterministic(path in "(/?(home|guest|var|log|readme\\.txt|x|\\.\\.|\\.)){0,5}") {
        let tree = load_tree();
        let service = FileSystemViewService::new(&tree);
        let normalized = PathResolver::normalize(&path);
        let first = service.navigate(&normalized).map(|n| n.kind());
        let second = service.navigate(&normalized).map(|n| n.kind());
        prop_assert_eq!(first, second);
    }
}
