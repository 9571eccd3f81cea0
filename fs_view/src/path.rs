//! Path resolution logic
//!
//! This module handles joining and normalizing paths. Nothing here looks at
//! the filesystem tree, so nothing here can fail.

/// Path resolver
///
/// Handles splitting paths into segments and walking `.` / `..` against a
/// current directory.
pub struct PathResolver;

impl PathResolver {
    /// Path of the filesystem root
    pub const ROOT: &'static str = "/";

    /// Resolves `target_path` against `current_path`
    ///
    /// Relative targets are walked on top of the segments of `current_path`;
    /// absolute targets start from an empty stack. `..` at the root is a no-op,
    /// and `.` and empty segments are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use fs_view::PathResolver;
    ///
    /// assert_eq!(PathResolver::resolve("/a/b", "../c"), "/a/c");
    /// assert_eq!(PathResolver::resolve("/a/b", "/x"), "/x");
    /// assert_eq!(PathResolver::resolve("/", ".."), "/");
    /// ```
    pub fn resolve(current_path: &str, target_path: &str) -> String {
        let mut stack: Vec<&str> = if target_path.starts_with('/') {
            Vec::new()
        } else {
            Self::segments(current_path).collect()
        };

        for segment in target_path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    stack.pop();
                }
                name => stack.push(name),
            }
        }

        Self::join(&stack)
    }

    /// Normalizes a path
    ///
    /// A path without a leading `/` is treated as rooted at `/`.
    ///
    /// ```
    /// use fs_view::PathResolver;
    ///
    /// assert_eq!(PathResolver::normalize("home/guest/"), "/home/guest");
    /// assert_eq!(PathResolver::normalize(""), "/");
    /// ```
    pub fn normalize(path: &str) -> String {
        Self::resolve(Self::ROOT, path)
    }

    /// Returns the non-empty segments of a path
    pub fn segments(path: &str) -> impl Iterator<Item = &str> {
        path.split('/').filter(|segment| !segment.is_empty())
    }

    /// Joins segments into an absolute path
    pub fn join(segments: &[&str]) -> String {
        if segments.is_empty() {
            return Self::ROOT.to_string();
        }
        let mut path = String::new();
        for segment in segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }

    /// Returns the parent of a normalized path (the root is its own parent)
    pub fn parent(path: &str) -> String {
        Self::resolve(path, "..")
    }

    /// Validates a single path component name
    ///
    /// Returns true if the name is valid for a directory entry.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains('/')
            && !name.contains('\0')
    }
}
