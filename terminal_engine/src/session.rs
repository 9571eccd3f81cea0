//! Terminal session state
//!
//! A session is the only mutable state of a terminal: where it is, what was
//! typed, and where the history cursor points.

use core_types::SessionId;
use fs_view::PathResolver;
use serde::Serialize;

/// Working directory of a fresh session
pub const HOME_PATH: &str = "/home/guest";

/// State of one terminal
///
/// `history_index` always lies in `0..=history.len()`; an index equal to the
/// length means no entry is being recalled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    id: SessionId,
    current_path: String,
    history: Vec<String>,
    history_index: usize,
}

/// Creates a session at the home directory with empty history
pub fn create_session() -> Session {
    Session::new()
}

impl Session {
    /// Creates a session at the home directory with empty history
    pub fn new() -> Self {
        Self::with_path(HOME_PATH)
    }

    /// Creates a session at the given directory
    ///
    /// The path is normalized but not checked against any tree; callers are
    /// expected to pass a directory that exists.
    pub fn with_path(path: &str) -> Self {
        Self {
            id: SessionId::new(),
            current_path: PathResolver::normalize(path),
            history: Vec::new(),
            history_index: 0,
        }
    }

    /// Returns the session ID
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the absolute, normalized working directory
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Returns submitted lines, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Returns the recall cursor
    pub fn history_index(&self) -> usize {
        self.history_index
    }

    /// Renders the prompt shown before input
    pub fn prompt(&self, hostname: &str) -> String {
        format!("{}@{}$ ", hostname, self.current_path)
    }

    /// Folds a submitted line into the session
    ///
    /// Appends the raw line, resets the cursor to the end of history and
    /// applies a directory change if one was produced.
    pub(crate) fn record(&mut self, raw_line: &str, new_path: Option<String>) {
        self.history.push(raw_line.to_string());
        self.history_index = self.history.len();
        if let Some(path) = new_path {
            self.current_path = path;
        }
    }

    /// Moves the cursor back one entry and returns the entry under it
    ///
    /// At the oldest entry the cursor stays put and the same entry is
    /// returned again. Returns `None` only when history is empty.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }
        if self.history_index > 0 {
            self.history_index -= 1;
        }
        self.history.get(self.history_index).map(String::as_str)
    }

    /// Moves the cursor forward one entry and returns the entry under it
    ///
    /// Stepping past the newest entry yields an empty line. Returns `None`
    /// when the cursor is already at the end.
    pub fn recall_next(&mut self) -> Option<&str> {
        if self.history_index >= self.history.len() {
            return None;
        }
        self.history_index += 1;
        Some(
            self.history
                .get(self.history_index)
                .map(String::as_str)
                .unwrap_or(""),
        )
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
