//! Tagged output lines
//!
//! Commands never print. They return [`OutputLine`] values and the host
//! decides how each kind is painted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ANSI sequence that erases the screen and homes the cursor.
///
/// The `clear` command emits this as the content of a single output line;
/// hosts treat it as a directive to wipe prior output.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Kind of an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Ordinary command output
    Output,
    /// A failure reported to the user
    Error,
    /// A positive outcome worth highlighting
    Success,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Output => write!(f, "output"),
            OutputKind::Error => write!(f, "error"),
            OutputKind::Success => write!(f, "success"),
        }
    }
}

/// A single line of command output
///
/// `content` may itself contain newlines; narrative responses are kept
/// together as one line so they render as one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    /// Line kind
    #[serde(rename = "type")]
    pub kind: OutputKind,
    /// Line text
    pub content: String,
}

impl OutputLine {
    /// Creates a new output line
    pub fn new(kind: OutputKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    /// Creates an `output`-kind line
    pub fn output(content: impl Into<String>) -> Self {
        Self::new(OutputKind::Output, content)
    }

    /// Creates an `error`-kind line
    pub fn error(content: impl Into<String>) -> Self {
        Self::new(OutputKind::Error, content)
    }

    /// Creates a `success`-kind line
    pub fn success(content: impl Into<String>) -> Self {
        Self::new(OutputKind::Success, content)
    }

    /// Creates the clear-screen directive line
    pub fn clear_screen() -> Self {
        Self::output(CLEAR_SCREEN)
    }

    /// Returns true if this line asks the host to erase prior output
    pub fn is_clear_screen(&self) -> bool {
        self.kind == OutputKind::Output && self.content == CLEAR_SCREEN
    }

    /// Returns true if this is an `error`-kind line
    pub fn is_error(&self) -> bool {
        self.kind == OutputKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(OutputLine::output("a").kind, OutputKind::Output);
        assert_eq!(OutputLine::error("b").kind, OutputKind::Error);
        assert_eq!(OutputLine::success("c").kind, OutputKind::Success);
    }

    #[test]
    fn test_clear_screen_directive() {
        let line = OutputLine::clear_screen();
        assert!(line.is_clear_screen());
        assert!(!OutputLine::output("plain").is_clear_screen());
        assert!(!OutputLine::error(CLEAR_SCREEN).is_clear_screen());
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let line = OutputLine::error("cat: Path not found");
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, r#"{"type":"error","content":"cat: Path not found"}"#);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(OutputKind::Success.to_string(), "success");
    }
}
