//! Output line contract tests
//!
//! Hosts render output lines by `type`; the field names and kind tags are
//! the rendering contract.

use core_types::{OutputKind, OutputLine, CLEAR_SCREEN};

/// Kind tags as they appear on the wire
pub const KIND_TAGS: [(OutputKind, &str); 3] = [
    (OutputKind::Output, "output"),
    (OutputKind::Error, "error"),
    (OutputKind::Success, "success"),
];

/// Clear-screen sequence hosts must recognize
pub const CLEAR_SCREEN_SEQUENCE: &str = "\x1b[2J\x1b[H";

/// Returns true if the line asks the host to wipe its display
pub fn is_clear_request(line: &OutputLine) -> bool {
    line.kind == OutputKind::Output && line.content == CLEAR_SCREEN
}
