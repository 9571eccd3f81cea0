//! System document contract tests
//!
//! The JSON schema of the filesystem tree, command table and puzzle records.

use services_puzzles::{LOGIN_PUZZLE_ID, SERVER_PUZZLE_ID};

/// Puzzle ids the narrative commands consult
pub const NARRATIVE_PUZZLE_IDS: [&str; 2] = [LOGIN_PUZZLE_ID, SERVER_PUZZLE_ID];

/// Top-level keys the engine reads
pub const DOCUMENT_KEYS: [&str; 5] = ["systemInfo", "filesystem", "terminal", "puzzles", "secrets"];
