//! # Puzzle Service
//!
//! Static narrative-gating data consulted by the `ssh` and `crack` commands.
//!
//! ## Philosophy
//!
//! - **Table-driven**: Nothing is computed; records select between canned responses
//! - **Absence is normal**: A missing record is `None`, not an error
//! - **Game content is explicit**: The puzzle ids the commands consult are named constants
//!
//! ## Example
//!
//! ```
//! use services_puzzles::{PuzzleBook, LOGIN_PUZZLE_ID};
//!
//! let book: PuzzleBook = serde_json::from_str(
//!     r#"{"puzzle_01_login": {"solution": "sesame"}}"#,
//! ).unwrap();
//! assert_eq!(book.solution(LOGIN_PUZZLE_ID), Some("sesame"));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Puzzle whose solution `crack` reveals
pub const LOGIN_PUZZLE_ID: &str = "puzzle_01_login";

/// Puzzle whose target host `ssh` recognizes
pub const SERVER_PUZZLE_ID: &str = "puzzle_02_server";

/// A single puzzle record
///
/// Only `solution` and `targetIP` are read by the engine; everything else
/// is carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PuzzleRecord {
    /// Record id (only present in list-form documents)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Answer revealed when the puzzle is solved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    /// Host the puzzle's narrative points at
    #[serde(rename = "targetIP", default, skip_serializing_if = "Option::is_none")]
    pub target_ip: Option<String>,
    /// Fields the engine does not interpret
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl PuzzleRecord {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the solution
    pub fn with_solution(mut self, solution: impl Into<String>) -> Self {
        self.solution = Some(solution.into());
        self
    }

    /// Sets the target host
    pub fn with_target_ip(mut self, target_ip: impl Into<String>) -> Self {
        self.target_ip = Some(target_ip.into());
        self
    }
}

/// Accepted document shapes for the puzzle collection
#[derive(Deserialize)]
#[serde(untagged)]
enum PuzzleDocument {
    Keyed(BTreeMap<String, PuzzleRecord>),
    Listed(Vec<PuzzleRecord>),
}

impl From<PuzzleDocument> for PuzzleBook {
    fn from(doc: PuzzleDocument) -> Self {
        match doc {
            PuzzleDocument::Keyed(records) => Self { records },
            PuzzleDocument::Listed(list) => Self {
                records: list
                    .into_iter()
                    .filter_map(|record| record.id.clone().map(|id| (id, record)))
                    .collect(),
            },
        }
    }
}

/// Keyed collection of puzzle records
///
/// Deserializes from either `{"id": record, ...}` or `[{"id": ..., ...}, ...]`.
/// List entries without an `id` cannot be looked up and are dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "PuzzleDocument")]
pub struct PuzzleBook {
    records: BTreeMap<String, PuzzleRecord>,
}

impl PuzzleBook {
    /// Creates an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a record
    pub fn insert(&mut self, id: impl Into<String>, record: PuzzleRecord) {
        self.records.insert(id.into(), record);
    }

    /// Looks up a record by exact id
    pub fn get(&self, id: &str) -> Option<&PuzzleRecord> {
        self.records.get(id)
    }

    /// Returns the solution of a record, if both exist
    pub fn solution(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(|record| record.solution.as_deref())
    }

    /// Returns the target host of a record, if both exist
    pub fn target_ip(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(|record| record.target_ip.as_deref())
    }

    /// Counts the records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records by id
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PuzzleRecord)> {
        self.records.iter().map(|(id, record)| (id.as_str(), record))
    }
}

/// Outcome of a crack attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrackOutcome {
    /// The hash appears in the backup and the login puzzle has a solution
    Cracked(String),
    /// The hash appears in the backup but no solution is configured
    FoundUnsolved,
    /// The hash does not appear in the backup
    NoMatch,
}

/// Decides a crack attempt against the shadow backup content
///
/// A hash matches when it is a non-empty substring of the backup. A match
/// reveals the login puzzle's solution when one is configured.
pub fn crack(backup_content: &str, hash: &str, book: &PuzzleBook) -> CrackOutcome {
    if hash.is_empty() || !backup_content.contains(hash) {
        return CrackOutcome::NoMatch;
    }

    match book.solution(LOGIN_PUZZLE_ID) {
        Some(solution) => CrackOutcome::Cracked(solution.to_string()),
        None => CrackOutcome::FoundUnsolved,
    }
}

/// Returns true if `host` is the server puzzle's target
pub fn is_server_target(book: &PuzzleBook, host: &str) -> bool {
    book.target_ip(SERVER_PUZZLE_ID) == Some(host)
}
