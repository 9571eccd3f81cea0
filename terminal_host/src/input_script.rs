//! # Input Script Parser
//!
//! A line-based script format for deterministic runs and demos.
//!
//! ## Format
//!
//! - Plain lines: submitted to the terminal as typed
//! - `@up` / `@down`: history recall, as the arrow keys would
//! - `@enter`: submit whatever recall left in the input line
//! - Comments: lines starting with `#`
//!
//! Blank lines are submitted too; the engine treats them as no-ops.
//!
//! ## Example
//!
//! ```text
//! # Find the backup and crack it
//! cd /var/backups
//! cat shadow_backup.old
//! @up
//! @enter
//! ```

use std::collections::VecDeque;
use thiserror::Error;

/// Input script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputScriptError {
    #[error("Unknown directive at line {line}: {directive}")]
    UnknownDirective { line: usize, directive: String },

    #[error("Empty script")]
    EmptyScript,
}

/// A single scripted input action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedInput {
    /// Submit a line
    Line(String),
    /// Recall the previous history entry
    RecallPrevious,
    /// Recall the next history entry
    RecallNext,
    /// Submit the recalled line
    Enter,
}

/// Input script
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    inputs: VecDeque<ScriptedInput>,
}

impl InputScript {
    /// Creates a new empty input script
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, InputScriptError> {
        let mut inputs = VecDeque::new();

        for (line_num, line) in text.lines().enumerate() {
            if line.trim_start().starts_with('#') {
                continue;
            }

            let input = match line.trim() {
                "@up" => ScriptedInput::RecallPrevious,
                "@down" => ScriptedInput::RecallNext,
                "@enter" => ScriptedInput::Enter,
                directive if directive.starts_with('@') => {
                    return Err(InputScriptError::UnknownDirective {
                        line: line_num + 1,
                        directive: directive.to_string(),
                    });
                }
                _ => ScriptedInput::Line(line.to_string()),
            };
            inputs.push_back(input);
        }

        if inputs.is_empty() {
            return Err(InputScriptError::EmptyScript);
        }

        Ok(Self { inputs })
    }

    /// Takes the next input
    pub fn next_input(&mut self) -> Option<ScriptedInput> {
        self.inputs.pop_front()
    }

    /// Returns true if inputs remain
    pub fn has_more(&self) -> bool {
        !self.inputs.is_empty()
    }

    /// Returns the number of remaining inputs
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns true if no inputs remain
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}
