//! # Terminal Contract Tests
//!
//! This crate provides "golden" tests for the terminal's external contracts
//! to ensure they don't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Contracts are written as code
//! - **Testability first**: Contract tests fail when interfaces change
//! - **Mechanism not policy**: Define what must be stable, not how to use it
//!
//! ## Structure
//!
//! - `output`: the `{type, content}` shape of output lines
//! - `document`: the system document schema
//! - `handlers`: handler key identifiers
//! - `messages`: user-visible message texts

pub mod document;
pub mod handlers;
pub mod messages;
pub mod output;

/// Common test helpers for contract validation
pub mod test_helpers {
    use serde::Serialize;
    use serde_json::Value;
    use system_config::SystemConfig;
    use terminal_engine::{execute_command, OutputLine, Session};

    /// Serializes a value and asserts it equals the expected JSON
    pub fn verify_json_contract<T: Serialize>(value: &T, expected: Value) {
        let actual = serde_json::to_value(value).expect("Failed to serialize value");
        assert_eq!(
            actual, expected,
            "Wire shape changed: expected {}, got {}",
            expected, actual
        );
    }

    /// Runs one line on a fresh session and returns its output
    pub fn run_line(config: &SystemConfig, line: &str) -> Vec<OutputLine> {
        execute_command(line, config, &Session::new()).output
    }

    /// Asserts a line produces exactly one line with the given text
    pub fn verify_single_line(config: &SystemConfig, line: &str, expected: &OutputLine) {
        let output = run_line(config, line);
        assert_eq!(
            output.as_slice(),
            std::slice::from_ref(expected),
            "Output of '{}' changed",
            line
        );
    }
}
