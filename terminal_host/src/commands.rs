//! # Host Control Commands
//!
//! A few words the host handles itself before anything reaches the engine.
//!
//! ## Command Set
//!
//! - `exit` / `quit` - Leave the host
//! - `history` - Print the session's submitted lines
//!
//! Everything else is terminal input.

/// Host commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Leave the host
    Quit,

    /// Print submitted lines with their positions
    History,
}

/// Host command parser
pub struct HostCommandParser;

impl HostCommandParser {
    /// Parses a line, returning `None` when it belongs to the engine
    ///
    /// Only a bare command word matches; `exit now` goes to the engine.
    pub fn parse(input: &str) -> Option<HostCommand> {
        let mut parts = input.split_whitespace();
        let cmd = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        match cmd {
            "exit" | "quit" => Some(HostCommand::Quit),
            "history" => Some(HostCommand::History),
            _ => None,
        }
    }
}
