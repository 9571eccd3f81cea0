//! Command dispatch
//!
//! One call to [`execute_command`] is one atomic step of the terminal:
//! tokenize the line, find the command, run its handler, fold the result into
//! a new session.

use crate::handlers::{self, HandlerOutput};
use crate::session::Session;
use core_types::OutputLine;
use services_command_registry::HandlerBinding;
use services_fs_view::OperationError;
use system_config::SystemConfig;
use thiserror::Error;

/// Errors a command can end with
///
/// None of these escape the dispatcher; each becomes one `error`-kind line
/// whose text is the error's display form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// No command with this name is configured
    #[error("Command not found: {0}. Type 'help' to see available commands.")]
    UnknownCommand(String),

    /// The command's handler key matches no built-in handler
    #[error("Handler not implemented: {0}")]
    UnimplementedHandler(String),

    /// A required argument is missing or malformed
    #[error("{command}: {message}")]
    Usage {
        command: &'static str,
        message: String,
    },

    /// A filesystem operation failed
    #[error("{command}: {source}")]
    Operation {
        command: &'static str,
        #[source]
        source: OperationError,
    },

    /// A path exists but is not a directory
    #[error("{command}: {path}: Not a directory")]
    NotADirectory { command: &'static str, path: String },
}

impl CommandError {
    /// Converts the error into the line shown to the user
    pub fn into_line(self) -> OutputLine {
        OutputLine::error(self.to_string())
    }
}

/// Result of executing one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Lines produced by the command, in order
    pub output: Vec<OutputLine>,
    /// Session after the step
    pub session: Session,
}

/// Executes one raw input line against a session
///
/// Empty or all-whitespace input produces no output and returns the session
/// unchanged. Anything else is appended to history, even when the command is
/// unknown or fails. Never panics and never returns an error.
pub fn execute_command(raw_line: &str, config: &SystemConfig, session: &Session) -> CommandOutcome {
    let tokens: Vec<&str> = raw_line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return CommandOutcome {
            output: Vec::new(),
            session: session.clone(),
        };
    };

    let (output, new_path) = match dispatch(name, args, config, session) {
        Ok(HandlerOutput { lines, new_path }) => (lines, new_path),
        Err(err) => {
            tracing::debug!(session = %session.id(), command = name, error = %err, "command failed");
            (vec![err.into_line()], None)
        }
    };

    let mut next = session.clone();
    next.record(raw_line, new_path);

    CommandOutcome {
        output,
        session: next,
    }
}

fn dispatch(
    name: &str,
    args: &[&str],
    config: &SystemConfig,
    session: &Session,
) -> Result<HandlerOutput, CommandError> {
    let command = config
        .commands()
        .lookup(name)
        .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;

    match command.binding() {
        HandlerBinding::Builtin(handler) => {
            tracing::debug!(
                session = %session.id(),
                command = name,
                handler = %handler,
                args = args.len(),
                "dispatching command"
            );
            handlers::run(*handler, args, config, session)
        }
        HandlerBinding::Unresolved(key) => {
            tracing::warn!(command = name, handler = %key, "command has no implementation");
            Err(CommandError::UnimplementedHandler(key.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::OutputKind;

    fn config() -> SystemConfig {
        SystemConfig::from_json_str(
            r#"{
                "filesystem": {"root": {"type": "directory", "children": {
                    "home": {"type": "directory", "children": {
                        "guest": {"type": "directory"}
                    }}
                }}},
                "terminal": {"commands": [
                    {"name": "pwd", "description": "Print working directory", "handler": "pwdHandler"},
                    {"name": "cd", "description": "Change directory", "handler": "cdHandler"},
                    {"name": "rm", "description": "Remove files", "handler": "rmHandler"}
                ]}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_line_is_a_no_op() {
        let config = config();
        let session = Session::new();
        for line in ["", "   ", "\t \n"] {
            let outcome = execute_command(line, &config, &session);
            assert!(outcome.output.is_empty());
            assert_eq!(outcome.session, session);
        }
    }

    #[test]
    fn test_unknown_command() {
        let config = config();
        let outcome = execute_command("hack the planet", &config, &Session::new());

        assert_eq!(outcome.output.len(), 1);
        assert_eq!(outcome.output[0].kind, OutputKind::Error);
        assert_eq!(
            outcome.output[0].content,
            "Command not found: hack. Type 'help' to see available commands."
        );
        assert_eq!(outcome.session.history(), &["hack the planet".to_string()]);
        assert_eq!(outcome.session.history_index(), 1);
        assert_eq!(outcome.session.current_path(), "/home/guest");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let config = config();
        let outcome = execute_command("PWD", &config, &Session::new());
        assert!(outcome.output[0].is_error());
    }

    #[test]
    fn test_unimplemented_handler() {
        let config = config();
        let outcome = execute_command("rm -rf /", &config, &Session::new());

        assert_eq!(
            outcome.output,
            vec![OutputLine::error("Handler not implemented: rmHandler")]
        );
        assert_eq!(outcome.session.history().len(), 1);
    }

    #[test]
    fn test_raw_line_is_recorded_verbatim() {
        let config = config();
        let outcome = execute_command("  pwd   ", &config, &Session::new());
        assert_eq!(outcome.session.history(), &["  pwd   ".to_string()]);
        assert_eq!(outcome.output, vec![OutputLine::output("/home/guest")]);
    }

    #[test]
    fn test_path_change_is_folded() {
        let config = config();
        let outcome = execute_command("cd ..", &config, &Session::new());
        assert!(outcome.output.is_empty());
        assert_eq!(outcome.session.current_path(), "/home");
    }

    #[test]
    fn test_failed_command_keeps_path() {
        let config = config();
        let outcome = execute_command("cd nowhere", &config, &Session::new());
        assert_eq!(outcome.output, vec![OutputLine::error("cd: Path not found")]);
        assert_eq!(outcome.session.current_path(), "/home/guest");
        assert_eq!(outcome.session.history_index(), 1);
    }

    #[test]
    fn test_input_session_is_untouched() {
        let config = config();
        let session = Session::new();
        let before = session.clone();
        let _ = execute_command("cd /", &config, &session);
        assert_eq!(session, before);
    }

    #[test]
    fn test_error_display() {
        let err = CommandError::Operation {
            command: "ls",
            source: OperationError::PermissionDenied {
                path: "/root".to_string(),
            },
        };
        assert_eq!(err.to_string(), "ls: Permission denied");

        let err = CommandError::NotADirectory {
            command: "cd",
            path: "/etc/hosts".to_string(),
        };
        assert_eq!(err.into_line(), OutputLine::error("cd: /etc/hosts: Not a directory"));
    }
}
