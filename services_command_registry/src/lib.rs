//! # Command Registry Service
//!
//! Maps terminal command names to the built-in handlers that implement them.
//!
//! ## Philosophy
//!
//! - **Closed handler set**: Configuration names a handler by key; the key can
//!   only ever select one of the [`HandlerId`] variants
//! - **Resolved once**: Keys are bound when the registry is built, not per call
//! - **Mismatches are data**: An unknown key becomes [`HandlerBinding::Unresolved`]
//!   and is reported when the command runs
//!
//! ## Example
//!
//! ```
//! use services_command_registry::{CommandDefinition, CommandRegistry, HandlerBinding, HandlerId};
//!
//! let registry = CommandRegistry::from_definitions(vec![
//!     CommandDefinition::new("pwd", "Print working directory", "pwdHandler"),
//! ]);
//!
//! let command = registry.lookup("pwd").unwrap();
//! assert_eq!(command.binding(), &HandlerBinding::Builtin(HandlerId::Pwd));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in command handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerId {
    /// List commands
    Help,
    /// List a directory
    Ls,
    /// Change directory
    Cd,
    /// Print a file
    Cat,
    /// Print the working directory
    Pwd,
    /// Narrative remote login
    Ssh,
    /// Narrative port scan
    Scan,
    /// Narrative hash cracking
    Crack,
    /// Clear the screen
    Clear,
}

impl HandlerId {
    /// Every built-in handler
    pub const ALL: [HandlerId; 9] = [
        HandlerId::Help,
        HandlerId::Ls,
        HandlerId::Cd,
        HandlerId::Cat,
        HandlerId::Pwd,
        HandlerId::Ssh,
        HandlerId::Scan,
        HandlerId::Crack,
        HandlerId::Clear,
    ];

    /// Returns the configuration key naming this handler
    pub fn key(&self) -> &'static str {
        match self {
            HandlerId::Help => "helpHandler",
            HandlerId::Ls => "lsHandler",
            HandlerId::Cd => "cdHandler",
            HandlerId::Cat => "catHandler",
            HandlerId::Pwd => "pwdHandler",
            HandlerId::Ssh => "sshHandler",
            HandlerId::Scan => "scanHandler",
            HandlerId::Crack => "crackHandler",
            HandlerId::Clear => "clearHandler",
        }
    }

    /// Looks up a handler by configuration key (exact match)
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|handler| handler.key() == key)
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Command definition as written in the system document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// Name typed at the prompt
    pub name: String,
    /// One-line description shown by `help`
    pub description: String,
    /// Handler key, e.g. `lsHandler`
    #[serde(rename = "handler")]
    pub handler_key: String,
    /// Declared argument names (informational)
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandDefinition {
    /// Creates a new command definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            handler_key: handler_key.into(),
            args: Vec::new(),
        }
    }

    /// Sets the declared argument names
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }
}

/// What a command's handler key resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerBinding {
    /// A built-in handler
    Builtin(HandlerId),
    /// A key no built-in answers to
    Unresolved(String),
}

impl HandlerBinding {
    /// Binds a configuration key
    pub fn resolve(key: &str) -> Self {
        match HandlerId::from_key(key) {
            Some(handler) => HandlerBinding::Builtin(handler),
            None => HandlerBinding::Unresolved(key.to_string()),
        }
    }
}

/// Registered command with its binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredCommand {
    definition: CommandDefinition,
    binding: HandlerBinding,
}

impl RegisteredCommand {
    /// Returns the definition
    pub fn definition(&self) -> &CommandDefinition {
        &self.definition
    }

    /// Returns the handler binding
    pub fn binding(&self) -> &HandlerBinding {
        &self.binding
    }

    /// Returns the command name
    pub fn name(&self) -> &str {
        &self.definition.name
    }
}

/// Command registry
///
/// Keeps commands in configuration order. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<CommandDefinition>")]
pub struct CommandRegistry {
    commands: Vec<RegisteredCommand>,
}

impl CommandRegistry {
    /// Builds a registry, binding every handler key
    pub fn from_definitions(definitions: Vec<CommandDefinition>) -> Self {
        let commands = definitions
            .into_iter()
            .map(|definition| {
                let binding = HandlerBinding::resolve(&definition.handler_key);
                if let HandlerBinding::Unresolved(key) = &binding {
                    tracing::warn!(
                        command = %definition.name,
                        handler = %key,
                        "command bound to unknown handler"
                    );
                }
                RegisteredCommand {
                    definition,
                    binding,
                }
            })
            .collect();

        Self { commands }
    }

    /// Finds a command by exact, case-sensitive name
    ///
    /// With duplicate names the first definition wins.
    pub fn lookup(&self, name: &str) -> Option<&RegisteredCommand> {
        self.commands.iter().find(|cmd| cmd.name() == name)
    }

    /// Iterates commands in configuration order
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredCommand> {
        self.commands.iter()
    }

    /// Returns all definitions in configuration order
    pub fn definitions(&self) -> Vec<&CommandDefinition> {
        self.commands.iter().map(|cmd| &cmd.definition).collect()
    }

    /// Returns commands whose handler key did not resolve
    pub fn unresolved(&self) -> Vec<&RegisteredCommand> {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd.binding, HandlerBinding::Unresolved(_)))
            .collect()
    }

    /// Returns the first name defined more than once, if any
    pub fn first_duplicate(&self) -> Option<&str> {
        self.commands.iter().enumerate().find_map(|(i, cmd)| {
            self.commands[..i]
                .iter()
                .any(|earlier| earlier.name() == cmd.name())
                .then(|| cmd.name())
        })
    }

    /// Counts the commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands are registered
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl From<Vec<CommandDefinition>> for CommandRegistry {
    fn from(definitions: Vec<CommandDefinition>) -> Self {
        Self::from_definitions(definitions)
    }
}
