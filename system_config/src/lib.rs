//! # System Configuration
//!
//! Loads the static system document the terminal engine runs against: the
//! filesystem tree, the command table, puzzle records and opaque secrets.
//!
//! ## Philosophy
//!
//! - **Loaded once**: The document is parsed and validated up front, then only read
//! - **Defaults are explicit**: Every optional field has a named default
//! - **Load is the only failure point**: A document that loads can always be served
//!
//! ## Example
//!
//! ```
//! use system_config::SystemConfig;
//!
//! let config = SystemConfig::from_json_str(r#"{
//!     "filesystem": {"root": {"type": "directory"}},
//!     "terminal": {"commands": [
//!         {"name": "pwd", "description": "Print working directory", "handler": "pwdHandler"}
//!     ]}
//! }"#).unwrap();
//!
//! assert!(config.commands().lookup("pwd").is_some());
//! assert!(config.puzzles().is_empty());
//! ```

use fs_view::FileSystemNode;
use serde::{Deserialize, Deserializer};
use services_command_registry::CommandRegistry;
use services_fs_view::FileSystemViewService;
use services_puzzles::PuzzleBook;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Sample document shipped with the engine
const BUILTIN_DOCUMENT: &str = include_str!("../data/system.json");

/// Errors that can occur while loading a system document
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the schema
    #[error("Invalid system document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The filesystem root is a file
    #[error("Filesystem root must be a directory")]
    RootNotDirectory,

    /// Two commands share a name
    #[error("Duplicate command: {0}")]
    DuplicateCommand(String),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

fn default_system_name() -> String {
    "NullOS".to_string()
}

fn default_hostname() -> String {
    "user".to_string()
}

/// Treats an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identity of the simulated machine
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SystemInfo {
    /// System name shown in the welcome banner
    #[serde(default = "default_system_name")]
    pub name: String,
    /// Host name shown in the prompt
    #[serde(default = "default_hostname")]
    pub hostname: String,
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self {
            name: default_system_name(),
            hostname: default_hostname(),
        }
    }
}

/// The filesystem section of the document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilesystemDocument {
    /// Root node, reachable at `/`
    pub root: FileSystemNode,
}

/// The terminal section of the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TerminalConfig {
    /// Command table in document order
    #[serde(default, deserialize_with = "null_as_default")]
    pub commands: CommandRegistry,
}

/// The whole system document
///
/// Keys the engine does not use (desktop icons, app list) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    /// Machine identity
    #[serde(default, deserialize_with = "null_as_default")]
    pub system_info: SystemInfo,
    /// Filesystem tree
    pub filesystem: FilesystemDocument,
    /// Command table
    #[serde(default, deserialize_with = "null_as_default")]
    pub terminal: TerminalConfig,
    /// Puzzle records
    #[serde(default, deserialize_with = "null_as_default")]
    pub puzzles: PuzzleBook,
    /// Opaque secrets, carried but never interpreted
    #[serde(default, deserialize_with = "null_as_default")]
    pub secrets: Vec<serde_json::Value>,
}

impl SystemConfig {
    /// Parses and validates a document from a JSON string
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: SystemConfig = serde_json::from_str(json)?;
        config.validate()?;

        tracing::info!(
            system = %config.system_info.name,
            commands = config.terminal.commands.len(),
            puzzles = config.puzzles.len(),
            "system document loaded"
        );

        Ok(config)
    }

    /// Reads, parses and validates a document from disk
    pub fn load_from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Loads the sample document shipped with the engine
    pub fn builtin() -> ConfigResult<Self> {
        Self::from_json_str(BUILTIN_DOCUMENT)
    }

    /// Checks the invariants the engine relies on
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.filesystem.root.is_directory() {
            return Err(ConfigError::RootNotDirectory);
        }
        if let Some(name) = self.terminal.commands.first_duplicate() {
            return Err(ConfigError::DuplicateCommand(name.to_string()));
        }
        Ok(())
    }

    /// Returns the filesystem root
    pub fn root(&self) -> &FileSystemNode {
        &self.filesystem.root
    }

    /// Returns a read-only view over the filesystem
    pub fn filesystem_view(&self) -> FileSystemViewService<'_> {
        FileSystemViewService::new(&self.filesystem.root)
    }

    /// Returns the command table
    pub fn commands(&self) -> &CommandRegistry {
        &self.terminal.commands
    }

    /// Returns the puzzle records
    pub fn puzzles(&self) -> &PuzzleBook {
        &self.puzzles
    }
}
