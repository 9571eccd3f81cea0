//! # NullOS Host Runtime
//!
//! Drives a terminal engine session from stdin or a script file.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: The engine returns tagged lines; only the host writes them
//! - **Scripts are first-class**: A scripted run is deterministic and testable
//! - **Thin control surface**: `exit` and `history` are the only host-side commands
//!
//! ## Non-Responsibilities
//!
//! The host does NOT:
//! - Interpret commands (that is the engine's job)
//! - Emulate a terminal beyond passing the clear-screen sequence through
//! - Put the real terminal into raw mode

pub mod commands;
pub mod input_script;
pub mod runtime;

pub use commands::{HostCommand, HostCommandParser};
pub use input_script::{InputScript, InputScriptError, ScriptedInput};
pub use runtime::{HostRuntime, HostRuntimeConfig, HostRuntimeError};
