//! # Terminal Engine
//!
//! The command interpreter behind the NullOS terminal.
//!
//! ## Philosophy
//!
//! - **One step per line**: Tokenize, dispatch, fold. Nothing is observable in between
//! - **State in, state out**: [`execute_command`] takes a session and returns a new one
//! - **Failures are output**: Every error becomes an `error`-kind line; nothing panics
//! - **No rendering**: Output lines are tagged data; painting them is the host's job
//!
//! ## Example
//!
//! ```
//! use system_config::SystemConfig;
//! use terminal_engine::{execute_command, Session};
//!
//! let config = SystemConfig::builtin().unwrap();
//! let session = Session::new();
//!
//! let outcome = execute_command("cd ..", &config, &session);
//! assert!(outcome.output.is_empty());
//! assert_eq!(outcome.session.current_path(), "/home");
//! ```

pub mod dispatcher;
pub mod handlers;
pub mod session;
pub mod terminal;

pub use core_types::{OutputKind, OutputLine};
pub use dispatcher::{execute_command, CommandError, CommandOutcome};
pub use handlers::HandlerOutput;
pub use session::{create_session, Session, HOME_PATH};
pub use terminal::Terminal;
