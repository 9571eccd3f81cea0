//! # Core Types
//!
//! This crate defines the fundamental types shared by the NullOS terminal engine
//! and whatever surface renders it.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Output lines carry their kind; nothing is inferred from text.
//! - **Presentation stays outside**: The engine describes output, the host paints it.
//!
//! ## Key Types
//!
//! - [`SessionId`]: Unique identifier for a terminal session
//! - [`OutputKind`]: Classification of an output line (`output`, `error`, `success`)
//! - [`OutputLine`]: A single tagged line produced by a command

pub mod ids;
pub mod output;

pub use ids::SessionId;
pub use output::{OutputKind, OutputLine, CLEAR_SCREEN};
