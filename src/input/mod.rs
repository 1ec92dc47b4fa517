//! Input module - Terminal line parsing
//!
//! The terminal front end has no pointer, so a square "click" is typed as
//! its name. Lines are parsed into [`SessionCommand`]s which the UI loop
//! forwards to the session.
//!
//! # Architecture
//!
//! - `command` - [`SessionCommand`], [`InputError`] and [`parse_command`]

pub mod command;

pub use command::{parse_command, InputError, SessionCommand};
