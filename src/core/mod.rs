//! Core module - Application infrastructure shared by every front end
//!
//! # Module Structure
//!
//! - `error` - [`CoreError`] and the [`CoreResult`] alias
//! - `settings` - [`SessionSettings`], the user's display preferences
//! - `settings_persistence` - Loading and saving settings as JSON
//! - `logging` - `tracing` subscriber installation

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use settings::{GlyphStyle, SessionSettings};
pub use settings_persistence::{default_settings_path, load_settings, read_settings, save_settings};
