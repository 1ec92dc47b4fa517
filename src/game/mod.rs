//! Chess game logic module - The interactive session core
//!
//! Everything chess-specific is delegated to a [`chess_rules::RulesEngine`].
//! This module only decides what a click means and what the players see.
//!
//! # Module Organization
//!
//! - `session` - [`GameSession`], the click-driven controller
//! - `status` - [`GameStatus`] and [`derive_status`]
//! - `resources` - State owned by the controller ([`SelectionState`])
//!
//! # Flow
//!
//! 1. A front end forwards a square click or an action
//! 2. [`GameSession`] queries or mutates the engine
//! 3. Board snapshot, status and selection are recomputed
//! 4. The front end redraws from the session's accessors

pub mod resources;
pub mod session;
pub mod status;

pub use resources::{MoveHistory, SelectionState};
pub use session::{ClickOutcome, GameSession, DEFAULT_PROMOTION};
pub use status::{derive_status, GameStatus};
