//! Session resources - State owned by the session controller
//!
//! ## Player Interaction
//! - [`SelectionState`] - Currently selected square and its legal moves
//!
//! ## Game History
//! - [`MoveHistory`] - Moves played through the session, for display

pub mod history;
pub mod selection;

pub use history::MoveHistory;
pub use selection::SelectionState;
