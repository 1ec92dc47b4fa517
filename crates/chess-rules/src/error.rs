//! Error types for the rules engine
//!
//! Only move submission and position setup can fail. Every other engine
//! query is infallible.

use crate::types::Square;

/// Errors reported by a [`crate::RulesEngine`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// The submitted move is not legal in the current position
    #[error("Illegal move: {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    /// A square name could not be parsed
    #[error("Invalid square: {0:?}")]
    InvalidSquare(String),

    /// A FEN string could not be turned into a legal position
    #[error("Invalid FEN '{fen}': {message}")]
    InvalidFen { fen: String, message: String },
}

/// Result type alias for rules engine operations
pub type RulesResult<T> = Result<T, RulesError>;
