//! Game status derivation
//!
//! Maps the rules engine's check and game-end predicates to a single
//! [`GameStatus`] whose `Display` is the status line shown to players.
//!
//! # Evaluation Order
//!
//! The engine predicates overlap (a stalemate is also a draw), so the first
//! match wins:
//!
//! 1. Checkmate - `"White wins by checkmate"` (the side that just moved wins)
//! 2. Stalemate - `"Stalemate"`
//! 3. Draw - `"Draw"` (insufficient material, fifty-move rule, repetition)
//! 4. In progress - `"Black to move"`, with `" (in check)"` when in check
//!
//! # Reference
//!
//! FIDE Laws of Chess: https://www.fide.com/FIDE/handbook/LawsOfChess.pdf
//! - Article 5: Checkmate, stalemate, draws
//! - Article 9: Fifty-move rule and repetition

use std::fmt;

use chess_rules::{Color, RulesEngine};

/// Where the game stands after the last mutation
///
/// # State Transitions
///
/// ```text
/// InProgress → Checkmate / Stalemate / Draw
/// ```
///
/// Terminal states can still be left through undo or a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is still in progress
    InProgress {
        /// Side whose turn it is
        to_move: Color,
        /// Whether that side's king is attacked
        in_check: bool,
    },

    /// The side to move is checkmated
    Checkmate {
        /// The side that delivered mate
        winner: Color,
    },

    /// The side to move has no legal moves and is not in check
    Stalemate,

    /// Drawn by insufficient material, the fifty-move rule or repetition
    Draw,
}

impl GameStatus {
    /// Check if the game has ended
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// if session.status().is_terminal() {
    ///     println!("Game over: {}", session.status());
    /// }
    /// ```
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Get the winner of the game, if there is one
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    /// Get the side to move while the game is in progress
    pub fn to_move(self) -> Option<Color> {
        match self {
            GameStatus::InProgress { to_move, .. } => Some(to_move),
            _ => None,
        }
    }

    /// Human-readable status line
    pub fn message(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Checkmate { winner } => write!(f, "{} wins by checkmate", winner),
            GameStatus::Stalemate => f.write_str("Stalemate"),
            GameStatus::Draw => f.write_str("Draw"),
            GameStatus::InProgress { to_move, in_check } => {
                write!(f, "{} to move", to_move)?;
                if *in_check {
                    f.write_str(" (in check)")?;
                }
                Ok(())
            }
        }
    }
}

/// Derive the current status from the engine's predicates
pub fn derive_status<E: RulesEngine + ?Sized>(engine: &E) -> GameStatus {
    let to_move = engine.side_to_move();

    if engine.is_checkmate() {
        GameStatus::Checkmate {
            winner: to_move.opposite(),
        }
    } else if engine.is_stalemate() {
        GameStatus::Stalemate
    } else if engine.is_draw() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress {
            to_move,
            in_check: engine.is_in_check(),
        }
    }
}
