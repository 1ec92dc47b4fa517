//! The rules engine contract
//!
//! An implementor is the whole game state: position, side to move and move
//! history. Callers own one value and mutate it only through
//! [`RulesEngine::apply_move`] and [`RulesEngine::undo_last`].

use crate::error::RulesResult;
use crate::types::{BoardSnapshot, Color, MoveDescriptor, Piece, PieceKind, Square};

/// Capabilities the session controller needs from a chess rules implementation
pub trait RulesEngine {
    /// Standard starting position with an empty history
    fn new_game() -> Self
    where
        Self: Sized;

    /// All legal moves starting on `square`, in generation order
    ///
    /// Empty when the square is empty or holds a piece of the side not to move.
    fn legal_moves(&self, square: Square) -> Vec<MoveDescriptor>;

    /// Play a move, returning its descriptor
    ///
    /// `promotion` is only consulted for pawn promotions and defaults to a
    /// queen. On `Err` the state is unchanged.
    fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> RulesResult<MoveDescriptor>;

    /// Revert the most recent move, if there is one
    fn undo_last(&mut self) -> Option<MoveDescriptor>;

    fn piece_at(&self, square: Square) -> Option<Piece>;

    fn side_to_move(&self) -> Color;

    /// Whether the side to move is in check
    fn is_in_check(&self) -> bool;

    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;

    /// Stalemate, insufficient material, fifty-move rule or threefold repetition
    fn is_draw(&self) -> bool;

    /// Number of moves played and not undone
    fn history_len(&self) -> usize;

    /// Moves played and not undone, oldest first
    fn played_moves(&self) -> Vec<MoveDescriptor>;

    fn snapshot_board(&self) -> BoardSnapshot;
}
