//! Session controller - Turns square clicks into chess moves
//!
//! [`GameSession`] owns the game state (a [`RulesEngine`] value) and the
//! transient [`SelectionState`]. Front ends forward square clicks and the
//! "new game" / "undo" actions; after each call they redraw from
//! [`GameSession::board`], [`GameSession::selection`] and
//! [`GameSession::status`].
//!
//! # Click Handling
//!
//! ```text
//! Idle ──click own piece──▶ Selected(P)
//! Selected(P) ──click P──▶ Idle
//! Selected(P) ──click legal target──▶ move played, Idle
//! Selected(P) ──click anything else──▶ same as a click while Idle
//! ```
//!
//! A move the engine rejects (stale candidates) is not an error: the click
//! is treated as a fresh selection attempt.
//!
//! # Derived State
//!
//! The board snapshot and status are recomputed in full after every
//! mutation, and the selection is cleared.

use chess_rules::{
    BoardSnapshot, Color, MoveDescriptor, PieceKind, RulesEngine, ShakmatyEngine, Square,
};
use tracing::{debug, info};

use crate::game::resources::{MoveHistory, SelectionState};
use crate::game::status::{derive_status, GameStatus};

/// Promotion piece used when a pawn reaches the last rank
pub const DEFAULT_PROMOTION: PieceKind = PieceKind::Queen;

/// What a square click did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was selected
    Selected { square: Square, candidates: usize },
    /// The previous selection was dropped
    Deselected,
    /// A move was played
    Moved(MoveDescriptor),
    /// Nothing was selected and the click did not select anything
    Ignored,
}

/// One interactive two-player game
#[derive(Debug, Clone)]
pub struct GameSession<E: RulesEngine = ShakmatyEngine> {
    engine: E,
    selection: SelectionState,
    history: MoveHistory,
    board: BoardSnapshot,
    status: GameStatus,
}

impl<E: RulesEngine> Default for GameSession<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: RulesEngine> GameSession<E> {
    /// Session at the standard starting position
    pub fn new() -> Self {
        Self::with_engine(E::new_game())
    }

    /// Session continuing from an existing game state
    ///
    /// The move history is taken over from the engine.
    pub fn with_engine(engine: E) -> Self {
        let board = engine.snapshot_board();
        let status = derive_status(&engine);
        let history = seed_history(&engine);
        GameSession {
            engine,
            selection: SelectionState::default(),
            history,
            board,
            status,
        }
    }

    /// Handle a click on `square`
    pub fn handle_square_click(&mut self, square: Square) -> ClickOutcome {
        if let Some(origin) = self.selection.selected() {
            if origin == square {
                self.selection.clear();
                debug!("[SESSION] Deselected {}", square);
                return ClickOutcome::Deselected;
            }

            if let Some(candidate) = self.candidate_for(square) {
                match self.engine.apply_move(origin, square, candidate.promotion) {
                    Ok(played) => {
                        self.history.add_move(played.clone());
                        self.selection.clear();
                        self.refresh();
                        info!("[SESSION] Played {} ({})", played.san, self.status);
                        return ClickOutcome::Moved(played);
                    }
                    Err(e) => {
                        debug!("[SESSION] {}; treating click as a new selection", e);
                    }
                }
            }
        }

        self.select(square)
    }

    /// Discard the game and start from the initial position
    pub fn new_game(&mut self) {
        self.engine = E::new_game();
        self.selection.clear();
        self.history = seed_history(&self.engine);
        self.refresh();
        info!("[SESSION] New game started");
    }

    /// Take back the last move, if any
    ///
    /// The selection is cleared even when there was nothing to undo.
    pub fn undo(&mut self) -> Option<MoveDescriptor> {
        let undone = self.engine.undo_last();
        if undone.is_some() {
            self.history.pop();
        }
        self.selection.clear();
        self.refresh();

        match &undone {
            Some(m) => info!("[SESSION] Took back {}", m.san),
            None => debug!("[SESSION] Undo requested with empty history"),
        }
        undone
    }

    /// Whether [`GameSession::undo`] would take back a move
    pub fn can_undo(&self) -> bool {
        self.engine.history_len() > 0
    }

    pub fn board(&self) -> &BoardSnapshot {
        &self.board
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected_square(&self) -> Option<Square> {
        self.selection.selected()
    }

    pub fn candidates(&self) -> &[MoveDescriptor] {
        self.selection.candidates()
    }

    /// Moves played through this session
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn status_text(&self) -> String {
        self.status.message()
    }

    pub fn side_to_move(&self) -> Color {
        self.engine.side_to_move()
    }

    /// Read-only access to the game state
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Selection logic shared by idle clicks and clicks that did not move
    fn select(&mut self, square: Square) -> ClickOutcome {
        let had_selection = self.selection.is_selected();

        match self.engine.piece_at(square) {
            Some(piece) if piece.color == self.engine.side_to_move() => {
                let candidates = self.engine.legal_moves(square);
                let count = candidates.len();
                self.selection.select(square, candidates);
                debug!(
                    "[SESSION] Selected {:?} on {} ({} legal moves)",
                    piece.kind, square, count
                );
                ClickOutcome::Selected {
                    square,
                    candidates: count,
                }
            }
            _ => {
                self.selection.clear();
                if had_selection {
                    debug!("[SESSION] Selection cleared by click on {}", square);
                    ClickOutcome::Deselected
                } else {
                    ClickOutcome::Ignored
                }
            }
        }
    }

    /// Candidate to submit for a click on `target`
    ///
    /// Promotions offer one candidate per piece; the queen is always chosen.
    fn candidate_for(&self, target: Square) -> Option<MoveDescriptor> {
        let mut fallback = None;
        for candidate in self.selection.candidates_to(target) {
            if candidate.promotion.is_none() || candidate.promotion == Some(DEFAULT_PROMOTION) {
                return Some(candidate.clone());
            }
            fallback.get_or_insert_with(|| candidate.clone());
        }
        fallback
    }

    fn refresh(&mut self) {
        self.board = self.engine.snapshot_board();
        self.status = derive_status(&self.engine);
    }
}

/// History matching the engine's played moves
///
/// The first mover is found by walking back from the side to move.
fn seed_history<E: RulesEngine>(engine: &E) -> MoveHistory {
    let moves = engine.played_moves();
    let first_to_move = if moves.len() % 2 == 0 {
        engine.side_to_move()
    } else {
        engine.side_to_move().opposite()
    };
    MoveHistory::starting_with(first_to_move, moves)
}
