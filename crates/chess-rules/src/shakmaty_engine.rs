//! Rules engine backed by the `shakmaty` crate
//!
//! `shakmaty` positions are immutable values without history, so the engine
//! keeps a stack of the positions it left behind. Undo pops that stack and
//! the same stack answers threefold-repetition queries.
//!
//! # Coordinate System
//!
//! - **Session squares**: [`Square`] with file/rank indices 0-7
//! - **shakmaty squares**: index 0-63 where `index = rank * 8 + file`
//!
//! Castling is reported and accepted with the king's destination square
//! (`e1 -> g1`), not shakmaty's king-takes-rook encoding.

use shakmaty as sm;
use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{
    Bitboard, Board, CastlingMode, CastlingSide, Chess, EnPassantMode, Move, Position, Role,
};
use tracing::{debug, info};

use crate::engine::RulesEngine;
use crate::error::{RulesError, RulesResult};
use crate::types::{BoardSnapshot, Color, MoveDescriptor, MoveFlags, Piece, PieceKind, Square};

/// Halfmove clock value at which the fifty-move rule applies
const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Occurrences of one position needed for a repetition draw
const REPETITION_COUNT: usize = 3;

/// A played move together with the position it was played from
#[derive(Debug, Clone)]
struct Ply {
    before: Chess,
    played: MoveDescriptor,
}

/// Fields that decide whether two positions repeat
#[derive(PartialEq, Eq)]
struct RepetitionKey {
    board: Board,
    turn: sm::Color,
    castling: Bitboard,
    ep_square: Option<sm::Square>,
}

impl RepetitionKey {
    fn of(position: &Chess) -> Self {
        RepetitionKey {
            board: position.board().clone(),
            turn: position.turn(),
            castling: position.castles().castling_rights(),
            ep_square: position.ep_square(EnPassantMode::Legal),
        }
    }
}

/// Game state for a standard chess game
#[derive(Debug, Clone, Default)]
pub struct ShakmatyEngine {
    position: Chess,
    history: Vec<Ply>,
}

impl ShakmatyEngine {
    /// Start from an arbitrary position given as FEN, with empty history
    pub fn from_fen(fen: &str) -> RulesResult<Self> {
        let invalid = |message: String| RulesError::InvalidFen {
            fen: fen.to_string(),
            message,
        };

        let setup: Fen = fen
            .trim()
            .parse()
            .map_err(|e: sm::fen::ParseFenError| invalid(e.to_string()))?;
        let position: Chess = setup
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(e.to_string()))?;

        debug!("[ENGINE] Loaded position from FEN '{}'", fen.trim());
        Ok(ShakmatyEngine {
            position,
            history: Vec::new(),
        })
    }

    fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    fn is_fifty_move_draw(&self) -> bool {
        self.position.halfmoves() >= FIFTY_MOVE_HALFMOVES
    }

    fn is_threefold_repetition(&self) -> bool {
        let current = RepetitionKey::of(&self.position);
        let earlier = self
            .history
            .iter()
            .filter(|ply| RepetitionKey::of(&ply.before) == current)
            .count();
        earlier + 1 >= REPETITION_COUNT
    }
}

impl RulesEngine for ShakmatyEngine {
    fn new_game() -> Self {
        ShakmatyEngine::default()
    }

    fn legal_moves(&self, square: Square) -> Vec<MoveDescriptor> {
        let origin = to_engine_square(square);
        self.position
            .legal_moves()
            .iter()
            .filter(|m| m.from() == Some(origin))
            .filter_map(|m| describe(&self.position, m))
            .collect()
    }

    fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> RulesResult<MoveDescriptor> {
        let origin = to_engine_square(from);
        let target = to_engine_square(to);
        let promote_to = role_from_kind(promotion.unwrap_or(PieceKind::Queen));

        let legal = self.position.legal_moves();
        let chosen = legal.iter().find(|m| {
            m.from() == Some(origin)
                && destination(m) == target
                && m.promotion().map_or(true, |role| role == promote_to)
        });

        let Some(chosen) = chosen else {
            debug!("[ENGINE] Rejected illegal move {} -> {}", from, to);
            return Err(RulesError::IllegalMove { from, to });
        };
        let Some(played) = describe(&self.position, chosen) else {
            return Err(RulesError::IllegalMove { from, to });
        };

        let before = self.position.clone();
        self.position.play_unchecked(chosen);
        self.history.push(Ply {
            before,
            played: played.clone(),
        });

        info!("[ENGINE] Played {} ({} -> {})", played.san, from, to);
        Ok(played)
    }

    fn undo_last(&mut self) -> Option<MoveDescriptor> {
        let ply = self.history.pop()?;
        self.position = ply.before;
        info!("[ENGINE] Undid {}", ply.played.san);
        Some(ply.played)
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position
            .board()
            .piece_at(to_engine_square(square))
            .map(piece_from_engine)
    }

    fn side_to_move(&self) -> Color {
        color_from_engine(self.position.turn())
    }

    fn is_in_check(&self) -> bool {
        self.position.is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    fn is_draw(&self) -> bool {
        self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_fifty_move_draw()
            || self.is_threefold_repetition()
    }

    fn history_len(&self) -> usize {
        self.history.len()
    }

    fn played_moves(&self) -> Vec<MoveDescriptor> {
        self.history.iter().map(|ply| ply.played.clone()).collect()
    }

    fn snapshot_board(&self) -> BoardSnapshot {
        let board = self.position.board();
        let mut rows = [[None; 8]; 8];
        for (row, cells) in rows.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                let square = BoardSnapshot::square_at(row, col);
                *cell = board.piece_at(to_engine_square(square)).map(piece_from_engine);
            }
        }
        BoardSnapshot::from_rows(rows)
    }
}

fn to_engine_square(square: Square) -> sm::Square {
    let index = u32::from(square.rank().index()) * 8 + u32::from(square.file().index());
    sm::Square::new(index)
}

fn from_engine_square(square: sm::Square) -> Square {
    let file = square.file().char() as u8 - b'a';
    let rank = square.rank().char() as u8 - b'1';
    Square::from_indices(file, rank)
}

/// Destination as the session sees it: the king's landing square for castling
fn destination(m: &Move) -> sm::Square {
    match (m.castling_side(), m.from()) {
        (Some(side), Some(king)) => {
            let file = match side {
                CastlingSide::KingSide => sm::File::G,
                CastlingSide::QueenSide => sm::File::C,
            };
            sm::Square::from_coords(file, king.rank())
        }
        _ => m.to(),
    }
}

fn describe(position: &Chess, m: &Move) -> Option<MoveDescriptor> {
    let from = from_engine_square(m.from()?);
    let to = from_engine_square(destination(m));

    let mut flags = MoveFlags::empty();
    if m.is_en_passant() {
        flags |= MoveFlags::EN_PASSANT;
    } else if m.is_capture() {
        flags |= MoveFlags::CAPTURE;
    }
    if m.role() == Role::Pawn && from.rank().index().abs_diff(to.rank().index()) == 2 {
        flags |= MoveFlags::BIG_PAWN;
    }
    if m.is_promotion() {
        flags |= MoveFlags::PROMOTION;
    }
    match m.castling_side() {
        Some(CastlingSide::KingSide) => flags |= MoveFlags::KINGSIDE_CASTLE,
        Some(CastlingSide::QueenSide) => flags |= MoveFlags::QUEENSIDE_CASTLE,
        None => {}
    }
    if flags.is_empty() {
        flags = MoveFlags::NORMAL;
    }

    Some(MoveDescriptor {
        from,
        to,
        piece: kind_from_role(m.role()),
        captured: m.capture().map(kind_from_role),
        promotion: m.promotion().map(kind_from_role),
        flags,
        san: SanPlus::from_move(position.clone(), m).to_string(),
    })
}

fn color_from_engine(color: sm::Color) -> Color {
    match color {
        sm::Color::White => Color::White,
        sm::Color::Black => Color::Black,
    }
}

fn kind_from_role(role: Role) -> PieceKind {
    match role {
        Role::King => PieceKind::King,
        Role::Queen => PieceKind::Queen,
        Role::Rook => PieceKind::Rook,
        Role::Bishop => PieceKind::Bishop,
        Role::Knight => PieceKind::Knight,
        Role::Pawn => PieceKind::Pawn,
    }
}

fn role_from_kind(kind: PieceKind) -> Role {
    match kind {
        PieceKind::King => Role::King,
        PieceKind::Queen => Role::Queen,
        PieceKind::Rook => Role::Rook,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Knight => Role::Knight,
        PieceKind::Pawn => Role::Pawn,
    }
}

fn piece_from_engine(piece: sm::Piece) -> Piece {
    Piece::new(color_from_engine(piece.color), kind_from_role(piece.role))
}
