//! Piece and square glyphs for the text board

use chess_rules::{Color, Piece, PieceKind};

use crate::core::GlyphStyle;

/// Marker for an empty light square
pub const LIGHT_SQUARE: char = '.';
/// Marker for an empty dark square
pub const DARK_SQUARE: char = ':';
/// Marker for an empty square the selected piece can move to
pub const TARGET_MARK: char = '*';

/// Character used to draw `piece`
pub fn glyph(piece: Piece, style: GlyphStyle) -> char {
    match style {
        GlyphStyle::Ascii => piece.fen_char(),
        GlyphStyle::Unicode => unicode_glyph(piece),
    }
}

fn unicode_glyph(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    }
}
