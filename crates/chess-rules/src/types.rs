//! Type definitions shared between the rules engine and its callers
//!
//! Provides newtype coordinates, piece descriptors, move descriptors and the
//! board snapshot handed to renderers.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::RulesError;

/// Board coordinate representing a file (column) on the chessboard
///
/// Values range from 0 (file 'a') to 7 (file 'h').
/// This newtype prevents mixing up files and ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct File(u8);

impl File {
    /// All files from 'a' to 'h'
    pub const ALL: [File; 8] = [
        File(0),
        File(1),
        File(2),
        File(3),
        File(4),
        File(5),
        File(6),
        File(7),
    ];

    /// Create a file from its index (0-7)
    pub const fn new(index: u8) -> Option<Self> {
        if index < 8 {
            Some(File(index))
        } else {
            None
        }
    }

    /// Create a file from a character ('a'..='h')
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(File(c as u8 - b'a')),
            _ => None,
        }
    }

    /// Convert file to character ('a'..='h')
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Get the file index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

/// Board coordinate representing a rank (row) on the chessboard
///
/// Values range from 0 (rank 1) to 7 (rank 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    /// All ranks from 1 to 8
    pub const ALL: [Rank; 8] = [
        Rank(0),
        Rank(1),
        Rank(2),
        Rank(3),
        Rank(4),
        Rank(5),
        Rank(6),
        Rank(7),
    ];

    /// Create a rank from its index (0-7)
    pub const fn new(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Rank(index))
        } else {
            None
        }
    }

    /// Create a rank from a number (1-8)
    pub fn from_number(n: u8) -> Option<Self> {
        if (1..=8).contains(&n) {
            Some(Rank(n - 1))
        } else {
            None
        }
    }

    /// Convert rank to number (1-8)
    pub fn to_number(self) -> u8 {
        self.0 + 1
    }

    /// Get the rank index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

/// Board square in algebraic coordinates
///
/// Parses from and displays as `"e4"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: File,
    rank: Rank,
}

impl Square {
    /// Create a square from its file and rank
    pub const fn from_coords(file: File, rank: Rank) -> Self {
        Square { file, rank }
    }

    /// Create a square from file and rank indices (0-7 each)
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square {
                file: File(file),
                rank: Rank(rank),
            })
        } else {
            None
        }
    }

    /// Indices are masked into range; callers pass values already in 0-7.
    pub(crate) const fn from_indices(file: u8, rank: u8) -> Self {
        Square {
            file: File(file & 7),
            rank: Rank(rank & 7),
        }
    }

    /// Create a square from algebraic notation (e.g., "e4")
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let rank_num = rank_char.to_digit(10)? as u8;

        Some(Square {
            file: File::from_char(file_char.to_ascii_lowercase())?,
            rank: Rank::from_number(rank_num)?,
        })
    }

    /// Convert square to algebraic notation (e.g., "e4")
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file.to_char(), self.rank.to_number())
    }

    pub fn file(self) -> File {
        self.file
    }

    pub fn rank(self) -> Rank {
        self.rank
    }

    /// Whether the square is dark on a standard board (a1 is dark)
    pub fn is_dark(self) -> bool {
        (self.file.0 + self.rank.0) % 2 == 0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.to_char(), self.rank.to_number())
    }
}

impl FromStr for Square {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s.trim()).ok_or_else(|| RulesError::InvalidSquare(s.to_string()))
    }
}

/// Side of the board (light pieces are White, dark pieces are Black)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Lowercase letter used by FEN and UCI ('k', 'q', 'r', 'b', 'n', 'p')
    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }
}

/// A piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    /// FEN letter: uppercase for White, lowercase for Black
    pub fn fen_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }
}

bitflags! {
    /// Move classification flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MoveFlags: u8 {
        /// Quiet move with no other flag set
        const NORMAL = 1;
        const CAPTURE = 1 << 1;
        /// Pawn advancing two squares
        const BIG_PAWN = 1 << 2;
        const EN_PASSANT = 1 << 3;
        const PROMOTION = 1 << 4;
        const KINGSIDE_CASTLE = 1 << 5;
        const QUEENSIDE_CASTLE = 1 << 6;
    }
}

/// A legal move as produced by the rules engine
///
/// Descriptors are snapshots of one position. Once the game state changes
/// they are stale and must be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDescriptor {
    pub from: Square,
    /// Destination square; the king's destination for castling moves
    pub to: Square,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub flags: MoveFlags,
    /// Standard algebraic notation including check markers
    pub san: String,
}

impl MoveDescriptor {
    /// Whether the move removes an enemy piece (including en passant)
    pub fn is_capture(&self) -> bool {
        self.flags
            .intersects(MoveFlags::CAPTURE | MoveFlags::EN_PASSANT)
    }

    pub fn is_promotion(&self) -> bool {
        self.flags.contains(MoveFlags::PROMOTION)
    }

    pub fn is_castle(&self) -> bool {
        self.flags
            .intersects(MoveFlags::KINGSIDE_CASTLE | MoveFlags::QUEENSIDE_CASTLE)
    }
}

/// Read-only 8x8 view of the board
///
/// Rows run from rank 8 down to rank 1, columns from file 'a' to file 'h'.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    rows: [[Option<Piece>; 8]; 8],
}

impl BoardSnapshot {
    pub fn from_rows(rows: [[Option<Piece>; 8]; 8]) -> Self {
        BoardSnapshot { rows }
    }

    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.rows
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let row = 7 - square.rank().index() as usize;
        self.rows[row][square.file().index() as usize]
    }

    /// Square shown at a grid position (row 0 is rank 8)
    pub fn square_at(row: usize, col: usize) -> Square {
        Square::from_indices(col as u8, 7 - row as u8)
    }

    /// Iterate squares in row-major order with their contents
    pub fn iter(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, piece)| (Self::square_at(row, col), *piece))
        })
    }

    /// Number of occupied squares
    pub fn piece_count(&self) -> usize {
        self.rows.iter().flatten().filter(|p| p.is_some()).count()
    }

    /// Piece placement field of a FEN string
    pub fn placement(&self) -> String {
        let mut out = String::new();
        for (row, cells) in self.rows.iter().enumerate() {
            let mut empty = 0;
            for piece in cells {
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_to_char() {
        assert_eq!(File(0).to_char(), 'a');
        assert_eq!(File(4).to_char(), 'e');
        assert_eq!(File(7).to_char(), 'h');
        assert_eq!(File::new(8), None);
    }

    #[test]
    fn test_rank_from_number() {
        assert_eq!(Rank::from_number(1), Some(Rank(0)));
        assert_eq!(Rank::from_number(4), Some(Rank(3)));
        assert_eq!(Rank::from_number(8), Some(Rank(7)));
        assert_eq!(Rank::from_number(0), None);
        assert_eq!(Rank::from_number(9), None);
    }

    #[test]
    fn test_square_algebraic() {
        let square = Square::from_algebraic("e4").unwrap();
        assert_eq!(square.file().index(), 4);
        assert_eq!(square.rank().index(), 3);
        assert_eq!(square.to_algebraic(), "e4");
        assert_eq!(square.to_string(), "e4");

        let square2 = Square::from_algebraic("a1").unwrap();
        assert_eq!(square2.file().index(), 0);
        assert_eq!(square2.rank().index(), 0);
    }

    #[test]
    fn test_square_rejects_garbage() {
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("e44").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert_eq!(
            "z0".parse::<Square>(),
            Err(RulesError::InvalidSquare("z0".to_string()))
        );
        assert_eq!(" E2 ".parse::<Square>(), Ok(Square::new(4, 1).unwrap()));
    }

    #[test]
    fn test_square_colors() {
        assert!(Square::from_algebraic("a1").unwrap().is_dark());
        assert!(!Square::from_algebraic("h1").unwrap().is_dark());
        assert!(!Square::from_algebraic("a8").unwrap().is_dark());
    }

    #[test]
    fn test_snapshot_grid_orientation() {
        //! Row 0 is rank 8 and column 0 is file a
        assert_eq!(BoardSnapshot::square_at(0, 0).to_string(), "a8");
        assert_eq!(BoardSnapshot::square_at(7, 7).to_string(), "h1");
        assert_eq!(BoardSnapshot::square_at(6, 4).to_string(), "e2");

        let mut rows = [[None; 8]; 8];
        rows[6][4] = Some(Piece::new(Color::White, PieceKind::Pawn));
        let snapshot = BoardSnapshot::from_rows(rows);

        let e2 = Square::from_algebraic("e2").unwrap();
        assert_eq!(
            snapshot.piece_at(e2),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(snapshot.piece_count(), 1);
        assert_eq!(snapshot.placement(), "8/8/8/8/8/8/4P3/8");
        assert_eq!(
            snapshot.iter().filter(|(_, p)| p.is_some()).map(|(s, _)| s).collect::<Vec<_>>(),
            vec![e2]
        );
    }

    #[test]
    fn test_capture_flags() {
        let e5 = Square::from_algebraic("e5").unwrap();
        let d6 = Square::from_algebraic("d6").unwrap();
        let mv = MoveDescriptor {
            from: e5,
            to: d6,
            piece: PieceKind::Pawn,
            captured: Some(PieceKind::Pawn),
            promotion: None,
            flags: MoveFlags::EN_PASSANT,
            san: "exd6".to_string(),
        };
        assert!(mv.is_capture());
        assert!(!mv.is_promotion());
        assert!(!mv.is_castle());
    }
}
