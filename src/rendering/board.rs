//! Board rendering
//!
//! [`square_views`] derives what each square should show: the piece, the
//! square color, and whether it is selected, a legal destination, or a
//! capture destination. [`BoardRenderer`] turns those views into a text grid:
//!
//! ```text
//! 8  r  n  b  q  k  b  n  r
//! ...
//! 3  :  .  :  .  *  .  :  .
//! 2  P  P  P  P [P] P  P  P
//! 1  R  N  B  Q  K  B  N  R
//!    a  b  c  d  e  f  g  h
//! ```
//!
//! `[ ]` marks the selected square, `( )` a capture destination and `*` an
//! empty destination.

use std::collections::HashSet;

use chess_rules::{BoardSnapshot, Color, File, MoveDescriptor, Piece, Rank, RulesEngine, Square};

use crate::core::{GlyphStyle, SessionSettings};
use crate::game::GameSession;
use crate::rendering::pieces::{glyph, DARK_SQUARE, LIGHT_SQUARE, TARGET_MARK};

/// Everything needed to draw one square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareView {
    pub square: Square,
    pub piece: Option<Piece>,
    pub is_dark: bool,
    pub is_selected: bool,
    /// A candidate move lands here
    pub is_target: bool,
    /// A capturing candidate (including en passant) lands here
    pub is_capture_target: bool,
}

/// Per-square view data, one row per rank as seen from `orientation`
///
/// From White's side rows run rank 8 to rank 1 and files a to h; from
/// Black's side both are reversed.
pub fn square_views(
    board: &BoardSnapshot,
    selected: Option<Square>,
    candidates: &[MoveDescriptor],
    orientation: Color,
) -> Vec<Vec<SquareView>> {
    let targets: HashSet<Square> = candidates.iter().map(|m| m.to).collect();
    let captures: HashSet<Square> = candidates
        .iter()
        .filter(|m| m.is_capture())
        .map(|m| m.to)
        .collect();

    let (ranks, files): (Vec<Rank>, Vec<File>) = match orientation {
        Color::White => (Rank::ALL.iter().rev().copied().collect(), File::ALL.to_vec()),
        Color::Black => (Rank::ALL.to_vec(), File::ALL.iter().rev().copied().collect()),
    };

    ranks
        .iter()
        .map(|&rank| {
            files
                .iter()
                .map(|&file| {
                    let square = Square::from_coords(file, rank);
                    SquareView {
                        square,
                        piece: board.piece_at(square),
                        is_dark: square.is_dark(),
                        is_selected: selected == Some(square),
                        is_target: targets.contains(&square),
                        is_capture_target: captures.contains(&square),
                    }
                })
                .collect()
        })
        .collect()
}

/// Draws boards as text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRenderer {
    glyphs: GlyphStyle,
    show_coordinates: bool,
    flip_for_black: bool,
}

impl Default for BoardRenderer {
    fn default() -> Self {
        Self::from_settings(&SessionSettings::default())
    }
}

impl BoardRenderer {
    pub fn new(glyphs: GlyphStyle, show_coordinates: bool, flip_for_black: bool) -> Self {
        BoardRenderer {
            glyphs,
            show_coordinates,
            flip_for_black,
        }
    }

    pub fn from_settings(settings: &SessionSettings) -> Self {
        Self::new(
            settings.glyphs,
            settings.show_coordinates,
            settings.flip_for_black,
        )
    }

    /// Side the board is drawn from
    pub fn orientation(&self, side_to_move: Color) -> Color {
        if self.flip_for_black {
            side_to_move
        } else {
            Color::White
        }
    }

    /// Draw the session's current board and selection
    pub fn render_session<E: RulesEngine>(&self, session: &GameSession<E>) -> String {
        self.render(
            session.board(),
            session.selected_square(),
            session.candidates(),
            session.side_to_move(),
        )
    }

    pub fn render(
        &self,
        board: &BoardSnapshot,
        selected: Option<Square>,
        candidates: &[MoveDescriptor],
        side_to_move: Color,
    ) -> String {
        let rows = square_views(board, selected, candidates, self.orientation(side_to_move));
        let mut out = String::new();

        for row in &rows {
            let mut line = String::new();
            if self.show_coordinates {
                if let Some(first) = row.first() {
                    line.push_str(&format!("{} ", first.square.rank().to_number()));
                }
            }
            for view in row {
                line.push_str(&self.cell(view));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        if self.show_coordinates {
            if let Some(row) = rows.first() {
                let mut footer = String::from("  ");
                for view in row {
                    footer.push_str(&format!(" {} ", view.square.file().to_char()));
                }
                out.push_str(footer.trim_end());
                out.push('\n');
            }
        }

        out
    }

    fn cell(&self, view: &SquareView) -> String {
        let mark = match view.piece {
            Some(piece) => glyph(piece, self.glyphs),
            None if view.is_target => TARGET_MARK,
            None if view.is_dark => DARK_SQUARE,
            None => LIGHT_SQUARE,
        };
        let (open, close) = if view.is_selected {
            ('[', ']')
        } else if view.is_capture_target {
            ('(', ')')
        } else {
            (' ', ' ')
        };
        format!("{open}{mark}{close}")
    }
}
