//! Move history tracking resource
//!
//! Keeps the moves played through the session in order so front ends can
//! show the game so far. The rules engine keeps its own history for undo;
//! the session keeps both in step by recording every committed move and
//! dropping the last one whenever the engine takes a move back.

use chess_rules::{Color, MoveDescriptor};

/// Moves played in the current game, oldest first
///
/// Index 0 was played by `first_to_move`. A standard game starts with
/// White; a game set up from a position may start with Black.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<MoveDescriptor>,
    first_to_move: Color,
}

impl MoveHistory {
    /// History whose first move is played by `first_to_move`
    pub fn starting_with(first_to_move: Color, moves: Vec<MoveDescriptor>) -> Self {
        MoveHistory {
            moves,
            first_to_move,
        }
    }

    /// Side that played (or will play) the first recorded move
    pub fn first_to_move(&self) -> Color {
        self.first_to_move
    }

    /// Add a committed move to the end of the history
    pub fn add_move(&mut self, record: MoveDescriptor) {
        self.moves.push(record);
    }

    /// Remove and return the most recent move
    pub fn pop(&mut self) -> Option<MoveDescriptor> {
        self.moves.pop()
    }

    pub fn last_move(&self) -> Option<&MoveDescriptor> {
        self.moves.last()
    }

    /// Number of half-moves (ply) played
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Clear all move history (for starting a new game)
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveDescriptor> {
        self.moves.iter()
    }

    /// Moves grouped as numbered lines: `1. e4 e5`, `2. Nf3`
    ///
    /// When Black moved first the opening line is `1... e5`.
    pub fn numbered_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut rest = self.moves.as_slice();
        let mut number = 1;

        if self.first_to_move == Color::Black {
            if let Some((first, tail)) = rest.split_first() {
                lines.push(format!("{number}... {}", first.san));
                rest = tail;
                number += 1;
            }
        }

        for pair in rest.chunks(2) {
            let sans: Vec<&str> = pair.iter().map(|m| m.san.as_str()).collect();
            lines.push(format!("{number}. {}", sans.join(" ")));
            number += 1;
        }
        lines
    }
}
