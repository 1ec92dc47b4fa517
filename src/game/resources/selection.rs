//! Selection resource for tracking the selected square

use chess_rules::{MoveDescriptor, Square};

/// Currently selected square and the legal moves starting there
///
/// Candidates always belong to the selected square and to the position
/// they were generated from. Any change to the game state must clear them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<Square>,
    candidates: Vec<MoveDescriptor>,
}

impl SelectionState {
    /// Select `square`, keeping only candidates that start on it
    pub fn select(&mut self, square: Square, mut candidates: Vec<MoveDescriptor>) {
        candidates.retain(|m| m.from == square);
        self.selected = Some(square);
        self.candidates = candidates;
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.candidates.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn candidates(&self) -> &[MoveDescriptor] {
        &self.candidates
    }

    /// Candidates landing on `target` (several for a promotion)
    pub fn candidates_to(&self, target: Square) -> impl Iterator<Item = &MoveDescriptor> {
        self.candidates.iter().filter(move |m| m.to == target)
    }

    /// Whether `target` is a legal destination for the selected piece
    pub fn is_target(&self, target: Square) -> bool {
        self.candidates_to(target).next().is_some()
    }
}
