//! User preferences for the terminal board
//!
//! Every field has a default so partial or older settings files still load.

use serde::{Deserialize, Serialize};

/// How pieces are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    /// Chess symbols (♔ ♛ ...)
    #[default]
    Unicode,
    /// FEN letters (K q ...) for terminals without chess symbols
    Ascii,
}

/// Display settings persisted between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Piece glyph set
    pub glyphs: GlyphStyle,

    /// Whether to print file letters and rank numbers around the board
    pub show_coordinates: bool,

    /// Draw the board from Black's side while Black is to move
    pub flip_for_black: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            glyphs: GlyphStyle::Unicode,
            show_coordinates: true,
            flip_for_black: false,
        }
    }
}
