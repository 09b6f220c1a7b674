//! Board geometry defaults and rendering glyphs.
//!
//! The board size is a runtime value chosen when a [`Board`](crate::board::Board)
//! is created. The largest supported size is bounded by the column labels:
//! Go notation uses the letters A-Z without `I`, which gives 25 columns.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN). Standard Go sizes are 9, 13, or 19.
pub const DEFAULT_SIZE: usize = 19;

/// Largest board size that can be labelled with column letters.
pub const MAX_SIZE: usize = COLUMN_LABELS.len();

/// Column letters in board order. `I` is skipped to avoid confusion with `J`.
pub const COLUMN_LABELS: &[u8; 25] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

// =============================================================================
// Rendering
// =============================================================================

/// Glyph for a black stone.
pub const GLYPH_BLACK: char = '●';

/// Glyph for a white stone.
pub const GLYPH_WHITE: char = '○';

/// Glyph for an empty intersection.
pub const GLYPH_EMPTY: char = '+';
