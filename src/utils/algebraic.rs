//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! square value reused by the FEN, PGN, and UCI components.

use crate::game_state::chess_types::Square;

/// Parse a two-character algebraic coordinate (for example: "e4").
///
/// Total and non-panicking: any malformed or out-of-range input yields
/// `None`, so callers can pre-validate square text.
#[inline]
pub fn algebraic_to_square(text: &str) -> Option<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return None;
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }

    Square::new(file - b'a', rank - b'1')
}

/// Canonical two-character text for a square (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file());
    let rank_char = char::from(b'1' + square.rank());
    format!("{file_char}{rank_char}")
}
