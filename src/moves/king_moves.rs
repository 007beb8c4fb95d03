//! King pseudo-legal target generation.
//!
//! Only the eight adjacent squares. Castling is a legality-filter construct,
//! not geometry, and is appended there.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn king_targets(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut targets = Vec::new();
    for (file_delta, rank_delta) in KING_OFFSETS {
        let Some(to) = from.offset(file_delta, rank_delta) else {
            continue;
        };
        match board.piece_at(to) {
            Some(occupant) if occupant.color == color => {}
            _ => targets.push(to),
        }
    }
    targets
}
