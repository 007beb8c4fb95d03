//! Knight pseudo-legal target generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn knight_targets(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut targets = Vec::new();
    for (file_delta, rank_delta) in KNIGHT_OFFSETS {
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
