//! Rook pseudo-legal target generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::sliding::sliding_targets;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[inline]
pub fn rook_targets(board: &Board, from: Square, color: Color) -> Vec<Square> {
    sliding_targets(board, from, color, &ROOK_DIRECTIONS)
}
