//! Queen pseudo-legal target generation: the bishop and rook rays combined.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::rook_moves::rook_targets;

pub fn queen_targets(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut targets = bishop_targets(board, from, color);
    targets.extend(rook_targets(board, from, color));
    targets
}
