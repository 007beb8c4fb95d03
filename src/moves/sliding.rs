//! Shared ray walk for the sliding pieces.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

/// Walk each direction one square at a time, stopping inclusively on the
/// first enemy piece and exclusively on the first own piece.
pub fn sliding_targets(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
) -> Vec<Square> {
    let mut targets = Vec::new();
    for &(file_step, rank_step) in directions {
        let mut current = from;
        while let Some(next) = current.offset(file_step, rank_step) {
            match board.piece_at(next) {
                None => {
                    targets.push(next);
                    current = next;
                }
                Some(occupant) => {
                    if occupant.color != color {
                        targets.push(next);
                    }
                    break;
                }
            }
        }
    }
    targets
}
