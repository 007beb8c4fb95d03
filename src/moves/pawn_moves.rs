//! Pawn pseudo-legal target generation.
//!
//! Single advance onto an empty square, double advance while the pawn is
//! unmoved and both squares ahead are empty, and diagonal captures onto an
//! enemy piece or the en-passant target. Check safety is not considered here.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::chess_types::{Piece, Square};

pub fn pawn_targets(
    board: &Board,
    from: Square,
    piece: Piece,
    en_passant_target: Option<Square>,
) -> Vec<Square> {
    let mut targets = Vec::new();
    let direction = pawn_direction(piece.color);

    if let Some(one_step) = from.offset(0, direction) {
        if board.piece_at(one_step).is_none() {
            targets.push(one_step);

            if !piece.has_moved {
                if let Some(two_step) = from.offset(0, 2 * direction) {
                    if board.piece_at(two_step).is_none() {
                        targets.push(two_step);
                    }
                }
            }
        }
    }

    for file_delta in [-1i8, 1] {
        let Some(to) = from.offset(file_delta, direction) else {
            continue;
        };
        match board.piece_at(to) {
            Some(occupant) if occupant.color != piece.color => targets.push(to),
            None if en_passant_target == Some(to) => targets.push(to),
            _ => {}
        }
    }

    targets
}
