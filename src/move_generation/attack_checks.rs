//! Attack and check detection.
//!
//! Scans the whole board for pieces of the attacking color. Pawns attack
//! only along their capture diagonals (a forward push never attacks); every
//! other piece kind attacks exactly the squares its pseudo-legal generation
//! reaches.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::move_generation::move_generator::pseudo_legal_targets;

/// True iff any piece of `attacker_color` attacks `square` on `board`.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    for (from, piece) in board.occupied_squares(attacker_color) {
        if piece.kind == PieceKind::Pawn {
            let direction = pawn_direction(piece.color);
            for file_delta in [-1i8, 1] {
                if from.offset(file_delta, direction) == Some(square) {
                    return true;
                }
            }
        } else if pseudo_legal_targets(board, from, None).contains(&square) {
            return true;
        }
    }
    false
}

/// True iff the `color` king stands on a square attacked by the opponent.
/// A board with no `color` king answers `false`; that state is unreachable
/// when only legal moves are applied.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king_square) => is_square_attacked(board, king_square, color.opposite()),
        None => false,
    }
}
