//! Pseudo-legal target dispatch.
//!
//! Routes a square to the per-piece geometry generators. Results obey piece
//! movement rules only; self-check filtering happens in the legality filter.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_targets;
use crate::moves::queen_moves::queen_targets;
use crate::moves::rook_moves::rook_targets;

/// Pseudo-legal destination squares for the piece on `from`; empty when the
/// square is empty. Castling is never produced here.
pub fn pseudo_legal_targets(
    board: &Board,
    from: Square,
    en_passant_target: Option<Square>,
) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn_targets(board, from, piece, en_passant_target),
        PieceKind::Knight => knight_targets(board, from, piece.color),
        PieceKind::Bishop => bishop_targets(board, from, piece.color),
        PieceKind::Rook => rook_targets(board, from, piece.color),
        PieceKind::Queen => queen_targets(board, from, piece.color),
        PieceKind::King => king_targets(board, from, piece.color),
    }
}
