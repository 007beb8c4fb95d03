//! Legality filtering.
//!
//! Every pseudo-legal candidate is applied to a copy of the board (including
//! the en-passant pawn removal) and dropped if the mover's own king ends up
//! attacked. A move is legal iff it survives this simulation. Castling is
//! not a geometric candidate; it is computed separately and appended.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{king_home, kingside_rook_home, queenside_rook_home};
use crate::game_state::chess_types::{
    kingside_flag, queenside_flag, Color, PieceKind, Square,
};
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::move_generator::pseudo_legal_targets;

/// Legal destination squares for the piece on `from`, owned by the side to
/// move. Empty when `from` is empty or holds an opponent piece.
pub fn legal_targets(game_state: &GameState, from: Square) -> Vec<Square> {
    let Some(piece) = game_state.board.piece_at(from) else {
        return Vec::new();
    };
    if piece.color != game_state.side_to_move {
        return Vec::new();
    }

    let mut legal = Vec::new();
    for to in pseudo_legal_targets(&game_state.board, from, game_state.en_passant_target) {
        let speculative =
            board_after_speculative_move(&game_state.board, from, to, game_state.en_passant_target);
        if !is_king_in_check(&speculative, piece.color) {
            legal.push(to);
        }
    }

    if piece.kind == PieceKind::King && !piece.has_moved {
        append_castling_targets(game_state, from, piece.color, &mut legal);
    }

    legal
}

/// Board copy with `from`→`to` applied, removing the en-passant victim when
/// a pawn lands on the en-passant target. Promotion and the castling rook
/// shift are irrelevant to attack detection and are not simulated.
fn board_after_speculative_move(
    board: &Board,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> Board {
    let mut next = *board;
    if let Some(moved) = next.remove(from) {
        if moved.kind == PieceKind::Pawn && en_passant_target == Some(to) {
            if let Some(captured_square) = Square::new(to.file(), from.rank()) {
                next.remove(captured_square);
            }
        }
        next.place(to, moved);
    }
    next
}

fn append_castling_targets(
    game_state: &GameState,
    king_square: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    if king_square != king_home(color) {
        return;
    }

    let board = &game_state.board;
    let enemy = color.opposite();
    let rank = king_square.rank();

    if (game_state.castling_rights & kingside_flag(color)) != 0 {
        let transit = Square::at(5, rank);
        let destination = Square::at(6, rank);
        if board.piece_at(transit).is_none()
            && board.piece_at(destination).is_none()
            && unmoved_rook_on(board, kingside_rook_home(color), color)
            && !is_square_attacked(board, king_square, enemy)
            && !is_square_attacked(board, transit, enemy)
            && !is_square_attacked(board, destination, enemy)
        {
            out.push(destination);
        }
    }

    if (game_state.castling_rights & queenside_flag(color)) != 0 {
        let rook_path = Square::at(1, rank);
        let destination = Square::at(2, rank);
        let transit = Square::at(3, rank);
        // The b-file square must be empty, but only the king's own path
        // (start, transit, destination) has to be free of attacks.
        if board.piece_at(rook_path).is_none()
            && board.piece_at(destination).is_none()
            && board.piece_at(transit).is_none()
            && unmoved_rook_on(board, queenside_rook_home(color), color)
            && !is_square_attacked(board, king_square, enemy)
            && !is_square_attacked(board, transit, enemy)
            && !is_square_attacked(board, destination, enemy)
        {
            out.push(destination);
        }
    }
}

fn unmoved_rook_on(board: &Board, square: Square, color: Color) -> bool {
    match board.piece_at(square) {
        Some(piece) => piece.kind == PieceKind::Rook && piece.color == color && !piece.has_moved,
        None => false,
    }
}
