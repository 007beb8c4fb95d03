//! Move application.
//!
//! `apply_move` is a pure transition: it validates the move request, builds
//! the successor state on a copy, and leaves the input untouched. Callers
//! are expected to hand in moves obtained from the legality filter; only
//! origin ownership and the promotion field are re-checked here, so
//! generation/validation and execution stay separated.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{kingside_rook_home, promotion_rank, queenside_rook_home};
use crate::game_state::chess_types::{
    kingside_flag, queenside_flag, Color, Move, Piece, PieceKind, Square,
};
use crate::game_state::game_state::GameState;

/// Apply `mv` for the side to move, returning the successor state.
///
/// On any error the returned `Err` carries the reason and `game_state` is
/// untouched; no partial update can be observed.
pub fn apply_move(game_state: &GameState, mv: &Move) -> ChessResult<GameState> {
    let moving = game_state
        .board
        .piece_at(mv.from)
        .ok_or(ChessError::NoPieceOnSquare(mv.from))?;
    if moving.color != game_state.side_to_move {
        return Err(ChessError::WrongSideToMove(mv.from));
    }

    let is_pawn_move = moving.kind == PieceKind::Pawn;
    let is_promoting = is_pawn_move && mv.to.rank() == promotion_rank(moving.color);
    if is_promoting {
        match mv.promotion {
            None => return Err(ChessError::MissingPromotion(mv.to)),
            Some(PieceKind::Pawn) => return Err(ChessError::InvalidPromotion(PieceKind::Pawn)),
            Some(PieceKind::King) => return Err(ChessError::InvalidPromotion(PieceKind::King)),
            Some(_) => {}
        }
    }

    let mut next = game_state.clone();
    let captured = next.board.piece_at(mv.to);

    if is_pawn_move || captured.is_some() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }

    next.board.remove(mv.from);
    let mut moved = moving;
    moved.has_moved = true;
    next.board.place(mv.to, moved);

    // En-passant capture: the victim stands on the mover's original rank,
    // under the destination file, not on the destination itself.
    if is_pawn_move && game_state.en_passant_target == Some(mv.to) && captured.is_none() {
        if let Some(victim_square) = Square::new(mv.to.file(), mv.from.rank()) {
            next.board.remove(victim_square);
        }
    }

    if is_promoting {
        if let Some(promotion) = mv.promotion {
            next.board.place(
                mv.to,
                Piece {
                    kind: promotion,
                    color: moving.color,
                    has_moved: true,
                },
            );
        }
    }

    next.en_passant_target = if is_pawn_move && mv.to.rank().abs_diff(mv.from.rank()) == 2 {
        Square::new(mv.from.file(), (mv.from.rank() + mv.to.rank()) / 2)
    } else {
        None
    };

    if moving.kind == PieceKind::King && mv.to.file().abs_diff(mv.from.file()) == 2 {
        relocate_castling_rook(&mut next, mv);
    }

    update_castling_rights(&mut next, moving, captured, mv);

    next.side_to_move = moving.color.opposite();
    if next.side_to_move == Color::White {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.move_history.push(*mv);

    Ok(next)
}

/// A king that just moved two files castled; bring the paired rook over.
fn relocate_castling_rook(next: &mut GameState, mv: &Move) {
    let rank = mv.from.rank();
    let (rook_from, rook_to) = if mv.to.file() > mv.from.file() {
        (Square::at(7, rank), Square::at(5, rank))
    } else {
        (Square::at(0, rank), Square::at(3, rank))
    };

    if let Some(occupant) = next.board.piece_at(rook_from) {
        if occupant.kind == PieceKind::Rook {
            let mut rook = occupant;
            rook.has_moved = true;
            next.board.remove(rook_from);
            next.board.place(rook_to, rook);
        }
    }
}

fn update_castling_rights(next: &mut GameState, moving: Piece, captured: Option<Piece>, mv: &Move) {
    if moving.kind == PieceKind::King {
        next.castling_rights &= !(kingside_flag(moving.color) | queenside_flag(moving.color));
    }

    if moving.kind == PieceKind::Rook {
        if mv.from == kingside_rook_home(moving.color) {
            next.castling_rights &= !kingside_flag(moving.color);
        }
        if mv.from == queenside_rook_home(moving.color) {
            next.castling_rights &= !queenside_flag(moving.color);
        }
    }

    // Capturing a rook on its home square removes that side's right too.
    if let Some(captured_piece) = captured {
        if captured_piece.kind == PieceKind::Rook {
            if mv.to == kingside_rook_home(captured_piece.color) {
                next.castling_rights &= !kingside_flag(captured_piece.color);
            }
            if mv.to == queenside_rook_home(captured_piece.color) {
                next.castling_rights &= !queenside_flag(captured_piece.color);
            }
        }
    }
}
