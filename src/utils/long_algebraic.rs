//! UCI move text conversions.
//!
//! A move is spelled `<from><to>[promotion-letter]` (4–5 characters, with a
//! lowercase promotion letter among q/r/b/n). Decoding validates the text
//! against a game state so a promotion cannot be attached to anything but a
//! pawn reaching its last rank.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::chess_types::{Move, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Encode a move as UCI text (for example: "e2e4", "e7e8q").
pub fn move_to_uci(mv: &Move) -> String {
    let mut out = String::new();
    out.push_str(&square_to_algebraic(mv.from));
    out.push_str(&square_to_algebraic(mv.to));
    if let Some(kind) = mv.promotion {
        if let Some(letter) = promotion_letter(kind) {
            out.push(letter);
        }
    }
    out
}

/// Decode UCI move text against `game_state`.
pub fn uci_to_move(text: &str, game_state: &GameState) -> ChessResult<Move> {
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let from = parse_square_part(&text[0..2])?;
    let to = parse_square_part(&text[2..4])?;

    let piece = game_state
        .piece_at(from)
        .ok_or(ChessError::NoPieceOnSquare(from))?;
    if piece.color != game_state.current_player() {
        return Err(ChessError::WrongSideToMove(from));
    }

    let reaches_last_rank =
        piece.kind == PieceKind::Pawn && to.rank() == promotion_rank(piece.color);

    let promotion = if text.len() == 5 {
        if !reaches_last_rank {
            return Err(ChessError::InvalidMoveText(text.to_owned()));
        }
        let letter = text.as_bytes()[4] as char;
        Some(
            promotion_from_letter(letter)
                .ok_or_else(|| ChessError::InvalidMoveText(text.to_owned()))?,
        )
    } else {
        if reaches_last_rank {
            return Err(ChessError::MissingPromotion(to));
        }
        None
    };

    Ok(Move {
        from,
        to,
        promotion,
    })
}

#[inline]
fn parse_square_part(part: &str) -> ChessResult<Square> {
    algebraic_to_square(part).ok_or_else(|| ChessError::InvalidSquare(part.to_owned()))
}

#[inline]
pub fn promotion_letter(kind: PieceKind) -> Option<char> {
    match kind {
        PieceKind::Queen => Some('q'),
        PieceKind::Rook => Some('r'),
        PieceKind::Bishop => Some('b'),
        PieceKind::Knight => Some('n'),
        PieceKind::Pawn | PieceKind::King => None,
    }
}

#[inline]
fn promotion_from_letter(letter: char) -> Option<PieceKind> {
    match letter {
        'q' => Some(PieceKind::Queen),
        'r' => Some(PieceKind::Rook),
        'b' => Some(PieceKind::Bishop),
        'n' => Some(PieceKind::Knight),
        _ => None,
    }
}
