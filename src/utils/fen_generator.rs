//! Position serialization to FEN.
//!
//! Field order and letter case match the standard exactly so external
//! consumers (move selectors, analysis tools) can ingest the output as-is.

use crate::game_state::chess_types::{
    CastlingRights, Color, Piece, PieceKind, Square, CASTLE_BLACK_KINGSIDE,
    CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights);
    let en_passant = generate_en_passant_field(game_state.en_passant_target);

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match game_state.board.piece_at(Square::at(file, rank)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if (rights & CASTLE_WHITE_KINGSIDE) != 0 {
        out.push('K');
    }
    if (rights & CASTLE_WHITE_QUEENSIDE) != 0 {
        out.push('Q');
    }
    if (rights & CASTLE_BLACK_KINGSIDE) != 0 {
        out.push('k');
    }
    if (rights & CASTLE_BLACK_QUEENSIDE) != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    match square {
        Some(square) => square_to_algebraic(square),
        None => "-".to_owned(),
    }
}
