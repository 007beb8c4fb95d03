//! Position restoration from FEN.
//!
//! Parses all six fields, validates board shape and king presence, and
//! reconstructs the per-piece `has_moved` flags the text cannot carry
//! directly: pawns off their starting rank have moved, kings and rooks are
//! derived from the castling-rights field, and every other piece defaults
//! to `false` (the flag is only ever consulted for pawns, kings, and rooks).

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    king_home, kingside_rook_home, pawn_start_rank, queenside_rook_home,
};
use crate::game_state::chess_types::{
    kingside_flag, queenside_flag, CastlingRights, Color, Piece, PieceKind, Square,
    CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut fields = fen.split_ascii_whitespace();

    let placement_field = fields
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing piece placement field".to_owned()))?;
    let side_field = fields
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing side-to-move field".to_owned()))?;
    let castling_field = fields
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing castling field".to_owned()))?;
    let en_passant_field = fields
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing en-passant field".to_owned()))?;
    let halfmove_field = fields
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing halfmove clock field".to_owned()))?;
    let fullmove_field = fields
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing fullmove number field".to_owned()))?;

    let placements = parse_placement_field(placement_field)?;
    let side_to_move = parse_side_field(side_field)?;
    let castling_rights = parse_castling_field(castling_field)?;
    let en_passant_target = parse_en_passant_field(en_passant_field)?;
    let halfmove_clock: u16 = halfmove_field
        .parse()
        .map_err(|_| ChessError::InvalidFen(format!("invalid halfmove clock: {halfmove_field}")))?;
    let fullmove_number: u16 = fullmove_field
        .parse()
        .map_err(|_| ChessError::InvalidFen(format!("invalid fullmove number: {fullmove_field}")))?;

    let mut board = Board::empty();
    for (square, color, kind) in placements {
        board.place(
            square,
            Piece {
                kind,
                color,
                has_moved: reconstruct_has_moved(kind, color, square, castling_rights),
            },
        );
    }

    for color in [Color::White, Color::Black] {
        if board.king_square(color).is_none() {
            return Err(ChessError::MissingKing(color));
        }
    }

    Ok(GameState {
        board,
        side_to_move,
        castling_rights,
        en_passant_target,
        halfmove_clock,
        fullmove_number,
        move_history: Vec::new(),
    })
}

fn parse_placement_field(field: &str) -> ChessResult<Vec<(Square, Color, PieceKind)>> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(format!(
            "expected 8 ranks, got {}",
            ranks.len()
        )));
    }

    let mut placements = Vec::new();
    for (row, rank_text) in ranks.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut file = 0u8;

        for ch in rank_text.chars() {
            match ch {
                '1'..='8' => file += ch as u8 - b'0',
                _ => {
                    let (color, kind) = piece_from_fen_char(ch).ok_or_else(|| {
                        ChessError::InvalidFen(format!("invalid piece character: {ch}"))
                    })?;
                    let square = Square::new(file, rank).ok_or_else(|| {
                        ChessError::InvalidFen(format!("rank {} overflows the board", rank + 1))
                    })?;
                    placements.push((square, color, kind));
                    file += 1;
                }
            }
        }

        if file != 8 {
            return Err(ChessError::InvalidFen(format!(
                "rank {} covers {file} files instead of 8",
                rank + 1
            )));
        }
    }

    Ok(placements)
}

fn parse_side_field(field: &str) -> ChessResult<Color> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side to move: {field}"
        ))),
    }
}

fn parse_castling_field(field: &str) -> ChessResult<CastlingRights> {
    let mut rights: CastlingRights = 0;
    if field == "-" {
        return Ok(rights);
    }

    for ch in field.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }
    Ok(rights)
}

fn parse_en_passant_field(field: &str) -> ChessResult<Option<Square>> {
    if field == "-" {
        return Ok(None);
    }

    match algebraic_to_square(field) {
        Some(square) => Ok(Some(square)),
        None => Err(ChessError::InvalidFen(format!(
            "invalid en-passant square: {field}"
        ))),
    }
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}

fn reconstruct_has_moved(
    kind: PieceKind,
    color: Color,
    square: Square,
    rights: CastlingRights,
) -> bool {
    match kind {
        PieceKind::Pawn => square.rank() != pawn_start_rank(color),
        PieceKind::King => {
            let any_right = rights & (kingside_flag(color) | queenside_flag(color));
            !(square == king_home(color) && any_right != 0)
        }
        PieceKind::Rook => {
            let kingside = square == kingside_rook_home(color) && rights & kingside_flag(color) != 0;
            let queenside =
                square == queenside_rook_home(color) && rights & queenside_flag(color) != 0;
            !(kingside || queenside)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, Square, CASTLE_ALL_RIGHTS};

    #[test]
    fn starting_fen_round_trips_through_the_serializer() {
        let game = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.castling_rights(), CASTLE_ALL_RIGHTS);
        assert_eq!(game.halfmove_clock(), 0);
        assert_eq!(game.fullmove_number(), 1);
        assert_eq!(game.get_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn pawns_off_their_starting_rank_have_moved() {
        let game = parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1")
            .expect("FEN should parse");

        let advanced = game
            .piece_at(Square::at(4, 3))
            .expect("e4 pawn should be present");
        assert!(advanced.has_moved);

        let home = game
            .piece_at(Square::at(3, 1))
            .expect("d2 pawn should be present");
        assert!(!home.has_moved);
    }

    #[test]
    fn castling_rights_pin_kings_and_rooks_as_unmoved() {
        let game = parse_fen("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1").expect("FEN should parse");

        let king = game.piece_at(Square::at(4, 0)).expect("white king on e1");
        assert!(!king.has_moved);
        let rook = game.piece_at(Square::at(0, 0)).expect("white rook on a1");
        assert!(!rook.has_moved);

        // Black retains no rights, so its king counts as moved.
        let black_king = game.piece_at(Square::at(4, 7)).expect("black king on e8");
        assert!(black_king.has_moved);
    }

    #[test]
    fn malformed_fens_are_rejected() {
        for fen in [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNZ w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1",
            "9/8/8/8/8/8/8/8 w - - 0 1",
        ] {
            assert!(parse_fen(fen).is_err(), "{fen:?} should be rejected");
        }
    }

    #[test]
    fn a_position_without_a_king_is_refused() {
        let result = parse_fen("8/8/8/8/8/8/8/K7 w - - 0 1");
        assert_eq!(result.unwrap_err(), ChessError::MissingKing(Color::Black));
    }
}
