//! Whole-side legal move enumeration.
//!
//! Walks every piece the color owns, collects its filtered targets, and
//! expands pawn moves that reach the last rank into the four promotion
//! variants. The enumeration is empty for the color not on move.

use crate::game_state::chess_rules::{promotion_rank, PROMOTION_PIECES};
use crate::game_state::chess_types::{Color, Move, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_filter::legal_targets;

pub fn all_legal_moves(game_state: &GameState, color: Color) -> Vec<Move> {
    if color != game_state.side_to_move {
        return Vec::new();
    }

    let mut moves = Vec::new();
    for (from, piece) in game_state.board.occupied_squares(color) {
        for to in legal_targets(game_state, from) {
            if piece.kind == PieceKind::Pawn && to.rank() == promotion_rank(color) {
                for promotion in PROMOTION_PIECES {
                    moves.push(Move {
                        from,
                        to,
                        promotion: Some(promotion),
                    });
                }
            } else {
                moves.push(Move {
                    from,
                    to,
                    promotion: None,
                });
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::all_legal_moves;
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::game_state::game_state::GameState;

    #[test]
    fn startpos_has_twenty_moves_for_white_and_none_for_black() {
        let game = GameState::new_game();
        assert_eq!(all_legal_moves(&game, Color::White).len(), 20);
        assert!(all_legal_moves(&game, Color::Black).is_empty());
    }

    #[test]
    fn last_rank_pawn_moves_expand_into_four_promotions() {
        let game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        let moves = all_legal_moves(&game, Color::White);

        let promotions: Vec<_> = moves
            .iter()
            .filter(|mv| mv.from == Square::at(0, 6))
            .collect();
        assert_eq!(promotions.len(), 4);
        assert!(promotions.iter().all(|mv| mv.to == Square::at(0, 7)));
        assert_eq!(promotions[0].promotion, Some(PieceKind::Queen));
        assert!(promotions.iter().any(|mv| mv.promotion == Some(PieceKind::Knight)));
    }
}
