//! Validated move selection with a mandatory random fallback.
//!
//! Whatever a selector answers, only a member of the legal-move list it was
//! given can reach `apply_move`. An absent, malformed, or out-of-list
//! response is replaced by a uniformly random legal move, so the game can
//! never be driven into an undefined state by a misbehaving selector. An
//! empty legal-move list means the position is terminal and no move is
//! selected.

use rand::RngExt;

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::selection::selector_trait::MoveSelector;
use crate::utils::long_algebraic::move_to_uci;

/// Ask `selector` for a move in the current position and return a move that
/// is guaranteed legal, or `None` when the side to move has no moves.
pub fn select_validated_move(
    selector: &mut dyn MoveSelector,
    game_state: &GameState,
) -> Option<Move> {
    let legal = all_legal_moves(game_state, game_state.current_player());
    if legal.is_empty() {
        return None;
    }

    let encoded: Vec<String> = legal.iter().map(move_to_uci).collect();
    let fen = game_state.get_fen();

    let chosen_index = match selector.choose_move(&fen, &encoded) {
        Ok(Some(answer)) => {
            let normalized = answer.trim().to_ascii_lowercase();
            match encoded.iter().position(|candidate| *candidate == normalized) {
                Some(index) => index,
                None => {
                    log::warn!(
                        "selector {} answered {normalized:?}, which is not in the legal-move list; substituting a random move",
                        selector.name()
                    );
                    random_index(encoded.len())
                }
            }
        }
        Ok(None) => {
            log::warn!(
                "selector {} declined to choose; substituting a random move",
                selector.name()
            );
            random_index(encoded.len())
        }
        Err(message) => {
            log::warn!(
                "selector {} failed ({message}); substituting a random move",
                selector.name()
            );
            random_index(encoded.len())
        }
    };

    Some(legal[chosen_index])
}

#[inline]
fn random_index(len: usize) -> usize {
    let mut rng = rand::rng();
    rng.random_range(0..len)
}

#[cfg(test)]
mod tests {
    use super::select_validated_move;
    use crate::game_state::game_state::GameState;
    use crate::selection::selector_trait::MoveSelector;
    use crate::utils::long_algebraic::move_to_uci;

    /// Test double that always answers with the same canned response.
    struct ScriptedSelector {
        response: Result<Option<String>, String>,
    }

    impl MoveSelector for ScriptedSelector {
        fn name(&self) -> &str {
            "scripted"
        }

        fn choose_move(
            &mut self,
            _fen: &str,
            _legal_moves: &[String],
        ) -> Result<Option<String>, String> {
            self.response.clone()
        }
    }

    #[test]
    fn a_valid_answer_is_used_verbatim() {
        let game = GameState::new_game();
        let mut selector = ScriptedSelector {
            response: Ok(Some("e2e4".to_owned())),
        };

        let mv = select_validated_move(&mut selector, &game).expect("startpos has moves");
        assert_eq!(move_to_uci(&mv), "e2e4");
    }

    #[test]
    fn answers_are_normalized_before_the_membership_check() {
        let game = GameState::new_game();
        let mut selector = ScriptedSelector {
            response: Ok(Some("  E2E4\n".to_owned())),
        };

        let mv = select_validated_move(&mut selector, &game).expect("startpos has moves");
        assert_eq!(move_to_uci(&mv), "e2e4");
    }

    #[test]
    fn out_of_list_answers_fall_back_to_a_legal_move() {
        let game = GameState::new_game();
        let mut selector = ScriptedSelector {
            response: Ok(Some("e2e5".to_owned())),
        };

        let mv = select_validated_move(&mut selector, &game).expect("startpos has moves");
        let legal: Vec<String> = game
            .all_legal_moves(game.current_player())
            .iter()
            .map(move_to_uci)
            .collect();
        assert!(legal.contains(&move_to_uci(&mv)));
    }

    #[test]
    fn declines_and_errors_fall_back_to_a_legal_move() {
        let game = GameState::new_game();

        for response in [Ok(None), Err("socket closed".to_owned())] {
            let mut selector = ScriptedSelector { response };
            let mv = select_validated_move(&mut selector, &game).expect("startpos has moves");
            assert!(game
                .legal_targets(mv.from)
                .contains(&mv.to));
        }
    }

    #[test]
    fn terminal_positions_select_no_move() {
        // Stalemate: the side to move has nothing, so nothing is chosen.
        let game = GameState::from_fen("8/8/8/8/8/1qk5/8/K7 w - - 0 1")
            .expect("stalemate FEN should parse");
        let mut selector = ScriptedSelector {
            response: Ok(Some("a1a2".to_owned())),
        };
        assert!(select_validated_move(&mut selector, &game).is_none());
    }
}
