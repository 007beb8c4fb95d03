//! Perft node counting.
//!
//! Counts leaf nodes of the legal move tree to a fixed depth. Known perft
//! values exercise the entire pipeline (generation, filtering, application)
//! against independently published reference counts.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::all_legal_moves;

pub fn perft(game_state: &GameState, depth: u32) -> ChessResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = all_legal_moves(game_state, game_state.side_to_move);
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        let next = apply_move(game_state, &mv)?;
        nodes += perft(&next, depth - 1)?;
    }
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::game_state::GameState;

    fn perft_from(fen: &str, depth: u32) -> u64 {
        let game = GameState::from_fen(fen).expect("perft FEN should parse");
        perft(&game, depth).expect("perft should not hit an apply error")
    }

    #[test]
    fn startpos_node_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).expect("depth 1"), 20);
        assert_eq!(perft(&game, 2).expect("depth 2"), 400);
        assert_eq!(perft(&game, 3).expect("depth 3"), 8_902);
    }

    #[test]
    fn castling_heavy_middlegame_node_counts() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        assert_eq!(perft_from(fen, 1), 48);
        assert_eq!(perft_from(fen, 2), 2_039);
    }

    #[test]
    fn en_passant_endgame_node_counts() {
        let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
        assert_eq!(perft_from(fen, 1), 14);
        assert_eq!(perft_from(fen, 2), 191);
        assert_eq!(perft_from(fen, 3), 2_812);
    }
}
