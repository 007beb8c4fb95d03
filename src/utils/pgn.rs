//! PGN-style export of a finished or in-progress game.
//!
//! Renders the tag-pair header block and a numbered movetext section from an
//! initial position and its move history. Moves are spelled in UCI
//! coordinates; parsing PGN back in is out of scope.

use std::collections::BTreeMap;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::utils::long_algebraic::move_to_uci;

pub fn write_pgn(initial_state: &GameState, move_history: &[Move], result: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Arbiter Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        chrono::Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    let initial_fen = initial_state.get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    write_pgn_with_headers(move_history, &headers)
}

pub fn write_pgn_with_headers(
    move_history: &[Move],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(move_history.len() + 1);
    for (ply, mv) in move_history.iter().enumerate() {
        let uci = move_to_uci(mv);
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, uci));
        } else {
            movetext_parts.push(uci);
        }
    }

    let result = headers
        .get("Result")
        .map(|value| normalize_result(value))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());

    out.push_str(&movetext_parts.join(" "));
    out.push('\n');
    out
}

fn normalize_result(result: &str) -> &str {
    match result {
        "1-0" | "0-1" | "1/2-1/2" => result,
        _ => "*",
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::write_pgn;
    use crate::game_state::chess_types::{Move, Square};
    use crate::game_state::game_state::GameState;

    fn mv(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[test]
    fn movetext_is_numbered_by_full_moves() {
        let mut game = GameState::new_game();
        let initial = game.clone();
        let moves = [
            mv(Square::at(4, 1), Square::at(4, 3)),
            mv(Square::at(4, 6), Square::at(4, 4)),
            mv(Square::at(6, 0), Square::at(5, 2)),
        ];
        for m in &moves {
            game.apply_move(m).expect("scripted move should apply");
        }

        let pgn = write_pgn(&initial, &game.move_history(), "*");
        assert!(pgn.contains("1. e2e4 e7e5 2. g1f3 *"));
        assert!(pgn.contains("[Event \"Arbiter Chess Game\"]"));
        assert!(!pgn.contains("[SetUp"));
    }

    #[test]
    fn custom_start_positions_carry_a_fen_tag() {
        let initial = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        let pgn = write_pgn(&initial, &[], "1-0");
        assert!(pgn.contains("[SetUp \"1\"]"));
        assert!(pgn.contains("[FEN \"4k3/P7/8/8/8/8/8/4K3 w - - 0 1\"]"));
        assert!(pgn.ends_with("1-0\n"));
    }

    #[test]
    fn unknown_results_normalize_to_an_asterisk() {
        let initial = GameState::new_game();
        let pgn = write_pgn(&initial, &[], "white crushed it");
        assert!(pgn.contains("[Result \"*\"]"));
    }
}
