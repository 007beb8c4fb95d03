//! Self-play demo driver.
//!
//! Plays a full game between two validated selectors (uniform random by
//! default), prints the final board and FEN, and dumps the game as PGN.
//! An optional first argument caps the number of plies.
//!
//! Run with `cargo run --release -- 120`.

use arbiter_chess::game_state::chess_types::Color;
use arbiter_chess::game_state::game_state::GameState;
use arbiter_chess::selection::random_selector::RandomSelector;
use arbiter_chess::selection::selector_trait::MoveSelector;
use arbiter_chess::selection::validated_selection::select_validated_move;
use arbiter_chess::utils::long_algebraic::move_to_uci;
use arbiter_chess::utils::pgn::write_pgn;
use arbiter_chess::utils::render_game_state::render_game_state;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let max_plies: usize = args
        .get(1)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(200);

    let mut game = GameState::new_game();
    let initial = game.clone();
    let mut white = RandomSelector::new();
    let mut black = RandomSelector::new();

    for ply in 0..max_plies {
        let selector: &mut dyn MoveSelector = match game.current_player() {
            Color::White => &mut white,
            Color::Black => &mut black,
        };

        let Some(mv) = select_validated_move(selector, &game) else {
            break;
        };
        if let Err(error) = game.apply_move(&mv) {
            eprintln!("move {} failed to apply: {error}", move_to_uci(&mv));
            break;
        }
        log::debug!("ply {}: {}", ply + 1, move_to_uci(&mv));
    }

    println!("{}", render_game_state(&game));
    println!("\n{}", game.get_fen());

    let to_move = game.current_player();
    let result = if game.is_checkmate(to_move) {
        match to_move {
            Color::White => "0-1",
            Color::Black => "1-0",
        }
    } else if game.is_stalemate(to_move) {
        "1/2-1/2"
    } else {
        "*"
    };
    println!("result: {result}");

    println!("\n{}", write_pgn(&initial, &game.move_history(), result));
}
