use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use arbiter_chess::game_state::game_state::GameState;
use arbiter_chess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    },
    BenchCase {
        name: "castling_middlegame",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    },
];

fn bench_legal_move_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_legal_moves");
    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("bench FEN should parse");
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &game, |b, game| {
            b.iter(|| black_box(game.all_legal_moves(game.current_player())));
        });
    }
    group.finish();
}

fn bench_shallow_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_depth_2");
    group.sample_size(20);
    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("bench FEN should parse");
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &game, |b, game| {
            b.iter(|| perft(black_box(game), 2).expect("perft should not fail"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_legal_move_enumeration, bench_shallow_perft);
criterion_main!(benches);
