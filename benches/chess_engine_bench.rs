//! Chess Engine Benchmarks
//!
//! Performance benchmarks for legal-move generation and status queries using Criterion.

use chess_engine::move_gen::generate_pseudo_legal_moves;
use chess_engine::{Color, Game, Move};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Position after 1.e4 e5 2.Bc4 Nc6 3.Qh5 Nf6 4.Qxf7#
fn scholars_mate() -> Game {
    let mut game = Game::new();
    for text in ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"] {
        let mv: Move = text.parse().expect("valid notation");
        game.make_move(mv).expect("legal move");
    }
    game
}

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| b.iter(|| black_box(Game::new())));
}

fn bench_pseudo_legal_starting(c: &mut Criterion) {
    let game = Game::new();

    c.bench_function("pseudo_legal_moves_starting_position", |b| {
        b.iter(|| black_box(generate_pseudo_legal_moves(game.board(), Color::White)))
    });
}

fn bench_legal_moves_both_colors(c: &mut Criterion) {
    let game = Game::new();

    c.bench_function("legal_moves_both_colors", |b| {
        b.iter(|| {
            let white = game.all_valid_moves(Color::White);
            let black = game.all_valid_moves(Color::Black);
            black_box((white.len(), black.len()))
        })
    });
}

fn bench_checkmate_detection(c: &mut Criterion) {
    let game = scholars_mate();

    c.bench_function("is_in_checkmate_scholars_mate", |b| {
        b.iter(|| black_box(game.is_in_checkmate(Color::Black)))
    });
}

fn bench_full_move_cycle(c: &mut Criterion) {
    let e4: Move = "e2e4".parse().expect("valid notation");

    c.bench_function("full_move_cycle", |b| {
        b.iter(|| {
            let mut game = Game::new();
            game.make_move(e4).expect("legal move");
            black_box(game.game_state(Color::Black))
        })
    });
}

criterion_group!(
    benches,
    bench_new_game,
    bench_pseudo_legal_starting,
    bench_legal_moves_both_colors,
    bench_checkmate_detection,
    bench_full_move_cycle,
);
criterion_main!(benches);
