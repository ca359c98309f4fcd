//! Criterion benchmarks measure time of the clearly separated pieces of code.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ply::chess::game::Game;
use ply::chess::san::to_san;
use shakmaty::{Chess, Position};

/// Well-known lines used to reach a variety of middlegame-ish positions.
const LINES: &[&[&str]] = &[
    &["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Ba4", "Nf6", "d3", "b5"],
    &["d4", "d5", "c4", "e6", "Nc3", "Nf6", "Bg5", "Be7", "e3", "h6"],
    &["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "a6"],
    &["c4", "e5", "Nc3", "Nf6", "g3", "d5", "cxd5", "Nxd5", "Bg2", "Nb6"],
];

fn positions() -> Vec<Game> {
    let mut result = vec![Game::new()];
    for line in LINES {
        let mut game = Game::new();
        for next_move in line.iter() {
            game.make_move(*next_move).unwrap();
            result.push(game.clone());
        }
    }
    result
}

fn generate_moves(games: &[Game]) {
    for game in games {
        criterion::black_box(game.legal_moves());
    }
}

fn movegen_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Move generation");
    let games = positions();
    group.bench_with_input(
        BenchmarkId::new("ply", format!("{} opening positions", games.len())),
        &games,
        |b, games| {
            b.iter(|| generate_moves(games));
        },
    );
    // shakmaty is a reasonable reference that has stable performance and can
    // be compared to. It handles the full rules so it's not important to be
    // faster than it.
    group.bench_function("reference implementation: shakmaty, starting position", |b| {
        let position = Chess::default();
        b.iter(|| criterion::black_box(position.legal_moves()));
    });
    group.finish();
}

fn play_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Game");
    for (index, line) in LINES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("play and take back", index), line, |b, line| {
            b.iter(|| {
                let mut game = Game::new();
                for next_move in line.iter() {
                    game.make_move(*next_move).unwrap();
                }
                while !game.history().is_empty() {
                    game.takeback();
                }
                criterion::black_box(game)
            });
        });
    }
    let game = Game::new();
    group.bench_function("coordinates to SAN", |b| {
        b.iter(|| {
            for coordinates in ["e2e4", "g1f3", "b1-c3", "d2d4+", "a7a6"] {
                criterion::black_box(to_san(coordinates, game.board()));
            }
        });
    });
    group.finish();
}

criterion_group! {
    name = movegen;
    config = Criterion::default().sample_size(100);
    targets = movegen_bench
}

criterion_group! {
    name = game;
    config = Criterion::default().sample_size(50);
    targets = play_bench
}

criterion_main!(movegen, game);
