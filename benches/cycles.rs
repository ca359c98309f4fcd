//! iai benchmarks are measuring projected processor cycles spent on executing a
//! piece of code. They are less noisy and give a better understanding of
//! whether the performance is "objectively" changing between different
//! versions.
//!
//! It doesn't eliminate the necessity of measuring the time, though, because
//! knowing the absolute values is very important, too. Hence, the two sets of
//! benchmarks are very similar but complement each other.

use ply::chess::attacks::attacked_squares;
use ply::chess::core::Color;
use ply::chess::game::Game;

const RUY_LOPEZ: [&str; 10] = ["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Ba4", "Nf6", "O-O", "Be7"];

fn starting_legal_moves() {
    iai::black_box(Game::new().legal_moves());
}

fn attacked_squares_after_opening() {
    let mut game = Game::new();
    // Castling is not supported and the line stops right before it.
    for next_move in &RUY_LOPEZ[..8] {
        game.make_move(*next_move).expect("valid move");
    }
    iai::black_box(attacked_squares(game.board(), Color::Black));
    iai::black_box(game.legal_moves());
}

fn play_and_take_back() {
    let mut game = Game::new();
    for next_move in &RUY_LOPEZ[..8] {
        game.make_move(*next_move).expect("valid move");
    }
    for _ in 0..8 {
        game.takeback();
    }
    iai::black_box(game);
}

iai::main!(starting_legal_moves, attacked_squares_after_opening, play_and_take_back);
