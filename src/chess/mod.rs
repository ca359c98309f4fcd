//! Implementation of chess rules: board model, move generation, attack
//! detection, notation and the game controller.

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod core;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod openings;
pub mod render;
pub mod san;
