//! Chess rules library: board model, per-piece move generation, king safety
//! through attacked squares, move application and takeback, and Standard
//! Algebraic Notation. For more information, see [README].
//!
//! ```
//! use ply::chess::game::Game;
//!
//! let mut game = Game::new();
//! game.make_move("e2e4")?;
//! game.make_move("c5")?;
//! assert_eq!(game.transcript(), "1. e4 c5");
//! assert_eq!(game.opening().map(|o| o.name.as_str()), Some("Sicilian Defense"));
//! # Ok::<(), ply::Error>(())
//! ```
//!
//! [README]: https://github.com/ply-chess/ply/blob/main/README.md

pub mod chess;
pub mod error;
pub mod shell;

pub use error::Error;
use shadow_rs::shadow;

shadow!(build);

/// Returns the full version that can be used to identify how the library was
/// built in the first place.
#[must_use]
pub fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}
