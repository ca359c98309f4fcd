//! Text rendering of the board, rank 8 at the top.

use itertools::Itertools;

use crate::chess::board::Board;
use crate::chess::core::{Square, BOARD_WIDTH};

/// Knobs for [`render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Unicode figurines ("♘") instead of color+letter codes ("WN").
    pub unicode: bool,
    /// Text of an empty square. ASCII rendering pads it with a space to the
    /// width of a piece code.
    pub empty: String,
    /// Surround squares with a grid.
    pub separators: bool,
}

impl RenderOptions {
    /// Two-letter piece codes within a grid.
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            unicode: false,
            ..Self::default()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            unicode: true,
            empty: " ".to_string(),
            separators: true,
        }
    }
}

/// Draws the board.
///
/// ```
/// use ply::chess::board::Board;
/// use ply::chess::render::{render, RenderOptions};
///
/// let options = RenderOptions {
///     separators: false,
///     empty: ".".to_string(),
///     ..RenderOptions::default()
/// };
/// let picture = render(&Board::starting(), &options);
/// assert_eq!(picture.lines().next(), Some("♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜"));
/// assert_eq!(picture.lines().nth(4), Some(". . . . . . . ."));
/// ```
#[must_use]
pub fn render(board: &Board, options: &RenderOptions) -> String {
    let empty = if options.unicode {
        options.empty.clone()
    } else {
        format!("{} ", options.empty)
    };
    let rows: Vec<Vec<String>> = Square::iter()
        .map(|square| match board.piece_at(square) {
            Some(piece) if options.unicode => piece.glyph().to_string(),
            Some(piece) => piece.code(),
            None => empty.clone(),
        })
        .chunks(BOARD_WIDTH as usize)
        .into_iter()
        .map(|chunk| chunk.collect())
        .collect();
    if !options.separators {
        return rows.iter().map(|row| row.join(" ")).join("\n");
    }
    let cell_width = if options.unicode { 1 } else { 2 };
    let border = "-".repeat(BOARD_WIDTH as usize * (cell_width + 3) + 1);
    let body = rows
        .iter()
        .map(|row| format!("| {} |", row.join(" | ")))
        .join(&format!("\n{border}\n"));
    format!("{border}\n{body}\n{border}")
}
