//! Attack detection: which pieces of a side can reach a square, and the set of
//! every square a side controls.
//!
//! Pawns and kings are checked geometrically (diagonal-forward and adjacent
//! squares), so the attacked-square set never recurses into king safety. All
//! other pieces reuse their move generator. As a consequence a square occupied
//! by a piece of the attacking side is not counted as attacked by sliders and
//! knights, and sliding rays stop at the opposing king.

use crate::chess::bitboard::Bitboard;
use crate::chess::board::Board;
use crate::chess::core::{Color, Piece, PieceKind, Square};
use crate::chess::movegen::{destinations, king_attacks, pawn_attacks};

/// Squares the piece standing on `from` exerts control over.
fn reach(board: &Board, from: Square, piece: Piece) -> Bitboard {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, piece).collect(),
        PieceKind::King => king_attacks(from).collect(),
        _ => destinations(board, from, piece).into_iter().collect(),
    }
}

/// Every piece of `color` that attacks `square`, in board order.
///
/// ```
/// use ply::chess::attacks::attackers;
/// use ply::chess::board::Board;
/// use ply::chess::core::{Color, Square};
///
/// let board = Board::starting();
/// let defenders: Vec<_> = attackers(&board, Square::F3, Color::White)
///     .into_iter()
///     .map(|(square, _)| square)
///     .collect();
/// assert_eq!(defenders, [Square::E2, Square::G2, Square::G1]);
/// ```
#[must_use]
pub fn attackers(board: &Board, square: Square, color: Color) -> Vec<(Square, Piece)> {
    board
        .pieces(color)
        .filter(|(from, piece)| reach(board, *from, *piece).contains(square))
        .collect()
}

/// Union of the squares controlled by all pieces of `color`.
#[must_use]
pub fn attacked_squares(board: &Board, color: Color) -> Bitboard {
    board
        .pieces(color)
        .fold(Bitboard::empty(), |set, (from, piece)| {
            set | reach(board, from, piece)
        })
}
