//! Per-piece [pseudo-legal] move generation over the mailbox [`Board`].
//!
//! Pieces are dispatched on their [`PieceKind`]: pawns push and capture
//! diagonally, knights jump, bishops, rooks and queens cast rays until the
//! first occupied square. The king is the only piece whose moves are filtered
//! for safety: destinations inside the opponent's attacked-square set are
//! dropped. Pins, discovered checks, castling, en passant and promotions are
//! not generated.
//!
//! [pseudo-legal]: https://www.chessprogramming.org/Pseudo-Legal_Move

use arrayvec::ArrayVec;

use crate::chess::attacks::attacked_squares;
use crate::chess::board::Board;
use crate::chess::core::{Direction, Piece, PieceKind, Rank, Square};
use crate::chess::moves::Move;

/// A queen in the center of an open board reaches 27 squares, no piece can do
/// better.
pub const MAX_PIECE_MOVES: usize = 27;

/// Moves of a single piece.
pub type PieceMoves = ArrayVec<Move, MAX_PIECE_MOVES>;

/// Destination squares of a single piece.
pub(crate) type Destinations = ArrayVec<Square, MAX_PIECE_MOVES>;

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Generates moves of the piece standing on `from`. Empty if the square is
/// empty.
///
/// ```
/// use ply::chess::board::Board;
/// use ply::chess::core::Square;
/// use ply::chess::movegen::pseudo_legal_moves;
///
/// let board = Board::starting();
/// let moves: Vec<_> = pseudo_legal_moves(&board, Square::G1)
///     .iter()
///     .map(|m| m.notation().to_string())
///     .collect();
/// assert_eq!(moves, ["Nh3", "Nf3"]);
/// ```
#[must_use]
pub fn pseudo_legal_moves(board: &Board, from: Square) -> PieceMoves {
    let Some(piece) = board.piece_at(from) else {
        return PieceMoves::new();
    };
    destinations(board, from, piece)
        .into_iter()
        .map(|to| Move::new(from, to, piece, board.piece_at(to)))
        .collect()
}

/// Squares the piece can move to, captures included.
pub(crate) fn destinations(board: &Board, from: Square, piece: Piece) -> Destinations {
    let mut result = Destinations::new();
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(board, from, piece, &mut result),
        PieceKind::Knight => knight_destinations(board, from, piece, &mut result),
        PieceKind::Bishop => slide(board, from, piece, &Direction::DIAGONAL, &mut result),
        PieceKind::Rook => slide(board, from, piece, &Direction::ORTHOGONAL, &mut result),
        PieceKind::Queen => slide(board, from, piece, &Direction::ALL, &mut result),
        PieceKind::King => king_destinations(board, from, piece, &mut result),
    }
    result
}

fn is_enemy(board: &Board, square: Square, piece: Piece) -> bool {
    board
        .piece_at(square)
        .is_some_and(|other| other.color != piece.color)
}

fn is_reachable(board: &Board, square: Square, piece: Piece) -> bool {
    board
        .piece_at(square)
        .map_or(true, |other| other.color != piece.color)
}

fn pawn_destinations(board: &Board, from: Square, piece: Piece, result: &mut Destinations) {
    let push = piece.color.pawn_push();
    if let Some(single) = from.offset(0, push) {
        if board.piece_at(single).is_none() {
            result.push(single);
            if from.rank() == Rank::pawns_starting(piece.color) {
                if let Some(double) = from.offset(0, 2 * push) {
                    if board.piece_at(double).is_none() {
                        result.push(double);
                    }
                }
            }
        }
    }
    for target in pawn_attacks(from, piece) {
        if is_enemy(board, target, piece) {
            result.push(target);
        }
    }
}

/// Diagonal-forward squares a pawn controls, regardless of their occupancy.
pub(crate) fn pawn_attacks(from: Square, piece: Piece) -> impl Iterator<Item = Square> {
    let push = piece.color.pawn_push();
    [-1, 1]
        .into_iter()
        .filter_map(move |files| from.offset(files, push))
}

fn knight_destinations(board: &Board, from: Square, piece: Piece, result: &mut Destinations) {
    result.extend(
        KNIGHT_JUMPS
            .iter()
            .filter_map(|(files, ranks)| from.offset(*files, *ranks))
            .filter(|to| is_reachable(board, *to, piece)),
    );
}

fn slide(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    result: &mut Destinations,
) {
    for direction in directions {
        let mut current = from;
        while let Some(next) = current.shift(*direction) {
            match board.piece_at(next) {
                None => result.push(next),
                Some(blocker) => {
                    if blocker.color != piece.color {
                        result.push(next);
                    }
                    break;
                },
            }
            current = next;
        }
    }
}

/// Squares adjacent to the king, regardless of their occupancy.
pub(crate) fn king_attacks(from: Square) -> impl Iterator<Item = Square> {
    Direction::ALL
        .into_iter()
        .filter_map(move |direction| from.shift(direction))
}

fn king_destinations(board: &Board, from: Square, piece: Piece, result: &mut Destinations) {
    let unsafe_squares = attacked_squares(board, !piece.color);
    result.extend(
        king_attacks(from)
            .filter(|to| !unsafe_squares.contains(*to))
            .filter(|to| is_reachable(board, *to, piece)),
    );
}
