//! Square-centric ("mailbox") board: a table with one slot per square holding
//! the piece standing there, if any.

use std::fmt;

use crate::chess::core::{Color, File, Piece, PieceKind, Rank, Square, BOARD_SIZE};

const BACKRANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

const FILES: [File; 8] = [
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
];

/// Live piece set indexed by [`Square`]. At most one piece occupies any
/// square, which the layout guarantees.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SIZE as usize],
}

impl Board {
    /// Board without any pieces. Used for analysis setups.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE as usize],
        }
    }

    /// Standard starting position: 16 pieces per side, White on ranks 1-2.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for (file, kind) in FILES.iter().zip(BACKRANK) {
                let _ = board.put(
                    Square::new(*file, Rank::backrank(color)),
                    Piece::new(kind, color),
                );
                let _ = board.put(
                    Square::new(*file, Rank::pawns_starting(color)),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    /// Returns the piece on given square, if any.
    #[must_use]
    pub const fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    /// Places the piece, returning whatever was standing there before.
    pub fn put(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square as usize].replace(piece)
    }

    /// Clears the square, returning the piece that was removed.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square as usize].take()
    }

    /// Moves whatever stands on `from` to `to`. The piece previously on `to`
    /// (if any) is returned.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        match self.remove(from) {
            Some(piece) => self.put(to, piece),
            None => self.remove(to),
        }
    }

    /// Pieces of given color in board order (a8 to h1).
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |square| {
            self.piece_at(square)
                .filter(|piece| piece.color == color)
                .map(|piece| (square, piece))
        })
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Option::is_none)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::chess::render::render(
            self,
            &crate::chess::render::RenderOptions::ascii(),
        ))
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starting_position() {
        let board = Board::starting();
        assert_eq!(board.pieces(Color::White).count(), 16);
        assert_eq!(board.pieces(Color::Black).count(), 16);
        assert_eq!(
            board.piece_at(Square::E1),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(Square::D8),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(
            board.piece_at(Square::G7),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert_eq!(board.piece_at(Square::E4), None);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn put_and_remove() {
        let mut board = Board::empty();
        assert!(board.is_empty());
        let rook = Piece::new(PieceKind::Rook, Color::White);
        assert_eq!(board.put(Square::D4, rook), None);
        assert_eq!(board.piece_at(Square::D4), Some(rook));
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        assert_eq!(board.put(Square::D4, pawn), Some(rook));
        assert_eq!(board.remove(Square::D4), Some(pawn));
        assert_eq!(board.remove(Square::D4), None);
        assert!(board.is_empty());
    }

    #[test]
    fn relocate_captures() {
        let mut board = Board::starting();
        assert_eq!(board.relocate(Square::E2, Square::E4), None);
        assert_eq!(board.piece_at(Square::E2), None);
        assert_eq!(
            board.piece_at(Square::E4),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(
            board.relocate(Square::D1, Square::D8),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(board.pieces(Color::Black).count(), 15);
    }
}
