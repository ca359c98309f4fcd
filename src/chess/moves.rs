//! The [`Move`] record shared by the generator, the notation layer and the
//! game history.

use std::fmt;

use crate::chess::core::{Piece, Square};

/// A single piece displacement together with everything needed to undo it.
///
/// The captured piece is recorded when the move is generated, i.e. before it
/// is removed from the board, so that a takeback can put it back.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    notation: String,
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
}

impl Move {
    /// Creates the move and derives its algebraic notation: piece letter
    /// (none for pawns), "x" before the destination of a capture and the
    /// source file in front of pawn captures ("exd5").
    #[must_use]
    pub fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        let mut notation = String::with_capacity(4);
        match piece.kind.letter() {
            Some(letter) => notation.push(letter),
            None if captured.is_some() => notation.push_str(&from.file().to_string()),
            None => {},
        }
        if captured.is_some() {
            notation.push('x');
        }
        notation.push_str(&to.to_string());
        Self {
            notation,
            from,
            to,
            piece,
            captured,
        }
    }

    /// Algebraic notation without check markers or disambiguation, e.g.
    /// "Nf3" or "exd5".
    #[must_use]
    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// Source square.
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Destination square.
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// The piece being moved.
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    /// The piece standing on the destination square before the move.
    #[must_use]
    pub const fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Source and destination squares concatenated ("e2e4"), the format UCI
    /// uses for moves without promotion.
    #[must_use]
    pub fn coordinates(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chess::core::{Color, PieceKind};

    #[test]
    fn quiet_moves() {
        let pawn = Move::new(
            Square::E2,
            Square::E4,
            Piece::new(PieceKind::Pawn, Color::White),
            None,
        );
        assert_eq!(pawn.notation(), "e4");
        assert_eq!(pawn.coordinates(), "e2e4");
        assert!(!pawn.is_capture());
        let knight = Move::new(
            Square::G1,
            Square::F3,
            Piece::new(PieceKind::Knight, Color::White),
            None,
        );
        assert_eq!(knight.to_string(), "Nf3");
    }

    #[test]
    fn captures() {
        let pawn = Move::new(
            Square::E4,
            Square::D5,
            Piece::new(PieceKind::Pawn, Color::White),
            Some(Piece::new(PieceKind::Pawn, Color::Black)),
        );
        assert_eq!(pawn.notation(), "exd5");
        assert!(pawn.is_capture());
        let queen = Move::new(
            Square::D1,
            Square::D8,
            Piece::new(PieceKind::Queen, Color::White),
            Some(Piece::new(PieceKind::Queen, Color::Black)),
        );
        assert_eq!(queen.notation(), "Qxd8");
        assert_eq!(
            queen.captured(),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
    }
}
