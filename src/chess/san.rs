//! [Standard Algebraic Notation] support: converting coordinate moves
//! ("e2e4", "g1-f3", "e4xd5") into SAN and parsing the shape of SAN moves.
//!
//! Check and mate markers ("+", "#") and promotion suffixes ("=Q") are carried
//! verbatim: they are neither validated nor produced by the generator.
//!
//! [Standard Algebraic Notation]: https://en.wikipedia.org/wiki/Algebraic_notation_(chess)

use std::fmt;

use crate::chess::board::Board;
use crate::chess::core::{File, PieceKind, Rank, Square};
use crate::chess::moves::Move;
use crate::error::Error;

/// Splits the trailing annotation off a move: an optional promotion ("=N",
/// "=B", "=R" or "=Q") followed by an optional "+" or "#".
///
/// ```
/// use ply::chess::san::split_suffix;
///
/// assert_eq!(split_suffix("Nf3+"), ("Nf3", "+"));
/// assert_eq!(split_suffix("e8=Q#"), ("e8", "=Q#"));
/// assert_eq!(split_suffix("e4"), ("e4", ""));
/// ```
#[must_use]
pub fn split_suffix(input: &str) -> (&str, &str) {
    let mut body = input;
    if let Some(rest) = body.strip_suffix('+') {
        body = rest;
    }
    if let Some(rest) = body.strip_suffix('#') {
        body = rest;
    }
    if let [.., b'=', b'N' | b'B' | b'R' | b'Q'] = body.as_bytes() {
        body = &body[..body.len() - 2];
    }
    input.split_at(body.len())
}

/// Whether the move text (without suffix) is castling, "O-O" or "O-O-O",
/// also written with zeros.
#[must_use]
pub fn is_castling(body: &str) -> bool {
    matches!(body, "O-O" | "O-O-O" | "0-0" | "0-0-0")
}

/// A move given as source and destination squares, optionally separated by
/// "-" or "x".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coordinates {
    #[allow(missing_docs)]
    pub from: Square,
    #[allow(missing_docs)]
    pub to: Square,
    /// Whether the input used the "x" separator.
    pub capture: bool,
}

impl Coordinates {
    /// Recognizes "e2e4", "e2-e4" and "e4xd5" (case-insensitive). The input is
    /// expected to be stripped of its suffix.
    #[must_use]
    pub fn parse(body: &str) -> Option<Self> {
        if !body.is_ascii() {
            return None;
        }
        let body = body.to_ascii_lowercase();
        let (from, separator, to) = match body.len() {
            4 => (&body[..2], None, &body[2..]),
            5 => (&body[..2], Some(body.as_bytes()[2]), &body[3..]),
            _ => return None,
        };
        let capture = match separator {
            None | Some(b'-') => false,
            Some(b'x') => true,
            Some(_) => return None,
        };
        Some(Self {
            from: Square::try_from(from).ok()?,
            to: Square::try_from(to).ok()?,
            capture,
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.capture { "x" } else { "" };
        write!(f, "{}{separator}{}", self.from, self.to)
    }
}

/// Converts a coordinate move into SAN using the piece standing on the source
/// square. The capture marker is only emitted when the input carries one.
///
/// Inputs which are not coordinate-shaped (including moves already in SAN)
/// are returned unchanged. If the source square is empty, the coordinates are
/// returned without the hyphen.
///
/// ```
/// use ply::chess::board::Board;
/// use ply::chess::san::to_san;
///
/// let board = Board::starting();
/// assert_eq!(to_san("e2e4", &board), "e4");
/// assert_eq!(to_san("g1-f3+", &board), "Nf3+");
/// assert_eq!(to_san("Nf3", &board), "Nf3");
/// ```
#[must_use]
pub fn to_san(input: &str, board: &Board) -> String {
    let (body, suffix) = split_suffix(input);
    let Some(coordinates) = Coordinates::parse(body) else {
        return input.to_string();
    };
    let Some(piece) = board.piece_at(coordinates.from) else {
        return format!("{coordinates}{suffix}");
    };
    let capture = if coordinates.capture { "x" } else { "" };
    let to = coordinates.to;
    match piece.kind.letter() {
        None if coordinates.capture => format!("{}x{to}{suffix}", coordinates.from.file()),
        None => format!("{to}{suffix}"),
        Some(letter) => format!("{letter}{capture}{to}{suffix}"),
    }
}

/// Parsed shape of a SAN move: moving piece kind, optional disambiguation,
/// capture marker and destination. Whether the move is possible is up to the
/// position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct San {
    #[allow(missing_docs)]
    pub kind: PieceKind,
    /// Source file, mandatory for pawn captures.
    pub file: Option<File>,
    #[allow(missing_docs)]
    pub rank: Option<Rank>,
    #[allow(missing_docs)]
    pub capture: bool,
    #[allow(missing_docs)]
    pub to: Square,
}

impl San {
    /// Parses moves like "e4", "exd5", "Nf3", "Nbd2", "R1xa3" or "Qh4xe1".
    /// The suffix (see [`split_suffix`]) is accepted and ignored.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidMove`] if the input does not have the shape of a SAN
    /// move.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidMove(input.to_string());
        let (body, _) = split_suffix(input);
        if !body.is_ascii() || body.len() < 2 {
            return Err(invalid());
        }
        let (prefix, destination) = body.split_at(body.len() - 2);
        let to = Square::try_from(destination).map_err(|_| invalid())?;
        let mut chars = prefix.chars().peekable();
        let kind = match chars.peek().copied().and_then(PieceKind::from_letter) {
            Some(kind) => {
                let _ = chars.next();
                kind
            },
            None => PieceKind::Pawn,
        };
        let file = chars.next_if(|ch| File::try_from(*ch).is_ok());
        let rank = chars.next_if(|ch| Rank::try_from(*ch).is_ok());
        let capture = chars.next_if_eq(&'x').is_some();
        if chars.next().is_some() {
            return Err(invalid());
        }
        let san = Self {
            kind,
            file: file.map(File::try_from).transpose()?,
            rank: rank.map(Rank::try_from).transpose()?,
            capture,
            to,
        };
        if san.kind == PieceKind::Pawn && (san.rank.is_some() || san.file.is_some() != capture) {
            return Err(invalid());
        }
        Ok(san)
    }

    /// Returns true if the move fits this SAN: same piece kind, destination
    /// and capture flag, and a source square agreeing with the
    /// disambiguation.
    #[must_use]
    pub fn matches(&self, candidate: &Move) -> bool {
        candidate.piece().kind == self.kind
            && candidate.to() == self.to
            && candidate.is_capture() == self.capture
            && self.file.map_or(true, |file| candidate.from().file() == file)
            && self.rank.map_or(true, |rank| candidate.from().rank() == rank)
    }
}

impl fmt::Display for San {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(letter) = self.kind.letter() {
            write!(f, "{letter}")?;
        }
        if let Some(file) = self.file {
            write!(f, "{file}")?;
        }
        if let Some(rank) = self.rank {
            write!(f, "{rank}")?;
        }
        if self.capture {
            write!(f, "x")?;
        }
        write!(f, "{}", self.to)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chess::core::{Color, Piece};

    #[test]
    fn suffixes() {
        assert_eq!(split_suffix("e4#"), ("e4", "#"));
        assert_eq!(split_suffix("e8=N"), ("e8", "=N"));
        assert_eq!(split_suffix("e8=K"), ("e8=K", ""));
        assert_eq!(split_suffix("+"), ("", "+"));
        assert_eq!(split_suffix(""), ("", ""));
    }

    #[test]
    fn castling() {
        assert!(is_castling("O-O"));
        assert!(is_castling(split_suffix("O-O-O#").0));
        assert!(is_castling("0-0"));
        assert!(!is_castling("O-O-O-O"));
        assert!(!is_castling("Ke1g1"));
    }

    #[test]
    fn coordinates() {
        assert_eq!(
            Coordinates::parse("e2e4"),
            Some(Coordinates {
                from: Square::E2,
                to: Square::E4,
                capture: false
            })
        );
        assert_eq!(
            Coordinates::parse("G1-F3").map(|c| c.to_string()),
            Some("g1f3".to_string())
        );
        assert_eq!(
            Coordinates::parse("e4xd5").map(|c| c.to_string()),
            Some("e4xd5".to_string())
        );
        for malformed in ["e4", "Nf3", "exd5", "e2e9", "e2*e4", "e2e4e", "é2e4"] {
            assert_eq!(Coordinates::parse(malformed), None, "input: {malformed}");
        }
    }

    #[test]
    fn starting_position_conversions() {
        let board = Board::starting();
        assert_eq!(to_san("e2e4", &board), "e4");
        assert_eq!(to_san("e2-e4", &board), "e4");
        assert_eq!(to_san("g1f3", &board), "Nf3");
        assert_eq!(to_san("b1c3#", &board), "Nc3#");
        assert_eq!(to_san("e7e5", &board), "e5");
    }

    #[test]
    fn captures() {
        let mut board = Board::starting();
        let _ = board.relocate(Square::E2, Square::E4);
        let _ = board.relocate(Square::D7, Square::D5);
        assert_eq!(to_san("e4xd5", &board), "exd5");
        assert_eq!(to_san("e4xd5+", &board), "exd5+");
        assert_eq!(to_san("d1xd5", &board), "Qxd5");
    }

    #[test]
    fn passthrough() {
        let board = Board::starting();
        assert_eq!(to_san("Nf3", &board), "Nf3");
        assert_eq!(to_san("exd5", &board), "exd5");
        assert_eq!(to_san("hello", &board), "hello");
        assert_eq!(to_san("", &board), "");
        // Nothing on the source square.
        assert_eq!(to_san("e4-e5", &board), "e4e5");
        assert_eq!(to_san("e4xd5=Q", &board), "e4xd5=Q");
    }

    #[test]
    fn parse_shapes() {
        assert_eq!(
            San::parse("Nbd2+"),
            Ok(San {
                kind: PieceKind::Knight,
                file: Some(File::B),
                rank: None,
                capture: false,
                to: Square::D2,
            })
        );
        assert_eq!(
            San::parse("exd5"),
            Ok(San {
                kind: PieceKind::Pawn,
                file: Some(File::E),
                rank: None,
                capture: true,
                to: Square::D5,
            })
        );
        for valid in ["e4", "Nf3", "R1xa3", "Qh4xe1", "Kxe2", "e8=Q"] {
            let san = San::parse(valid);
            assert!(san.is_ok(), "input: {valid}");
        }
        assert_eq!(San::parse("R1xa3").map(|san| san.to_string()), Ok("R1xa3".to_string()));
    }

    #[test]
    fn parse_rejects() {
        for malformed in ["", "e", "e9", "xd5", "ee4", "e2e4", "Pe4", "Nf3x", "N3bd2", "nf3", "O-O"] {
            assert_eq!(
                San::parse(malformed),
                Err(Error::InvalidMove(malformed.to_string())),
                "input: {malformed}"
            );
        }
    }

    #[test]
    fn matching() {
        let knight = Piece::new(PieceKind::Knight, Color::White);
        let from_b1 = Move::new(Square::B1, Square::D2, knight, None);
        let from_f3 = Move::new(Square::F3, Square::D2, knight, None);
        let san = San::parse("Nbd2").unwrap();
        assert!(san.matches(&from_b1));
        assert!(!san.matches(&from_f3));
        let san = San::parse("Nd2").unwrap();
        assert!(san.matches(&from_b1) && san.matches(&from_f3));
        // Captures must be marked as such.
        let capture = Move::new(
            Square::B1,
            Square::D2,
            knight,
            Some(Piece::new(PieceKind::Pawn, Color::Black)),
        );
        assert!(!san.matches(&capture));
        assert!(San::parse("Nxd2").unwrap().matches(&capture));
    }
}
