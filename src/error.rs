//! Errors reported by the rules engine.
//!
//! These are the only failures that cross the library boundary: parsing of
//! coordinates, colors and piece kinds, and the two ways a move request can be
//! rejected by [`crate::chess::game::Game`].

/// A typed failure of a rules engine operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input is not shaped like a move at all (neither SAN nor a
    /// coordinate pair).
    #[error("move '{0}' is invalid")]
    InvalidMove(String),
    /// The move is well-formed but is not among the legal moves of the side to
    /// move.
    #[error("move '{0}' is not possible")]
    MoveNotPossible(String),
    /// Color token outside of {white, black}.
    #[error("color '{0}' is invalid{}", color_hint(.0))]
    UndefinedColor(String),
    /// Piece kind token outside of the six standard kinds.
    #[error("piece '{0}' is invalid")]
    UndefinedPiece(String),
    /// Malformed coordinate: file outside of a-h or rank outside of 1-8.
    #[error("coordinate '{0}' is invalid")]
    InvalidCoordinate(String),
}

// Abbreviations are common in FEN-like inputs, suggest the full name instead.
fn color_hint(token: &str) -> &'static str {
    match token.to_ascii_lowercase().as_str() {
        "w" => ", maybe you meant 'white'?",
        "b" => ", maybe you meant 'black'?",
        _ => "",
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::InvalidMove("e9".to_string()).to_string(),
            "move 'e9' is invalid"
        );
        assert_eq!(
            Error::MoveNotPossible("e5".to_string()).to_string(),
            "move 'e5' is not possible"
        );
        assert_eq!(
            Error::UndefinedPiece("dragon".to_string()).to_string(),
            "piece 'dragon' is invalid"
        );
        assert_eq!(
            Error::InvalidCoordinate("i9".to_string()).to_string(),
            "coordinate 'i9' is invalid"
        );
    }

    #[test]
    fn color_abbreviation_hints() {
        assert_eq!(
            Error::UndefinedColor("w".to_string()).to_string(),
            "color 'w' is invalid, maybe you meant 'white'?"
        );
        assert_eq!(
            Error::UndefinedColor("B".to_string()).to_string(),
            "color 'B' is invalid, maybe you meant 'black'?"
        );
        assert_eq!(
            Error::UndefinedColor("red".to_string()).to_string(),
            "color 'red' is invalid"
        );
    }
}
