use crate::chess::core::{Color, PieceKind, Square};
use crate::error::Error;

/// A single line of shell input.
#[derive(Debug, PartialEq)]
pub(super) enum Command {
    Move(String),
    Undo,
    Moves,
    Display,
    Attackers { square: Square, color: Color },
    Piece(Square),
    History,
    Opening,
    NewGame,
    Clear,
    Put {
        color: Color,
        kind: PieceKind,
        square: Square,
    },
    Turn(Option<Color>),
    Version,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    /// Parses one line. Anything that does not start with a known command word
    /// is treated as a move.
    ///
    /// Arguments are validated here: malformed squares, colors or piece kinds
    /// are reported as [`Error`]s.
    pub(super) fn parse(input: &str) -> Result<Self, Error> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((&first, args)) = parts.split_first() else {
            return Ok(Self::Empty);
        };
        let command = match (first, args) {
            ("move", [notation]) => Self::Move((*notation).to_string()),
            ("undo" | "takeback", []) => Self::Undo,
            ("moves", []) => Self::Moves,
            ("d" | "display", []) => Self::Display,
            ("attackers", [square, color]) => Self::Attackers {
                square: Square::try_from(*square)?,
                color: color.parse()?,
            },
            ("piece", [square]) => Self::Piece(Square::try_from(*square)?),
            ("history", []) => Self::History,
            ("opening", []) => Self::Opening,
            ("new", []) => Self::NewGame,
            ("clear", []) => Self::Clear,
            ("put", [color, kind, square]) => Self::Put {
                color: color.parse()?,
                kind: kind.parse()?,
                square: Square::try_from(*square)?,
            },
            ("turn", []) => Self::Turn(None),
            ("turn", [color]) => Self::Turn(Some(color.parse()?)),
            ("version", []) => Self::Version,
            ("help", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            (
                "move" | "undo" | "takeback" | "moves" | "d" | "display" | "attackers" | "piece"
                | "history" | "opening" | "new" | "clear" | "put" | "turn" | "version" | "help"
                | "quit" | "exit",
                _,
            ) => Self::Unknown(input.trim().to_string()),
            (notation, []) => Self::Move(notation.to_string()),
            _ => Self::Unknown(input.trim().to_string()),
        };
        Ok(command)
    }
}
