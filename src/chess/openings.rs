//! Opening names keyed by the move transcript ("1. e4 e5 2. Nf3").
//!
//! The game only depends on the [`OpeningBook`] trait. [`OpeningTable`] is the
//! bundled implementation: a hash map filled either from a small built-in list
//! of popular lines or from a JSON corpus in the widely used
//! `[{"eco": "C20", "name": "King's Pawn Game", "moves": "1. e4 e5"}]` format.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Named opening with its [ECO] code.
///
/// [ECO]: https://en.wikipedia.org/wiki/Encyclopaedia_of_Chess_Openings
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Opening {
    /// ECO classification, e.g. "C60".
    pub code: String,
    #[allow(missing_docs)]
    pub name: String,
}

impl fmt::Display for Opening {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.name)
    }
}

/// Lookup of openings by the exact transcript of the moves played.
pub trait OpeningBook: fmt::Debug {
    /// Returns the opening whose main line is exactly `transcript`.
    fn lookup(&self, transcript: &str) -> Option<Opening>;
}

/// Label of the game after a move brought its transcript to `transcript`:
/// the opening named by the whole transcript if the book knows it, otherwise
/// the label before the move.
pub(crate) fn extend(
    book: &dyn OpeningBook,
    transcript: &str,
    previous: Option<&Opening>,
) -> Option<Opening> {
    book.lookup(transcript).or_else(|| previous.cloned())
}

/// Labels of every position reached by the moves of a notation log, one per
/// move. Move number tokens ("2.") do not end a position.
pub(crate) fn classify(book: &dyn OpeningBook, tokens: &[String]) -> Vec<Option<Opening>> {
    let mut transcript = String::new();
    let mut labels: Vec<Option<Opening>> = Vec::new();
    for token in tokens {
        if !transcript.is_empty() {
            transcript.push(' ');
        }
        transcript.push_str(token);
        if !token.ends_with('.') {
            let label = extend(book, &transcript, labels.last().and_then(Option::as_ref));
            labels.push(label);
        }
    }
    labels
}

#[derive(Deserialize)]
struct Entry {
    eco: String,
    name: String,
    moves: String,
}

const STANDARD: &[(&str, &str, &str)] = &[
    ("B00", "King's Pawn Game", "1. e4"),
    ("A40", "Queen's Pawn Game", "1. d4"),
    ("A10", "English Opening", "1. c4"),
    ("A04", "Zukertort Opening", "1. Nf3"),
    ("C20", "King's Pawn Game", "1. e4 e5"),
    ("B20", "Sicilian Defense", "1. e4 c5"),
    ("C00", "French Defense", "1. e4 e6"),
    ("B10", "Caro-Kann Defense", "1. e4 c6"),
    ("B01", "Scandinavian Defense", "1. e4 d5"),
    ("B07", "Pirc Defense", "1. e4 d6"),
    ("B06", "Modern Defense", "1. e4 g6"),
    ("C40", "King's Knight Opening", "1. e4 e5 2. Nf3"),
    ("C30", "King's Gambit", "1. e4 e5 2. f4"),
    ("C42", "Petrov's Defense", "1. e4 e5 2. Nf3 Nf6"),
    ("C44", "King's Knight Opening: Normal Variation", "1. e4 e5 2. Nf3 Nc6"),
    ("C60", "Ruy Lopez", "1. e4 e5 2. Nf3 Nc6 3. Bb5"),
    ("C50", "Italian Game", "1. e4 e5 2. Nf3 Nc6 3. Bc4"),
    ("C44", "Scotch Game", "1. e4 e5 2. Nf3 Nc6 3. d4"),
    ("D00", "Queen's Pawn Game", "1. d4 d5"),
    ("D06", "Queen's Gambit", "1. d4 d5 2. c4"),
    ("D30", "Queen's Gambit Declined", "1. d4 d5 2. c4 e6"),
    ("D20", "Queen's Gambit Accepted", "1. d4 d5 2. c4 dxc4"),
    ("D10", "Slav Defense", "1. d4 d5 2. c4 c6"),
    ("A45", "Indian Defense", "1. d4 Nf6"),
    ("A80", "Dutch Defense", "1. d4 f5"),
];

/// [`OpeningBook`] backed by a map from transcript to opening.
#[derive(Clone, Debug, Default)]
pub struct OpeningTable {
    lines: HashMap<String, Opening>,
}

impl OpeningTable {
    /// Built-in list of popular openings.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD
            .iter()
            .map(|(code, name, moves)| {
                (
                    (*moves).to_string(),
                    Opening {
                        code: (*code).to_string(),
                        name: (*name).to_string(),
                    },
                )
            })
            .collect()
    }

    /// Parses a JSON array of `{"eco", "name", "moves"}` objects. Later
    /// entries override earlier ones with the same moves.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not such an array.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let entries: Vec<Entry> =
            serde_json::from_str(json).context("parsing opening corpus")?;
        Ok(entries
            .into_iter()
            .map(|entry| {
                (
                    entry.moves,
                    Opening {
                        code: entry.eco,
                        name: entry.name,
                    },
                )
            })
            .collect())
    }

    /// Reads [`OpeningTable::from_json`] corpus from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can not be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading openings from {}", path.display()))?;
        let table = Self::from_json(&json)?;
        tracing::debug!(lines = table.len(), path = %path.display(), "loaded openings");
        Ok(table)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl FromIterator<(String, Opening)> for OpeningTable {
    fn from_iter<T: IntoIterator<Item = (String, Opening)>>(lines: T) -> Self {
        Self {
            lines: lines.into_iter().collect(),
        }
    }
}

impl OpeningBook for OpeningTable {
    fn lookup(&self, transcript: &str) -> Option<Opening> {
        self.lines.get(transcript).cloned()
    }
}
