//! The game controller: whose turn it is, the moves made so far, their
//! transcript and the opening they form.
//!
//! Every request is validated against the legal moves of the side to move
//! before anything is touched, so a rejected move never leaves the game in a
//! partially updated state.

use std::sync::Arc;

use crate::chess::attacks;
use crate::chess::board::Board;
use crate::chess::core::{Color, Piece, Square};
use crate::chess::movegen::pseudo_legal_moves;
use crate::chess::moves::Move;
use crate::chess::openings::{classify, extend, Opening, OpeningBook, OpeningTable};
use crate::chess::san::{is_castling, split_suffix, to_san, Coordinates, San};
use crate::error::Error;

/// What happens when a move request is rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Return the error to the caller.
    #[default]
    Raise,
    /// Log a warning and carry on as if nothing was requested.
    Suppress,
}

/// A move request: either text (SAN such as "Nf3" or coordinates such as
/// "g1f3", "g1-f3") or one of the [`Move`]s produced by
/// [`Game::legal_moves`].
#[derive(Clone, Copy, Debug)]
pub enum MoveInput<'a> {
    #[allow(missing_docs)]
    Notation(&'a str),
    #[allow(missing_docs)]
    Move(&'a Move),
}

impl<'a> From<&'a str> for MoveInput<'a> {
    fn from(notation: &'a str) -> Self {
        Self::Notation(notation)
    }
}

impl<'a> From<&'a String> for MoveInput<'a> {
    fn from(notation: &'a String) -> Self {
        Self::Notation(notation)
    }
}

impl<'a> From<&'a Move> for MoveInput<'a> {
    fn from(m: &'a Move) -> Self {
        Self::Move(m)
    }
}

/// State of a game in progress.
///
/// ```
/// use ply::chess::core::Color;
/// use ply::chess::game::Game;
///
/// let mut game = Game::new();
/// game.make_move("e4")?;
/// game.make_move("e7e5")?;
/// game.make_move("Nf3")?;
/// assert_eq!(game.transcript(), "1. e4 e5 2. Nf3");
/// assert_eq!(game.turn(), Color::Black);
/// assert_eq!(game.opening().map(|o| o.code.as_str()), Some("C40"));
/// # Ok::<(), ply::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    history: Vec<Move>,
    /// Transcript tokens: move numbers ("1.") and moves.
    log: Vec<String>,
    /// Opening label after each move of `history`.
    labels: Vec<Option<Opening>>,
    book: Arc<dyn OpeningBook + Send + Sync>,
    policy: ErrorPolicy,
}

impl Game {
    /// Standard starting position with White to move, errors raised and the
    /// built-in opening table.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::starting(), Color::White)
    }

    /// Starts from an arbitrary setup. Move numbers count from 1 regardless
    /// of the setup.
    #[must_use]
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            history: Vec::new(),
            log: Vec::new(),
            labels: Vec::new(),
            book: Arc::new(OpeningTable::standard()),
            policy: ErrorPolicy::default(),
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the opening book used for labeling the game.
    #[must_use]
    pub fn with_openings(mut self, book: Arc<dyn OpeningBook + Send + Sync>) -> Self {
        self.book = book;
        self.labels = classify(self.book.as_ref(), &self.log);
        self
    }

    /// Drops the history and continues from a new setup, keeping the error
    /// policy and the opening book.
    pub fn reset(&mut self, board: Board, turn: Color) {
        self.board = board;
        self.turn = turn;
        self.history.clear();
        self.log.clear();
        self.labels.clear();
    }

    /// Plays a move of the side to move.
    ///
    /// Coordinate input is matched by its squares, SAN input by its shape and
    /// disambiguation. When several legal moves fit, the first one in
    /// generation order is played. The recorded notation keeps the input's
    /// check marker and disambiguation.
    ///
    /// # Errors
    ///
    /// With [`ErrorPolicy::Raise`]: [`Error::InvalidMove`] if the text is
    /// neither SAN nor coordinates, [`Error::MoveNotPossible`] if no legal
    /// move fits. With [`ErrorPolicy::Suppress`] these are only logged.
    pub fn make_move<'a>(&mut self, input: impl Into<MoveInput<'a>>) -> Result<(), Error> {
        let resolved = self.resolve(input.into());
        let result = resolved.map(|(m, token)| self.apply(m, token));
        self.handle(result)
    }

    fn resolve(&self, input: MoveInput<'_>) -> Result<(Move, String), Error> {
        let legal = self.legal_moves();
        match input {
            MoveInput::Move(requested) => legal
                .into_iter()
                .find(|m| m.notation() == requested.notation() && m.from() == requested.from())
                .map(|m| {
                    let token = m.notation().to_string();
                    (m, token)
                })
                .ok_or_else(|| Error::MoveNotPossible(requested.notation().to_string())),
            MoveInput::Notation(text) => {
                let (body, suffix) = split_suffix(text);
                if let Some(coordinates) = Coordinates::parse(body) {
                    return legal
                        .into_iter()
                        .find(|m| {
                            m.from() == coordinates.from
                                && m.to() == coordinates.to
                                && (m.is_capture() || !coordinates.capture)
                        })
                        .map(|m| {
                            let token = format!("{}{suffix}", m.notation());
                            (m, token)
                        })
                        .ok_or_else(|| Error::MoveNotPossible(to_san(text, &self.board)));
                }
                if is_castling(body) {
                    return Err(Error::MoveNotPossible(text.to_string()));
                }
                let san = San::parse(text)?;
                legal
                    .into_iter()
                    .find(|m| san.matches(m))
                    .map(|m| (m, format!("{san}{suffix}")))
                    .ok_or_else(|| Error::MoveNotPossible(text.to_string()))
            },
        }
    }

    fn apply(&mut self, m: Move, token: String) {
        let captured = self.board.relocate(m.from(), m.to());
        debug_assert_eq!(captured, m.captured());
        if self.turn == Color::White {
            self.log.push(format!("{}.", self.white_moves() + 1));
        }
        tracing::debug!(notation = %token, from = %m.from(), to = %m.to(), "move");
        self.log.push(token);
        let label = extend(self.book.as_ref(), &self.transcript(), self.opening());
        self.labels.push(label);
        self.history.push(m);
        self.turn = !self.turn;
    }

    fn handle(&self, result: Result<(), Error>) -> Result<(), Error> {
        match (result, self.policy) {
            (Err(error), ErrorPolicy::Suppress) => {
                tracing::warn!(%error, "ignoring rejected move");
                Ok(())
            },
            (result, _) => result,
        }
    }

    fn white_moves(&self) -> usize {
        self.history
            .iter()
            .filter(|m| m.piece().color == Color::White)
            .count()
    }

    /// Undoes the last move, putting back the captured piece if there was
    /// one. Does nothing at the start of the game.
    pub fn takeback(&mut self) {
        let Some(m) = self.history.pop() else {
            return;
        };
        let _ = self.board.remove(m.to());
        let _ = self.board.put(m.from(), m.piece());
        if let Some(captured) = m.captured() {
            let _ = self.board.put(m.to(), captured);
        }
        let _ = self.log.pop();
        if m.piece().color == Color::White {
            let _ = self.log.pop();
        }
        let _ = self.labels.pop();
        self.turn = !self.turn;
        tracing::debug!(notation = %m, "takeback");
    }

    /// Moves available to the side to move, in board order. Only the king
    /// is checked for safety: pins and discovered checks are not detected.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board
            .pieces(self.turn)
            .flat_map(|(square, _)| pseudo_legal_moves(&self.board, square))
            .collect()
    }

    /// Notation of [`Game::legal_moves`].
    #[must_use]
    pub fn legal_notation(&self) -> Vec<String> {
        self.legal_moves()
            .iter()
            .map(|m| m.notation().to_string())
            .collect()
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    /// Pieces of `color` attacking `square`.
    #[must_use]
    pub fn attackers(&self, square: Square, color: Color) -> Vec<(Square, Piece)> {
        attacks::attackers(&self.board, square, color)
    }

    /// Side to move.
    #[must_use]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Moves made so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Moves made so far in the usual "1. e4 e5 2. Nf3" form.
    #[must_use]
    pub fn transcript(&self) -> String {
        self.log.join(" ")
    }

    /// The longest known opening the transcript starts with.
    #[must_use]
    pub fn opening(&self) -> Option<&Opening> {
        self.labels.last().and_then(Option::as_ref)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn error_policy(&self) -> ErrorPolicy {
        self.policy
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
