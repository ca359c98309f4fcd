//! Line-oriented interactive shell for playing through a [`Game`] by hand or
//! from a script.
//!
//! [`Shell::run`] is the main loop: it reads one command per line from the
//! input stream and writes responses to the output stream until `quit` is
//! sent or the input ends. Rejected commands are reported as
//! `error: <message>` and the loop carries on.

use std::io::{BufRead, Write};

use itertools::Itertools;

use crate::chess::board::Board;
use crate::chess::core::{Color, Piece};
use crate::chess::game::Game;
use crate::chess::render::{render, RenderOptions};
use crate::shell::command::Command;

mod command;

const HELP: &str = "\
commands:
  <move> | move <move>          play a move (SAN or coordinates)
  undo                          take back the last move
  moves                         list moves of the side to move
  d                             draw the board
  attackers <square> <color>    pieces of <color> attacking <square>
  piece <square>                piece standing on <square>
  history                       moves played so far
  opening                       name of the opening
  new                           start over from the initial position
  clear                         remove all pieces
  put <color> <piece> <square>  place a piece
  turn [<color>]                show or set the side to move
  version                       build information
  quit                          exit";

/// Connects a [`Game`] to input and output streams.
pub struct Shell<'a, R: BufRead, W: Write> {
    game: Game,
    render: RenderOptions,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Creates the shell around an existing game.
    #[must_use]
    pub fn new(game: Game, render: RenderOptions, input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            game,
            render,
            input,
            output,
        }
    }

    /// Executes commands until `quit` or the end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures end the loop with an error.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "error: {e}")?;
                    continue;
                },
            };
            if command == Command::Quit {
                break;
            }
            self.execute(command)?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Move(notation) => {
                if let Err(e) = self.game.make_move(&notation) {
                    writeln!(self.output, "error: {e}")?;
                }
            },
            Command::Undo => self.game.takeback(),
            Command::Moves => {
                writeln!(self.output, "{}", self.game.legal_notation().join(" "))?;
            },
            Command::Display => {
                writeln!(self.output, "{}", render(self.game.board(), &self.render))?;
            },
            Command::Attackers { square, color } => {
                let attackers = self.game.attackers(square, color);
                if attackers.is_empty() {
                    writeln!(self.output, "none")?;
                } else {
                    writeln!(
                        self.output,
                        "{}",
                        attackers
                            .iter()
                            .map(|(from, piece)| format!("{piece} {from}"))
                            .join(", ")
                    )?;
                }
            },
            Command::Piece(square) => match self.game.piece_at(square) {
                Some(piece) => writeln!(self.output, "{piece}")?,
                None => writeln!(self.output, "empty")?,
            },
            Command::History => writeln!(self.output, "{}", self.game.transcript())?,
            Command::Opening => match self.game.opening() {
                Some(opening) => writeln!(self.output, "{opening}")?,
                None => writeln!(self.output, "unknown")?,
            },
            Command::NewGame => self.game.reset(Board::starting(), Color::White),
            Command::Clear => self.game.reset(Board::empty(), Color::White),
            Command::Put {
                color,
                kind,
                square,
            } => {
                let mut board = self.game.board().clone();
                let _ = board.put(square, Piece::new(kind, color));
                let turn = self.game.turn();
                self.game.reset(board, turn);
            },
            Command::Turn(None) => writeln!(self.output, "{}", self.game.turn())?,
            Command::Turn(Some(color)) => {
                let board = self.game.board().clone();
                self.game.reset(board, color);
            },
            Command::Version => writeln!(self.output, "ply {}", crate::version())?,
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Unknown(command) => {
                writeln!(self.output, "error: unsupported command '{command}'")?;
            },
            Command::Quit | Command::Empty => {},
        }
        Ok(())
    }

    /// The game in its current state.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }
}
