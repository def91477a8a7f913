//! The engine drives a game through a line-oriented text protocol: it keeps
//! track of whose turn it is, lists legal moves (with captures being
//! mandatory) and applies the ones the player picks.
//!
//! [`Engine::run`] is the "main loop" which reads commands from the input
//! stream and writes responses to the output.
//!
//! | Command | Response |
//! | ------- | -------- |
//! | `id` | `id name ...`, `id author ...` |
//! | `new` | Resets the game, Dark moves first |
//! | `position startpos [color]` | Resets the board |
//! | `position <notation> [color]` | Sets the board from its notation |
//! | `d` | Board diagram and the side to move |
//! | `moves [row,col]` | `move (r,c) -> (r,c) [captures (r,c) ...]` per move |
//! | `play row,col row,col` | `played ...` and `winner <color>` if decided |
//! | `winner` | `winner light`, `winner dark` or `winner none` |
//! | `quit` | Stops the loop |

use std::io::{BufRead, Write};

use anyhow::Context;
use itertools::Itertools;
use tracing::{debug, info};

use crate::checkers::board::Board;
use crate::checkers::core::{Color, Piece, Square};
use crate::checkers::rules;
use crate::engine::protocol::Command;

mod protocol;

/// Dark traditionally makes the first move.
const FIRST_TO_MOVE: Color = Color::Dark;

/// The Engine connects the board with the player: it handles commands and
/// performs I/O.
pub struct Engine<'a, R: BufRead, W: Write> {
    board: Board,
    side_to_move: Color,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Engine<'a, R, W> {
    /// Creates a new instance of the engine with starting position and provided
    /// I/O.
    #[must_use]
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            board: Board::starting(),
            side_to_move: FIRST_TO_MOVE,
            input,
            output,
        }
    }

    /// Replaces the board and the side to move.
    #[must_use]
    pub fn with_position(mut self, board: Board, side_to_move: Color) -> Self {
        self.board = board;
        self.side_to_move = side_to_move;
        self
    }

    /// Continuously reads the input stream and executes commands until `quit`
    /// is sent or the input is exhausted.
    ///
    /// Malformed and unknown commands are reported with an `info string` line
    /// and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`anyhow::Error`] if reading the input or writing the output
    /// fails.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("reading engine input")?;
            if read == 0 {
                break;
            }
            let command = Command::parse(&line);
            debug!(?command, "received command");
            match command {
                Command::Id => self.handle_id()?,
                Command::NewGame => self.handle_new_game(),
                Command::SetPosition {
                    notation,
                    side_to_move,
                } => self.handle_position(notation.as_deref(), side_to_move)?,
                Command::Display => self.handle_display()?,
                Command::Moves { from } => self.handle_moves(from)?,
                Command::Play { from, to } => self.handle_play(from, to)?,
                Command::Winner => self.handle_winner()?,
                Command::Quit => break,
                Command::Unknown(command) => {
                    writeln!(self.output, "info string Unsupported command: {command}")?;
                },
            }
            self.output.flush()?;
        }
        Ok(())
    }

    /// Identifies the engine.
    fn handle_id(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "id name {} {}",
            env!("CARGO_PKG_NAME"),
            crate::engine_version()
        )?;
        writeln!(self.output, "id author {}", env!("CARGO_PKG_AUTHORS"))?;
        Ok(())
    }

    fn handle_new_game(&mut self) {
        self.board = Board::starting();
        self.side_to_move = FIRST_TO_MOVE;
    }

    fn handle_position(
        &mut self,
        notation: Option<&str>,
        side_to_move: Option<Color>,
    ) -> anyhow::Result<()> {
        let board = match notation {
            None => Board::starting(),
            Some(notation) => match Board::try_from(notation) {
                Ok(board) => board,
                Err(e) => {
                    writeln!(self.output, "info string Error reading the position: {e}")?;
                    return Ok(());
                },
            },
        };
        self.board = board;
        self.side_to_move = side_to_move.unwrap_or(FIRST_TO_MOVE);
        Ok(())
    }

    fn handle_display(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{:?}", self.board)?;
        writeln!(self.output, "Side to move: {}", self.side_to_move)?;
        Ok(())
    }

    /// Lists legal moves of the side to move, optionally only the ones of the
    /// piece standing on `from`.
    fn handle_moves(&mut self, from: Option<Square>) -> anyhow::Result<()> {
        let legal = rules::legal_moves(&self.board, self.side_to_move);
        let mut listed = 0;
        for (piece, moves) in legal
            .iter()
            .filter(|(piece, _)| from.map_or(true, |from| piece.square() == from))
        {
            for (to, captures) in moves.iter() {
                writeln!(
                    self.output,
                    "move {} -> {to}{}",
                    piece.square(),
                    format_captures(captures)
                )?;
                listed += 1;
            }
        }
        if listed == 0 {
            writeln!(self.output, "info string No legal moves")?;
        }
        Ok(())
    }

    fn handle_play(&mut self, from: Square, to: Square) -> anyhow::Result<()> {
        if self.board.winner().is_some() {
            writeln!(self.output, "info string The game is over")?;
            return Ok(());
        }
        let legal = rules::legal_moves(&self.board, self.side_to_move);
        let Some((piece, captures)) = legal.iter().find_map(|(piece, moves)| {
            (piece.square() == from)
                .then(|| moves.get(to))
                .flatten()
                .map(|captures| (*piece, captures))
        }) else {
            writeln!(
                self.output,
                "info string Illegal move for {}: {from} -> {to}",
                self.side_to_move
            )?;
            return Ok(());
        };
        let moved = self.board.apply(&piece, to, captures);
        info!(%from, %to, captured = captures.len(), king = moved.is_king(), "played");
        writeln!(self.output, "played {from} -> {to}{}", format_captures(captures))?;
        self.side_to_move = self.side_to_move.opponent();
        if let Some(winner) = self.board.winner() {
            writeln!(self.output, "winner {winner}")?;
        }
        Ok(())
    }

    fn handle_winner(&mut self) -> anyhow::Result<()> {
        match self.board.winner() {
            Some(winner) => writeln!(self.output, "winner {winner}")?,
            None => writeln!(self.output, "winner none")?,
        }
        Ok(())
    }
}

fn format_captures(captures: &[Piece]) -> String {
    if captures.is_empty() {
        String::new()
    } else {
        format!(
            " captures {}",
            captures.iter().map(Piece::square).join(" ")
        )
    }
}
