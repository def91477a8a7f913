//! The Grid Model: an 8x8 mailbox of [`Cell`]s together with the number of
//! live pieces per side.
//!
//! [`Board`] has 1:1 relationship with a compact FEN-like notation: eight rows
//! listed from row 0 to row 7 and separated by `/`. Within a row `l` and `d`
//! are Light and Dark men, `L` and `D` are kings and digits are runs of empty
//! cells. The starting position is
//! `1l1l1l1l/l1l1l1l1/1l1l1l1l/8/8/d1d1d1d1/1d1d1d1d/d1d1d1d1`.

use std::fmt;

use anyhow::bail;
use tracing::{debug, trace};

use crate::checkers::core::{Cell, Color, Piece, Square, BOARD_WIDTH, PIECES_PER_SIDE};
use crate::checkers::movegen::{self, Moves};

/// Men are placed on the playable squares of this many rows nearest to each
/// side's baseline.
const STARTING_ROWS: u8 = 3;

/// Piece placement and per-side counters. The board is mutated in place for
/// the whole game: pieces are created by [`Board::starting`] (or the
/// notation parser) and destroyed only by [`Board::remove`].
///
/// Mutation trusts its caller: the destinations and captures should come from
/// [`Board::valid_moves`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
    light_remaining: u8,
    dark_remaining: u8,
    light_kings: u8,
    dark_kings: u8,
    placed: u32,
}

impl Board {
    /// Creates a board without any pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
            light_remaining: 0,
            dark_remaining: 0,
            light_kings: 0,
            dark_kings: 0,
            placed: 0,
        }
    }

    /// Creates the starting position: 12 men per side on the playable squares
    /// of the three rows nearest to each side's baseline.
    ///
    /// ```
    /// use draughts::checkers::board::Board;
    /// use draughts::checkers::core::Color;
    ///
    /// let board = Board::starting();
    /// assert_eq!(board.remaining(Color::Light), 12);
    /// assert_eq!(board.remaining(Color::Dark), 12);
    /// assert_eq!(
    ///     board.to_string(),
    ///     "1l1l1l1l/l1l1l1l1/1l1l1l1l/8/8/d1d1d1d1/1d1d1d1d/d1d1d1d1"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for square in Square::iter().filter(|square| square.is_playable()) {
            if square.row() < STARTING_ROWS {
                board.put(Piece::new(Color::Light, square));
            } else if square.row() >= BOARD_WIDTH - STARTING_ROWS {
                board.put(Piece::new(Color::Dark, square));
            }
        }
        board
    }

    /// Places a piece on an empty playable square and accounts for it.
    ///
    /// # Panics
    ///
    /// The square has to be playable and empty.
    pub fn put(&mut self, piece: Piece) {
        let square = piece.square();
        assert!(
            square.is_playable(),
            "pieces can only be placed on playable squares, got {square}"
        );
        assert!(
            self.at(square).is_empty(),
            "can't put piece to already occupied square {square}"
        );
        let piece = piece.numbered(self.placed);
        self.placed = self.placed.wrapping_add(1);
        *self.cell_mut(square) = Cell::Occupied(piece);
        *self.remaining_mut(piece.color()) += 1;
        if piece.is_king() {
            *self.kings_mut(piece.color()) += 1;
        }
    }

    /// Returns contents of the cell at given coordinates.
    ///
    /// # Panics
    ///
    /// Coordinates outside of `0..8` are a programming error.
    #[must_use]
    pub fn get(&self, row: u8, col: u8) -> Cell {
        self.at(Square::new(row, col))
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn at(&self, square: Square) -> Cell {
        self.cells[square.row() as usize][square.col() as usize]
    }

    fn cell_mut(&mut self, square: Square) -> &mut Cell {
        &mut self.cells[square.row() as usize][square.col() as usize]
    }

    /// Number of live pieces of given color.
    #[must_use]
    pub const fn remaining(&self, color: Color) -> u8 {
        match color {
            Color::Light => self.light_remaining,
            Color::Dark => self.dark_remaining,
        }
    }

    /// Number of crowned pieces of given color. Captured kings are not
    /// subtracted: this counts crownings, not live kings.
    #[must_use]
    pub const fn kings(&self, color: Color) -> u8 {
        match color {
            Color::Light => self.light_kings,
            Color::Dark => self.dark_kings,
        }
    }

    fn remaining_mut(&mut self, color: Color) -> &mut u8 {
        match color {
            Color::Light => &mut self.light_remaining,
            Color::Dark => &mut self.dark_remaining,
        }
    }

    fn kings_mut(&mut self, color: Color) -> &mut u8 {
        match color {
            Color::Light => &mut self.light_kings,
            Color::Dark => &mut self.dark_kings,
        }
    }

    /// Iterates over live pieces of given color, row by row.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        Square::iter()
            .filter_map(|square| self.at(square).piece())
            .filter(move |piece| piece.color() == color)
    }

    /// Calculates destinations reachable by the piece, see
    /// [`movegen::valid_moves`].
    #[must_use]
    pub fn valid_moves(&self, piece: &Piece) -> Moves {
        movegen::valid_moves(self, piece)
    }

    /// Moves the piece to the destination, leaving its source cell empty. A
    /// man landing on its color's promotion row is crowned. Returns the
    /// updated piece.
    ///
    /// The move is not validated: legality is [`Board::valid_moves`]'s
    /// contract.
    pub fn move_piece(&mut self, piece: &Piece, to: Square) -> Piece {
        let from = piece.square();
        debug_assert_eq!(
            self.at(from),
            Cell::Occupied(*piece),
            "moved piece should be on the board"
        );
        debug_assert!(self.at(to).is_empty(), "destination {to} should be empty");
        let mut moved = *piece;
        moved.relocate(to);
        if !moved.is_king() && to.row() == moved.color().promotion_row() {
            moved.crown();
            *self.kings_mut(moved.color()) += 1;
            debug!(color = %moved.color(), square = %to, "crowned");
        }
        *self.cell_mut(from) = Cell::Empty;
        *self.cell_mut(to) = Cell::Occupied(moved);
        debug!(%from, %to, "moved piece");
        moved
    }

    /// Removes captured pieces from the board. A cell that no longer holds the
    /// captured piece is left alone: removing the same piece twice does not
    /// change the counters and a piece that has since moved onto the square
    /// survives.
    pub fn remove(&mut self, pieces: &[Piece]) {
        for piece in pieces {
            let square = piece.square();
            match self.at(square) {
                Cell::Occupied(current) if current == *piece => {
                    *self.cell_mut(square) = Cell::Empty;
                    *self.remaining_mut(piece.color()) -= 1;
                    debug!(%square, color = %piece.color(), "removed piece");
                },
                _ => trace!(%square, "nothing to remove"),
            }
        }
    }

    /// Performs a complete move: relocates the piece and removes everything it
    /// captured on the way.
    pub fn apply(&mut self, piece: &Piece, to: Square, captures: &[Piece]) -> Piece {
        let moved = self.move_piece(piece, to);
        self.remove(captures);
        moved
    }

    /// Returns the side that has captured all of the opponent's pieces.
    ///
    /// Light is checked first: if both sides ran out of pieces, Light is
    /// reported.
    #[must_use]
    pub const fn winner(&self) -> Option<Color> {
        if self.dark_remaining == 0 {
            Some(Color::Light)
        } else if self.light_remaining == 0 {
            Some(Color::Dark)
        } else {
            None
        }
    }

    /// Parses the board from its notation. Surrounding whitespace is not
    /// accepted here but is trimmed by [`Board::try_from`].
    ///
    /// # Errors
    ///
    /// Returns [`anyhow::Error`] if the notation is malformed or describes an
    /// impossible placement: a piece on a non-playable square, more than 12
    /// pieces of one side or a man standing on its own promotion row.
    pub fn from_notation(input: &str) -> anyhow::Result<Self> {
        let mut board = Self::empty();
        let mut row: u8 = 0;
        for row_notation in input.split('/') {
            if row == BOARD_WIDTH {
                bail!("incorrect notation: expected {BOARD_WIDTH} rows, got {input}");
            }
            let mut col: u8 = 0;
            for symbol in row_notation.chars() {
                if col >= BOARD_WIDTH {
                    bail!("incorrect notation: row {row} is wider than {BOARD_WIDTH}");
                }
                match symbol {
                    '0' => bail!("increment can not be 0"),
                    '1'..='8' => {
                        col += symbol as u8 - b'0';
                        continue;
                    },
                    _ => (),
                }
                let square = Square::new(row, col);
                let piece = Piece::from_symbol(symbol, square)?;
                if !square.is_playable() {
                    bail!("pieces can only stand on playable squares, got {piece}");
                }
                if !piece.is_king() && row == piece.color().promotion_row() {
                    bail!("men can not stand on their promotion row, got {piece}");
                }
                board.put(piece);
                col += 1;
            }
            if col != BOARD_WIDTH {
                bail!(
                    "incorrect notation: row size should be exactly {BOARD_WIDTH}, got \
                     {row_notation} of length {col}"
                );
            }
            row += 1;
        }
        if row != BOARD_WIDTH {
            bail!("incorrect notation: there should be {BOARD_WIDTH} rows, got {input}");
        }
        for color in [Color::Light, Color::Dark] {
            let count = board.remaining(color);
            if usize::from(count) > PIECES_PER_SIDE {
                bail!("expected <= {PIECES_PER_SIDE} {color} pieces, got {count}");
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl TryFrom<&str> for Board {
    type Error = anyhow::Error;

    fn try_from(input: &str) -> anyhow::Result<Self> {
        Self::from_notation(input.trim())
    }
}

impl fmt::Display for Board {
    /// Prints the board in its compact notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            let mut empty_cells = 0;
            for cell in cells {
                match cell {
                    Cell::Empty => empty_cells += 1,
                    Cell::Occupied(piece) => {
                        if empty_cells != 0 {
                            write!(f, "{empty_cells}")?;
                            empty_cells = 0;
                        }
                        write!(f, "{}", piece.symbol())?;
                    },
                }
            }
            if empty_cells != 0 {
                write!(f, "{empty_cells}")?;
            }
            if row + 1 != usize::from(BOARD_WIDTH) {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Prints a human-readable grid with row and column indices.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{row}")?;
            for cell in cells {
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "Light: {} left, {} crowned",
            self.light_remaining, self.light_kings
        )?;
        writeln!(
            f,
            "Dark: {} left, {} crowned",
            self.dark_remaining, self.dark_kings
        )?;
        writeln!(f, "Notation: {self}")
    }
}
