//! Draughts primitives commonly used within [`crate::checkers`].

use std::fmt::{self, Write};

use anyhow::{bail, Context};
use itertools::Itertools;

/// Number of rows (and columns) of the board.
pub const BOARD_WIDTH: u8 = 8;
/// Each side starts the game with this many men.
pub const PIECES_PER_SIDE: usize = 12;

/// The game is played between two sides. Light starts at the top of the board
/// (rows 0 to 2) and advances towards row 7, Dark starts at the bottom (rows 5
/// to 7) and advances towards row 0.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Vertical step (row delta) in which men of this color advance.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Self::Light => 1,
            Self::Dark => -1,
        }
    }

    /// The row farthest from this color's baseline: a man reaching it is
    /// crowned.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Self::Light => BOARD_WIDTH - 1,
            Self::Dark => 0,
        }
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(color: &str) -> anyhow::Result<Self> {
        match color {
            "light" | "l" => Ok(Self::Light),
            "dark" | "d" => Ok(Self::Dark),
            _ => bail!("color should be 'light' or 'dark', got '{color}'"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// A cell of the 8x8 grid. Row 0 is the top row (Light's baseline), column 0
/// is the leftmost column.
///
/// ```
/// use draughts::checkers::core::Square;
///
/// let square = Square::new(5, 2);
/// assert_eq!(square.to_string(), "(5,2)");
/// assert!(square.is_playable());
/// assert_eq!(Square::try_from("5,2").unwrap(), square);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Connects row and column to form a square.
    ///
    /// # Panics
    ///
    /// Out-of-range coordinates are a programming error.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(
            row < BOARD_WIDTH && col < BOARD_WIDTH,
            "square coordinates should be within 0..BOARD_WIDTH"
        );
        Self { row, col }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Pieces can only stand on the dark diagonal squares, the ones where
    /// `row + col` is odd.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Returns the square shifted by given number of rows and columns or
    /// [`None`] if it falls off the board.
    #[must_use]
    pub fn offset(self, rows: i8, cols: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(rows)?;
        let col = self.col.checked_add_signed(cols)?;
        (row < BOARD_WIDTH && col < BOARD_WIDTH).then_some(Self { row, col })
    }

    /// Iterates over all squares of the board, row by row.
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..BOARD_WIDTH)
            .cartesian_product(0..BOARD_WIDTH)
            .map(|(row, col)| Self { row, col })
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = anyhow::Error;

    fn try_from((row, col): (u8, u8)) -> anyhow::Result<Self> {
        if row >= BOARD_WIDTH || col >= BOARD_WIDTH {
            bail!("square coordinates should be within 0..{BOARD_WIDTH}, got ({row},{col})");
        }
        Ok(Self { row, col })
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    /// Parses `row,col` (optionally wrapped in parentheses).
    fn try_from(square: &str) -> anyhow::Result<Self> {
        let inner = square.trim().trim_start_matches('(').trim_end_matches(')');
        let Some((row, col)) = inner.split_once(',') else {
            bail!("square should be in 'row,col' format, got '{square}'");
        };
        let row = row
            .trim()
            .parse::<u8>()
            .with_context(|| format!("incorrect square row: '{square}'"))?;
        let col = col
            .trim()
            .parse::<u8>()
            .with_context(|| format!("incorrect square column: '{square}'"))?;
        Self::try_from((row, col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One of the two diagonals going through a square in a given vertical
/// direction.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Diagonal {
    Left,
    Right,
}

impl Diagonal {
    /// Both diagonals, left first.
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// Column delta of a single step along the diagonal.
    #[must_use]
    pub const fn columns(self) -> i8 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

/// A snapshot of a piece standing on the board. The board owns the canonical
/// copy and hands out snapshots for the duration of a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    square: Square,
    color: Color,
    king: bool,
    // Assigned by the board when the piece is placed. Two men of the same
    // color on the same square are still different pieces.
    serial: u32,
}

impl Piece {
    /// Creates an uncrowned man.
    #[must_use]
    pub const fn new(color: Color, square: Square) -> Self {
        Self {
            square,
            color,
            king: false,
            serial: 0,
        }
    }

    /// Creates a king.
    #[must_use]
    pub const fn king(color: Color, square: Square) -> Self {
        Self {
            square,
            color,
            king: true,
            serial: 0,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.square.row
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn col(&self) -> u8 {
        self.square.col
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_king(&self) -> bool {
        self.king
    }

    pub(super) fn relocate(&mut self, square: Square) {
        self.square = square;
    }

    #[must_use]
    pub(super) const fn numbered(mut self, serial: u32) -> Self {
        self.serial = serial;
        self
    }

    pub(super) fn crown(&mut self) {
        self.king = true;
    }

    pub(super) fn from_symbol(symbol: char, square: Square) -> anyhow::Result<Self> {
        match symbol {
            'l' => Ok(Self::new(Color::Light, square)),
            'L' => Ok(Self::king(Color::Light, square)),
            'd' => Ok(Self::new(Color::Dark, square)),
            'D' => Ok(Self::king(Color::Dark, square)),
            _ => bail!("piece symbol should be within \"lLdD\", got '{symbol}'"),
        }
    }

    pub(super) const fn symbol(&self) -> char {
        match (self.color, self.king) {
            (Color::Light, false) => 'l',
            (Color::Light, true) => 'L',
            (Color::Dark, false) => 'd',
            (Color::Dark, true) => 'D',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol(), self.square)
    }
}

/// Contents of a single grid cell.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Self::Empty => None,
            Self::Occupied(piece) => Some(piece),
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match self {
            Self::Empty => '.',
            Self::Occupied(piece) => piece.symbol(),
        })
    }
}
