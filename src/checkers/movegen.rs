//! Move generation: for a given piece, finds every reachable destination
//! together with the opponent pieces captured on the way there.
//!
//! A piece steps diagonally onto an adjacent empty square or jumps over an
//! adjacent opponent piece onto the empty square right behind it. After a jump
//! the search continues from the landing square along both diagonals (in the
//! same vertical direction): this is how multi-jump chains are discovered.
//! Only further jumps may extend a chain.
//!
//! The generator does not enforce the mandatory capture rule: plain moves are
//! reported alongside captures and [`crate::checkers::rules`] filters them.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use tracing::trace;

use crate::checkers::board::Board;
use crate::checkers::core::{Cell, Color, Diagonal, Piece, Square, PIECES_PER_SIDE};

/// Opponent pieces captured by a single move, in the order they are jumped.
/// A piece can not capture more pieces than the opponent has.
pub type Captures = ArrayVec<Piece, PIECES_PER_SIDE>;

/// Reachable destinations of a piece, each mapped to the pieces that would be
/// removed if it is chosen (empty for non-capturing moves). Iterated in
/// row-by-row order of destinations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Moves {
    destinations: BTreeMap<Square, Captures>,
}

impl Moves {
    /// Captures made on the way to the destination or [`None`] if it is not
    /// reachable.
    #[must_use]
    pub fn get(&self, destination: Square) -> Option<&Captures> {
        self.destinations.get(&destination)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn contains(&self, destination: Square) -> bool {
        self.destinations.contains_key(&destination)
    }

    #[allow(missing_docs)]
    pub fn iter(&self) -> impl Iterator<Item = (Square, &Captures)> {
        self.destinations
            .iter()
            .map(|(destination, captures)| (*destination, captures))
    }

    #[allow(missing_docs)]
    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.destinations.keys().copied()
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Returns true if at least one destination captures something.
    #[must_use]
    pub fn has_captures(&self) -> bool {
        self.destinations.values().any(|captures| !captures.is_empty())
    }

    /// Drops all non-capturing destinations.
    pub fn retain_captures(&mut self) {
        self.destinations.retain(|_, captures| !captures.is_empty());
    }

    // A later discovery of the same destination takes precedence.
    fn record(&mut self, destination: Square, captures: Captures) {
        if let Some(previous) = self.destinations.insert(destination, captures) {
            trace!(%destination, previous = previous.len(), "destination rediscovered");
        }
    }
}

/// Calculates all destinations reachable by the piece.
///
/// Men only move forward (Light towards row 7, Dark towards row 0), kings
/// search both vertical directions. The board is not modified. A piece without
/// legal destinations yields empty [`Moves`].
///
/// ```
/// use draughts::checkers::board::Board;
/// use draughts::checkers::core::Square;
///
/// let board = Board::try_from("8/8/8/8/3l4/8/1l6/d7").unwrap();
/// let piece = board.at(Square::new(7, 0)).piece().unwrap();
/// let moves = board.valid_moves(&piece);
/// let captured: Vec<Square> = moves
///     .get(Square::new(3, 4))
///     .unwrap()
///     .iter()
///     .map(|piece| piece.square())
///     .collect();
/// assert_eq!(captured, [Square::new(6, 1), Square::new(4, 3)]);
/// ```
#[must_use]
pub fn valid_moves(board: &Board, piece: &Piece) -> Moves {
    let mut moves = Moves::default();
    let steps: ArrayVec<i8, 2> = if piece.is_king() {
        ArrayVec::from([-1, 1])
    } else {
        [piece.color().forward()].into_iter().collect()
    };
    for step in steps {
        for diagonal in Diagonal::BOTH {
            scan(
                board,
                piece.color(),
                piece.square(),
                step,
                diagonal,
                &Captures::new(),
                &mut moves,
            );
        }
    }
    trace!(piece = %piece, destinations = moves.len(), "generated moves");
    moves
}

/// Walks along the diagonal from `origin` in the vertical `step` direction and
/// records what the piece can reach there. `captured` holds the pieces jumped
/// on the way to `origin`: a non-empty chain can only be extended by another
/// jump.
fn scan(
    board: &Board,
    color: Color,
    origin: Square,
    step: i8,
    diagonal: Diagonal,
    captured: &Captures,
    moves: &mut Moves,
) {
    let mut jumped = None;
    // The adjacent square and the landing square behind it.
    for distance in 1..=2 {
        let Some(square) = origin.offset(step * distance, diagonal.columns() * distance) else {
            return;
        };
        match board.at(square) {
            Cell::Empty => {
                match jumped {
                    None if captured.is_empty() => moves.record(square, Captures::new()),
                    // Nothing to jump over.
                    None => (),
                    Some(piece) => {
                        let mut chain = captured.clone();
                        chain.push(piece);
                        moves.record(square, chain.clone());
                        for next in Diagonal::BOTH {
                            scan(board, color, square, step, next, &chain, moves);
                        }
                    },
                }
                return;
            },
            Cell::Occupied(piece) if piece.color() == color => return,
            Cell::Occupied(piece) => jumped = Some(piece),
        }
    }
}
