//! Policy on top of the move generator: captures are mandatory.
//!
//! [`crate::checkers::movegen`] reports every reachable destination. When a
//! side can capture, it has to: non-capturing moves are filtered out here.

use itertools::Itertools;

use crate::checkers::board::Board;
use crate::checkers::core::{Color, Piece};
use crate::checkers::movegen::Moves;

/// Applies the mandatory capture rule to destinations of a single piece: if
/// any of them captures, the plain moves are dropped.
#[must_use]
pub fn mandatory(mut moves: Moves) -> Moves {
    if moves.has_captures() {
        moves.retain_captures();
    }
    moves
}

/// Lists pieces of given color that can move together with their legal
/// destinations. If any piece of that color can capture, only capturing moves
/// are legal for the whole side.
#[must_use]
pub fn legal_moves(board: &Board, color: Color) -> Vec<(Piece, Moves)> {
    let candidates = board
        .pieces(color)
        .map(|piece| (piece, board.valid_moves(&piece)))
        .collect_vec();
    let must_capture = candidates.iter().any(|(_, moves)| moves.has_captures());
    candidates
        .into_iter()
        .filter_map(|(piece, mut moves)| {
            if must_capture {
                moves.retain_captures();
            }
            (!moves.is_empty()).then_some((piece, moves))
        })
        .collect()
}

/// Returns true if the side has at least one legal move.
#[must_use]
pub fn has_moves(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|piece| !board.valid_moves(&piece).is_empty())
}
