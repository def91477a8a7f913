//! Implementation of draughts rules: the board, move generation and the
//! mandatory capture policy.

pub mod board;
pub mod core;
pub mod movegen;
pub mod rules;
