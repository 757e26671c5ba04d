//! Errors used throughout the engine.
//!
//! `ChessError` is the single error type returned by parsing utilities, the
//! position model, move generation and the search front-end. Parsing variants
//! are recoverable input errors; `EmptySquare` and `SearchWorker` point at a
//! broken caller or a panicked worker thread.

use thiserror::Error;

use crate::game_state::chess_types::Square;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The FEN record could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A square in algebraic notation (`e4`) was malformed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// A long algebraic move (`e2e4`, `e7e8q`) was malformed or inconsistent
    /// with the position it was read against.
    #[error("invalid move: {0}")]
    InvalidMove(String),

    /// A move was applied from a square that holds no piece.
    #[error("no piece on square {0}")]
    EmptySquare(Square),

    /// An engine option name or value was rejected.
    #[error("invalid option {name}: {reason}")]
    InvalidOption { name: String, reason: String },

    /// The background search thread panicked.
    #[error("search worker failed: {0}")]
    SearchWorker(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
