//! Crate-wide error taxonomy.
//!
//! Every fallible operation in the engine reports one of these variants so
//! callers can try an alternative move or reject bad input without unwinding.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

pub type ChessResult<T> = Result<T, ChessError>;

/// Represents all error conditions the rules engine can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A square reference was malformed or out of range.
    InvalidSquare(String),
    /// A UCI move string could not be decoded.
    InvalidMoveText(String),
    /// A move was attempted from a square holding no piece.
    NoPieceOnSquare(Square),
    /// A move was attempted with a piece that does not belong to the side to move.
    WrongSideToMove(Square),
    /// A pawn reached the last rank without a promotion piece being supplied.
    MissingPromotion(Square),
    /// The supplied promotion piece is not a queen, rook, bishop, or knight.
    InvalidPromotion(PieceKind),
    /// The position has no king for the given color.
    MissingKing(Color),
    /// The provided FEN string is invalid or could not be parsed.
    InvalidFen(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidSquare(text) => write!(f, "invalid square reference: {text}"),
            ChessError::InvalidMoveText(text) => write!(f, "invalid move text: {text}"),
            ChessError::NoPieceOnSquare(square) => {
                write!(f, "no piece on square {}", square_to_algebraic(*square))
            }
            ChessError::WrongSideToMove(square) => {
                write!(
                    f,
                    "piece on {} does not belong to the side to move",
                    square_to_algebraic(*square)
                )
            }
            ChessError::MissingPromotion(square) => {
                write!(
                    f,
                    "pawn move to {} requires a promotion piece",
                    square_to_algebraic(*square)
                )
            }
            ChessError::InvalidPromotion(kind) => {
                write!(f, "cannot promote to {kind:?}")
            }
            ChessError::MissingKing(color) => write!(f, "no {color:?} king on the board"),
            ChessError::InvalidFen(message) => write!(f, "invalid FEN string: {message}"),
        }
    }
}

impl Error for ChessError {}
