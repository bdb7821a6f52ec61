//! This module contains the error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};

/// An enumeration of the errors that may occur when parsing a puzzle line
/// with [Board::parse](crate::Board::parse).
#[derive(Debug, Eq, PartialEq)]
pub enum PuzzleParseError {

    /// Indicates that the input does not consist of exactly 81 characters,
    /// one per cell. The wrapped number is the length that was actually
    /// found.
    WrongLength(usize),

    /// Indicates that the input contains a character which neither specifies
    /// a digit (`'1'` to `'9'`) nor marks an open cell (`'.'` or `'0'`). The
    /// wrapped character is the offending one.
    InvalidCharacter(char)
}

impl Display for PuzzleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleParseError::WrongLength(length) =>
                write!(f, "expected 81 characters, but found {}", length),
            PuzzleParseError::InvalidCharacter(symbol) =>
                write!(f, "invalid character {:?} in puzzle line", symbol)
        }
    }
}

/// Syntactic sugar for `Result<V, PuzzleParseError>`.
pub type ParseResult<V> = Result<V, PuzzleParseError>;

/// The error raised by the propagator when some cell has run out of
/// candidates, meaning the board in question cannot be completed. This is an
/// expected outcome on the failing branches of the search, not a fault, so it
/// carries no further information.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Contradiction;

/// Syntactic sugar for `Result<V, Contradiction>`.
pub type InferenceResult<V> = Result<V, Contradiction>;
