//! Move representation.

use crate::Square;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing coordinate-notation moves.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid move: expected 4 characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid square in move: {0}")]
    InvalidSquare(String),
}

/// A move request: a piece on `from` goes to `to`.
///
/// Atomic chess without castling or en passant needs no move flags;
/// promotion is always to a queen and is decided when the move executes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Parses a move from coordinate notation (e.g., "e2e4").
    pub fn from_coords(s: &str) -> Result<Self, MoveParseError> {
        if !s.is_ascii() {
            return Err(MoveParseError::InvalidSquare(s.to_string()));
        }
        if s.len() != 4 {
            return Err(MoveParseError::InvalidLength(s.len()));
        }
        let (from, to) = s.split_at(2);
        let from = Square::from_algebraic(from)
            .ok_or_else(|| MoveParseError::InvalidSquare(from.to_string()))?;
        let to = Square::from_algebraic(to)
            .ok_or_else(|| MoveParseError::InvalidSquare(to.to_string()))?;
        Ok(Move { from, to })
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4").
    pub fn to_coords(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_coords())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coords())
    }
}
