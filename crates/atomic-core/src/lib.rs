//! Core types for atomic chess.
//!
//! This crate provides the vocabulary shared by the rules engine:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates and the algebraic mapping
//! - [`Move`] for from/to move pairs
//! - FEN-style board layout parsing

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenParser};
pub use mov::{Move, MoveParseError};
pub use piece::{Piece, PieceKind};
pub use square::Square;
