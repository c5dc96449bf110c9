//! Rule set abstraction.
//!
//! The [`RuleSet`] trait separates the rules of a variant from the game
//! bookkeeping in [`Game`](crate::Game). [`AtomicChess`] is the only
//! implementation.

mod atomic;

pub use atomic::{explode, AtomicChess, MoveReport};

use crate::Board;
use atomic_core::{Color, Move};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Both kings are still on the board.
    #[default]
    InProgress,
    /// Black's king has been destroyed.
    WhiteWon,
    /// White's king has been destroyed.
    BlackWon,
}

impl GameState {
    /// Returns true once either side has won.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    /// Returns the winning color, if any.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameState::InProgress => None,
            GameState::WhiteWon => Some(Color::White),
            GameState::BlackWon => Some(Color::Black),
        }
    }

    /// The state in which `color` has won.
    pub const fn won_by(color: Color) -> Self {
        match color {
            Color::White => GameState::WhiteWon,
            Color::Black => GameState::BlackWon,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::InProgress => write!(f, "in progress"),
            GameState::WhiteWon => write!(f, "White won"),
            GameState::BlackWon => write!(f, "Black won"),
        }
    }
}

/// Trait for implementing chess variants.
pub trait RuleSet {
    /// Returns the initial board for this variant.
    fn initial_board(&self) -> Board;

    /// Generates all legal moves for `turn`.
    fn generate_moves(&self, board: &Board, turn: Color) -> Vec<Move>;

    /// Returns true if the given move is legal for `turn`.
    fn is_legal(&self, board: &Board, turn: Color, m: Move) -> bool;

    /// Executes a move in place.
    ///
    /// The move must already be known to be legal; an illegal move
    /// leaves the board in an unspecified (but valid) state.
    fn make_move(&self, board: &mut Board, m: Move) -> MoveReport;

    /// Attempts to make a move, returning `None` and leaving the board
    /// untouched if the move is illegal.
    fn try_make_move(&self, board: &mut Board, turn: Color, m: Move) -> Option<MoveReport> {
        if self.is_legal(board, turn, m) {
            Some(self.make_move(board, m))
        } else {
            None
        }
    }

    /// Derives the game state from the pieces on the board.
    fn game_state(&self, board: &Board) -> GameState;
}
