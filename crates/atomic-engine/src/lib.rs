//! Rules engine for atomic chess.
//!
//! This crate provides:
//! - [`Board`] - the 8×8 grid of pieces
//! - [`Game`] - the board, side to move and outcome of one match
//! - [`RuleSet`] - trait for variant rules, implemented by [`AtomicChess`]
//! - [`movegen`] - per-piece geometry, legality and perft
//!
//! # Atomic chess
//!
//! Every capture triggers an explosion that removes the captured piece,
//! the capturing piece and everything else on the eight surrounding
//! squares. A player wins as soon as the opposing king is gone, whether
//! it was captured directly or caught in a blast. There is no check,
//! castling or en passant.
//!
//! # Example
//!
//! ```
//! use atomic_engine::{Game, GameState};
//!
//! let mut game = Game::new();
//! game.apply("e2", "e4").unwrap();
//! game.apply("e7", "e5").unwrap();
//! assert_eq!(game.state(), GameState::InProgress);
//! assert!(game.apply("e4", "e5").is_err());
//! println!("{}", game.board());
//! ```

mod board;
mod game;
pub mod movegen;
pub mod rules;

pub use board::{Board, EMPTY_GLYPH};
pub use game::{Game, GameError};
pub use movegen::{clear_path, is_legal, legal_moves, perft};
pub use rules::{explode, AtomicChess, GameState, MoveReport, RuleSet};
