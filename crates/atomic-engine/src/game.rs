//! Game management: the board, the side to move and the outcome.
//!
//! [`Game`] owns the only mutable state of a match. Every mutation goes
//! through [`Game::apply`] or [`Game::apply_move`], which either execute
//! a move completely or return an error without touching anything.

use crate::movegen;
use crate::rules::{AtomicChess, GameState, MoveReport, RuleSet};
use crate::Board;
use atomic_core::{Color, FenError, Move, Piece, Square};
use thiserror::Error;
use tracing::{debug, info};

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A coordinate is not of the form `[a-h][1-8]`.
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),
    /// The move is not legal in the current position.
    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },
    /// The game has already ended.
    #[error("game is over: {0}")]
    GameOver(GameState),
    /// A starting layout could not be parsed.
    #[error("invalid layout: {0}")]
    InvalidLayout(#[from] FenError),
    /// A starting board holds more than one king of a color.
    #[error("{0} has more than one king")]
    TooManyKings(Color),
}

/// A game of atomic chess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting layout, White to move.
    pub fn new() -> Self {
        Game {
            board: AtomicChess.initial_board(),
            turn: Color::White,
            state: GameState::InProgress,
        }
    }

    /// Creates a game from a board and the side to move.
    ///
    /// The state is derived from the board, so a layout missing a king
    /// starts out finished. A board with two kings of one color is
    /// rejected.
    pub fn from_board(board: Board, turn: Color) -> Result<Self, GameError> {
        for color in [Color::White, Color::Black] {
            if board.king_count(color) > 1 {
                return Err(GameError::TooManyKings(color));
            }
        }
        let state = AtomicChess.game_state(&board);
        Ok(Game { board, turn, state })
    }

    /// Creates a game from a FEN layout (`<placement> [w|b]`).
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let (board, turn) = Board::from_fen(fen)?;
        Self::from_board(board, turn)
    }

    /// Returns the layout as `<placement> <w|b>`.
    pub fn to_fen(&self) -> String {
        format!("{} {}", self.board.placement(), self.turn.to_fen_char())
    }

    /// Returns a read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn winner(&self) -> Option<Color> {
        self.state.winner()
    }

    /// Returns the piece on an algebraic square, or `None` if the square
    /// is empty or does not parse.
    pub fn piece_at(&self, square: &str) -> Option<Piece> {
        Square::from_algebraic(square).and_then(|sq| self.board.piece_at(sq))
    }

    /// Returns all legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        AtomicChess.generate_moves(&self.board, self.turn)
    }

    /// Returns true if moving from `from` to `to` is legal for the side
    /// to move. Malformed coordinates are simply illegal.
    pub fn is_legal(&self, from: &str, to: &str) -> bool {
        match (Square::from_algebraic(from), Square::from_algebraic(to)) {
            (Some(from), Some(to)) => self.is_legal_move(Move::new(from, to)),
            _ => false,
        }
    }

    /// Typed counterpart of [`Game::is_legal`].
    pub fn is_legal_move(&self, m: Move) -> bool {
        movegen::is_legal(&self.board, self.turn, m)
    }

    /// Plays a move given as two algebraic coordinates (e.g. "e2", "e4").
    pub fn apply(&mut self, from: &str, to: &str) -> Result<(), GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver(self.state));
        }
        let from_sq =
            Square::from_algebraic(from).ok_or_else(|| GameError::InvalidSquare(from.to_string()))?;
        let to_sq =
            Square::from_algebraic(to).ok_or_else(|| GameError::InvalidSquare(to.to_string()))?;
        self.apply_move(Move::new(from_sq, to_sq)).map(|_| ())
    }

    /// Plays a move, returning what it captured, exploded or promoted.
    pub fn apply_move(&mut self, m: Move) -> Result<MoveReport, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver(self.state));
        }

        let Some(report) = AtomicChess.try_make_move(&mut self.board, self.turn, m) else {
            debug!(mv = %m, turn = %self.turn, "illegal move rejected");
            return Err(GameError::IllegalMove {
                from: m.from(),
                to: m.to(),
            });
        };
        debug!(mv = %m, turn = %self.turn, captured = report.captured.is_some(), "move played");

        self.state = AtomicChess.game_state(&self.board);
        if self.state.is_over() {
            info!(mv = %m, state = %self.state, "game over");
        } else {
            self.turn = self.turn.opposite();
        }

        Ok(report)
    }
}
