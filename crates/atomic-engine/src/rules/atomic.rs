//! Atomic chess rules implementation.

use super::{GameState, RuleSet};
use crate::movegen;
use crate::Board;
use atomic_core::{Color, Move, Piece, PieceKind, Square};
use tracing::debug;

/// Atomic chess rules.
///
/// Standard piece movement without castling or en passant, plus:
/// - every capture explodes, clearing the 3×3 block around the target
///   square, capturing piece included
/// - a pawn reaching the last rank without capturing becomes a queen
/// - a side loses as soon as its king leaves the board
/// - there is no check; kings may stand anywhere
#[derive(Debug, Clone, Copy, Default)]
pub struct AtomicChess;

/// What happened when a move was executed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveReport {
    /// The piece that stood on the target square before the move.
    pub captured: Option<Piece>,
    /// Every piece removed by the explosion, capturer included.
    pub exploded: Vec<(Square, Piece)>,
    /// True if a pawn was promoted to a queen.
    pub promoted: bool,
}

impl MoveReport {
    /// Returns the kings destroyed by this move.
    pub fn destroyed_kings(&self) -> impl Iterator<Item = Color> + '_ {
        self.exploded
            .iter()
            .filter(|(_, piece)| piece.is_king())
            .map(|(_, piece)| piece.color)
    }
}

/// Clears every occupied square in the 3×3 block centred on `center`,
/// skipping squares off the board. Returns the removed pieces.
///
/// The blast is evaluated once over the current neighbourhood and never
/// chains into further explosions.
pub fn explode(board: &mut Board, center: Square) -> Vec<(Square, Piece)> {
    let mut removed = Vec::with_capacity(9);
    for drow in -1..=1 {
        for dcol in -1..=1 {
            let Some(sq) = center.offset(drow, dcol) else {
                continue;
            };
            if let Some(piece) = board.take(sq) {
                removed.push((sq, piece));
            }
        }
    }
    removed
}

impl RuleSet for AtomicChess {
    fn initial_board(&self) -> Board {
        Board::startpos()
    }

    fn generate_moves(&self, board: &Board, turn: Color) -> Vec<Move> {
        movegen::legal_moves(board, turn)
    }

    fn is_legal(&self, board: &Board, turn: Color, m: Move) -> bool {
        movegen::is_legal(board, turn, m)
    }

    fn make_move(&self, board: &mut Board, m: Move) -> MoveReport {
        let Some(piece) = board.take(m.from()) else {
            return MoveReport::default();
        };
        let captured = board.piece_at(m.to());
        board.put(m.to(), piece);

        let mut report = MoveReport {
            captured,
            ..MoveReport::default()
        };

        if captured.is_some() {
            report.exploded = explode(board, m.to());
            debug!(
                center = %m.to(),
                exploded = ?report.exploded,
                "capture exploded"
            );
            for color in report.destroyed_kings() {
                debug!(%color, "king destroyed");
            }
        } else if piece.kind == PieceKind::Pawn && m.to().row() == piece.color.promotion_row() {
            board.put(m.to(), Piece::new(PieceKind::Queen, piece.color));
            report.promoted = true;
            debug!(square = %m.to(), color = %piece.color, "pawn promoted");
        }

        report
    }

    fn game_state(&self, board: &Board) -> GameState {
        if !board.has_king(Color::White) {
            GameState::BlackWon
        } else if !board.has_king(Color::Black) {
            GameState::WhiteWon
        } else {
            GameState::InProgress
        }
    }
}
