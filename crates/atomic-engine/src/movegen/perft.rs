//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth. Positions
//! where a king has been destroyed are leaves: they are counted once and
//! never expanded.

use super::legal_moves;
use crate::rules::{AtomicChess, GameState, RuleSet};
use crate::Board;
use atomic_core::Color;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(board: &Board, turn: Color, depth: u32) -> u64 {
    if depth == 0 || AtomicChess.game_state(board) != GameState::InProgress {
        return 1;
    }

    let moves = legal_moves(board, turn);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in moves {
        let mut next = board.clone();
        AtomicChess.make_move(&mut next, m);
        nodes += perft(&next, turn.opposite(), depth - 1);
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(board: &Board, turn: Color, depth: u32) -> Vec<(String, u64)> {
    let moves = legal_moves(board, turn);
    let mut results = Vec::with_capacity(moves.len());

    for m in moves {
        let mut next = board.clone();
        AtomicChess.make_move(&mut next, m);
        let nodes = if depth > 1 {
            perft(&next, turn.opposite(), depth - 1)
        } else {
            1
        };
        results.push((m.to_coords(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
