//! Move legality and enumeration.
//!
//! Legality is decided square pair by square pair: the mover must belong
//! to the side to move, must not land on a friendly piece, and must follow
//! its own geometric pattern. Nothing here asks whether the mover's king
//! is left exposed; in atomic chess kings only fall to explosions or to
//! direct capture.

mod perft;

pub use perft::{perft, perft_divide};

use crate::Board;
use atomic_core::{Color, Move, Piece, PieceKind, Square};

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// The squares must share a row, column, or diagonal; for any other pair
/// the walk runs off the board and the path counts as blocked. Adjacent
/// squares are trivially clear.
pub fn clear_path(board: &Board, from: Square, to: Square) -> bool {
    let (drow, dcol) = from.delta_to(to);
    let step = (drow.signum(), dcol.signum());

    let mut current = from.offset(step.0, step.1);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(step.0, step.1);
    }
    // Walked off the board: the endpoints are not aligned.
    false
}

/// Returns true if the geometric pattern from `from` to `to` suits `piece`.
///
/// Assumes `piece` stands on `from` and the target holds no friendly
/// piece; pawns and sliders inspect the board for their own needs.
pub fn pattern_allows(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_move(board, piece.color, from, to),
        PieceKind::Knight => knight_move(from, to),
        PieceKind::Bishop => bishop_move(board, from, to),
        PieceKind::Rook => rook_move(board, from, to),
        PieceKind::Queen => rook_move(board, from, to) || bishop_move(board, from, to),
        PieceKind::King => king_move(from, to),
    }
}

fn pawn_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let direction = color.pawn_direction();
    let (drow, dcol) = from.delta_to(to);

    if dcol == 0 {
        if drow == direction {
            return board.is_empty(to);
        }
        if drow == 2 * direction && from.row() == color.pawn_start_row() {
            let skipped = from.offset(direction, 0);
            return skipped.is_some_and(|sq| board.is_empty(sq)) && board.is_empty(to);
        }
        return false;
    }

    dcol.abs() == 1
        && drow == direction
        && board.piece_at(to).is_some_and(|target| target.color != color)
}

fn knight_move(from: Square, to: Square) -> bool {
    let (drow, dcol) = from.delta_to(to);
    matches!((drow.abs(), dcol.abs()), (1, 2) | (2, 1))
}

fn bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let (drow, dcol) = from.delta_to(to);
    drow != 0 && drow.abs() == dcol.abs() && clear_path(board, from, to)
}

fn rook_move(board: &Board, from: Square, to: Square) -> bool {
    let (drow, dcol) = from.delta_to(to);
    (drow == 0) != (dcol == 0) && clear_path(board, from, to)
}

fn king_move(from: Square, to: Square) -> bool {
    let (drow, dcol) = from.delta_to(to);
    from != to && drow.abs() <= 1 && dcol.abs() <= 1
}

/// Returns true if `m` is legal for `turn` on `board`.
///
/// Checks, in order: the source holds a piece of the side to move, the
/// target holds no piece of that side, and the piece's pattern allows the
/// move. Capturing the opposing king is legal. Never mutates the board.
pub fn is_legal(board: &Board, turn: Color, m: Move) -> bool {
    let Some(piece) = board.piece_at(m.from()) else {
        return false;
    };
    if piece.color != turn {
        return false;
    }
    if board.piece_at(m.to()).is_some_and(|target| target.color == turn) {
        return false;
    }
    pattern_allows(board, piece, m.from(), m.to())
}

/// Lists every legal move for `turn`, ordered by source then target square.
pub fn legal_moves(board: &Board, turn: Color) -> Vec<Move> {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == turn)
        .flat_map(|(from, _)| Square::all().map(move |to| Move::new(from, to)))
        .filter(|&m| is_legal(board, turn, m))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn mv(from: &str, to: &str) -> Move {
        Move::new(sq(from), sq(to))
    }

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap().0
    }

    #[test]
    fn clear_path_on_open_lines() {
        let b = board("8/8/8/8/8/8/8/R6k");
        assert!(clear_path(&b, sq("a1"), sq("a8")));
        assert!(clear_path(&b, sq("a1"), sq("g1")));
        assert!(clear_path(&b, sq("a1"), sq("h8")));
    }

    #[test]
    fn clear_path_blocked() {
        let b = board("8/8/8/3p4/8/8/8/R2p3k");
        assert!(!clear_path(&b, sq("a1"), sq("h1")));
        assert!(!clear_path(&b, sq("a1"), sq("e1")));
        // The blocker itself is the endpoint, not an intermediate square.
        assert!(clear_path(&b, sq("a1"), sq("d1")));
        assert!(!clear_path(&b, sq("b3"), sq("e6")));
    }

    #[test]
    fn clear_path_adjacent_is_vacuous() {
        let b = Board::startpos();
        assert!(clear_path(&b, sq("e1"), sq("e2")));
        assert!(clear_path(&b, sq("e1"), sq("d2")));
    }

    #[test]
    fn clear_path_misaligned_is_blocked() {
        let b = Board::empty();
        assert!(!clear_path(&b, sq("a1"), sq("b3")));
    }

    #[test]
    fn pawn_single_and_double_push() {
        let b = Board::startpos();
        assert!(is_legal(&b, Color::White, mv("e2", "e3")));
        assert!(is_legal(&b, Color::White, mv("e2", "e4")));
        assert!(!is_legal(&b, Color::White, mv("e2", "e5")));
        assert!(is_legal(&b, Color::Black, mv("d7", "d5")));
        assert!(!is_legal(&b, Color::White, mv("e2", "e1")));
    }

    #[test]
    fn pawn_double_push_needs_start_row_and_empty_path() {
        let b = board("4k3/8/8/8/8/4P3/4n3/4K3");
        assert!(!is_legal(&b, Color::White, mv("e3", "e5")));
        let blocked = board("4k3/8/8/8/8/4n3/4P3/4K3");
        assert!(!is_legal(&blocked, Color::White, mv("e2", "e4")));
        assert!(!is_legal(&blocked, Color::White, mv("e2", "e3")));
        let far_blocked = board("4k3/8/8/8/4n3/8/4P3/4K3");
        assert!(is_legal(&far_blocked, Color::White, mv("e2", "e3")));
        assert!(!is_legal(&far_blocked, Color::White, mv("e2", "e4")));
    }

    #[test]
    fn pawn_captures_only_diagonally_forward() {
        let b = board("4k3/8/8/3p1p2/4P3/8/8/4K3");
        assert!(is_legal(&b, Color::White, mv("e4", "d5")));
        assert!(is_legal(&b, Color::White, mv("e4", "f5")));
        assert!(!is_legal(&b, Color::White, mv("e4", "d3")));
        // Diagonal onto an empty square is not a move.
        let empty = board("4k3/8/8/8/4P3/8/8/4K3");
        assert!(!is_legal(&empty, Color::White, mv("e4", "d5")));
        // Straight ahead onto a piece is not a capture.
        let straight = board("4k3/8/8/4p3/4P3/8/8/4K3");
        assert!(!is_legal(&straight, Color::White, mv("e4", "e5")));
    }

    #[test]
    fn black_pawn_moves_down_the_board() {
        let b = board("4k3/8/8/4p3/3P4/8/8/4K3 b");
        assert!(is_legal(&b, Color::Black, mv("e5", "e4")));
        assert!(is_legal(&b, Color::Black, mv("e5", "d4")));
        assert!(!is_legal(&b, Color::Black, mv("e5", "e6")));
    }

    #[test]
    fn knight_jumps() {
        let b = Board::startpos();
        assert!(is_legal(&b, Color::White, mv("b1", "c3")));
        assert!(is_legal(&b, Color::White, mv("b1", "a3")));
        assert!(!is_legal(&b, Color::White, mv("b1", "b3")));
        assert!(!is_legal(&b, Color::White, mv("b1", "d2")));
    }

    #[test]
    fn rook_needs_line_and_clear_path() {
        let b = board("4k3/8/8/4n3/8/8/8/4R2K");
        assert!(is_legal(&b, Color::White, mv("e1", "e5")));
        assert!(!is_legal(&b, Color::White, mv("e1", "e6")));
        assert!(is_legal(&b, Color::White, mv("e1", "a1")));
        assert!(!is_legal(&b, Color::White, mv("e1", "d2")));
    }

    #[test]
    fn bishop_needs_diagonal_and_clear_path() {
        let b = board("4k3/8/8/8/8/2p5/8/B3K3");
        assert!(is_legal(&b, Color::White, mv("a1", "b2")));
        assert!(is_legal(&b, Color::White, mv("a1", "c3")));
        assert!(!is_legal(&b, Color::White, mv("a1", "d4")));
        assert!(!is_legal(&b, Color::White, mv("a1", "a2")));
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let b = board("4k3/8/8/8/3Q4/8/8/4K3");
        assert!(is_legal(&b, Color::White, mv("d4", "d8")));
        assert!(is_legal(&b, Color::White, mv("d4", "h8")));
        assert!(is_legal(&b, Color::White, mv("d4", "a4")));
        assert!(!is_legal(&b, Color::White, mv("d4", "e6")));
    }

    #[test]
    fn king_steps_one_square() {
        let b = board("4k3/8/8/8/8/8/8/4K3");
        assert!(is_legal(&b, Color::White, mv("e1", "d2")));
        assert!(is_legal(&b, Color::White, mv("e1", "f1")));
        assert!(!is_legal(&b, Color::White, mv("e1", "e3")));
        assert!(!is_legal(&b, Color::White, mv("e1", "g1")));
    }

    #[test]
    fn null_moves_are_rejected() {
        let b = board("4k3/8/8/8/3Q4/8/8/4K3");
        assert!(!is_legal(&b, Color::White, mv("e1", "e1")));
        assert!(!is_legal(&b, Color::White, mv("d4", "d4")));
        assert!(!king_move(sq("e1"), sq("e1")));
    }

    #[test]
    fn turn_and_ownership() {
        let b = Board::startpos();
        assert!(!is_legal(&b, Color::Black, mv("e2", "e4")));
        assert!(!is_legal(&b, Color::White, mv("e7", "e5")));
        assert!(!is_legal(&b, Color::White, mv("e4", "e5")));
    }

    #[test]
    fn no_self_capture_but_king_capture_allowed() {
        let b = board("4k3/8/8/8/8/8/8/R3K3");
        assert!(!is_legal(&b, Color::White, mv("a1", "e1")));
        let b = board("4k3/8/8/8/8/8/8/4R2K");
        assert!(is_legal(&b, Color::White, mv("e1", "e8")));
    }

    #[test]
    fn legal_moves_from_start() {
        let b = Board::startpos();
        let moves = legal_moves(&b, Color::White);
        assert_eq!(moves.len(), 20);
        assert!(moves.contains(&mv("g1", "f3")));
        assert!(moves.windows(2).all(|w| w[0].from() <= w[1].from()));
        assert_eq!(legal_moves(&b, Color::Black).len(), 20);
    }
}
