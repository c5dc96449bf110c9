//! The 8×8 grid of pieces.

use atomic_core::{Color, FenError, FenParser, Piece, PieceKind, Square};
use std::fmt;

/// Back-rank order from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Glyph rendered for an empty square.
pub const EMPTY_GLYPH: char = '.';

/// Board occupancy, row-major with row 0 = rank 8.
///
/// Each square holds at most one piece. The board itself does not
/// enforce the one-king-per-color invariant; layouts coming from
/// [`FenParser`] are checked, and the rules never add a king.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Creates the standard starting layout.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as u8;
            for (row, piece) in [
                (0, Piece::new(kind, Color::Black)),
                (1, Piece::new(PieceKind::Pawn, Color::Black)),
                (6, Piece::new(PieceKind::Pawn, Color::White)),
                (7, Piece::new(kind, Color::White)),
            ] {
                if let Some(sq) = Square::new(row, col) {
                    board.put(sq, piece);
                }
            }
        }
        board
    }

    /// Creates a board holding exactly the given pieces.
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Board::empty();
        for (sq, piece) in pieces {
            board.put(sq, piece);
        }
        board
    }

    /// Parses the placement field of a FEN string, returning the board
    /// and the side to move.
    pub fn from_fen(fen: &str) -> Result<(Self, Color), FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok((Board::from_pieces(parsed.pieces), parsed.active_color))
    }

    /// Returns the FEN piece placement field for this board.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(71);
        for row in 0..8u8 {
            let mut empty_count = 0;
            for col in 0..8u8 {
                match Square::new(row, col).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            out.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        out.push(piece.glyph());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push_str(&empty_count.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Places a piece, replacing whatever was there.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    /// Removes and returns the piece on the given square.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Returns true if a king of the given color is on the board.
    pub fn has_king(&self, color: Color) -> bool {
        self.king_count(color) > 0
    }

    /// Counts the kings of the given color.
    pub fn king_count(&self, color: Color) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|p| p.is_king() && p.color == color)
            .count()
    }

    /// Iterates over occupied squares, rank 8 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Read-only snapshot of every square, row-major from a8 to h1.
    pub fn squares(&self) -> &[Option<Piece>; Square::COUNT] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.placement())
    }
}

/// Renders rank 8 first with file letters as a header, uppercase for
/// White and lowercase for Black.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for (row, squares) in self.squares.chunks(8).enumerate() {
            write!(f, "{}", 8 - row)?;
            for sq in squares {
                write!(f, " {}", sq.map_or(EMPTY_GLYPH, Piece::glyph))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
