//! Board square representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A square on the board, stored as a row-major index 0-63.
///
/// Row 0 is rank 8 (Black's back rank) and row 7 is rank 1, so the
/// index runs a8 = 0, b8 = 1, ..., h8 = 7, a7 = 8, ..., h1 = 63.
/// A `Square` is always in bounds; algebraic text that does not parse
/// never produces one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Creates a square from a row and column, both in 0-7.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a square from its row-major index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    ///
    /// The text must be exactly a file letter 'a'-'h' followed by a
    /// rank digit '1'-'8'.
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = match bytes[0] {
            b @ b'a'..=b'h' => b - b'a',
            _ => return None,
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => b'8' - b,
            _ => return None,
        };
        Square::new(row, col)
    }

    /// Iterates over all squares in row-major order (a8 first, h1 last).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Returns the row-major index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row (0 = rank 8, 7 = rank 1).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0 = file a, 7 = file h).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the file letter ('a'-'h').
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col()) as char
    }

    /// Returns the rank digit ('1'-'8').
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row()) as char
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    /// Returns the square displaced by the given row and column deltas,
    /// or `None` if that falls off the board.
    #[inline]
    pub const fn offset(self, drow: i8, dcol: i8) -> Option<Self> {
        let row = self.row() as i8 + drow;
        let col = self.col() as i8 + dcol;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// Returns the (row, column) displacement from `self` to `other`.
    #[inline]
    pub const fn delta_to(self, other: Square) -> (i8, i8) {
        (
            other.row() as i8 - self.row() as i8,
            other.col() as i8 - self.col() as i8,
        )
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl TryFrom<String> for Square {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Square::from_algebraic(&s).ok_or_else(|| format!("invalid square: {}", s))
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> Self {
        sq.to_algebraic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn algebraic_maps_rank_8_to_row_0() {
        let a8 = Square::from_algebraic("a8").unwrap();
        assert_eq!((a8.row(), a8.col()), (0, 0));
        let h1 = Square::from_algebraic("h1").unwrap();
        assert_eq!((h1.row(), h1.col()), (7, 7));
        let e2 = Square::from_algebraic("e2").unwrap();
        assert_eq!((e2.row(), e2.col()), (6, 4));
    }

    #[test]
    fn rejects_malformed_text() {
        for text in ["", "e", "e44", "i1", "a9", "a0", "E2", "2e", "e-", "é1"] {
            assert_eq!(Square::from_algebraic(text), None, "{:?}", text);
        }
    }

    #[test]
    fn to_algebraic() {
        assert_eq!(Square::new(0, 0).unwrap().to_algebraic(), "a8");
        assert_eq!(Square::new(4, 4).unwrap().to_algebraic(), "e4");
        assert_eq!(Square::new(7, 7).unwrap().to_algebraic(), "h1");
    }

    #[test]
    fn new_rejects_out_of_bounds() {
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert!(Square::from_index(64).is_none());
    }

    #[test]
    fn offset_stays_on_board() {
        let a8 = Square::from_algebraic("a8").unwrap();
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(0, -1), None);
        assert_eq!(a8.offset(1, 1), Square::from_algebraic("b7"));
        let h1 = Square::from_algebraic("h1").unwrap();
        assert_eq!(h1.offset(1, 0), None);
        assert_eq!(h1.offset(0, 1), None);
    }

    #[test]
    fn serde_as_algebraic_string() {
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!(serde_json::to_string(&e4).unwrap(), "\"e4\"");
        let back: Square = serde_json::from_str("\"e4\"").unwrap();
        assert_eq!(back, e4);
        assert!(serde_json::from_str::<Square>("\"z9\"").is_err());
    }

    proptest! {
        #[test]
        fn algebraic_roundtrip(row in 0u8..8, col in 0u8..8) {
            let sq = Square::new(row, col).unwrap();
            prop_assert_eq!(Square::from_algebraic(&sq.to_algebraic()), Some(sq));
        }

        #[test]
        fn parse_accepts_only_file_rank_pairs(text in "\\PC{0,3}") {
            let bytes = text.as_bytes();
            let well_formed = bytes.len() == 2
                && (b'a'..=b'h').contains(&bytes[0])
                && (b'1'..=b'8').contains(&bytes[1]);
            prop_assert_eq!(Square::from_algebraic(&text).is_some(), well_formed);
        }
    }
}
