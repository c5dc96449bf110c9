//! FEN-style board layout parsing and serialization.
//!
//! Atomic positions are described by the piece placement field and the
//! active color. Full six-field FEN is accepted for convenience, but the
//! castling, en passant and clock fields carry no meaning here, so they
//! are only validated.

use crate::{Color, Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 1, 2 or 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// Parsed FEN data.
///
/// Holds the validated placement and the side to move. The engine
/// turns this into its own board representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Piece placement string (e.g., "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
    pub piece_placement: String,
    /// The side to move. Defaults to White when the field is omitted.
    pub active_color: Color,
    /// Every occupied square, rank 8 first.
    pub pieces: Vec<(Square, Piece)>,
}

impl FenParser {
    /// The standard starting layout.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if !matches!(parts.len(), 1 | 2 | 6) {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let piece_placement = parts[0];
        let pieces = Self::parse_piece_placement(piece_placement)?;

        let active_color = match parts.get(1).copied() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        if parts.len() == 6 {
            Self::validate_castling(parts[2])?;
            Self::validate_en_passant(parts[3])?;
            parts[4]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock(parts[4].to_string()))?;
            parts[5]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidFullmoveNumber(parts[5].to_string()))?;
        }

        Ok(FenParser {
            piece_placement: piece_placement.to_string(),
            active_color,
            pieces,
        })
    }

    fn parse_piece_placement(placement: &str) -> Result<Vec<(Square, Piece)>, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut pieces = Vec::new();
        let mut kings = [0u32; 2];

        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0u32;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += skip;
                } else if let Some(piece) = Piece::from_glyph(c) {
                    let sq = Square::new(row as u8, col as u8).ok_or_else(|| {
                        FenError::InvalidPiecePlacement(format!("rank {} overflows", 8 - row))
                    })?;
                    if piece.is_king() {
                        kings[piece.color.index()] += 1;
                    }
                    pieces.push((sq, piece));
                    col += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - row
                    )));
                }
            }
            if col != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - row,
                    col
                )));
            }
        }

        for color in [Color::White, Color::Black] {
            if kings[color.index()] > 1 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "{} has {} kings",
                    color,
                    kings[color.index()]
                )));
            }
        }

        Ok(pieces)
    }

    fn validate_castling(castling: &str) -> Result<(), FenError> {
        if castling == "-" {
            return Ok(());
        }

        for c in castling.chars() {
            if !"KQkq".contains(c) {
                return Err(FenError::InvalidCastlingRights(format!(
                    "invalid character '{}'",
                    c
                )));
            }
        }

        Ok(())
    }

    fn validate_en_passant(ep: &str) -> Result<(), FenError> {
        if ep == "-" || Square::from_algebraic(ep).is_some() {
            Ok(())
        } else {
            Err(FenError::InvalidEnPassantSquare(ep.to_string()))
        }
    }

    /// Converts the parsed layout back to `<placement> <w|b>`.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {}",
            self.piece_placement,
            self.active_color.to_fen_char()
        )
    }
}

impl Default for FenParser {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}
