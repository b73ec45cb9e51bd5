//! Error types for the textual codecs.

use thiserror::Error;

/// Errors from parsing a FEN record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    /// The record does not have exactly six space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },

    /// The placement field does not have exactly eight ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },

    /// A rank describes more or fewer than eight squares.
    ///
    /// `rank_index` counts from the top of the record (0 = rank 8).
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength { rank_index: usize, length: usize },

    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },

    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },

    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar { character: char },

    /// Not `-` and not an algebraic square on rank 3 or 6.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },

    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter { field: &'static str, found: String },
}

/// Errors from parsing the 64-digit textual form of a [`Bitboard`](crate::Bitboard).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitboardError {
    #[error("expected 64 binary digits, found {found} characters")]
    WrongLength { found: usize },

    #[error("invalid binary digit: '{character}'")]
    InvalidDigit { character: char },
}
