//! Errors for text supplied by callers (FEN strings, square and move names).
//!
//! Broken board invariants are not represented here: they panic at the point
//! of detection.

/// Errors raised while reading a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("FEN string is empty")]
    Empty,

    #[error("expected 8 ranks in piece placement, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 squares")]
    RankWidth { rank: usize },

    #[error("invalid piece character '{0}'")]
    BadPiece(char),

    #[error("invalid side to move '{0}'")]
    BadSide(String),

    #[error("invalid castling field '{0}'")]
    BadCastling(String),

    #[error("invalid en passant field '{0}'")]
    BadEnPassant(String),

    #[error("{0:?} has {1} kings, expected exactly one")]
    KingCount(super::Color, u32),

    #[error("{0:?} is in check but it is not their turn")]
    OpponentInCheck(super::Color),
}

/// Errors raised while resolving coordinate move text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("invalid square '{0}'")]
    BadSquare(String),

    #[error("invalid move text '{0}'")]
    BadFormat(String),

    #[error("'{0}' is not a legal move in this position")]
    Illegal(String),
}
