use thiserror::Error;

/// Failures while building a position from text.
///
/// Movement operations never fail; an unreachable destination is simply absent
/// from the destination set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("missing {0} in FEN")]
    MissingFenField(&'static str),
    #[error("FEN has extra trailing fields")]
    TrailingFenFields,
    #[error("invalid board layout: {0}")]
    InvalidBoard(String),
    #[error("invalid side-to-move field: {0}")]
    InvalidSideToMove(String),
    #[error("invalid castling rights character: {0}")]
    InvalidCastling(char),
    #[error("invalid {field}: {value}")]
    InvalidCounter { field: &'static str, value: String },
    #[error("invalid en-passant target: {0}")]
    InvalidEnPassant(String),
    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),
    #[error("square index out of bounds: {0}")]
    SquareOutOfRange(u8),
}
