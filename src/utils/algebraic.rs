//! Square names in algebraic coordinates (`a1` .. `h8`).

use crate::game_state::chess_types::{square_of, Square, BOARD_SQUARES};
use crate::game_state::position_error::PositionError;

/// Convert algebraic notation (for example: "e4") to a square index.
pub fn algebraic_to_square(square: &str) -> Result<Square, PositionError> {
    let &[file, rank] = square.as_bytes() else {
        return Err(PositionError::InvalidSquare(square.to_owned()));
    };

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(PositionError::InvalidSquare(square.to_owned()));
    }

    Ok(square_of(rank - b'1', file - b'a'))
}

/// Convert a square index (`0..=63`) to algebraic notation.
pub fn square_to_algebraic(square: Square) -> Result<String, PositionError> {
    if square >= BOARD_SQUARES {
        return Err(PositionError::SquareOutOfRange(square));
    }

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);

    Ok(format!("{file_char}{rank_char}"))
}

/// Split a four-character coordinate move such as "e2e4" into its squares.
pub fn parse_coordinate_move(text: &str) -> Result<(Square, Square), PositionError> {
    if text.len() != 4 || !text.is_ascii() {
        return Err(PositionError::InvalidSquare(text.to_owned()));
    }
    let (from, to) = text.split_at(2);
    Ok((algebraic_to_square(from)?, algebraic_to_square(to)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_and_center_squares() {
        assert_eq!(algebraic_to_square("a1"), Ok(0));
        assert_eq!(algebraic_to_square("h8"), Ok(63));
        assert_eq!(algebraic_to_square("e4"), Ok(28));
        assert_eq!(square_to_algebraic(12).as_deref(), Ok("e2"));
    }

    #[test]
    fn malformed_squares_are_rejected() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert!(algebraic_to_square("e44").is_err());
        assert_eq!(square_to_algebraic(64), Err(PositionError::SquareOutOfRange(64)));
    }

    #[test]
    fn coordinate_moves_split_into_squares() {
        assert_eq!(parse_coordinate_move("e2e4"), Ok((12, 28)));
        assert!(parse_coordinate_move("e2e").is_err());
        assert!(parse_coordinate_move("e2é4").is_err());
    }
}
