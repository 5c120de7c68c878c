//! FEN-to-GameState parser.
//!
//! Builds a fully-populated position from Forsyth-Edwards Notation, deriving
//! occupancy caches and the Zobrist key from the parsed fields.

use crate::game_state::position_error::PositionError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::search::zobrist::compute_zobrist_key;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, PositionError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(PositionError::MissingFenField("board layout"))?;
    let side_part = parts.next().ok_or(PositionError::MissingFenField("side to move"))?;
    let castling_part = parts.next().ok_or(PositionError::MissingFenField("castling rights"))?;
    let en_passant_part = parts.next().ok_or(PositionError::MissingFenField("en-passant square"))?;
    let halfmove_part = parts.next().ok_or(PositionError::MissingFenField("halfmove clock"))?;
    let fullmove_part = parts.next().ok_or(PositionError::MissingFenField("fullmove number"))?;

    if parts.next().is_some() {
        return Err(PositionError::TrailingFenFields);
    }

    let mut game_state = GameState::default();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;
    game_state.recalc_occupancy();
    check_en_passant_square(&game_state, en_passant_part)?;
    game_state.halfmove_clock = parse_counter("halfmove clock", halfmove_part)?;
    game_state.fullmove_number = parse_counter("fullmove number", fullmove_part)?;

    game_state.zobrist_key = compute_zobrist_key(&game_state);

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), PositionError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(PositionError::InvalidBoard("layout must contain 8 ranks".to_owned()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(PositionError::InvalidBoard(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                if file as u32 + empty_count > 8 {
                    return Err(PositionError::InvalidBoard(format!(
                        "rank {} has too many files",
                        board_rank + 1
                    )));
                }
                file += empty_count as u8;
                continue;
            }

            let (color, piece) = piece_from_fen_char(ch)
                .ok_or_else(|| PositionError::InvalidBoard(format!("invalid piece character '{ch}'")))?;

            if file >= 8 {
                return Err(PositionError::InvalidBoard(format!(
                    "rank {} has too many files",
                    board_rank + 1
                )));
            }

            game_state.pieces[color.index()][piece.index()] |= square_mask(square_of(board_rank, file));
            file += 1;
        }

        if file != 8 {
            return Err(PositionError::InvalidBoard(format!(
                "rank {} does not sum to 8 files",
                board_rank + 1
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, PositionError> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(PositionError::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, PositionError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        rights |= match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            _ => return Err(PositionError::InvalidCastling(ch)),
        };
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, PositionError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part).map(Some)
}

/// A target only exists behind a pawn that just double-stepped: the third
/// rank from the mover's opponent, and always empty.
fn check_en_passant_square(game_state: &GameState, text: &str) -> Result<(), PositionError> {
    let Some(square) = game_state.en_passant_square else {
        return Ok(());
    };
    let expected_rank = match game_state.side_to_move {
        Color::Light => 5,
        Color::Dark => 2,
    };
    if rank_of(square) != expected_rank || game_state.occupancy_all & square_mask(square) != 0 {
        return Err(PositionError::InvalidEnPassant(text.to_owned()));
    }
    Ok(())
}

fn parse_counter(field: &'static str, value: &str) -> Result<u16, PositionError> {
    value.parse::<u16>().map_err(|_| PositionError::InvalidCounter {
        field,
        value: value.to_owned(),
    })
}

pub fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::position_error::PositionError;

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move, Color::Light);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(
            game_state.pieces[Color::Dark.index()][PieceKind::Rook.index()],
            0x8100_0000_0000_0000
        );
        assert!(game_state.occupancy_is_consistent());
    }

    #[test]
    fn malformed_fen_fields_are_reported() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w - -"),
            Err(PositionError::MissingFenField("halfmove clock"))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 x - - 0 1"),
            Err(PositionError::InvalidSideToMove("x".to_owned()))
        );
        assert_eq!(parse_fen("8/8/8/8/8/8/8/8 w KX - 0 1"), Err(PositionError::InvalidCastling('X')));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/8 w - - zero 1"),
            Err(PositionError::InvalidCounter { field: "halfmove clock", .. })
        ));
        assert!(matches!(parse_fen("8/8/8/8/8/8/8 w - - 0 1"), Err(PositionError::InvalidBoard(_))));
        assert!(matches!(parse_fen("9/8/8/8/8/8/8/8 w - - 0 1"), Err(PositionError::InvalidBoard(_))));
        assert!(matches!(parse_fen("ppppppppp/8/8/8/8/8/8/8 w - - 0 1"), Err(PositionError::InvalidBoard(_))));
        assert!(matches!(parse_fen("7/8/8/8/8/8/8/8 w - - 0 1"), Err(PositionError::InvalidBoard(_))));
        assert_eq!(parse_fen("8/8/8/8/8/8/8/8 w - - 0 1 extra"), Err(PositionError::TrailingFenFields));

        let long_digit_run = format!("{}/8/8/8/8/8/8/8 w - - 0 1", "8".repeat(40));
        assert!(matches!(parse_fen(&long_digit_run), Err(PositionError::InvalidBoard(_))));
        assert!(matches!(parse_fen("44p/8/8/8/8/8/8/8 w - - 0 1"), Err(PositionError::InvalidBoard(_))));
    }

    #[test]
    fn en_passant_target_must_sit_behind_a_double_step() {
        // Occupied target.
        assert_eq!(
            parse_fen("4k3/8/3N4/4P3/8/8/8/4K3 w - d6 0 1"),
            Err(PositionError::InvalidEnPassant("d6".to_owned()))
        );
        // Wrong rank for the side to move.
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/P3K3 w - b1 0 1"),
            Err(PositionError::InvalidEnPassant("b1".to_owned()))
        );
        assert_eq!(
            parse_fen("4k3/8/8/3pP3/8/8/8/4K3 b - d6 0 1"),
            Err(PositionError::InvalidEnPassant("d6".to_owned()))
        );

        let light = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        assert_eq!(light.en_passant_square, Some(43));
        let dark = parse_fen("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1").expect("FEN should parse");
        assert_eq!(dark.en_passant_square, Some(19));
    }
}
