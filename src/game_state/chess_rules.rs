//! Canonical chess-rule constants.
//!
//! Static literals used to build the standard starting arrangement and to
//! locate home ranks and castling corners.

use crate::game_state::chess_types::Square;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Starting bitboards indexed `[color][piece_kind]`.
pub const STARTING_PIECES: [[u64; 6]; 2] = [
    [
        0x0000_0000_0000_FF00,
        0x0000_0000_0000_0042,
        0x0000_0000_0000_0024,
        0x0000_0000_0000_0081,
        0x0000_0000_0000_0008,
        0x0000_0000_0000_0010,
    ],
    [
        0x00FF_0000_0000_0000,
        0x4200_0000_0000_0000,
        0x2400_0000_0000_0000,
        0x8100_0000_0000_0000,
        0x0800_0000_0000_0000,
        0x1000_0000_0000_0000,
    ],
];

pub const LIGHT_PAWN_HOME_RANK: u8 = 1;
pub const DARK_PAWN_HOME_RANK: u8 = 6;

pub const LIGHT_QUEENSIDE_ROOK_SQUARE: Square = 0;
pub const LIGHT_KINGSIDE_ROOK_SQUARE: Square = 7;
pub const DARK_QUEENSIDE_ROOK_SQUARE: Square = 56;
pub const DARK_KINGSIDE_ROOK_SQUARE: Square = 63;
