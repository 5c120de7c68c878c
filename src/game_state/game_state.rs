//! Position store.
//!
//! `GameState` is the single source of truth for the board: twelve piece
//! bitboards, occupancy caches derived from them, side to move, en-passant
//! target, castling rights, clocks and the Zobrist key. The only mutation path
//! for movement is `move_generation::legal_move_apply`.

use crate::game_state::chess_rules::STARTING_PIECES;
use crate::game_state::chess_types::*;
use crate::game_state::position_error::PositionError;
use crate::search::zobrist::compute_zobrist_key;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Read-only view of the board handed to presentation code, indexed by square.
pub type BoardSnapshot = [Option<(Color, PieceKind)>; 64];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // --- Bitboard representation ---
    // [color][piece_kind]
    pub pieces: [[u64; 6]; 2],

    // Occupancy caches, always recomputed from `pieces`.
    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    pub zobrist_key: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,

            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,

            zobrist_key: 0,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        let mut game_state = Self::default();
        game_state.zobrist_key = compute_zobrist_key(&game_state);
        game_state
    }

    /// Standard starting arrangement, Light to move, all castling rights set.
    pub fn new_game() -> Self {
        let mut game_state = Self {
            pieces: STARTING_PIECES,
            castling_rights: CASTLE_ALL,
            ..Self::default()
        };
        game_state.recalc_occupancy();
        game_state.zobrist_key = compute_zobrist_key(&game_state);
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Piece standing on `square`, found by testing each of the twelve sets.
    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        if square >= BOARD_SQUARES {
            return None;
        }
        let mask = square_mask(square);
        if self.occupancy_all & mask == 0 {
            return None;
        }
        for color in ALL_COLORS {
            for piece in ALL_PIECE_KINDS {
                if self.pieces[color.index()][piece.index()] & mask != 0 {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    pub fn board_snapshot(&self) -> BoardSnapshot {
        let mut snapshot = [None; 64];
        for color in ALL_COLORS {
            for piece in ALL_PIECE_KINDS {
                let mut bb = self.pieces[color.index()][piece.index()];
                while bb != 0 {
                    let sq = bb.trailing_zeros() as usize;
                    snapshot[sq] = Some((color, piece));
                    bb &= bb - 1;
                }
            }
        }
        snapshot
    }

    /// Rebuild every occupancy cache from the twelve piece sets.
    pub fn recalc_occupancy(&mut self) {
        for color in ALL_COLORS {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .copied()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[Color::Light.index()]
            | self.occupancy_by_color[Color::Dark.index()];
    }

    /// True when no square is claimed by more than one piece set.
    pub fn placement_is_consistent(&self) -> bool {
        let mut seen = 0u64;
        for color in ALL_COLORS {
            for bb in self.pieces[color.index()] {
                if seen & bb != 0 {
                    return false;
                }
                seen |= bb;
            }
        }
        true
    }

    pub fn occupancy_is_consistent(&self) -> bool {
        let light = self.pieces[Color::Light.index()]
            .iter()
            .fold(0u64, |acc, bb| acc | bb);
        let dark = self.pieces[Color::Dark.index()]
            .iter()
            .fold(0u64, |acc, bb| acc | bb);
        self.occupancy_by_color == [light, dark] && self.occupancy_all == light | dark
    }
}
