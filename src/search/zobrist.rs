//! Zobrist keys for position identity.
//!
//! One key per `(color, piece, square)` triple in a flat table, one per
//! castling flag (the rights term is the xor of the flags that are set), one
//! per en-passant file and one for Dark to move. Clocks are not hashed, so
//! transpositions reached with different clocks share a key.
//!
//! `legal_move_apply` xors terms in and out as it moves pieces;
//! `compute_zobrist_key` rebuilds the same value from scratch.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::{chess_types::*, game_state::GameState};

const KEY_SEED: u64 = 0x504C_554D_424F_4152;
const PIECE_KEYS: usize = 2 * 6 * 64;

const CASTLING_FLAGS: [CastlingRights; 4] = [
    CASTLE_LIGHT_KINGSIDE,
    CASTLE_LIGHT_QUEENSIDE,
    CASTLE_DARK_KINGSIDE,
    CASTLE_DARK_QUEENSIDE,
];

#[derive(Debug)]
pub struct ZobristKeys {
    pieces: [u64; PIECE_KEYS],
    castling_flags: [u64; 4],
    en_passant_files: [u64; 8],
    dark_to_move: u64,
}

static KEYS: OnceLock<ZobristKeys> = OnceLock::new();

/// Process-wide key set, generated on first use.
#[inline]
pub fn keys() -> &'static ZobristKeys {
    KEYS.get_or_init(|| ZobristKeys::generate(KEY_SEED))
}

impl ZobristKeys {
    fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut pieces = [0u64; PIECE_KEYS];
        rng.fill(&mut pieces[..]);
        let mut castling_flags = [0u64; 4];
        rng.fill(&mut castling_flags[..]);
        let mut en_passant_files = [0u64; 8];
        rng.fill(&mut en_passant_files[..]);

        Self {
            pieces,
            castling_flags,
            en_passant_files,
            dark_to_move: rng.random(),
        }
    }

    #[inline]
    pub fn piece(&self, color: Color, piece: PieceKind, square: Square) -> u64 {
        self.pieces[(color.index() * 6 + piece.index()) * 64 + square as usize]
    }

    pub fn castling(&self, rights: CastlingRights) -> u64 {
        CASTLING_FLAGS
            .iter()
            .zip(self.castling_flags)
            .filter(|(flag, _)| rights & **flag != 0)
            .fold(0u64, |acc, (_, key)| acc ^ key)
    }

    /// Zero when there is no target.
    #[inline]
    pub fn en_passant(&self, target: Option<Square>) -> u64 {
        target.map_or(0, |sq| self.en_passant_files[file_of(sq) as usize])
    }

    #[inline]
    pub fn side_to_move(&self, side: Color) -> u64 {
        match side {
            Color::Light => 0,
            Color::Dark => self.dark_to_move,
        }
    }

    /// Xor of every term describing `game_state`.
    pub fn position(&self, game_state: &GameState) -> u64 {
        let mut key = self.side_to_move(game_state.side_to_move)
            ^ self.castling(game_state.castling_rights)
            ^ self.en_passant(game_state.en_passant_square);

        for color in ALL_COLORS {
            for piece in ALL_PIECE_KINDS {
                let mut bb = game_state.pieces[color.index()][piece.index()];
                while bb != 0 {
                    key ^= self.piece(color, piece, bb.trailing_zeros() as Square);
                    bb &= bb - 1;
                }
            }
        }

        key
    }
}

#[inline]
pub fn compute_zobrist_key(game_state: &GameState) -> u64 {
    keys().position(game_state)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::move_generation::legal_move_apply::apply_move;

    fn play(game: &mut GameState, moves: &[(Square, Square)]) {
        for &(from, to) in moves {
            assert!(apply_move(game, from, to).is_applied(), "{from} -> {to} in {}", game.get_fen());
            assert_eq!(game.zobrist_key, compute_zobrist_key(game), "after {from} -> {to}");
        }
    }

    #[test]
    fn piece_keys_are_distinct() {
        let keys = keys();
        let mut seen = HashSet::new();
        for color in ALL_COLORS {
            for piece in ALL_PIECE_KINDS {
                for sq in 0..64u8 {
                    assert!(seen.insert(keys.piece(color, piece, sq)));
                }
            }
        }
        assert_eq!(seen.len(), PIECE_KEYS);
    }

    #[test]
    fn castling_term_is_xor_of_flags() {
        let keys = keys();
        assert_eq!(keys.castling(0), 0);
        let combined = CASTLING_FLAGS.iter().fold(0u64, |acc, &flag| acc ^ keys.castling(flag));
        assert_eq!(keys.castling(CASTLE_ALL), combined);
        assert_ne!(keys.castling(CASTLE_LIGHT_KINGSIDE), keys.castling(CASTLE_DARK_KINGSIDE));
    }

    #[test]
    fn incremental_key_tracks_scripted_game() {
        // e4 d5 exd5 c5 dxc6 (en passant) Nf6 Nh3 Rg8.
        let mut game = GameState::new_game();
        play(
            &mut game,
            &[(12, 28), (51, 35), (28, 35), (50, 34), (35, 42), (62, 45), (6, 23), (63, 62)],
        );
        assert_eq!(game.castling_rights, CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE | CASTLE_DARK_QUEENSIDE);
        assert_eq!(game.pieces[Color::Dark.index()][PieceKind::Pawn.index()].count_ones(), 6);
    }

    #[test]
    fn knight_shuffle_returns_to_start_key() {
        let start = GameState::new_game();
        let mut game = start.clone();
        play(&mut game, &[(6, 21), (62, 45), (21, 6), (45, 62)]);
        assert_eq!(game.zobrist_key, start.zobrist_key);
        assert_ne!(game.halfmove_clock, start.halfmove_clock);
    }

    #[test]
    fn side_to_move_and_en_passant_change_key() {
        let w = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let b = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert_eq!(w.zobrist_key ^ b.zobrist_key, keys().side_to_move(Color::Dark));

        let no_ep = GameState::from_fen("4k3/8/8/8/4P3/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let ep = GameState::from_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").expect("FEN should parse");
        assert_eq!(no_ep.zobrist_key ^ ep.zobrist_key, keys().en_passant(Some(20)));
    }
}
