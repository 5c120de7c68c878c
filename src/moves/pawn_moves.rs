//! Pawn geometry: push direction, home rank and diagonal capture targets.

use crate::game_state::chess_rules::{DARK_PAWN_HOME_RANK, LIGHT_PAWN_HOME_RANK};
use crate::game_state::chess_types::Color;

pub const LIGHT_PAWN_CAPTURES: [u64; 64] = build_capture_table(1);
pub const DARK_PAWN_CAPTURES: [u64; 64] = build_capture_table(-1);

/// Square-index delta of a single forward step.
#[inline]
pub const fn pawn_push_delta(color: Color) -> i8 {
    match color {
        Color::Light => 8,
        Color::Dark => -8,
    }
}

#[inline]
pub const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::Light => LIGHT_PAWN_HOME_RANK,
        Color::Dark => DARK_PAWN_HOME_RANK,
    }
}

/// Diagonal squares a pawn on `square` could capture onto.
#[inline]
pub const fn pawn_capture_targets(color: Color, square: u8) -> u64 {
    match color {
        Color::Light => LIGHT_PAWN_CAPTURES[square as usize],
        Color::Dark => DARK_PAWN_CAPTURES[square as usize],
    }
}

const fn build_capture_table(rank_step: i8) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let rank = (sq / 8) as i8 + rank_step;
        let file = (sq % 8) as i8;
        let mut targets = 0u64;

        if rank >= 0 && rank < 8 {
            if file > 0 {
                targets |= 1u64 << (rank as usize * 8 + file as usize - 1);
            }
            if file < 7 {
                targets |= 1u64 << (rank as usize * 8 + file as usize + 1);
            }
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_captures_from_e2() {
        let expected = (1u64 << 19) | (1u64 << 21);
        assert_eq!(pawn_capture_targets(Color::Light, 12), expected);
    }

    #[test]
    fn dark_captures_from_a7_stay_on_a_and_b_files() {
        assert_eq!(pawn_capture_targets(Color::Dark, 48), 1u64 << 41);
    }

    #[test]
    fn last_rank_has_no_capture_targets() {
        assert_eq!(pawn_capture_targets(Color::Light, 60), 0);
        assert_eq!(pawn_capture_targets(Color::Dark, 3), 0);
    }
}
