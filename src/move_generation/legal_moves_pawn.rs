//! Pawn destinations for a single origin square.
//!
//! Forward steps need empty squares: the double step is only available from
//! the home rank and requires both the passed-over and the landing square to
//! be empty. Diagonal steps need an enemy piece or the en-passant target.
//! Promotion is not modelled; a pawn on the last rank has no destinations.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{friendly_and_enemy, push_mask_squares};
use crate::moves::pawn_moves::{pawn_capture_targets, pawn_home_rank, pawn_push_delta};

pub fn generate_pawn_destinations(game_state: &GameState, from: Square, out: &mut Vec<Square>) {
    let side = game_state.side_to_move;
    let (friendly, enemy) = friendly_and_enemy(game_state);
    let occupied = game_state.occupancy_all;

    if let Some(single) = forward(from, pawn_push_delta(side)) {
        if occupied & square_mask(single) == 0 {
            out.push(single);

            if rank_of(from) == pawn_home_rank(side) {
                if let Some(double) = forward(single, pawn_push_delta(side)) {
                    if occupied & square_mask(double) == 0 {
                        out.push(double);
                    }
                }
            }
        }
    }

    let en_passant_mask = game_state.en_passant_square.map_or(0, square_mask) & !friendly;
    push_mask_squares(pawn_capture_targets(side, from) & (enemy | en_passant_mask), out);
}

#[inline]
fn forward(square: Square, delta: i8) -> Option<Square> {
    let next = square as i16 + delta as i16;
    (0..64).contains(&next).then_some(next as Square)
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_destinations;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    fn destinations(game: &GameState, from: Square) -> Vec<Square> {
        let mut out = Vec::new();
        generate_pawn_destinations(game, from, &mut out);
        out.sort_unstable();
        out
    }

    #[test]
    fn e_pawn_in_starting_position_has_single_and_double_step() {
        let game = GameState::new_game();
        assert_eq!(destinations(&game, square_of(1, 4)), vec![square_of(2, 4), square_of(3, 4)]);
    }

    #[test]
    fn dark_pawn_moves_toward_lower_ranks() {
        let game = GameState::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .expect("FEN should parse");
        assert_eq!(destinations(&game, square_of(6, 3)), vec![square_of(4, 3), square_of(5, 3)]);
    }

    #[test]
    fn double_step_needs_empty_intermediate_square() {
        // Dark knight on e3 blocks both pushes of the e2 pawn.
        let game = GameState::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(destinations(&game, 12), Vec::<Square>::new());

        // Dark knight on e4 only blocks the double step.
        let game = GameState::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(destinations(&game, 12), vec![20]);
    }

    #[test]
    fn no_double_step_off_home_rank() {
        let game = GameState::from_fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(destinations(&game, 20), vec![28]);
    }

    #[test]
    fn diagonal_only_onto_enemy_or_en_passant_target() {
        let game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        // e5 pawn: push to e6, en passant onto d6, nothing onto f6.
        assert_eq!(destinations(&game, 36), vec![43, 44]);

        let game = GameState::from_fen("4k3/8/3r1N2/4P3/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        // Friendly knight on f6 is not capturable; enemy rook on d6 is.
        assert_eq!(destinations(&game, 36), vec![43, 44]);
    }

    #[test]
    fn en_passant_target_under_friendly_piece_is_not_a_destination() {
        let mut game = GameState::from_fen("4k3/8/3N4/4P3/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        game.en_passant_square = Some(43);
        assert_eq!(destinations(&game, 36), vec![44]);
    }

    #[test]
    fn blocked_pawn_has_no_push() {
        let game = GameState::from_fen("4k3/8/8/8/4p3/4P3/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(destinations(&game, 20).is_empty());
    }

    #[test]
    fn pawn_on_last_rank_has_no_destinations() {
        let game = GameState::from_fen("3kP3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(destinations(&game, 60).is_empty());
    }
}
