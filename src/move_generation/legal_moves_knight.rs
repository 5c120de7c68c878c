//! Knight destinations: every on-board L-jump not landing on a friendly piece.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{friendly_and_enemy, push_mask_squares};
use crate::moves::jump_tables::knight_jumps;

pub fn generate_knight_destinations(game_state: &GameState, from: Square, out: &mut Vec<Square>) {
    let (friendly, _) = friendly_and_enemy(game_state);
    push_mask_squares(knight_jumps(from) & !friendly, out);
}
