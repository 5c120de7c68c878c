//! King destinations: the adjacent squares not held by a friendly piece.
//!
//! Castling rights are tracked on the position but no castling destination is
//! produced here, and the king may step onto attacked squares.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{friendly_and_enemy, push_mask_squares};
use crate::moves::jump_tables::king_steps;

pub fn generate_king_destinations(game_state: &GameState, from: Square, out: &mut Vec<Square>) {
    let (friendly, _) = friendly_and_enemy(game_state);
    push_mask_squares(king_steps(from) & !friendly, out);
}
