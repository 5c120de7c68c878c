//! Random pseudo-legal playouts.
//!
//! Used by invariant tests and the shell's `random` command to reach positions
//! no hand-written scenario covers.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::all_moves;

/// Play up to `max_plies` uniformly chosen moves from `start`.
///
/// Returns every position visited after the start, ending early when the side
/// to move has no destinations.
pub fn random_playout<R: Rng + ?Sized>(
    start: &GameState,
    max_plies: usize,
    rng: &mut R,
) -> Vec<GameState> {
    let mut game_state = start.clone();
    let mut visited = Vec::new();

    for _ in 0..max_plies {
        let moves = all_moves(&game_state);
        let Some(&(from, to)) = moves.choose(rng) else {
            break;
        };
        if !apply_move(&mut game_state, from, to).is_applied() {
            break;
        }
        visited.push(game_state.clone());
    }

    visited
}
