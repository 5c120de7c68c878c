//! Session state shared with a drag-and-drop front end.
//!
//! The session owns the one position of a running program and the square the
//! user is currently holding. Holding a piece is purely presentational: the
//! position only changes when a drop is validated and applied.

use log::trace;

use crate::game_state::{chess_types::*, game_state::BoardSnapshot, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, MoveOutcome};
use crate::move_generation::legal_move_shared::own_piece_on;
use crate::move_generation::move_generator::destinations;

#[derive(Debug, Clone)]
pub struct BoardSession {
    game_state: GameState,
    picked_up: Option<Square>,
}

impl Default for BoardSession {
    fn default() -> Self {
        Self::new(GameState::new_game())
    }
}

impl BoardSession {
    pub fn new(game_state: GameState) -> Self {
        Self {
            game_state,
            picked_up: None,
        }
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.game_state.board_snapshot()
    }

    #[inline]
    pub fn picked_up(&self) -> Option<Square> {
        self.picked_up
    }

    /// Hold the piece on `square`. Only pieces of the side to move can be held.
    pub fn pick_up(&mut self, square: Square) -> bool {
        if own_piece_on(&self.game_state, square).is_none() {
            trace!("pick up refused on {square}");
            return false;
        }
        self.picked_up = Some(square);
        true
    }

    pub fn cancel_pick(&mut self) {
        self.picked_up = None;
    }

    /// Destinations for the held piece, for highlighting.
    pub fn highlighted_destinations(&self) -> Vec<Square> {
        self.picked_up
            .map(|from| destinations(&self.game_state, from))
            .unwrap_or_default()
    }

    /// Release the held piece on `square`. The hold is cleared either way.
    pub fn drop_on(&mut self, square: Square) -> MoveOutcome {
        match self.picked_up.take() {
            Some(from) => self.attempt_move(from, square),
            None => MoveOutcome::Rejected,
        }
    }

    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        apply_move(&mut self.game_state, from, to)
    }
}
