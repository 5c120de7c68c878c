//! Move-path counting over the pseudo-legal move tree.
//!
//! Each child position is a clone of its parent with one move applied, so no
//! undo machinery is involved. Because king safety is not filtered, counts
//! only match published perft tables at shallow depths where no side can yet
//! leave its king attacked.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_unchecked, MoveOutcome};
use crate::move_generation::legal_move_shared::own_piece_on;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
    }
}

/// Leaf count of the move tree below `game_state` to `depth` plies.
pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> u64 {
    perft_counts(generator, game_state, depth).nodes
}

pub fn perft_counts<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    let mut own = game_state.occupancy_by_color[game_state.side_to_move.index()];

    while own != 0 {
        let from = own.trailing_zeros() as Square;
        let is_pawn = own_piece_on(game_state, from) == Some(PieceKind::Pawn);

        for to in generator.destinations(game_state, from) {
            let mut child = game_state.clone();
            let MoveOutcome::Applied { captured } = apply_unchecked(&mut child, from, to) else {
                continue;
            };

            if depth == 1 {
                total.nodes += 1;
                if captured.is_some() {
                    total.captures += 1;
                }
                if is_pawn
                    && game_state.en_passant_square == Some(to)
                    && file_of(from) != file_of(to)
                {
                    total.en_passant += 1;
                }
            } else {
                total.merge(perft_counts(generator, &child, depth - 1));
            }
        }

        own &= own - 1;
    }

    total
}
