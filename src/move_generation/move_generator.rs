//! Destination enumeration and the movement-pattern legality check.
//!
//! Generation is pseudo-legal: it respects board edges and occupancy but never
//! asks whether the mover's own king ends up attacked. A stricter layer can be
//! built on top by wrapping a `MoveGenerator`.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::own_piece_on;
use crate::move_generation::legal_moves_king::generate_king_destinations;
use crate::move_generation::legal_moves_knight::generate_knight_destinations;
use crate::move_generation::legal_moves_pawn::generate_pawn_destinations;
use crate::move_generation::legal_moves_sliding::generate_sliding_destinations;

pub trait MoveGenerator {
    /// Destination squares for the piece of the side to move on `from`.
    fn destinations(&self, game_state: &GameState, from: Square) -> Vec<Square>;

    fn is_move_permitted(&self, game_state: &GameState, from: Square, to: Square) -> bool {
        self.destinations(game_state, from).contains(&to)
    }
}

/// Movement-pattern generator without king-safety filtering.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalGenerator;

impl MoveGenerator for PseudoLegalGenerator {
    fn destinations(&self, game_state: &GameState, from: Square) -> Vec<Square> {
        destinations(game_state, from)
    }
}

/// Destinations reachable from `from`; empty when the square is off the board,
/// empty, or holds a piece of the side not to move.
pub fn destinations(game_state: &GameState, from: Square) -> Vec<Square> {
    let mut out = Vec::new();
    let Some(piece) = own_piece_on(game_state, from) else {
        return out;
    };

    match piece {
        PieceKind::Pawn => generate_pawn_destinations(game_state, from, &mut out),
        PieceKind::Knight => generate_knight_destinations(game_state, from, &mut out),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            generate_sliding_destinations(game_state, piece, from, &mut out)
        }
        PieceKind::King => generate_king_destinations(game_state, from, &mut out),
    }

    out
}

#[inline]
pub fn is_move_permitted(game_state: &GameState, from: Square, to: Square) -> bool {
    to < BOARD_SQUARES && destinations(game_state, from).contains(&to)
}

/// Every `(from, to)` pair available to the side to move, origins ascending.
pub fn all_moves(game_state: &GameState) -> Vec<(Square, Square)> {
    let mut moves = Vec::new();
    let mut own = game_state.occupancy_by_color[game_state.side_to_move.index()];
    while own != 0 {
        let from = own.trailing_zeros() as Square;
        moves.extend(destinations(game_state, from).into_iter().map(|to| (from, to)));
        own &= own - 1;
    }
    moves
}
