//! Board queries shared by the per-piece destination rules.

use crate::game_state::{chess_types::*, game_state::GameState};

#[inline]
pub fn piece_on_square_for_color(
    game_state: &GameState,
    color: Color,
    square: Square,
) -> Option<PieceKind> {
    if square >= BOARD_SQUARES {
        return None;
    }
    let mask = square_mask(square);
    ALL_PIECE_KINDS
        .into_iter()
        .find(|piece| game_state.pieces[color.index()][piece.index()] & mask != 0)
}

/// Piece of the side to move standing on `square`.
#[inline]
pub fn own_piece_on(game_state: &GameState, square: Square) -> Option<PieceKind> {
    piece_on_square_for_color(game_state, game_state.side_to_move, square)
}

#[inline]
pub fn enemy_piece_on(game_state: &GameState, square: Square) -> Option<PieceKind> {
    piece_on_square_for_color(game_state, game_state.side_to_move.opposite(), square)
}

/// Occupancy of the side to move and of its opponent.
#[inline]
pub fn friendly_and_enemy(game_state: &GameState) -> (u64, u64) {
    let side = game_state.side_to_move;
    (
        game_state.occupancy_by_color[side.index()],
        game_state.occupancy_by_color[side.opposite().index()],
    )
}

/// Append every set bit of `mask` to `out` in ascending square order.
#[inline]
pub fn push_mask_squares(mut mask: u64, out: &mut Vec<Square>) {
    while mask != 0 {
        out.push(mask.trailing_zeros() as Square);
        mask &= mask - 1;
    }
}
