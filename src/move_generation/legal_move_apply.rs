//! Applying a move to the position in place.
//!
//! `apply_move` validates through the move generator first; `apply_unchecked`
//! trusts the caller. Both keep the placement invariant: at most one of the
//! twelve piece sets claims any square, and occupancy is rebuilt from the
//! piece sets after every relocation.

use log::{debug, trace};

use crate::game_state::chess_rules::{
    DARK_KINGSIDE_ROOK_SQUARE, DARK_QUEENSIDE_ROOK_SQUARE, LIGHT_KINGSIDE_ROOK_SQUARE,
    LIGHT_QUEENSIDE_ROOK_SQUARE,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::own_piece_on;
use crate::move_generation::move_generator::is_move_permitted;
use crate::moves::pawn_moves::pawn_push_delta;
use crate::search::zobrist::keys;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied { captured: Option<PieceKind> },
    Rejected,
}

impl MoveOutcome {
    #[inline]
    pub fn is_applied(self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Validate `from -> to` against the generated destinations, then apply it.
///
/// A rejected move leaves the position untouched, including the side to move.
pub fn apply_move(game_state: &mut GameState, from: Square, to: Square) -> MoveOutcome {
    if !is_move_permitted(game_state, from, to) {
        trace!("rejected move {from} -> {to}: not in destination set");
        return MoveOutcome::Rejected;
    }
    apply_unchecked(game_state, from, to)
}

/// Relocate the piece of the side to move from `from` to `to` without
/// consulting the move generator.
///
/// Returns `Rejected` (after a harmless occupancy rebuild) when `from` holds no
/// piece of the side to move or `to` is off the board or friendly-occupied.
pub fn apply_unchecked(game_state: &mut GameState, from: Square, to: Square) -> MoveOutcome {
    let moving_color = game_state.side_to_move;
    let enemy_color = moving_color.opposite();

    let moved_piece = match own_piece_on(game_state, from) {
        Some(piece)
            if to < BOARD_SQUARES
                && from != to
                && game_state.occupancy_by_color[moving_color.index()] & square_mask(to) == 0 =>
        {
            piece
        }
        _ => {
            game_state.recalc_occupancy();
            trace!("ignored relocation {from} -> {to}: no movable piece");
            return MoveOutcome::Rejected;
        }
    };

    let from_mask = square_mask(from);
    let to_mask = square_mask(to);
    let keys = keys();
    let mut key = game_state.zobrist_key;

    // Lift the moving piece.
    game_state.pieces[moving_color.index()][moved_piece.index()] &= !from_mask;
    key ^= keys.piece(moving_color, moved_piece, from);

    // Capture by overwrite: clear the destination in every enemy set.
    let mut captured = None;
    for piece in ALL_PIECE_KINDS {
        let set = &mut game_state.pieces[enemy_color.index()][piece.index()];
        if *set & to_mask != 0 {
            *set &= !to_mask;
            key ^= keys.piece(enemy_color, piece, to);
            captured = Some(piece);
        }
    }

    // En passant: the captured pawn stands behind the target square.
    if moved_piece == PieceKind::Pawn
        && captured.is_none()
        && game_state.en_passant_square == Some(to)
        && file_of(from) != file_of(to)
    {
        let victim = to
            .checked_add_signed(-pawn_push_delta(moving_color))
            .filter(|&sq| sq < BOARD_SQUARES);
        if let Some(victim) = victim {
            let victim_mask = square_mask(victim);
            let pawns = &mut game_state.pieces[enemy_color.index()][PieceKind::Pawn.index()];
            if *pawns & victim_mask != 0 {
                *pawns &= !victim_mask;
                key ^= keys.piece(enemy_color, PieceKind::Pawn, victim);
                captured = Some(PieceKind::Pawn);
            }
        }
    }

    // Place the moving piece.
    game_state.pieces[moving_color.index()][moved_piece.index()] |= to_mask;
    key ^= keys.piece(moving_color, moved_piece, to);

    key ^= keys.castling(game_state.castling_rights);
    update_castling_rights(game_state, moving_color, from, to, moved_piece);
    key ^= keys.castling(game_state.castling_rights);

    key ^= keys.en_passant(game_state.en_passant_square);
    game_state.en_passant_square =
        if moved_piece == PieceKind::Pawn && from.abs_diff(to) == 16 {
            Some((from + to) / 2)
        } else {
            None
        };
    key ^= keys.en_passant(game_state.en_passant_square);

    if moved_piece == PieceKind::Pawn || captured.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    key ^= keys.side_to_move(moving_color) ^ keys.side_to_move(enemy_color);
    game_state.side_to_move = enemy_color;
    game_state.zobrist_key = key;

    game_state.recalc_occupancy();

    debug!(
        "applied {:?} {:?} {from} -> {to}, captured {:?}",
        moving_color, moved_piece, captured
    );

    MoveOutcome::Applied { captured }
}

fn update_castling_rights(
    game_state: &mut GameState,
    moving_color: Color,
    from: Square,
    to: Square,
    moved_piece: PieceKind,
) {
    if moved_piece == PieceKind::King {
        game_state.castling_rights &= match moving_color {
            Color::Light => !(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE),
            Color::Dark => !(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE),
        };
    }

    // A rook leaving its corner, or anything landing on a corner, ends that right.
    for square in [from, to] {
        game_state.castling_rights &= match square {
            LIGHT_QUEENSIDE_ROOK_SQUARE => !CASTLE_LIGHT_QUEENSIDE,
            LIGHT_KINGSIDE_ROOK_SQUARE => !CASTLE_LIGHT_KINGSIDE,
            DARK_QUEENSIDE_ROOK_SQUARE => !CASTLE_DARK_QUEENSIDE,
            DARK_KINGSIDE_ROOK_SQUARE => !CASTLE_DARK_KINGSIDE,
            _ => CASTLE_ALL,
        };
    }
}
