//! Bishop, rook and queen destinations.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::friendly_and_enemy;
use crate::moves::sliding_moves::{slider_directions, walk_rays};

pub fn generate_sliding_destinations(
    game_state: &GameState,
    piece: PieceKind,
    from: Square,
    out: &mut Vec<Square>,
) {
    let (friendly, enemy) = friendly_and_enemy(game_state);
    walk_rays(from, slider_directions(piece), friendly, enemy, out);
}

#[cfg(test)]
mod tests {
    use super::generate_sliding_destinations;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    fn destinations(fen: &str, piece: PieceKind, from: Square) -> Vec<Square> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_sliding_destinations(&game, piece, from, &mut out);
        out.sort_unstable();
        out
    }

    #[test]
    fn rook_stops_on_capture_along_rank() {
        // Rook a1, dark knight c1.
        let out = destinations("4k3/8/8/8/8/8/7K/R1n5 w - - 0 1", PieceKind::Rook, 0);
        assert!(out.contains(&1));
        assert!(out.contains(&2));
        for beyond in 3..8u8 {
            assert!(!out.contains(&beyond));
        }
    }

    #[test]
    fn bishop_on_a_file_never_reaches_h_file() {
        for rank in 0..8u8 {
            let from = square_of(rank, 0);
            let fen = {
                let mut game = GameState::new_empty();
                game.pieces[Color::Light.index()][PieceKind::Bishop.index()] = square_mask(from);
                game.recalc_occupancy();
                game.get_fen()
            };
            let out = destinations(&fen, PieceKind::Bishop, from);
            assert!(out.iter().all(|&sq| file_of(sq) != 7), "wrapped from rank {rank}");
            assert_eq!(out.len(), 7);
        }
    }

    #[test]
    fn bishop_on_h_file_never_reaches_a_file() {
        let out = destinations("8/8/8/8/7B/8/8/8 w - - 0 1", PieceKind::Bishop, 31);
        assert!(out.iter().all(|&sq| file_of(sq) != 0));
        assert_eq!(out.len(), 7);
    }

    #[test]
    fn queen_in_starting_position_is_blocked() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_sliding_destinations(&game, PieceKind::Queen, 3, &mut out);
        assert!(out.is_empty());
    }
}
