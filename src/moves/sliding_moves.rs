//! Ray walking for bishops, rooks and queens.
//!
//! Directions are expressed as a flat square delta plus the file delta that
//! one step must produce. A step whose actual file change differs has wrapped
//! around the board edge (for example `-7` from a file-0 square lands on file 7
//! of the rank below) and ends the ray.

use crate::game_state::chess_types::{file_of, square_mask, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayDirection {
    pub square_delta: i8,
    pub file_delta: i8,
}

const fn dir(square_delta: i8, file_delta: i8) -> RayDirection {
    RayDirection {
        square_delta,
        file_delta,
    }
}

pub const ORTHOGONAL_DIRECTIONS: [RayDirection; 4] = [dir(8, 0), dir(-8, 0), dir(1, 1), dir(-1, -1)];

pub const DIAGONAL_DIRECTIONS: [RayDirection; 4] = [dir(9, 1), dir(7, -1), dir(-7, 1), dir(-9, -1)];

pub const ALL_DIRECTIONS: [RayDirection; 8] = [
    dir(8, 0),
    dir(-8, 0),
    dir(1, 1),
    dir(-1, -1),
    dir(9, 1),
    dir(7, -1),
    dir(-7, 1),
    dir(-9, -1),
];

/// Ray set for a sliding piece kind; empty for non-sliders.
pub fn slider_directions(piece: PieceKind) -> &'static [RayDirection] {
    match piece {
        PieceKind::Bishop => &DIAGONAL_DIRECTIONS,
        PieceKind::Rook => &ORTHOGONAL_DIRECTIONS,
        PieceKind::Queen => &ALL_DIRECTIONS,
        _ => &[],
    }
}

/// One step along `direction`, or `None` when it leaves the board or wraps.
#[inline]
pub fn step(square: Square, direction: RayDirection) -> Option<Square> {
    let next = square as i16 + direction.square_delta as i16;
    if !(0..64).contains(&next) {
        return None;
    }
    let next = next as Square;
    if file_of(next) as i8 - file_of(square) as i8 != direction.file_delta {
        return None;
    }
    Some(next)
}

/// Walk every ray from `from`, appending reachable squares to `out`.
///
/// A ray stops before a friendly piece and on (including) an enemy piece.
pub fn walk_rays(
    from: Square,
    directions: &[RayDirection],
    friendly: u64,
    enemy: u64,
    out: &mut Vec<Square>,
) {
    for &direction in directions {
        let mut current = from;
        while let Some(next) = step(current, direction) {
            let mask = square_mask(next);
            if friendly & mask != 0 {
                break;
            }
            out.push(next);
            if enemy & mask != 0 {
                break;
            }
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reach(from: Square, directions: &[RayDirection], friendly: u64, enemy: u64) -> u64 {
        let mut out = Vec::new();
        walk_rays(from, directions, friendly, enemy, &mut out);
        out.iter().fold(0u64, |acc, &sq| acc | square_mask(sq))
    }

    #[test]
    fn rook_on_empty_board_from_d4_has_fourteen_squares() {
        assert_eq!(reach(27, &ORTHOGONAL_DIRECTIONS, 0, 0).count_ones(), 14);
    }

    #[test]
    fn queen_on_empty_board_from_d4_has_twenty_seven_squares() {
        assert_eq!(reach(27, &ALL_DIRECTIONS, 0, 0).count_ones(), 27);
    }

    #[test]
    fn step_rejects_wraparound() {
        // a2 (8) minus 9 would be h0-ish; a2 minus 1 would land on h1.
        assert_eq!(step(8, dir(-1, -1)), None);
        assert_eq!(step(8, dir(-9, -1)), None);
        assert_eq!(step(15, dir(1, 1)), None);
        assert_eq!(step(15, dir(9, 1)), None);
        // a2 + (-7) is b1: legal diagonal.
        assert_eq!(step(8, dir(-7, 1)), Some(1));
        assert_eq!(step(63, dir(8, 0)), None);
        assert_eq!(step(0, dir(-8, 0)), None);
    }

    #[test]
    fn friendly_blocker_is_excluded_enemy_blocker_is_included() {
        let friendly = square_mask(24); // a4
        let enemy = square_mask(2); // c1
        let reached = reach(0, &ORTHOGONAL_DIRECTIONS, friendly, enemy);
        assert_eq!(reached, square_mask(8) | square_mask(16) | square_mask(1) | square_mask(2));
    }
}
