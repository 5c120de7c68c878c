//! Precomputed destination masks for the fixed-offset pieces.
//!
//! Knight and king moves are a fixed list of `(rank_delta, file_delta)` jumps.
//! The tables are built at compile time, discarding every jump that would
//! leave the board.

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub const KNIGHT_JUMPS: [u64; 64] = build_jump_table(&KNIGHT_OFFSETS);
pub const KING_STEPS: [u64; 64] = build_jump_table(&KING_OFFSETS);

#[inline]
pub const fn knight_jumps(square: u8) -> u64 {
    KNIGHT_JUMPS[square as usize]
}

#[inline]
pub const fn king_steps(square: u8) -> u64 {
    KING_STEPS[square as usize]
}

const fn build_jump_table(offsets: &[(i8, i8); 8]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut mask = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            let r = rank + offsets[i].0;
            let f = file + offsets[i].1;
            if r >= 0 && r < 8 && f >= 0 && f < 8 {
                mask |= 1u64 << (r as usize * 8 + f as usize);
            }
            i += 1;
        }

        table[sq] = mask;
        sq += 1;
    }

    table
}
