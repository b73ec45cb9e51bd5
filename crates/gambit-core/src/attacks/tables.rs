//! Precomputed leaper attack tables.
//!
//! Bits follow the crate-wide layout: square `i` is `1 << (63 - i)`.

use crate::bitboard::Bitboard;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

const WHITE_PAWN_DELTAS: [(i8, i8); 2] = [(1, -1), (1, 1)];
const BLACK_PAWN_DELTAS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

/// Bit for `(rank, file)`, or 0 when the coordinate is off the board.
const fn bit_at(rank: i8, file: i8) -> u64 {
    if rank >= 0 && rank < 8 && file >= 0 && file < 8 {
        1u64 << (63 - (rank as u32 * 8 + file as u32))
    } else {
        0
    }
}

const fn leaper_table(deltas: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;
    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut bits = 0u64;
        let mut d = 0;
        while d < deltas.len() {
            bits |= bit_at(rank + deltas[d].0, file + deltas[d].1);
            d += 1;
        }
        table[sq] = Bitboard::new(bits);
        sq += 1;
    }
    table
}

pub(super) static KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(&KNIGHT_DELTAS);
pub(super) static KING_ATTACKS: [Bitboard; 64] = leaper_table(&KING_DELTAS);

/// Index 0 = White (captures toward rank 8), index 1 = Black.
pub(super) static PAWN_ATTACKS: [[Bitboard; 64]; 2] = [
    leaper_table(&WHITE_PAWN_DELTAS),
    leaper_table(&BLACK_PAWN_DELTAS),
];

/// Rook directions as (rank, file) steps.
pub(super) const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
/// Bishop directions as (rank, file) steps.
pub(super) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk each ray from `sq` until the edge or the first occupied square,
/// which is included.
pub(super) const fn ray_attacks(sq: usize, occupied: u64, directions: &[(i8, i8); 4]) -> u64 {
    let rank = (sq / 8) as i8;
    let file = (sq % 8) as i8;
    let mut attacks = 0u64;
    let mut d = 0;
    while d < 4 {
        let (dr, df) = directions[d];
        let mut r = rank + dr;
        let mut f = file + df;
        loop {
            let bit = bit_at(r, f);
            if bit == 0 {
                break;
            }
            attacks |= bit;
            if occupied & bit != 0 {
                break;
            }
            r += dr;
            f += df;
        }
        d += 1;
    }
    attacks
}
