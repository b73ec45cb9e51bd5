//! 64-bit occupancy sets over board squares.

use std::collections::HashMap;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};
use std::str::FromStr;

use crate::error::BitboardError;
use crate::square::{File, Rank, Square};

/// A set of squares packed into a `u64`.
///
/// Bit order is most-significant first: square 0 (a1) is the MSB and square
/// 63 (h8) is the LSB, so square `i` lives at `1 << (63 - i)`. Every mask,
/// attack table and the textual form depend on this layout.
///
/// Reading the word from left to right therefore walks the squares in index
/// order, which is exactly what [`Display`](fmt::Display) prints.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(!0);

    pub const RANK_1: Bitboard = Bitboard::rank_mask(Rank::R1);
    pub const RANK_2: Bitboard = Bitboard::rank_mask(Rank::R2);
    pub const RANK_3: Bitboard = Bitboard::rank_mask(Rank::R3);
    pub const RANK_4: Bitboard = Bitboard::rank_mask(Rank::R4);
    pub const RANK_5: Bitboard = Bitboard::rank_mask(Rank::R5);
    pub const RANK_6: Bitboard = Bitboard::rank_mask(Rank::R6);
    pub const RANK_7: Bitboard = Bitboard::rank_mask(Rank::R7);
    pub const RANK_8: Bitboard = Bitboard::rank_mask(Rank::R8);

    pub const FILE_A: Bitboard = Bitboard::file_mask(File::A);
    pub const FILE_H: Bitboard = Bitboard::file_mask(File::H);

    #[inline]
    pub const fn new(bits: u64) -> Bitboard {
        Bitboard(bits)
    }

    #[inline]
    pub const fn inner(self) -> u64 {
        self.0
    }

    /// Build a bitboard from a square → occupied mapping.
    ///
    /// Squares absent from the map are unoccupied. Bits are set directly, so
    /// construction cannot fail for any mapping.
    pub fn from_mapping(mapping: &HashMap<Square, bool>) -> Bitboard {
        mapping
            .iter()
            .filter(|&(_, &occupied)| occupied)
            .map(|(&sq, _)| sq)
            .collect()
    }

    /// Inverse of [`from_mapping`](Self::from_mapping): one entry per square.
    pub fn to_mapping(self) -> HashMap<Square, bool> {
        Square::all().map(|sq| (sq, self.occupied(sq))).collect()
    }

    /// Whether `sq` is in the set, i.e. `(bits >> (63 - sq)) & 1 == 1`.
    #[inline]
    pub const fn occupied(self, sq: Square) -> bool {
        (self.0 >> (63 - sq.index())) & 1 == 1
    }

    /// Bit-reversed copy: square `i` maps to square `63 - i`.
    ///
    /// Mirrors a set through the board centre, which turns White-relative
    /// geometry into Black-relative geometry.
    #[inline]
    pub const fn reverse(self) -> Bitboard {
        Bitboard(self.0.reverse_bits())
    }

    #[inline]
    pub const fn with(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | sq.bitboard().0)
    }

    #[inline]
    pub const fn without(self, sq: Square) -> Bitboard {
        Bitboard(self.0 & !sq.bitboard().0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_nonempty(self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Lowest-index square in the set (the most significant set bit).
    #[inline]
    pub const fn first(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_index_unchecked(self.0.leading_zeros() as u8))
        }
    }

    /// Shift every square one rank toward rank 8.
    #[inline]
    pub const fn north(self) -> Bitboard {
        Bitboard(self.0 >> 8)
    }

    /// Shift every square one rank toward rank 1.
    #[inline]
    pub const fn south(self) -> Bitboard {
        Bitboard(self.0 << 8)
    }

    pub const fn rank_mask(rank: Rank) -> Bitboard {
        Bitboard(0xFF00_0000_0000_0000 >> (rank as u32 * 8))
    }

    pub const fn file_mask(file: File) -> Bitboard {
        Bitboard(0x8080_8080_8080_8080 >> file as u32)
    }

    /// Render an 8x8 grid of `1`/`0`, rank 8 at the top. Diagnostics only.
    pub fn draw(self) -> String {
        let mut s = String::from("\n  A B C D E F G H\n");
        for rank in Rank::ALL.into_iter().rev() {
            s.push_str(&rank.to_string());
            for file in File::ALL {
                s.push(' ');
                s.push(if self.occupied(Square::new(rank, file)) { '1' } else { '0' });
            }
            s.push('\n');
        }
        s
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Bitboard {
        iter.into_iter().fold(Bitboard::EMPTY, Bitboard::with)
    }
}

/// Yields the set squares in ascending index order.
impl Iterator for Bitboard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let sq = self.first()?;
        *self = self.without(sq);
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Bitboard {}

/// 64 binary digits, square 0 first.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:064b}", self.0)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitboard({:#018x}){}", self.0, self.draw())
    }
}

impl FromStr for Bitboard {
    type Err = BitboardError;

    fn from_str(s: &str) -> Result<Bitboard, BitboardError> {
        if s.len() != Square::COUNT {
            return Err(BitboardError::WrongLength { found: s.len() });
        }
        if let Some(character) = s.chars().find(|c| !matches!(c, '0' | '1')) {
            return Err(BitboardError::InvalidDigit { character });
        }
        u64::from_str_radix(s, 2)
            .map(Bitboard)
            .map_err(|_| BitboardError::WrongLength { found: s.len() })
    }
}
