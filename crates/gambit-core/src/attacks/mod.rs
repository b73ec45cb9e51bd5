//! Attack generation: leaper tables and ray-walking sliders.

mod tables;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::square::Square;

use self::tables::{DIAGONAL, KING_ATTACKS, KNIGHT_ATTACKS, ORTHOGONAL, PAWN_ATTACKS, ray_attacks};

/// Return the squares a knight on `sq` attacks.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

/// Return the squares a king on `sq` attacks.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Return the squares a pawn of `color` on `sq` attacks.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// Return rook attacks from `sq` given `occupied` squares.
///
/// The first blocker along each ray is included.
#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    Bitboard::new(ray_attacks(sq.index(), occupied.inner(), &ORTHOGONAL))
}

/// Return bishop attacks from `sq` given `occupied` squares.
#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    Bitboard::new(ray_attacks(sq.index(), occupied.inner(), &DIAGONAL))
}

#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::Bitboard;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn knight_e4_has_8_attacks() {
        assert_eq!(knight_attacks(Square::E4).count(), 8);
    }

    #[test]
    fn knight_a1_has_2_attacks() {
        let attacks = knight_attacks(Square::A1);
        assert_eq!(attacks.count(), 2);
        assert!(attacks.occupied(Square::B3));
        assert!(attacks.occupied(Square::C2));
    }

    #[test]
    fn king_e1_has_5_attacks() {
        assert_eq!(king_attacks(Square::E1).count(), 5);
    }

    #[test]
    fn king_e4_has_8_attacks() {
        assert_eq!(king_attacks(Square::E4).count(), 8);
    }

    #[test]
    fn pawn_no_wrap_file_a() {
        // A-file pawn must not wrap onto the H-file.
        let attacks = pawn_attacks(Color::White, Square::A4);
        assert_eq!(attacks.count(), 1);
        assert!(attacks.occupied(Square::B5));
    }

    #[test]
    fn pawn_no_wrap_file_h() {
        let attacks = pawn_attacks(Color::White, Square::H4);
        assert_eq!(attacks.count(), 1);
        assert!(attacks.occupied(Square::G5));
    }

    #[test]
    fn pawn_black_attacks_south() {
        let attacks = pawn_attacks(Color::Black, Square::E5);
        assert_eq!(attacks.count(), 2);
        assert!(attacks.occupied(Square::D4));
        assert!(attacks.occupied(Square::F4));
    }

    #[test]
    fn pawn_tables_mirror_each_other() {
        for sq in Square::all() {
            let mirrored = Square::from_index(63 - sq.index() as u8).unwrap();
            assert_eq!(
                pawn_attacks(Color::White, sq).reverse(),
                pawn_attacks(Color::Black, mirrored),
                "pawn mirror at {sq}"
            );
        }
    }

    #[test]
    fn rook_empty_board_always_14() {
        for sq in Square::all() {
            assert_eq!(
                rook_attacks(sq, Bitboard::EMPTY).count(),
                14,
                "rook on {sq} should have 14 attacks on an empty board"
            );
        }
    }

    #[test]
    fn bishop_d4_empty_board_13() {
        assert_eq!(bishop_attacks(Square::D4, Bitboard::EMPTY).count(), 13);
    }

    #[test]
    fn rook_e4_blocked_e6() {
        let occupied = Square::E6.bitboard();
        let attacks = rook_attacks(Square::E4, occupied);
        assert!(attacks.occupied(Square::E5));
        assert!(attacks.occupied(Square::E6));
        assert!(!attacks.occupied(Square::E7));
    }

    #[test]
    fn bishop_c1_blocked_by_own_pawn_structure() {
        let occupied = Square::B2.bitboard() | Square::D2.bitboard();
        let attacks = bishop_attacks(Square::C1, occupied);
        assert_eq!(attacks.count(), 2);
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let occupied = Square::D6.bitboard() | Square::F5.bitboard();
        assert_eq!(
            queen_attacks(Square::D4, occupied),
            rook_attacks(Square::D4, occupied) | bishop_attacks(Square::D4, occupied)
        );
        assert_eq!(queen_attacks(Square::D4, Bitboard::EMPTY).count(), 27);
    }
}
