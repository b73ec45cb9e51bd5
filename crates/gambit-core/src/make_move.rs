//! Move execution via copy-make.

use tracing::debug;

use crate::board::Board;
use crate::chess_move::{Move, MoveTag};
use crate::piece::{Piece, PieceKind};
use crate::square::{File, Square};

impl Board {
    /// Apply a move and return the resulting board. Copy-make: `self` is not
    /// modified.
    ///
    /// Castling and en passant are inferred from the pieces involved, so the
    /// move's tags are not required. Legality is not checked. If the source
    /// square is empty the board is returned unchanged.
    pub fn apply(&self, mv: Move) -> Board {
        let mut b = *self;
        let src = mv.source();
        let dst = mv.dest();

        let Some(moving) = b.take(src) else {
            debug!(%src, %dst, "apply: source square is empty");
            return b;
        };

        let target_was_empty = b.take(dst).is_none();
        let file_delta = dst.file().index() as i8 - src.file().index() as i8;

        match moving.kind {
            PieceKind::Pawn => {
                if target_was_empty && file_delta != 0 {
                    // En passant: the captured pawn sits beside the source.
                    b.take(Square::new(src.rank(), dst.file()));
                }
            }
            PieceKind::King if file_delta.abs() == 2 || mv.is_castle() => {
                let kingside = if mv.has_tag(MoveTag::QueenSideCastle) {
                    false
                } else if mv.has_tag(MoveTag::KingSideCastle) {
                    true
                } else {
                    file_delta > 0
                };
                let (rook_from, rook_to) = if kingside {
                    (File::H, File::F)
                } else {
                    (File::A, File::D)
                };
                let rook_src = Square::new(src.rank(), rook_from);
                if let Some(rook) = b.take(rook_src) {
                    b.put(Square::new(src.rank(), rook_to), rook);
                }
            }
            _ => {}
        }

        let placed = match mv.promotion() {
            Some(kind) if moving.kind == PieceKind::Pawn => Piece::new(kind, moving.color),
            _ => moving,
        };
        b.put(dst, placed);
        b
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::{Move, MoveTag};
    use crate::color::Color;
    use crate::piece::{Piece, PieceKind};
    use crate::square::Square;

    fn board(placement: &str) -> Board {
        placement.parse().unwrap()
    }

    #[test]
    fn quiet_move_relocates_piece() {
        let after = Board::starting().apply(Move::new(Square::G1, Square::F3));
        assert_eq!(after.piece_on(Square::G1), None);
        assert_eq!(
            after.piece_on(Square::F3),
            Some(Piece::new(PieceKind::Knight, Color::White))
        );
        assert_eq!(after.occupied().count(), 32);
    }

    #[test]
    fn capture_removes_victim() {
        let b = board("4k3/8/8/3p4/4P3/8/8/4K3");
        let after = b.apply(Move::new(Square::E4, Square::D5));
        assert_eq!(after.piece_on(Square::D5), Some(Piece::WHITE_PAWN));
        assert!(after.kind(PieceKind::Pawn, Color::Black).is_empty());
        assert_eq!(after.occupied().count(), 3);
    }

    #[test]
    fn en_passant_removes_passed_pawn() {
        let b = board("4k3/8/8/3pP3/8/8/8/4K3");
        let after = b.apply(Move::new(Square::E5, Square::D6));
        assert_eq!(after.piece_on(Square::D6), Some(Piece::WHITE_PAWN));
        assert_eq!(after.piece_on(Square::D5), None);
        assert_eq!(after.occupied().count(), 3);
    }

    #[test]
    fn kingside_castle_moves_rook() {
        let b = board("4k3/8/8/8/8/8/8/R3K2R");
        let after = b.apply(Move::new(Square::E1, Square::G1));
        assert_eq!(after.piece_on(Square::G1), Some(Piece::WHITE_KING));
        assert_eq!(after.piece_on(Square::F1), Some(Piece::WHITE_ROOK));
        assert_eq!(after.piece_on(Square::H1), None);
        assert_eq!(after.piece_on(Square::A1), Some(Piece::WHITE_ROOK));
    }

    #[test]
    fn queenside_castle_moves_rook() {
        let b = board("r3k3/8/8/8/8/8/8/4K3");
        let mv = Move::new(Square::E8, Square::C8).with_tag(MoveTag::QueenSideCastle);
        let after = b.apply(mv);
        assert_eq!(after.piece_on(Square::C8), Some(Piece::BLACK_KING));
        assert_eq!(after.piece_on(Square::D8), Some(Piece::BLACK_ROOK));
        assert_eq!(after.piece_on(Square::A8), None);
    }

    #[test]
    fn promotion_places_new_piece() {
        let b = board("1r2k3/P7/8/8/8/8/8/4K3");
        let after = b.apply(Move::new(Square::A7, Square::B8).with_promotion(PieceKind::Knight));
        assert_eq!(
            after.piece_on(Square::B8),
            Some(Piece::new(PieceKind::Knight, Color::White))
        );
        assert!(after.kind(PieceKind::Pawn, Color::White).is_empty());
        assert!(after.kind(PieceKind::Rook, Color::Black).is_empty());
    }

    #[test]
    fn empty_source_is_a_no_op() {
        let b = Board::starting();
        assert_eq!(b.apply(Move::new(Square::E4, Square::E5)), b);
    }

    #[test]
    fn original_board_is_untouched() {
        let b = Board::starting();
        let _ = b.apply(Move::new(Square::E2, Square::E4));
        assert_eq!(b.piece_on(Square::E2), Some(Piece::WHITE_PAWN));
    }
}
