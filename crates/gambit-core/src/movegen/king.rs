//! King move and castling generation.

use crate::attacks::king_attacks;
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveTag};
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::square::{File, Rank, Square};

use super::{is_square_attacked, push_move};

/// Files involved in castling toward one wing.
struct CastlePath {
    rook: File,
    must_be_empty: &'static [File],
    /// Squares the king crosses, ending on its landing square.
    king_path: [File; 2],
    tag: MoveTag,
}

const KING_SIDE: CastlePath = CastlePath {
    rook: File::H,
    must_be_empty: &[File::F, File::G],
    king_path: [File::F, File::G],
    tag: MoveTag::KingSideCastle,
};

const QUEEN_SIDE: CastlePath = CastlePath {
    rook: File::A,
    must_be_empty: &[File::B, File::C, File::D],
    king_path: [File::D, File::C],
    tag: MoveTag::QueenSideCastle,
};

/// Generate ordinary one-step king moves.
pub(super) fn gen_king(board: &Board, us: Color, targets: Bitboard, list: &mut Vec<Move>) {
    for src in board.kind(PieceKind::King, us) {
        for dst in king_attacks(src) & targets {
            push_move(board, src, dst, list);
        }
    }
}

/// Generate castling moves.
///
/// The king must stand on its home square with the rook on its corner and
/// nothing between them. Neither the king's square nor any square it crosses
/// may be attacked.
pub(super) fn gen_castling(position: &Position, targets: Bitboard, list: &mut Vec<Move>) {
    let board = position.board();
    let us = position.turn();
    let them = us.other();
    let home = match us {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    };
    let king_sq = Square::new(home, File::E);

    if board.piece_on(king_sq) != Some(Piece::new(PieceKind::King, us)) {
        return;
    }
    if is_square_attacked(board, king_sq, them) {
        return;
    }

    for side in CastleSide::ALL {
        if !position.castle_rights().can_castle(us, side) {
            continue;
        }
        let path = match side {
            CastleSide::KingSide => &KING_SIDE,
            CastleSide::QueenSide => &QUEEN_SIDE,
        };

        if board.piece_on(Square::new(home, path.rook)) != Some(Piece::new(PieceKind::Rook, us)) {
            continue;
        }
        if path.must_be_empty.iter().any(|&file| board.is_occupied(Square::new(home, file))) {
            continue;
        }
        if path
            .king_path
            .iter()
            .any(|&file| is_square_attacked(board, Square::new(home, file), them))
        {
            continue;
        }

        let dst = Square::new(home, path.king_path[1]);
        if targets.occupied(dst) {
            list.push(Move::new(king_sq, dst).with_tag(path.tag));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{gen_castling, gen_king};
    use crate::bitboard::Bitboard;
    use crate::chess_move::{Move, MoveTag};
    use crate::color::Color;
    use crate::position::Position;
    use crate::square::Square;

    fn castles(fen: &str) -> Vec<Move> {
        let p: Position = fen.parse().unwrap();
        let mut list = Vec::new();
        gen_castling(&p, Bitboard::FULL, &mut list);
        list
    }

    #[test]
    fn both_wings_available() {
        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        assert_eq!(
            moves,
            vec![
                Move::new(Square::E8, Square::G8).with_tag(MoveTag::KingSideCastle),
                Move::new(Square::E8, Square::C8).with_tag(MoveTag::QueenSideCastle),
            ]
        );
    }

    #[test]
    fn rights_are_required() {
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1").is_empty());
    }

    #[test]
    fn displaced_king_cannot_castle() {
        assert!(castles("4k3/8/8/8/8/8/8/R4K1R w KQ - 0 1").is_empty());
    }

    #[test]
    fn landing_square_must_be_safe() {
        // The g8 rook covers g1.
        let moves = castles("4k1r1/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(moves.is_empty());
    }

    #[test]
    fn corner_king_moves() {
        let p: Position = "4k3/8/8/8/8/8/8/K7 w - - 0 1".parse().unwrap();
        let mut list = Vec::new();
        gen_king(p.board(), Color::White, Bitboard::FULL, &mut list);
        assert_eq!(list.len(), 3);
    }
}
