//! Pawn move generation.

use crate::attacks::pawn_attacks;
use crate::bitboard::Bitboard;
use crate::chess_move::{Move, MoveTag};
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::square::Square;

/// Generate pseudo-legal pawn moves: pushes, double pushes, captures,
/// en passant and promotions.
pub(super) fn gen_pawns(position: &Position, targets: Bitboard, list: &mut Vec<Move>) {
    let board = position.board();
    let us = position.turn();
    let them = us.other();
    let enemy = board.side(them);
    let empty = !board.occupied();
    let our_pawns = board.kind(PieceKind::Pawn, us);

    let (forward, double_rank) = match us {
        Color::White => (1, Bitboard::RANK_4),
        Color::Black => (-1, Bitboard::RANK_5),
    };
    let advance = |bb: Bitboard| match us {
        Color::White => bb.north(),
        Color::Black => bb.south(),
    };

    // --- Single pushes ---
    let single = advance(our_pawns) & empty;
    for dst in single & targets {
        if let Some(src) = dst.offset(-forward, 0) {
            push_pawn_move(Move::new(src, dst), us, list);
        }
    }

    // --- Double pushes ---
    let double = advance(single) & empty & double_rank & targets;
    for dst in double {
        if let Some(src) = dst.offset(-2 * forward, 0) {
            list.push(Move::new(src, dst));
        }
    }

    // --- Captures ---
    for src in our_pawns {
        for dst in pawn_attacks(us, src) & enemy & targets {
            push_pawn_move(Move::new(src, dst).with_tag(MoveTag::Capture), us, list);
        }
    }

    // --- En passant ---
    let Some(ep_sq) = position.en_passant() else {
        return;
    };
    if !targets.occupied(ep_sq) || board.is_occupied(ep_sq) {
        return;
    }
    for src in pawn_attacks(them, ep_sq) & our_pawns {
        // The captured pawn stands beside the capturer, on the target's file.
        let victim = Square::new(src.rank(), ep_sq.file());
        if board.piece_on(victim) != Some(Piece::new(PieceKind::Pawn, them)) {
            continue;
        }
        list.push(
            Move::new(src, ep_sq)
                .with_tag(MoveTag::Capture)
                .with_tag(MoveTag::EnPassant),
        );
    }
}

/// Push a pawn move, expanding it into the four promotions on the last rank.
fn push_pawn_move(mv: Move, us: Color, list: &mut Vec<Move>) {
    let last_rank = match us {
        Color::White => Bitboard::RANK_8,
        Color::Black => Bitboard::RANK_1,
    };
    if last_rank.occupied(mv.dest()) {
        list.extend(PieceKind::PROMOTIONS.into_iter().map(|kind| mv.with_promotion(kind)));
    } else {
        list.push(mv);
    }
}
