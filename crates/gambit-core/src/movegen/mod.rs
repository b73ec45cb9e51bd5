//! Legal move generation and attack detection.
//!
//! Candidates are generated per piece, then each is played on a copy of the
//! board and kept only if the mover's king is safe afterwards.

mod king;
mod pawns;
mod pieces;

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::chess_move::{Move, MoveTag};
use crate::color::Color;
use crate::piece::PieceKind;
use crate::position::Position;
use crate::square::Square;

use self::king::{gen_castling, gen_king};
use self::pawns::gen_pawns;
use self::pieces::{gen_knights, gen_sliders};

/// How many legal moves to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenMode {
    /// Every legal move.
    #[default]
    All,
    /// Stop at the first legal move. Enough to tell "some move" from "none".
    First,
}

/// Generate legal moves for the side to move in `position`.
///
/// Only moves landing on a square in `targets` are considered. Moves that
/// give check carry [`MoveTag::Check`].
pub fn generate(position: &Position, targets: Bitboard, mode: GenMode) -> Vec<Move> {
    let board = position.board();
    let us = position.turn();
    let targets = targets & !board.side(us);

    let mut candidates = Vec::with_capacity(64);
    gen_pawns(position, targets, &mut candidates);
    gen_knights(board, us, targets, &mut candidates);
    gen_sliders(board, us, targets, &mut candidates);
    gen_king(board, us, targets, &mut candidates);
    gen_castling(position, targets, &mut candidates);

    let mut legal = Vec::with_capacity(candidates.len());
    for mv in candidates {
        let after = board.apply(mv);
        if is_in_check(&after, us) {
            continue;
        }
        let mv = if is_in_check(&after, us.other()) {
            mv.with_tag(MoveTag::Check)
        } else {
            mv
        };
        legal.push(mv);
        if mode == GenMode::First {
            break;
        }
    }
    legal
}

/// Return `true` if `sq` is attacked by any piece of `by`.
///
/// Attack patterns are cast from the target square and intersected with the
/// attacker's pieces of each kind.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    let occupied = board.occupied();
    let kind = |kind: PieceKind| board.kind(kind, by);

    if (knight_attacks(sq) & kind(PieceKind::Knight)).is_nonempty() {
        return true;
    }
    if (king_attacks(sq) & kind(PieceKind::King)).is_nonempty() {
        return true;
    }
    // A pawn of `by` attacks `sq` iff a pawn of the other color on `sq` would
    // attack the pawn's square.
    if (pawn_attacks(by.other(), sq) & kind(PieceKind::Pawn)).is_nonempty() {
        return true;
    }
    let queens = kind(PieceKind::Queen);
    if (rook_attacks(sq, occupied) & (kind(PieceKind::Rook) | queens)).is_nonempty() {
        return true;
    }
    (bishop_attacks(sq, occupied) & (kind(PieceKind::Bishop) | queens)).is_nonempty()
}

/// Whether `color`'s king is attacked. A side without a king is never in
/// check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_square_attacked(board, king, color.other()))
}

/// Push `src -> dst`, tagging captures of pieces standing on `dst`.
fn push_move(board: &Board, src: Square, dst: Square, list: &mut Vec<Move>) {
    let mv = Move::new(src, dst);
    list.push(if board.is_occupied(dst) {
        mv.with_tag(MoveTag::Capture)
    } else {
        mv
    });
}
