//! Knight and slider move generation.

use crate::attacks::{bishop_attacks, knight_attacks, queen_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::PieceKind;

use super::push_move;

pub(super) fn gen_knights(board: &Board, us: Color, targets: Bitboard, list: &mut Vec<Move>) {
    for src in board.kind(PieceKind::Knight, us) {
        for dst in knight_attacks(src) & targets {
            push_move(board, src, dst, list);
        }
    }
}

/// Generate bishop, rook and queen moves.
pub(super) fn gen_sliders(board: &Board, us: Color, targets: Bitboard, list: &mut Vec<Move>) {
    let occupied = board.occupied();
    for kind in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
        for src in board.kind(kind, us) {
            let attacks = match kind {
                PieceKind::Bishop => bishop_attacks(src, occupied),
                PieceKind::Rook => rook_attacks(src, occupied),
                _ => queen_attacks(src, occupied),
            };
            for dst in attacks & targets {
                push_move(board, src, dst, list);
            }
        }
    }
}
