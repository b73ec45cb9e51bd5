//! Piece placement: twelve piece bitboards plus per-side aggregates.

use std::collections::HashMap;
use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::square::{File, Rank, Square};

/// Where every piece stands, and nothing else.
///
/// Side to move, castling rights, en passant and clocks live on
/// [`Position`](crate::Position). Boards are small `Copy` values; every
/// position owns its own.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// One bitboard per (kind, color), indexed by [`Piece::index`].
    pieces: [Bitboard; Piece::COUNT],
    /// Union of each side's piece bitboards, indexed by [`Color::index`].
    sides: [Bitboard; 2],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Board {
        Board {
            pieces: [Bitboard::EMPTY; Piece::COUNT],
            sides: [Bitboard::EMPTY; 2],
        }
    }

    /// The standard initial arrangement.
    pub fn starting() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
            board.put(Square::new(Rank::R1, file), Piece::new(kind, Color::White));
            board.put(Square::new(Rank::R2, file), Piece::WHITE_PAWN);
            board.put(Square::new(Rank::R7, file), Piece::BLACK_PAWN);
            board.put(Square::new(Rank::R8, file), Piece::new(kind, Color::Black));
        }
        board
    }

    /// Build a board from a square → piece mapping.
    pub fn from_pieces(placement: &HashMap<Square, Piece>) -> Board {
        let mut board = Board::empty();
        for (&sq, &piece) in placement {
            board.put(sq, piece);
        }
        board
    }

    /// Every occupied square with its piece.
    pub fn piece_map(&self) -> HashMap<Square, Piece> {
        self.occupied()
            .filter_map(|sq| Some((sq, self.piece_on(sq)?)))
            .collect()
    }

    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        Piece::all().find(|piece| self.pieces[piece.index()].occupied(sq))
    }

    /// Squares holding `piece`.
    #[inline]
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.index()]
    }

    /// Squares holding `kind` of `color`.
    #[inline]
    pub fn kind(&self, kind: PieceKind, color: Color) -> Bitboard {
        self.pieces(Piece::new(kind, color))
    }

    /// All squares occupied by `color`.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.sides[0] | self.sides[1]
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occupied().occupied(sq)
    }

    /// Where `color`'s king stands, if it has one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kind(PieceKind::King, color).first()
    }

    /// Place `piece` on `sq`. The square must be empty for the aggregates to
    /// stay consistent; [`apply`](Self::apply) clears squares first.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        self.pieces[piece.index()] = self.pieces[piece.index()].with(sq);
        self.sides[piece.color.index()] = self.sides[piece.color.index()].with(sq);
    }

    /// Remove whatever stands on `sq`, returning it.
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_on(sq)?;
        self.pieces[piece.index()] = self.pieces[piece.index()].without(sq);
        self.sides[piece.color.index()] = self.sides[piece.color.index()].without(sq);
        Some(piece)
    }

    /// A printable 8x8 diagram, rank 8 on top.
    pub fn draw(&self) -> String {
        let mut s = String::new();
        for rank in Rank::ALL.into_iter().rev() {
            s.push_str(&rank.to_string());
            for file in File::ALL {
                s.push(' ');
                s.push(
                    self.piece_on(Square::new(rank, file))
                        .map_or('.', Piece::fen_char),
                );
            }
            s.push('\n');
        }
        s.push_str("  a b c d e f g h");
        s
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}
