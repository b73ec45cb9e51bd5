//! Full game state and the transition law between states.

use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::{Move, MoveTag};
use crate::color::Color;
use crate::error::FenError;
use crate::movegen::{self, GenMode};
use crate::piece::PieceKind;
use crate::square::{Rank, Square};

/// How a game ended, or `NoMethod` while it is still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    NoMethod,
    Checkmate,
    Stalemate,
}

/// Everything needed to decide legality and detect repetition.
///
/// A position never changes after construction. [`update`](Self::update)
/// produces a new one, and the only interior state is the legal move list,
/// which is computed once on first request.
#[derive(Clone)]
pub struct Position {
    board: Board,
    turn: Color,
    castle_rights: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    legal: OnceLock<Vec<Move>>,
}

impl Position {
    pub fn new(
        board: Board,
        turn: Color,
        castle_rights: CastleRights,
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Position {
        Position {
            board,
            turn,
            castle_rights,
            en_passant,
            halfmove_clock,
            fullmove_number,
            legal: OnceLock::new(),
        }
    }

    /// The standard initial position.
    pub fn starting() -> Position {
        Position::new(
            Board::starting(),
            Color::White,
            CastleRights::ALL,
            None,
            0,
            1,
        )
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    /// Square a pawn skipped on the previous move, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// The position after `mv` is played.
    ///
    /// `update` does not check legality. An illegal move yields a position
    /// that is internally consistent but not reachable in a real game; use
    /// [`valid_moves`](Self::valid_moves) to pick moves.
    pub fn update(&self, mv: Move) -> Position {
        let src = mv.source();
        let dst = mv.dest();
        let moving = self.board.piece_on(src);

        let mut revoked = CastleRights::for_rook_square(src).insert(CastleRights::for_rook_square(dst));
        if let Some(piece) = moving
            && piece.kind == PieceKind::King
        {
            revoked = revoked.insert(CastleRights::both(piece.color));
        }
        let castle_rights = self.castle_rights.remove(revoked);

        let is_pawn = moving.is_some_and(|piece| piece.kind == PieceKind::Pawn);
        let is_capture = mv.has_tag(MoveTag::Capture) || self.board.is_occupied(dst);
        let halfmove_clock = if is_pawn || is_capture || castle_rights != self.castle_rights {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };

        let fullmove_number = match self.turn {
            Color::White => self.fullmove_number,
            Color::Black => self.fullmove_number.saturating_add(1),
        };

        let en_passant = moving
            .filter(|piece| {
                piece.kind == PieceKind::Pawn
                    && src.file() == dst.file()
                    && src.rank() == piece.color.pawn_rank()
                    && dst.rank() == piece.color.double_step_rank()
            })
            .map(|_| skipped_square(src, dst));

        Position::new(
            self.board.apply(mv),
            self.turn.other(),
            castle_rights,
            en_passant,
            halfmove_clock,
            fullmove_number,
        )
    }

    /// Every legal move for the side to move.
    ///
    /// Computed on the first call and cached; each call returns its own copy.
    pub fn valid_moves(&self) -> Vec<Move> {
        self.legal_moves().to_vec()
    }

    /// Whether the side to move has at least one legal move.
    ///
    /// Reuses the cached list when present and otherwise stops generating at
    /// the first legal move found.
    pub fn has_valid_move(&self) -> bool {
        match self.legal.get() {
            Some(moves) => !moves.is_empty(),
            None => !movegen::generate(self, self.move_targets(), GenMode::First).is_empty(),
        }
    }

    /// Whether the side to move's king is attacked.
    pub fn in_check(&self) -> bool {
        movegen::is_in_check(&self.board, self.turn)
    }

    pub fn status(&self) -> Method {
        if !self.legal_moves().is_empty() {
            Method::NoMethod
        } else if self.in_check() {
            Method::Checkmate
        } else {
            Method::Stalemate
        }
    }

    /// Whether `self` and `other` describe the same position for repetition
    /// purposes: placement, turn, castling rights and en passant square.
    pub fn same_position(&self, other: &Position) -> bool {
        self.board == other.board
            && self.turn == other.turn
            && self.castle_rights == other.castle_rights
            && self.en_passant == other.en_passant
    }

    /// The FEN record for this position.
    pub fn to_fen(&self) -> String {
        self.to_string()
    }

    /// Replace this position with the one described by `fen`.
    ///
    /// On error `self` is left exactly as it was.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), FenError> {
        match fen.parse::<Position>() {
            Ok(position) => {
                *self = position;
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, fen, "rejected FEN record");
                Err(e)
            }
        }
    }

    fn legal_moves(&self) -> &[Move] {
        self.legal.get_or_init(|| {
            let moves = movegen::generate(self, self.move_targets(), GenMode::All);
            trace!(count = moves.len(), "legal moves computed");
            moves
        })
    }

    /// Squares the side to move may land on.
    fn move_targets(&self) -> Bitboard {
        !self.board.side(self.turn)
    }
}

/// The square between the start and end of a pawn double step.
fn skipped_square(src: Square, dst: Square) -> Square {
    let mid = (src.rank().index() + dst.rank().index()) / 2;
    Square::new(Rank::ALL[mid], src.file())
}

impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}

/// Equal when every field matches, counters included. The move cache is
/// ignored.
impl PartialEq for Position {
    fn eq(&self, other: &Position) -> bool {
        self.same_position(other)
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Eq for Position {}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{self}\")")
    }
}
