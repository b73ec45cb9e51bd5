//! Moves: a source, a destination, optional promotion and a tag set.

use std::fmt;

use crate::piece::PieceKind;
use crate::square::Square;

/// Facts about a move recorded by the move generator.
///
/// Tags are informational. [`Board::apply`](crate::Board::apply) infers
/// castling and en passant from the board itself, so hand-built moves
/// without tags still apply correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveTag {
    KingSideCastle = 0b0_0001,
    QueenSideCastle = 0b0_0010,
    Capture = 0b0_0100,
    EnPassant = 0b0_1000,
    /// The move gives check.
    Check = 0b1_0000,
}

impl MoveTag {
    pub const ALL: [MoveTag; 5] = [
        MoveTag::KingSideCastle,
        MoveTag::QueenSideCastle,
        MoveTag::Capture,
        MoveTag::EnPassant,
        MoveTag::Check,
    ];
}

/// A move from one square to another.
///
/// Construction performs no validation: whether a move is legal is decided
/// only by [`Position::valid_moves`](crate::Position::valid_moves).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
    promotion: Option<PieceKind>,
    tags: u8,
}

impl Move {
    #[inline]
    pub const fn new(source: Square, dest: Square) -> Move {
        Move {
            source,
            dest,
            promotion: None,
            tags: 0,
        }
    }

    #[inline]
    pub const fn with_promotion(self, kind: PieceKind) -> Move {
        Move {
            promotion: Some(kind),
            ..self
        }
    }

    #[inline]
    pub const fn with_tag(self, tag: MoveTag) -> Move {
        Move {
            tags: self.tags | tag as u8,
            ..self
        }
    }

    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    pub const fn has_tag(self, tag: MoveTag) -> bool {
        self.tags & tag as u8 != 0
    }

    pub fn tags(self) -> impl Iterator<Item = MoveTag> {
        MoveTag::ALL.into_iter().filter(move |&tag| self.has_tag(tag))
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        self.has_tag(MoveTag::KingSideCastle) || self.has_tag(MoveTag::QueenSideCastle)
    }
}

/// Coordinate form, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self}")?;
        let tags: Vec<MoveTag> = self.tags().collect();
        if !tags.is_empty() {
            write!(f, " {tags:?}")?;
        }
        write!(f, ")")
    }
}
