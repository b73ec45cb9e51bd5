//! FEN parsing and serialization for [`Board`] placement and [`Position`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::{File, Rank, Square};

/// The FEN record for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parses the placement field only, e.g. `"8/8/8/8/8/8/8/4K3"`.
impl FromStr for Board {
    type Err = FenError;

    fn from_str(placement: &str) -> Result<Board, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        // FEN ranks run from 8 down to 1.
        for (rank_index, (rank_str, rank)) in ranks.iter().zip(Rank::ALL.into_iter().rev()).enumerate() {
            let mut file_index = 0usize;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file_index += digit as usize;
                    continue;
                }

                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                if file_index >= 8 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: file_index + 1,
                    });
                }
                board.put(Square::new(rank, File::ALL[file_index]), piece);
                file_index += 1;
            }

            if file_index != 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file_index,
                });
            }
        }
        Ok(board)
    }
}

/// Writes the placement field.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in Rank::ALL.into_iter().rev().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            let mut empty_count = 0u8;
            for file in File::ALL {
                match self.piece_on(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let &[placement, turn, castling, en_passant, halfmove, fullmove] = fields.as_slice() else {
            return Err(FenError::WrongFieldCount { found: fields.len() });
        };

        let board: Board = placement.parse()?;

        let turn = match turn {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castle_rights: CastleRights = castling.parse()?;

        let en_passant = match en_passant {
            "-" => None,
            text => Some(
                Square::from_algebraic(text)
                    .filter(|sq| matches!(sq.rank(), Rank::R3 | Rank::R6))
                    .ok_or_else(|| FenError::InvalidEnPassant {
                        found: text.to_string(),
                    })?,
            ),
        };

        let halfmove_clock = parse_counter(halfmove, "halfmove clock")?;
        let fullmove_number = parse_counter(fullmove, "fullmove number")?;

        Ok(Position::new(
            board,
            turn,
            castle_rights,
            en_passant,
            halfmove_clock,
            fullmove_number,
        ))
    }
}

fn parse_counter(text: &str, field: &'static str) -> Result<u32, FenError> {
    text.parse::<u32>().map_err(|_| FenError::InvalidMoveCounter {
        field,
        found: text.to_string(),
    })
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ", self.board(), self.turn(), self.castle_rights())?;
        match self.en_passant() {
            Some(sq) => write!(f, "{sq}")?,
            None => f.write_str("-")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
