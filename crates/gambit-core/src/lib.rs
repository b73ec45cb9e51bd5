//! Chess rules state: bitboards, positions, legal moves and FEN records.

mod attacks;
mod bitboard;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod make_move;
pub mod movegen;
mod perft;
mod piece;
mod position;
mod square;

pub use bitboard::Bitboard;
pub use board::Board;
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveTag};
pub use color::Color;
pub use error::{BitboardError, FenError};
pub use fen::STARTING_FEN;
pub use movegen::{GenMode, is_in_check, is_square_attacked};
pub use perft::{divide, perft};
pub use piece::{Piece, PieceKind};
pub use position::{Method, Position};
pub use square::{File, Rank, Square};
