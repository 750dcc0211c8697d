//! Core chess types: board representation, move generation, and game rules.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod game_state;
mod history;
mod make_move;
pub mod movegen;
mod notation;
pub mod perft;
mod piece;
mod piece_kind;
mod square;

pub use attacks::{in_check, is_square_attacked};
pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, FenError, GameError};
pub use fen::STARTING_FEN;
pub use game_state::{GameState, Outcome, Status, parse_coordinates};
pub use history::{Ledger, LedgerEntry};
pub use make_move::Inverse;
pub use movegen::{MoveList, generate_legal_moves};
pub use notation::san;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
