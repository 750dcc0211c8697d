//! FEN parsing and serialization for [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::WrongRankCount { found: rows.len() });
    }

    for (rank_index, row) in rows.iter().enumerate() {
        let rank = 7 - rank_index as u8;
        let mut file: usize = 0;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file += skip as usize;
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let sq = Square::from_coords(file as u8, rank).ok_or(FenError::BadRankLength {
                rank_index,
                length: file + 1,
            })?;
            board.set(sq, Some(piece));
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRankLength { rank_index, length: file });
        }
    }
    Ok(())
}

fn parse_counter(field: &'static str, text: &str) -> Result<u16, FenError> {
    text.parse().map_err(|_| FenError::InvalidMoveCounter {
        field,
        found: text.to_string(),
    })
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let &[placement, color, castling, en_passant, halfmove, fullmove] = fields.as_slice() else {
            return Err(FenError::WrongFieldCount { found: fields.len() });
        };

        let mut board = Board::empty();
        parse_placement(&mut board, placement)?;

        board.set_side_to_move(match color {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidColor { found: other.to_string() }),
        });
        board.set_castling(CastleRights::from_fen(castling)?);
        board.set_en_passant(match en_passant {
            "-" => None,
            text => Some(Square::from_algebraic(text).ok_or_else(|| FenError::InvalidEnPassant {
                found: text.to_string(),
            })?),
        });
        board.set_halfmove_clock(parse_counter("halfmove clock", halfmove)?);
        board.set_fullmove_number(parse_counter("fullmove number", fullmove)?);

        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty = 0;
            for file in 0u8..8 {
                match Square::from_coords(file, rank).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} {}", self.side_to_move().fen_char(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
