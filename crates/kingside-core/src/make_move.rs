//! Move execution with recorded inverse data.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Board state a move overwrites and cannot recompute on its own.
///
/// Together with the [`Move`] itself (which carries the moved and captured
/// pieces) this is enough to restore the prior board exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inverse {
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

impl Board {
    /// Apply `mv` in place and return what is needed to take it back.
    ///
    /// Legality is not checked; `mv` must come from move generation for
    /// this exact position.
    pub fn apply(&mut self, mv: Move) -> Inverse {
        let inverse = Inverse {
            castling: self.castling(),
            en_passant: self.en_passant(),
            halfmove_clock: self.halfmove_clock(),
            fullmove_number: self.fullmove_number(),
        };
        let us = mv.piece().color();
        debug_assert_eq!(self.piece_at(mv.from()), Some(mv.piece()), "{mv:?} on {self:?}");

        if let Some(sq) = mv.capture_square() {
            self.set(sq, None);
        }
        self.set(mv.from(), None);

        let landed = match mv.kind() {
            MoveKind::Promotion(promo) => Piece::new(promo.to_piece_kind(), us),
            _ => mv.piece(),
        };
        self.set(mv.to(), Some(landed));

        if let MoveKind::Castle(side) = mv.kind() {
            let (rook_from, rook_to) = side.rook_squares(us);
            let rook = self.piece_at(rook_from);
            self.set(rook_from, None);
            self.set(rook_to, rook);
        }

        let en_passant = match mv.kind() {
            MoveKind::DoublePush => mv.from().offset(0, us.forward()),
            _ => None,
        };
        self.set_en_passant(en_passant);
        self.set_castling(self.castling().touched(mv.from()).touched(mv.to()));

        let resets_clock = mv.is_capture() || mv.piece().kind() == PieceKind::Pawn;
        self.set_halfmove_clock(if resets_clock { 0 } else { inverse.halfmove_clock.saturating_add(1) });
        if us == Color::Black {
            self.set_fullmove_number(inverse.fullmove_number.saturating_add(1));
        }
        self.set_side_to_move(us.flip());

        inverse
    }

    /// Take back `mv`, which must be the last move applied, using the
    /// [`Inverse`] that [`apply`](Board::apply) returned for it.
    pub fn revert(&mut self, mv: Move, inverse: &Inverse) {
        let us = mv.piece().color();

        if let MoveKind::Castle(side) = mv.kind() {
            let (rook_from, rook_to) = side.rook_squares(us);
            let rook = self.piece_at(rook_to);
            self.set(rook_to, None);
            self.set(rook_from, rook);
        }

        self.set(mv.to(), None);
        if let Some(sq) = mv.capture_square() {
            self.set(sq, mv.captured());
        }
        self.set(mv.from(), Some(mv.piece()));

        self.set_castling(inverse.castling);
        self.set_en_passant(inverse.en_passant);
        self.set_halfmove_clock(inverse.halfmove_clock);
        self.set_fullmove_number(inverse.fullmove_number);
        self.set_side_to_move(us);
    }

    /// Copy-make: return the board after `mv`, leaving `self` untouched.
    pub fn make_move(&self, mv: Move) -> Board {
        let mut next = *self;
        next.apply(mv);
        next
    }
}
