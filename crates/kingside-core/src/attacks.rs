//! Piece geometry and attack detection on the mailbox board.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// (file, rank) steps of a knight.
pub(crate) const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// (file, rank) steps of a king.
pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Walk from `from` along `(df, dr)` until the edge or the first occupied
/// square, which is included.
pub(crate) fn ray(board: &Board, from: Square, (df, dr): (i8, i8)) -> impl Iterator<Item = Square> + '_ {
    let mut current = Some(from);
    let mut blocked = false;
    std::iter::from_fn(move || {
        if blocked {
            return None;
        }
        let next = current?.offset(df, dr)?;
        current = Some(next);
        blocked = board.is_occupied(next);
        Some(next)
    })
}

/// `true` if any piece of `by` attacks `sq`.
///
/// Patterns are cast outward from the target square and matched against
/// the attacker that would have to stand at the far end.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    let is = |target: Option<Square>, kind: PieceKind| {
        target.is_some_and(|t| board.piece_at(t) == Some(Piece::new(kind, by)))
    };

    // A pawn of `by` attacks diagonally forward, so look one rank behind.
    let back = -by.forward();
    if is(sq.offset(-1, back), PieceKind::Pawn) || is(sq.offset(1, back), PieceKind::Pawn) {
        return true;
    }

    if KNIGHT_STEPS.iter().any(|&(df, dr)| is(sq.offset(df, dr), PieceKind::Knight)) {
        return true;
    }

    if KING_STEPS.iter().any(|&(df, dr)| is(sq.offset(df, dr), PieceKind::King)) {
        return true;
    }

    let slider_hits = |directions: &[(i8, i8)], kind: PieceKind| {
        directions.iter().any(|&dir| {
            ray(board, sq, dir).last().is_some_and(|end| {
                board.piece_at(end).is_some_and(|p| {
                    p.color() == by && (p.kind() == kind || p.kind() == PieceKind::Queen)
                })
            })
        })
    };

    slider_hits(&ROOK_DIRECTIONS, PieceKind::Rook) || slider_hits(&BISHOP_DIRECTIONS, PieceKind::Bishop)
}

/// `true` if `color`'s king is attacked. A side without a king is never in check.
pub fn in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_square_attacked(board, king, color.flip()))
}

#[cfg(test)]
mod tests {
    use super::{in_check, is_square_attacked, ray};
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn starting_position_attacks() {
        let board = Board::starting_position();
        assert!(is_square_attacked(&board, Square::E3, Color::White));
        assert!(is_square_attacked(&board, Square::F3, Color::White));
        assert!(!is_square_attacked(&board, Square::E4, Color::White));
        assert!(is_square_attacked(&board, Square::F6, Color::Black));
        assert!(!in_check(&board, Color::White));
        assert!(!in_check(&board, Color::Black));
    }

    #[test]
    fn ray_stops_at_first_blocker() {
        let board = Board::starting_position();
        let squares: Vec<Square> = ray(&board, Square::A1, (0, 1)).collect();
        assert_eq!(squares, vec![Square::A2]);

        let open: Vec<Square> = ray(&board, Square::E4, (0, 1)).collect();
        assert_eq!(open, vec![Square::E5, Square::E6, Square::E7]);
    }

    #[test]
    fn slider_blocked_by_piece() {
        let mut board = Board::empty();
        board.set(Square::A1, Some(Piece::new(PieceKind::Rook, Color::Black)));
        board.set(Square::A8, Some(Piece::new(PieceKind::King, Color::White)));
        assert!(in_check(&board, Color::White));

        board.set(Square::A4, Some(Piece::new(PieceKind::Knight, Color::White)));
        assert!(!in_check(&board, Color::White));
    }

    #[test]
    fn queen_attacks_diagonally_and_straight() {
        let mut board = Board::empty();
        board.set(Square::D4, Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert!(is_square_attacked(&board, Square::H8, Color::Black));
        assert!(is_square_attacked(&board, Square::D1, Color::Black));
        assert!(!is_square_attacked(&board, Square::E6, Color::Black));
    }

    #[test]
    fn pawn_attack_direction() {
        let mut board = Board::empty();
        board.set(Square::E4, Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(is_square_attacked(&board, Square::D3, Color::Black));
        assert!(is_square_attacked(&board, Square::F3, Color::Black));
        assert!(!is_square_attacked(&board, Square::D5, Color::Black));
        assert!(!is_square_attacked(&board, Square::E3, Color::Black));
    }
}
