//! The live game: a board, its move ledger and derived status.

use std::fmt;

use tracing::trace;

use crate::attacks::in_check;
use crate::board::Board;
use crate::chess_move::{Move, PromotionPiece};
use crate::color::Color;
use crate::error::GameError;
use crate::history::Ledger;
use crate::movegen::{MoveList, generate_legal_moves};
use crate::notation::san;
use crate::square::Square;

/// Whether the side to move can still play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ongoing,
    /// No legal moves and in check: the side to move has lost.
    Checkmate,
    /// No legal moves and not in check: drawn.
    Stalemate,
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
}

impl Outcome {
    /// The side that won, if any.
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::WhiteWins => Some(Color::White),
            Outcome::BlackWins => Some(Color::Black),
            Outcome::Draw => None,
        }
    }

    const fn win_for(color: Color) -> Outcome {
        match color {
            Color::White => Outcome::WhiteWins,
            Color::Black => Outcome::BlackWins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::WhiteWins => f.write_str("White wins"),
            Outcome::BlackWins => f.write_str("Black wins"),
            Outcome::Draw => f.write_str("Draw"),
        }
    }
}

/// Parse coordinate move text such as `e2e4` or `e7e8q`.
///
/// Only the syntax is checked; whether the move is legal depends on the
/// position (see [`GameState::find_move`]).
pub fn parse_coordinates(text: &str) -> Result<(Square, Square, Option<PromotionPiece>), GameError> {
    let invalid = || GameError::InvalidMoveText { text: text.to_string() };
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(invalid());
    }

    let from = Square::from_algebraic(&text[0..2]).ok_or_else(invalid)?;
    let to = Square::from_algebraic(&text[2..4]).ok_or_else(invalid)?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(c) => Some(PromotionPiece::from_char(c).ok_or_else(invalid)?),
    };
    Ok((from, to, promotion))
}

/// A game in progress.
///
/// `GameState` owns the [`Board`], the [`Ledger`] of applied moves and a
/// check flag for the side to move. The flag is recomputed after every
/// mutation, and the side to move always alternates with the ledger length.
///
/// Mutation happens only through [`apply_move`](GameState::apply_move) and
/// [`undo_move`](GameState::undo_move). Neither checks legality; callers
/// pass moves taken from [`valid_moves`](GameState::valid_moves).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    ledger: Ledger,
    in_check: bool,
    initial: Board,
}

impl GameState {
    /// A new game from the standard starting position.
    pub fn new() -> GameState {
        GameState::start_at(Board::starting_position())
    }

    /// A new game from an arbitrary position, which must pass
    /// [`Board::validate`].
    pub fn from_board(board: Board) -> Result<GameState, GameError> {
        board.validate().map_err(crate::error::FenError::from)?;
        Ok(GameState::start_at(board))
    }

    /// A new game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<GameState, GameError> {
        let board: Board = fen.parse()?;
        Ok(GameState::start_at(board))
    }

    fn start_at(board: Board) -> GameState {
        GameState {
            in_check: in_check(&board, board.side_to_move()),
            board,
            ledger: Ledger::new(),
            initial: board,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Position the game started from.
    #[inline]
    pub fn initial_board(&self) -> &Board {
        &self.initial
    }

    /// Side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.board.side_to_move()
    }

    /// `true` if the side to move is in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Read-only view of the applied moves, oldest first.
    #[inline]
    pub fn move_log(&self) -> &Ledger {
        &self.ledger
    }

    /// Number of moves applied since the game started.
    #[inline]
    pub fn ply(&self) -> usize {
        self.ledger.len()
    }

    /// Legal moves for the side to move, in generator order.
    pub fn valid_moves(&self) -> MoveList {
        generate_legal_moves(&self.board)
    }

    /// Play `mv`, record it in the ledger and hand the turn over.
    pub fn apply_move(&mut self, mv: Move) {
        let inverse = self.board.apply(mv);
        self.ledger.push(mv, inverse);
        self.in_check = in_check(&self.board, self.board.side_to_move());
        trace!(mv = %mv, ply = self.ledger.len(), check = self.in_check, "applied move");
    }

    /// Take back the last applied move and return it.
    pub fn undo_move(&mut self) -> Result<Move, GameError> {
        let entry = self.ledger.pop().ok_or(GameError::EmptyHistory)?;
        self.board.revert(entry.mv, &entry.inverse);
        self.in_check = in_check(&self.board, self.board.side_to_move());
        trace!(mv = %entry.mv, ply = self.ledger.len(), "undid move");
        Ok(entry.mv)
    }

    /// Classify the current position.
    pub fn status(&self) -> Status {
        if !self.valid_moves().is_empty() {
            Status::Ongoing
        } else if self.in_check {
            Status::Checkmate
        } else {
            Status::Stalemate
        }
    }

    /// Result of the game, or `None` while it is still being played.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status() {
            Status::Ongoing => None,
            Status::Checkmate => Some(Outcome::win_for(self.turn().flip())),
            Status::Stalemate => Some(Outcome::Draw),
        }
    }

    /// The legal move matching the given coordinates, if there is one.
    ///
    /// A pawn reaching the last rank needs `promotion`; other moves must
    /// leave it `None`.
    pub fn find_move(&self, from: Square, to: Square, promotion: Option<PromotionPiece>) -> Option<Move> {
        self.valid_moves()
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion() == promotion)
    }

    /// Resolve coordinate text like `g1f3` to a legal move in this position.
    pub fn parse_move(&self, text: &str) -> Result<Move, GameError> {
        let (from, to, promotion) = parse_coordinates(text)?;
        self.find_move(from, to, promotion)
            .ok_or_else(|| GameError::InvalidMoveText { text: text.to_string() })
    }

    /// Algebraic notation for the most recent move only.
    pub fn last_move_notation(&self) -> Option<String> {
        let entry = self.ledger.last()?;
        let mut before = self.board;
        before.revert(entry.mv, &entry.inverse);
        Some(san(&before, entry.mv))
    }

    /// Algebraic notation for every applied move, oldest first.
    pub fn notation_log(&self) -> Vec<String> {
        let mut board = self.initial;
        self.ledger
            .moves()
            .map(|mv| {
                let text = san(&board, mv);
                board.apply(mv);
                text
            })
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{GameState, Outcome, Status, parse_coordinates};
    use crate::chess_move::PromotionPiece;
    use crate::color::Color;
    use crate::error::{BoardError, FenError, GameError};
    use crate::square::Square;

    fn play(state: &mut GameState, moves: &[&str]) {
        for text in moves {
            let mv = state.parse_move(text).unwrap();
            state.apply_move(mv);
        }
    }

    #[test]
    fn new_game() {
        let state = GameState::new();
        assert_eq!(state.turn(), Color::White);
        assert!(!state.in_check());
        assert_eq!(state.ply(), 0);
        assert_eq!(state.valid_moves().len(), 20);
        assert_eq!(state.status(), Status::Ongoing);
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn maximal_move_counters_still_play() {
        let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 65535 1").unwrap();
        assert_eq!(state.valid_moves().len(), 5);
        play(&mut state, &["e1d1"]);
        assert_eq!(state.board().halfmove_clock(), u16::MAX);
        state.undo_move().unwrap();
        assert_eq!(state, GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 65535 1").unwrap());
    }

    #[test]
    fn undo_on_empty_ledger() {
        let mut state = GameState::new();
        assert_eq!(state.undo_move(), Err(GameError::EmptyHistory));
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn apply_then_undo_restores_everything() {
        let mut state = GameState::new();
        play(&mut state, &["e2e4", "d7d5"]);
        let before = state.clone();

        let mv = state.parse_move("e4d5").unwrap();
        state.apply_move(mv);
        assert_eq!(state.turn(), Color::Black);
        assert_eq!(state.ply(), 3);

        assert_eq!(state.undo_move(), Ok(mv));
        assert_eq!(state, before);
    }

    #[test]
    fn fools_mate() {
        let mut state = GameState::new();
        play(&mut state, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert!(state.in_check());
        assert!(state.valid_moves().is_empty());
        assert_eq!(state.status(), Status::Checkmate);
        assert_eq!(state.outcome(), Some(Outcome::BlackWins));
        assert_eq!(state.outcome().and_then(Outcome::winner), Some(Color::Black));
    }

    #[test]
    fn stalemate_is_a_draw() {
        let state = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(!state.in_check());
        assert_eq!(state.status(), Status::Stalemate);
        assert_eq!(state.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn check_flag_tracks_side_to_move() {
        let mut state = GameState::new();
        play(&mut state, &["e2e4", "f7f6", "d2d4", "g7g5"]);
        assert!(!state.in_check());
        play(&mut state, &["d1h5"]);
        assert!(state.in_check());
        assert_eq!(state.status(), Status::Checkmate);
        state.undo_move().unwrap();
        assert!(!state.in_check());
    }

    #[test]
    fn parse_move_requires_promotion_piece() {
        let state = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
        assert!(state.parse_move("a7a8").is_err());
        let mv = state.parse_move("a7a8n").unwrap();
        assert_eq!(mv.promotion(), Some(PromotionPiece::Knight));
    }

    #[test]
    fn parse_coordinates_syntax() {
        assert_eq!(parse_coordinates("e2e4"), Ok((Square::E2, Square::E4, None)));
        assert_eq!(
            parse_coordinates("b7b8r"),
            Ok((Square::B7, Square::B8, Some(PromotionPiece::Rook)))
        );
        for bad in ["", "e2", "e2e9", "e2e4k", "i1a1", "e2e4qq", "é2e4"] {
            assert!(
                matches!(parse_coordinates(bad), Err(GameError::InvalidMoveText { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn illegal_text_is_rejected() {
        let state = GameState::new();
        assert!(matches!(state.parse_move("e2e5"), Err(GameError::InvalidMoveText { .. })));
        assert!(state.find_move(Square::E1, Square::E2, None).is_none());
    }

    #[test]
    fn from_fen_rejects_invalid_positions() {
        assert_eq!(
            GameState::from_fen("4k3/8/8/8/8/8/8/r3K3 b - - 0 1"),
            Err(GameError::Fen(FenError::InvalidBoard(BoardError::OpponentInCheck)))
        );
        let mut board = crate::board::Board::starting_position();
        board.set(Square::E1, None);
        assert!(GameState::from_board(board).is_err());
    }

    #[test]
    fn notation_log_replays_from_start() {
        let mut state = GameState::new();
        play(&mut state, &["e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "a7a6", "b5c6", "d7c6", "e1g1"]);
        assert_eq!(
            state.notation_log(),
            vec!["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Bxc6", "dxc6", "O-O"]
        );
        assert_eq!(state.move_log().len(), 9);
        assert_eq!(state.last_move_notation().as_deref(), Some("O-O"));
        assert_eq!(GameState::new().last_move_notation(), None);
    }

    #[test]
    fn last_move_notation_marks_mate() {
        let mut state = GameState::new();
        play(&mut state, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(state.last_move_notation().as_deref(), Some("Qh4#"));
        state.undo_move().unwrap();
        assert_eq!(state.last_move_notation().as_deref(), Some("g4"));
    }
}
