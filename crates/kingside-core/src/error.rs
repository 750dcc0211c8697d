//! Errors for FEN parsing, board validation and game-state operations.

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },

    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },

    /// Zero-based rank index counts from the top (rank 8).
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength { rank_index: usize, length: usize },

    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },

    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },

    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar { character: char },

    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },

    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter { field: &'static str, found: String },

    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardError),
}

/// Structural problems with a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount { color: crate::Color, count: usize },

    #[error("pawns found on back rank")]
    PawnsOnBackRank,

    #[error("side not to move is in check")]
    OpponentInCheck,
}

/// Errors from [`GameState`](crate::GameState) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Undo requested with no moves in the ledger.
    #[error("no moves to undo")]
    EmptyHistory,

    /// Text could not be read as a coordinate move for this position.
    #[error("invalid move text: \"{text}\"")]
    InvalidMoveText { text: String },

    #[error(transparent)]
    Fen(#[from] FenError),
}
