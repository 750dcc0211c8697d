//! Search errors.

use kingside_core::GameError;

/// Why a search produced no [`SearchResult`](crate::SearchResult).
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The stop flag was raised before the search finished.
    #[error("search cancelled")]
    Cancelled,

    /// The strategy failed internally: a panic in the evaluator or a ledger
    /// error while walking the tree.
    #[error("search strategy failed: {message}")]
    StrategyFault { message: String },

    /// The worker thread could not be started.
    #[error("failed to spawn search worker: {0}")]
    Spawn(#[source] std::io::Error),
}

impl From<GameError> for SearchError {
    fn from(err: GameError) -> Self {
        SearchError::StrategyFault { message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use kingside_core::GameError;

    use super::SearchError;

    #[test]
    fn ledger_errors_become_strategy_faults() {
        let err = SearchError::from(GameError::EmptyHistory);
        assert!(matches!(err, SearchError::StrategyFault { ref message } if message == "no moves to undo"));
        assert_eq!(err.to_string(), "search strategy failed: no moves to undo");
    }
}
