//! Evaluation, minimax and alpha-beta search, and the threaded orchestrator
//! that runs one search per computer turn.

pub mod error;
pub mod eval;
pub mod orchestrator;
pub mod search;

pub use error::SearchError;
pub use eval::{Evaluator, MaterialPst, evaluate};
pub use orchestrator::{Orchestrator, SearchHandle};
pub use search::control::SearchControl;
pub use search::{INF, MATE_SCORE, MATE_THRESHOLD, SearchResult, Searcher, Strategy, UnknownStrategy};
