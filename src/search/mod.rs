pub mod config;
pub mod eval;
#[allow(clippy::module_inception)]
pub mod search;

pub use config::{SearchConfig, TieBreak};
pub use search::{SCORE_INFINITE, SearchResult, Searcher, best_move};
