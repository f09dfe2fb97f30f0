//! Search module for the Othello AI
//!
//! Contains:
//! - Fixed-depth minimax with alpha-beta pruning
//! - Pluggable tie-breaking between equal-scored moves

pub mod minimax;
pub mod tiebreak;

pub use minimax::{SearchContext, SearchResult, SearchStats, Searcher};
pub use tiebreak::{CoinFlip, KeepFirst, TieBreak};
