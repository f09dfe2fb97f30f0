//! Evaluation module for Othello positions
//!
//! This module provides the static positional score used at search leaves.
//! The evaluation considers:
//! - Corner ownership and exposure next to corners
//! - Game phase (tile count and material share)
//! - Center, second-ring and edge occupancy

pub mod heuristic;
pub mod weights;

pub use heuristic::{breakdown, evaluate, evaluate_with, EvalBreakdown};
pub use weights::{HeuristicWeight, RatioMode};
