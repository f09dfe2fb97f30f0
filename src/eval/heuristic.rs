//! Positional evaluation for Othello board positions
//!
//! The score is a fixed linear combination of six bounded sub-heuristics:
//! - Corner occupancy
//! - Game-phase bucket (tile count and material share)
//! - Center-square share in the early game
//! - Tiles next to corners
//! - Second-ring (danger zone) share
//! - Perimeter share in the late game

use crate::board::regions::{CENTER_SQUARE, CORNERS, CORNER_NEIGHBORS, DANGER_ZONE, PERIMETER};
use crate::board::{Board, Tile};

use super::weights::{HeuristicWeight, RatioMode};

/// Raw (unweighted) sub-heuristic values for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalBreakdown {
    pub corner: i32,
    pub phase: i32,
    pub center: i32,
    pub corner_neighbor: i32,
    pub danger: i32,
    pub perimeter: i32,
}

impl EvalBreakdown {
    /// Apply the heuristic weights and sum.
    #[must_use]
    pub fn weighted(&self) -> i32 {
        HeuristicWeight::CORNER * self.corner
            + HeuristicWeight::PHASE * self.phase
            + HeuristicWeight::CENTER * self.center
            + HeuristicWeight::CORNER_NEIGHBOR * self.corner_neighbor
            + HeuristicWeight::DANGER * self.danger
            + HeuristicWeight::PERIMETER * self.perimeter
    }
}

/// Evaluate the board from the perspective of `side`.
///
/// Uses [`RatioMode::Truncated`]. Higher is better for `side`; the score is
/// not symmetric, `evaluate(b, X, O)` is not `-evaluate(b, O, X)`.
///
/// # Example
///
/// ```
/// use othello::board::{Board, Tile};
/// use othello::eval::evaluate;
///
/// // Opening: phase bucket 1 (x3) and danger-zone bonus 1 (x5)
/// assert_eq!(evaluate(&Board::new(), Tile::Black, Tile::White), 8);
/// ```
#[must_use]
pub fn evaluate(board: &Board, side: Tile, opponent: Tile) -> i32 {
    evaluate_with(board, side, opponent, RatioMode::Truncated)
}

/// [`evaluate`] with an explicit ratio mode.
#[must_use]
pub fn evaluate_with(board: &Board, side: Tile, opponent: Tile, mode: RatioMode) -> i32 {
    breakdown(board, side, opponent, mode).weighted()
}

/// Compute every sub-heuristic for `side`.
#[must_use]
pub fn breakdown(board: &Board, side: Tile, opponent: Tile, mode: RatioMode) -> EvalBreakdown {
    let own = board.count(side);
    let total = own + board.count(opponent);

    let mut result = EvalBreakdown {
        corner: corner_score(board, side),
        corner_neighbor: corner_neighbor_score(board, side, opponent),
        ..EvalBreakdown::default()
    };

    // Ratio terms are undefined on an empty board
    if total == 0 {
        return result;
    }

    result.phase = phase_bucket(own, total, mode);
    result.center = center_score(board, side, total, mode);
    result.danger = danger_score(board, side, total, mode);
    result.perimeter = perimeter_score(board, side, total, mode);
    result
}

/// +4 for each corner held by `side`.
fn corner_score(board: &Board, side: Tile) -> i32 {
    4 * board.count_in(side, CORNERS) as i32
}

/// Bucket the game into phases by tile count and `side`'s share.
fn phase_bucket(own: u32, total: u32, mode: RatioMode) -> i32 {
    let ratio = mode.ratio(own, total);

    if total < 25 && ratio < 0.35 {
        1
    } else if total > 24 && total < 45 && ratio < 0.40 {
        2
    } else if total > 44 && total < 55 && ratio > 0.35 && ratio < 0.50 {
        2
    } else if total > 54 && ratio > 0.50 {
        3
    } else {
        0
    }
}

/// Early-game share of the inner 4x4 block.
fn center_score(board: &Board, side: Tile, total: u32, mode: RatioMode) -> i32 {
    if total > 4 && total < 35 {
        let ratio = mode.ratio(board.count_in(side, CENTER_SQUARE), total);
        if ratio > 0.17 && ratio < 0.26 {
            return 2;
        }
    }
    0
}

/// Per corner: +1 when the opponent holds it and `side` sits next to it,
/// -1 when it is empty and `side` sits next to it.
fn corner_neighbor_score(board: &Board, side: Tile, opponent: Tile) -> i32 {
    let mut sum = 0;
    for (corner, neighbors) in CORNER_NEIGHBORS {
        let adjacent = neighbors.iter().any(|&n| board.get(n) == side);
        if !adjacent {
            continue;
        }
        match board.get(corner) {
            t if t == opponent => sum += 1,
            Tile::Empty => sum -= 1,
            _ => {}
        }
    }
    sum
}

/// Small second-ring presence before move 36.
fn danger_score(board: &Board, side: Tile, total: u32, mode: RatioMode) -> i32 {
    let ratio = mode.ratio(board.count_in(side, DANGER_ZONE), total);
    if total < 40 && ratio < 0.3 {
        1
    } else {
        0
    }
}

/// Large edge presence after move 30.
fn perimeter_score(board: &Board, side: Tile, total: u32, mode: RatioMode) -> i32 {
    let ratio = mode.ratio(board.count_in(side, PERIMETER), total);
    if total > 34 && ratio > 0.35 {
        2
    } else {
        0
    }
}
