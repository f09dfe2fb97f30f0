//! Main AI engine wrapping the minimax searcher
//!
//! One call to [`AIEngine::get_move_with_stats`] runs a single fixed-depth
//! search for the side to move and reports the chosen child state together
//! with timing and node counts.
//!
//! # Example
//!
//! ```
//! use othello::{AIEngine, GameState, Tile};
//!
//! let mut engine = AIEngine::with_config(4, Some(7));
//! let state = GameState::new();
//!
//! let result = engine.get_move_with_stats(&state, Tile::Black, 0);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::fmt;
use std::time::Instant;

use tracing::{debug, info};

use crate::board::{Pos, Tile};
use crate::eval::RatioMode;
use crate::search::{CoinFlip, SearchContext, Searcher, TieBreak};
use crate::state::GameState;

/// Search depth presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Difficulty {
    /// 4 plies
    Easy,
    /// 6 plies
    #[default]
    Normal,
    /// 8 plies
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Search depth in plies.
    #[inline]
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Normal => 6,
            Difficulty::Hard => 8,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{name}")
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Move chosen, `None` when the side to move must pass
    pub best_move: Option<Pos>,
    /// State after the move (the input state when passing)
    pub state: GameState,
    /// Backed-up minimax score of `state`
    pub score: Option<i32>,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Nodes visited
    pub nodes: u64,
    /// Leaves scored
    pub leaves: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Depth searched
    pub depth: u8,
}

impl MoveResult {
    /// Result for a side with no legal move.
    #[inline]
    pub fn pass(state: GameState) -> Self {
        Self {
            best_move: None,
            state,
            score: None,
            time_ms: 0,
            nodes: 0,
            leaves: 0,
            cutoffs: 0,
            depth: 0,
        }
    }
}

/// Main AI engine for Othello.
///
/// # Configuration
///
/// - Search depth (directly or through [`Difficulty`])
/// - Tie-break policy (seeded coin flip by default)
/// - Ratio arithmetic of the evaluator
pub struct AIEngine {
    searcher: Searcher<Box<dyn TieBreak + Send>>,
    max_depth: u8,
}

impl AIEngine {
    /// Create an engine at [`Difficulty::Normal`] with an entropy-seeded coin flip.
    ///
    /// # Example
    ///
    /// ```
    /// use othello::AIEngine;
    ///
    /// let engine = AIEngine::new();
    /// assert_eq!(engine.max_depth(), 6);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Difficulty::default().depth(), None)
    }

    /// Create an engine for a difficulty preset.
    #[must_use]
    pub fn with_difficulty(difficulty: Difficulty, seed: Option<u64>) -> Self {
        Self::with_config(difficulty.depth(), seed)
    }

    /// Create an AI engine with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `max_depth` - Search depth in plies, at least 1
    /// * `seed` - Seed for the tie-break coin, `None` for OS entropy
    ///
    /// # Example
    ///
    /// ```
    /// use othello::AIEngine;
    ///
    /// let engine = AIEngine::with_config(8, Some(42));
    /// assert_eq!(engine.max_depth(), 8);
    /// ```
    #[must_use]
    pub fn with_config(max_depth: u8, seed: Option<u64>) -> Self {
        let coin = match seed {
            Some(seed) => CoinFlip::seeded(seed),
            None => CoinFlip::new(),
        };
        Self {
            searcher: Searcher::new(Box::new(coin) as Box<dyn TieBreak + Send>),
            max_depth: max_depth.max(1),
        }
    }

    /// Replace the tie-break policy.
    #[must_use]
    pub fn with_tie_break<T: TieBreak + Send + 'static>(mut self, tie_break: T) -> Self {
        self.searcher.set_tie_break(Box::new(tie_break));
        self
    }

    /// Select the evaluator's ratio arithmetic.
    #[must_use]
    pub fn with_ratio_mode(mut self, mode: RatioMode) -> Self {
        self.searcher.set_ratio_mode(mode);
        self
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Get the best move for `side` on `state`.
    ///
    /// Convenience wrapper around [`get_move_with_stats`](Self::get_move_with_stats).
    #[must_use]
    pub fn get_move(&mut self, state: &GameState, side: Tile, consecutive_passes: u8) -> Option<Pos> {
        self.get_move_with_stats(state, side, consecutive_passes).best_move
    }

    /// Search `state` for `side` and return the chosen child with statistics.
    ///
    /// # Arguments
    ///
    /// * `state` - Current state; its legal moves must belong to `side`
    /// * `side` - Side to move, the maximizer at the root
    /// * `consecutive_passes` - No-move events in a row so far
    ///
    /// # Returns
    ///
    /// `MoveResult` with `best_move == None` when `side` has to pass.
    #[must_use]
    pub fn get_move_with_stats(
        &mut self,
        state: &GameState,
        side: Tile,
        consecutive_passes: u8,
    ) -> MoveResult {
        if state.must_pass() {
            debug!(?side, "no legal moves, engine passes");
            return MoveResult::pass(*state);
        }

        let start = Instant::now();
        let ctx = SearchContext::new(self.max_depth, side).with_passes(consecutive_passes);
        debug!(
            ?side,
            depth = self.max_depth,
            moves = state.legal_moves.count(),
            "search start"
        );

        let result = self.searcher.search(state, &ctx);
        let time_ms = start.elapsed().as_millis() as u64;

        info!(
            ?side,
            best_move = ?result.state.last_move.map(|p| p.to_string()),
            score = ?result.state.score,
            depth = self.max_depth,
            nodes = result.stats.nodes,
            cutoffs = result.stats.cutoffs,
            time_ms,
            "search finished"
        );

        MoveResult {
            best_move: result.state.last_move,
            state: result.state,
            score: result.state.score,
            time_ms,
            nodes: result.stats.nodes,
            leaves: result.stats.leaves,
            cutoffs: result.stats.cutoffs,
            depth: self.max_depth,
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
