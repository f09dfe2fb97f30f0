//! Fixed-depth minimax with alpha-beta pruning
//!
//! The engine's own call is always the maximizing role at the root. Leaves
//! are scored with the positional evaluator from the root side's
//! perspective. Each child is a full board copy, so sibling branches never
//! share state.
//!
//! # Example
//!
//! ```
//! use othello::board::Tile;
//! use othello::search::{KeepFirst, SearchContext, Searcher};
//! use othello::state::GameState;
//!
//! let mut searcher = Searcher::new(KeepFirst);
//! let ctx = SearchContext::new(2, Tile::Black);
//!
//! let result = searcher.search(&GameState::new(), &ctx);
//! assert!(result.state.last_move.is_some());
//! assert!(result.state.score.is_some());
//! ```

use crate::board::Tile;
use crate::eval::{evaluate_with, RatioMode};
use crate::state::GameState;

use super::TieBreak;

/// Per-search parameters threaded through the recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchContext {
    /// Plies below the root at which nodes become leaves
    pub max_depth: u8,
    /// No-move events in a row before the search started
    pub consecutive_passes: u8,
    /// Side to move at the root; leaves are scored for this side
    pub root_side: Tile,
}

impl SearchContext {
    #[must_use]
    pub fn new(max_depth: u8, root_side: Tile) -> Self {
        Self {
            max_depth,
            consecutive_passes: 0,
            root_side,
        }
    }

    #[must_use]
    pub fn with_passes(mut self, consecutive_passes: u8) -> Self {
        self.consecutive_passes = consecutive_passes;
        self
    }

    /// Both sides have passed in succession.
    #[inline]
    fn is_terminal(&self) -> bool {
        self.consecutive_passes >= 2
    }
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Leaves scored by the evaluator
    pub leaves: u64,
    /// Alpha or beta cutoffs
    pub cutoffs: u64,
}

/// Search result: the chosen state and the work it took.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// One child of the root carrying its backed-up score, or the root
    /// itself (score `None`) when the side to move has no legal move
    pub state: GameState,
    pub stats: SearchStats,
}

/// Alpha-beta searcher parameterized by its tie-break policy.
pub struct Searcher<T: TieBreak> {
    tie_break: T,
    ratio_mode: RatioMode,
    stats: SearchStats,
}

impl<T: TieBreak> Searcher<T> {
    #[must_use]
    pub fn new(tie_break: T) -> Self {
        Self {
            tie_break,
            ratio_mode: RatioMode::default(),
            stats: SearchStats::default(),
        }
    }

    /// Use `mode` for the evaluator's ratio thresholds.
    #[must_use]
    pub fn with_ratio_mode(mut self, mode: RatioMode) -> Self {
        self.ratio_mode = mode;
        self
    }

    pub fn set_ratio_mode(&mut self, mode: RatioMode) {
        self.ratio_mode = mode;
    }

    pub fn ratio_mode(&self) -> RatioMode {
        self.ratio_mode
    }

    /// Replace the tie-break policy.
    pub fn set_tie_break(&mut self, tie_break: T) {
        self.tie_break = tie_break;
    }

    /// Search `root` for `ctx.root_side` to `ctx.max_depth` plies.
    ///
    /// `root.legal_moves` must belong to `ctx.root_side`. A root with no
    /// legal moves is returned unchanged; recording the pass is the
    /// caller's job.
    pub fn search(&mut self, root: &GameState, ctx: &SearchContext) -> SearchResult {
        self.stats = SearchStats::default();

        if root.must_pass() {
            self.stats.nodes = 1;
            return SearchResult {
                state: *root,
                stats: self.stats,
            };
        }

        let (best, score) = self.search_node(
            root,
            0,
            i32::MIN,
            i32::MAX,
            true,
            ctx.root_side,
            ctx,
        );

        // A leaf root (depth 0 or a finished game) scores itself
        let state = best.unwrap_or(*root).with_score(score);
        SearchResult {
            state,
            stats: self.stats,
        }
    }

    /// Returns the best child (if the node was expanded) and the node's
    /// backed-up value.
    #[allow(clippy::too_many_arguments)]
    fn search_node(
        &mut self,
        state: &GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        to_move: Tile,
        ctx: &SearchContext,
    ) -> (Option<GameState>, i32) {
        self.stats.nodes += 1;

        if depth >= ctx.max_depth || ctx.is_terminal() {
            self.stats.leaves += 1;
            let side = ctx.root_side;
            let score = evaluate_with(&state.board, side, side.opponent(), self.ratio_mode);
            return (None, score);
        }

        let sentinel = if maximizing { i32::MIN } else { i32::MAX };
        let children = state.children(to_move);
        if children.is_empty() {
            // Forced pass inside the tree: worst value for the passing side
            return (None, sentinel);
        }

        let mut best: Option<GameState> = None;
        let mut best_score = sentinel;

        for child in children {
            let (_, score) = self.search_node(
                &child,
                depth + 1,
                alpha,
                beta,
                !maximizing,
                to_move.opponent(),
                ctx,
            );

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            let replace = best.is_none()
                || improves
                || (score == best_score && self.tie_break.replace_incumbent());
            if replace {
                best = Some(child.with_score(score));
                best_score = score;
            }

            if maximizing {
                if best_score >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
                alpha = alpha.max(best_score);
            } else {
                if best_score <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
                beta = beta.min(best_score);
            }
        }

        (best, best_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Pos};
    use crate::search::{CoinFlip, KeepFirst};

    /// Plain minimax without pruning, same leaf and pass rules.
    fn full_minimax(state: &GameState, depth: u8, maximizing: bool, to_move: Tile, ctx: &SearchContext) -> i32 {
        if depth >= ctx.max_depth || ctx.consecutive_passes >= 2 {
            let side = ctx.root_side;
            return evaluate_with(&state.board, side, side.opponent(), RatioMode::Truncated);
        }
        let children = state.children(to_move);
        if children.is_empty() {
            return if maximizing { i32::MIN } else { i32::MAX };
        }
        let values = children
            .iter()
            .map(|c| full_minimax(c, depth + 1, !maximizing, to_move.opponent(), ctx));
        if maximizing {
            values.max().unwrap()
        } else {
            values.min().unwrap()
        }
    }

    /// Root child chosen by plain minimax with keep-first ties.
    fn full_minimax_move(root: &GameState, ctx: &SearchContext) -> (Pos, i32) {
        let mut best: Option<(Pos, i32)> = None;
        for child in root.children(ctx.root_side) {
            let v = full_minimax(&child, 1, false, ctx.root_side.opponent(), ctx);
            if best.map_or(true, |(_, b)| v > b) {
                best = Some((child.last_move.unwrap(), v));
            }
        }
        best.unwrap()
    }

    /// A few plies into a game, reached deterministically.
    fn midgame_state(plies: usize) -> (GameState, Tile) {
        let mut state = GameState::new();
        let mut side = Tile::Black;
        for i in 0..plies {
            let moves: Vec<Pos> = state.legal_moves.iter_ones().collect();
            if moves.is_empty() {
                break;
            }
            state = state.child(moves[i % moves.len()], side);
            side = side.opponent();
        }
        (state, side)
    }

    #[test]
    fn test_alphabeta_matches_full_minimax() {
        for (plies, depth) in [(0, 1), (0, 2), (0, 3), (3, 3), (6, 2), (8, 4)] {
            let (root, side) = midgame_state(plies);
            let ctx = SearchContext::new(depth, side);

            let mut searcher = Searcher::new(KeepFirst);
            let result = searcher.search(&root, &ctx);
            let (expected_move, expected_score) = full_minimax_move(&root, &ctx);

            assert_eq!(result.state.score, Some(expected_score), "plies={plies} depth={depth}");
            assert_eq!(result.state.last_move, Some(expected_move), "plies={plies} depth={depth}");
        }
    }

    #[test]
    fn test_pruning_reduces_nodes() {
        let (root, side) = midgame_state(4);
        let ctx = SearchContext::new(4, side);
        let mut searcher = Searcher::new(KeepFirst);
        let result = searcher.search(&root, &ctx);
        assert!(result.stats.cutoffs > 0);
        assert!(result.stats.leaves <= result.stats.nodes);
    }

    #[test]
    fn test_returns_a_child_board() {
        let root = GameState::new();
        let ctx = SearchContext::new(4, Tile::Black);
        let mut searcher = Searcher::new(CoinFlip::seeded(1));
        let result = searcher.search(&root, &ctx);

        let children = root.children(Tile::Black);
        assert!(children.iter().any(|c| c.board == result.state.board));
        assert_eq!(result.state.legal_moves, crate::rules::generate_moves(&result.state.board, Tile::White));
    }

    #[test]
    fn test_depth_one_picks_best_evaluation() {
        let (root, side) = midgame_state(5);
        let ctx = SearchContext::new(1, side);
        let result = Searcher::new(KeepFirst).search(&root, &ctx);

        let best = root
            .children(side)
            .iter()
            .map(|c| evaluate_with(&c.board, side, side.opponent(), RatioMode::Truncated))
            .max()
            .unwrap();
        assert_eq!(result.state.score, Some(best));
    }

    #[test]
    fn test_root_without_moves_is_returned_unchanged() {
        let mut board = Board::empty();
        board.place_tile(Pos::new(0, 0), Tile::Black);
        board.place_tile(Pos::new(7, 7), Tile::White);
        let root = GameState::from_board(board, Tile::Black);

        let ctx = SearchContext::new(4, Tile::Black);
        let result = Searcher::new(KeepFirst).search(&root, &ctx);
        assert_eq!(result.state, root);
        assert_eq!(result.state.score, None);
        assert_eq!(result.stats.nodes, 1);
    }

    #[test]
    fn test_opponent_forced_pass_scores_sentinel() {
        // B W _ : Black's only move wipes out White
        let mut board = Board::empty();
        board.place_tile(Pos::new(0, 0), Tile::Black);
        board.place_tile(Pos::new(0, 1), Tile::White);
        let root = GameState::from_board(board, Tile::Black);

        let ctx = SearchContext::new(4, Tile::Black);
        let result = Searcher::new(KeepFirst).search(&root, &ctx);
        assert_eq!(result.state.last_move, Some(Pos::new(0, 2)));
        assert_eq!(result.state.score, Some(i32::MAX));
    }

    #[test]
    fn test_finished_game_scores_root() {
        let root = GameState::new();
        let ctx = SearchContext::new(4, Tile::Black).with_passes(2);
        let result = Searcher::new(KeepFirst).search(&root, &ctx);
        assert_eq!(result.state.board, root.board);
        assert_eq!(result.state.score, Some(8));
        assert_eq!(result.stats.leaves, 1);
    }

    #[test]
    fn test_seeded_search_is_reproducible() {
        let (root, side) = midgame_state(2);
        let ctx = SearchContext::new(4, side);
        let a = Searcher::new(CoinFlip::seeded(9)).search(&root, &ctx);
        let b = Searcher::new(CoinFlip::seeded(9)).search(&root, &ctx);
        assert_eq!(a.state, b.state);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn test_score_independent_of_tie_break() {
        let root = GameState::new();
        let ctx = SearchContext::new(3, Tile::Black);
        let keep = Searcher::new(KeepFirst).search(&root, &ctx);
        for seed in 0..5 {
            let flip = Searcher::new(CoinFlip::seeded(seed)).search(&root, &ctx);
            assert_eq!(flip.state.score, keep.state.score);
        }
    }
}
