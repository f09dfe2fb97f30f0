//! Search-tree node: a board snapshot with its legal moves and cached score

use crate::board::{Bitboard, Board, Pos, Tile};
use crate::rules::{apply_move, generate_moves};

/// A board plus the legal-move set of the side to move on it.
///
/// `score` is only meaningful after the searcher has visited the state;
/// it is `None` for positions that were never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    /// Legal destinations for the side to move on `board`
    pub legal_moves: Bitboard,
    pub score: Option<i32>,
    /// Move that produced this state from its parent
    pub last_move: Option<Pos>,
}

impl GameState {
    /// The fixed start position with Black to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Tile::Black)
    }

    /// Wrap `board` with the legal moves of `to_move`.
    #[must_use]
    pub fn from_board(board: Board, to_move: Tile) -> Self {
        Self {
            board,
            legal_moves: generate_moves(&board, to_move),
            score: None,
            last_move: None,
        }
    }

    /// Recompute the legal-move set for `to_move` after the board changed.
    pub fn refresh(&mut self, to_move: Tile) {
        self.legal_moves = generate_moves(&self.board, to_move);
    }

    /// Copy of `self` carrying `score`.
    #[inline]
    #[must_use]
    pub fn with_score(mut self, score: i32) -> Self {
        self.score = Some(score);
        self
    }

    /// True when the side to move has to pass.
    #[inline]
    pub fn must_pass(&self) -> bool {
        self.legal_moves.is_empty()
    }

    /// The state reached by `side` playing `pos`, with legal moves
    /// precomputed for the opponent.
    ///
    /// `pos` must be one of `side`'s legal moves on this board.
    #[must_use]
    pub fn child(&self, pos: Pos, side: Tile) -> GameState {
        let mut board = self.board;
        apply_move(&mut board, pos, side);
        GameState {
            board,
            legal_moves: generate_moves(&board, side.opponent()),
            score: None,
            last_move: Some(pos),
        }
    }

    /// Every child of this state, one per legal move of `side`, in
    /// ascending cell order.
    ///
    /// `legal_moves` must have been computed for `side`.
    #[must_use]
    pub fn children(&self, side: Tile) -> Vec<GameState> {
        debug_assert_eq!(self.legal_moves, generate_moves(&self.board, side));
        self.legal_moves
            .iter_ones()
            .map(|pos| self.child(pos, side))
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_state() {
        let state = GameState::new();
        assert_eq!(state.legal_moves.count(), 4);
        assert_eq!(state.score, None);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_children_of_start() {
        let state = GameState::new();
        let children = state.children(Tile::Black);
        assert_eq!(children.len(), 4);

        for child in &children {
            let pos = child.last_move.unwrap();
            assert_eq!(child.board.get(pos), Tile::Black);
            assert_eq!(child.board.count(Tile::Black), 4);
            assert_eq!(child.board.count(Tile::White), 1);
            assert_eq!(child.legal_moves, generate_moves(&child.board, Tile::White));
        }
        // Parent untouched
        assert_eq!(state.board, Board::new());
    }

    #[test]
    fn test_children_order_ascending() {
        let children = GameState::new().children(Tile::Black);
        let moves: Vec<Pos> = children.iter().filter_map(|c| c.last_move).collect();
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
    }

    #[test]
    fn test_no_children_when_passing() {
        let mut board = Board::empty();
        board.place_tile(Pos::new(0, 0), Tile::Black);
        let state = GameState::from_board(board, Tile::Black);
        assert!(state.must_pass());
        assert!(state.children(Tile::Black).is_empty());
    }

    #[test]
    fn test_refresh_after_mutation() {
        let mut state = GameState::new();
        state.board.place_tile(Pos::new(2, 3), Tile::Black);
        state.board.flip_tile(Pos::new(3, 3));
        state.refresh(Tile::White);
        assert_eq!(state.legal_moves, generate_moves(&state.board, Tile::White));
        assert!(!state.legal_moves.get(Pos::new(2, 3)));
    }

    fn perft(state: &GameState, side: Tile, depth: u8) -> u64 {
        if depth == 0 {
            return 1;
        }
        state
            .children(side)
            .iter()
            .map(|c| perft(c, side.opponent(), depth - 1))
            .sum()
    }

    #[test]
    fn test_perft_from_start() {
        let root = GameState::new();
        let counts: Vec<u64> = (1..=5).map(|d| perft(&root, Tile::Black, d)).collect();
        assert_eq!(counts, vec![4, 12, 56, 244, 1396]);
    }

    #[test]
    fn test_with_score() {
        let state = GameState::new().with_score(-12);
        assert_eq!(state.score, Some(-12));
    }
}
