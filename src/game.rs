//! Game session: the API a game loop drives
//!
//! A [`Session`] owns the current position, whose turn it is, and the run of
//! consecutive passes that ends the game. It validates everything coming
//! from outside the engine before it reaches the move resolver.
//!
//! # Example
//!
//! ```
//! use othello::game::Session;
//! use othello::{AIEngine, Pos, Tile};
//!
//! let mut session = Session::new_game();
//! session.apply_human_move(Pos::new(2, 3)).unwrap();
//! assert_eq!(session.to_move(), Tile::White);
//!
//! let mut engine = AIEngine::with_config(2, Some(1));
//! let reply = session.engine_move(&mut engine).unwrap();
//! assert!(reply.best_move.is_some());
//! ```

use tracing::{debug, info};

use crate::board::{Bitboard, Board, Pos, Tile};
use crate::engine::{AIEngine, MoveResult};
use crate::error::{GameError, GameResult};
use crate::state::GameState;

/// One entry of the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Move { pos: Pos, side: Tile },
    Pass { side: Tile },
}

/// Result of a finished (or abandoned) game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Tile),
    Draw,
}

/// A single game, from the standard opening or a given position.
#[derive(Debug, Clone)]
pub struct Session {
    /// Position and side the session started from; undo replays from here
    start: (Board, Tile),
    state: GameState,
    to_move: Tile,
    consecutive_passes: u8,
    moves_played: u32,
    history: Vec<Turn>,
}

impl Session {
    /// Start position, Black to move.
    #[must_use]
    pub fn new_game() -> Self {
        Self::from_position(Board::new(), Tile::Black)
    }

    /// Resume from an arbitrary board. History starts empty.
    #[must_use]
    pub fn from_position(board: Board, to_move: Tile) -> Self {
        Self {
            start: (board, to_move),
            state: GameState::from_board(board, to_move),
            to_move,
            consecutive_passes: 0,
            moves_played: 0,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn to_move(&self) -> Tile {
        self.to_move
    }

    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    /// Tiles placed so far (passes excluded).
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Most recent placed tile, skipping passes.
    pub fn last_move(&self) -> Option<Pos> {
        self.history.iter().rev().find_map(|turn| match turn {
            Turn::Move { pos, .. } => Some(*pos),
            Turn::Pass { .. } => None,
        })
    }

    /// Legal destinations for the side to move.
    #[inline]
    pub fn legal_moves(&self) -> Bitboard {
        self.state.legal_moves
    }

    /// The side to move has nothing to play.
    #[inline]
    pub fn must_pass(&self) -> bool {
        self.state.must_pass()
    }

    /// Both sides have passed in succession.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.consecutive_passes >= 2
    }

    /// Play `pos` for the side to move.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has ended, `IllegalMove` when `pos` is not in
    /// [`legal_moves`](Self::legal_moves).
    pub fn apply_human_move(&mut self, pos: Pos) -> GameResult<&GameState> {
        self.play(pos)?;
        Ok(&self.state)
    }

    /// Record a no-move event for the side to move.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has ended, `PassWithMovesAvailable` when the
    /// side to move still has a legal move.
    pub fn pass(&mut self) -> GameResult<()> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !self.must_pass() {
            return Err(GameError::PassWithMovesAvailable {
                side: self.to_move,
                count: self.legal_moves().count(),
            });
        }

        let side = self.to_move;
        self.consecutive_passes += 1;
        self.history.push(Turn::Pass { side });
        self.to_move = side.opponent();
        self.state.refresh(self.to_move);
        info!(?side, passes = self.consecutive_passes, "pass");

        if self.is_terminal() {
            let (black, white, outcome) = self.final_score();
            info!(black, white, ?outcome, "game over");
        }
        Ok(())
    }

    /// Let `engine` play for the side to move, passing if it has no move.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has ended.
    pub fn engine_move(&mut self, engine: &mut AIEngine) -> GameResult<MoveResult> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        let result = engine.get_move_with_stats(&self.state, self.to_move, self.consecutive_passes);
        self.apply_engine_result(&result)?;
        Ok(result)
    }

    /// Apply a search result computed elsewhere (for instance on a worker
    /// thread) against the current position.
    ///
    /// # Errors
    ///
    /// Same as [`apply_human_move`](Self::apply_human_move) and
    /// [`pass`](Self::pass); a stale result shows up as `IllegalMove`.
    pub fn apply_engine_result(&mut self, result: &MoveResult) -> GameResult<()> {
        match result.best_move {
            Some(pos) => {
                self.play(pos)?;
                debug_assert_eq!(self.state.board, result.state.board);
                Ok(())
            }
            None => self.pass(),
        }
    }

    fn play(&mut self, pos: Pos) -> GameResult<()> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        let side = self.to_move;
        if !self.state.legal_moves.get(pos) {
            return Err(GameError::IllegalMove { pos, side });
        }

        self.state = self.state.child(pos, side);
        self.to_move = side.opponent();
        self.consecutive_passes = 0;
        self.moves_played += 1;
        self.history.push(Turn::Move { pos, side });
        debug!(?side, pos = %pos, moves_played = self.moves_played, "move");
        Ok(())
    }

    /// Final tallies. The side ahead is credited with the empty cells, so
    /// the totals always add up to 64; a draw is 32-32.
    pub fn final_score(&self) -> (u32, u32, Outcome) {
        let black = self.board().count(Tile::Black);
        let white = self.board().count(Tile::White);
        let empty = self.board().empty_count();

        match black.cmp(&white) {
            std::cmp::Ordering::Greater => (black + empty, white, Outcome::Win(Tile::Black)),
            std::cmp::Ordering::Less => (black, white + empty, Outcome::Win(Tile::White)),
            std::cmp::Ordering::Equal => (black + empty / 2, white + empty / 2, Outcome::Draw),
        }
    }

    /// Take back the last placed tile (and any passes after it).
    ///
    /// The position is rebuilt by replaying the remaining history from the
    /// position the session started from.
    ///
    /// # Errors
    ///
    /// `EmptyHistory` when no tile has been placed.
    pub fn undo(&mut self) -> GameResult<()> {
        let Some(last) = self
            .history
            .iter()
            .rposition(|turn| matches!(turn, Turn::Move { .. }))
        else {
            return Err(GameError::EmptyHistory);
        };

        let kept: Vec<Turn> = self.history[..last].to_vec();
        let (board, to_move) = self.start;
        let mut replay = Session::from_position(board, to_move);
        for turn in kept {
            match turn {
                Turn::Move { pos, .. } => replay.play(pos)?,
                Turn::Pass { .. } => replay.pass()?,
            }
        }
        *self = replay;
        debug!(moves_played = self.moves_played, "undo");
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new_game()
    }
}
