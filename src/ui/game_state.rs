//! Game state management for the Othello GUI

use crate::board::Bitboard;
use crate::{AIEngine, Difficulty, MoveResult, Pos, Session, Tile};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Tile },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_color: Tile::Black }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Everything the GUI tracks about the game in progress
pub struct GuiState {
    pub session: Session,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    /// Pending hint search and the move count it was asked at
    hint: Option<(Receiver<MoveResult>, u32)>,
    seed: Option<u64>,
}

impl GuiState {
    pub fn new(mode: GameMode, difficulty: Difficulty, seed: Option<u64>) -> Self {
        info!(?mode, %difficulty, "new game");
        Self {
            session: Session::new_game(),
            mode,
            difficulty,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            hint: None,
            seed,
        }
    }

    /// Restart with the same mode and difficulty
    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.difficulty, self.seed);
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn current_turn(&self) -> Tile {
        self.session.to_move()
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_terminal()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Cells the board view should accept clicks on
    pub fn clickable_moves(&self) -> Bitboard {
        if self.is_human_turn() && !self.is_ai_thinking() && !self.is_game_over() {
            self.session.legal_moves()
        } else {
            Bitboard::new()
        }
    }

    /// Attempt to place a disc for the human at the given position
    pub fn try_place_disc(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.session
            .apply_human_move(pos)
            .map_err(|e| e.to_string())?;
        self.after_move();
        Ok(())
    }

    fn after_move(&mut self) {
        self.suggested_move = None;
        self.hint = None;
        self.message = None;
        self.move_timer.stop();
        self.move_timer.start();
    }

    /// Pass for a side that has no legal move. Returns true if a pass was made.
    pub fn auto_pass(&mut self) -> bool {
        if self.is_game_over() || self.is_ai_thinking() || !self.session.must_pass() {
            return false;
        }

        let side = self.current_turn();
        match self.session.pass() {
            Ok(()) => {
                self.message = Some(format!("{side:?} has no legal move and passes"));
                true
            }
            Err(e) => {
                warn!(error = %e, "auto pass failed");
                false
            }
        }
    }

    fn engine(&self) -> AIEngine {
        // Vary the seed per move so a seeded game does not repeat one coin sequence
        let seed = self
            .seed
            .map(|s| s.wrapping_add(u64::from(self.session.moves_played())));
        AIEngine::with_difficulty(self.difficulty, seed)
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }

        let state = *self.session.state();
        let side = self.current_turn();
        let passes = self.session.consecutive_passes();
        let mut engine = self.engine();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&state, side, passes);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);

            match self.session.apply_engine_result(&move_result) {
                Ok(()) => self.after_move(),
                Err(e) => self.message = Some(format!("AI move rejected: {e}")),
            }
            self.last_ai_result = Some(move_result);
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Ask a shallow engine for a move suggestion on a worker thread
    pub fn request_suggestion(&mut self) {
        if self.is_game_over() || self.is_ai_thinking() || self.is_hint_pending() {
            return;
        }

        let state = *self.session.state();
        let side = self.current_turn();
        let passes = self.session.consecutive_passes();
        let mut engine = AIEngine::with_difficulty(Difficulty::Easy, self.seed);

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&state, side, passes);
            let _ = tx.send(result);
        });

        self.hint = Some((rx, self.session.moves_played()));
    }

    pub fn is_hint_pending(&self) -> bool {
        self.hint.is_some()
    }

    /// Pick up a finished hint. A hint for an earlier position is dropped.
    pub fn check_suggestion(&mut self) {
        let Some((receiver, asked_at)) = &self.hint else {
            return;
        };

        match receiver.try_recv() {
            Ok(result) => {
                if *asked_at == self.session.moves_played() {
                    self.suggested_move = result.best_move;
                    self.last_ai_result = Some(result);
                }
                self.hint = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                warn!("hint worker disconnected");
                self.hint = None;
            }
        }
    }

    /// Undo last move; in PvE, back to the human's previous turn
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }

        if let Err(e) = self.session.undo() {
            self.message = Some(e.to_string());
            return;
        }
        while !self.is_human_turn() {
            if self.session.undo().is_err() {
                break;
            }
        }

        self.suggested_move = None;
        self.hint = None;
        self.message = None;
        self.move_timer.start();
    }
}
