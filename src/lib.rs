//! Othello AI Engine
//!
//! An 8x8 Othello (Reversi) engine:
//! - Bitboard board model with ray-cast move generation
//! - Capture resolution in eight independent directions
//! - Six-factor positional evaluation
//! - Fixed-depth minimax with alpha-beta pruning and coin-flip tie-breaking
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Legal moves and captures
//! - [`eval`]: Position evaluation
//! - [`search`]: Minimax search and tie-break policies
//! - [`state`]: Search-tree nodes
//! - [`engine`]: Single-shot AI engine with difficulty presets
//! - [`game`]: Session API for a game loop
//!
//! # Quick Start
//!
//! ```
//! use othello::{AIEngine, Session, Tile};
//!
//! let mut session = Session::new_game();
//! let mut engine = AIEngine::with_config(2, Some(3));
//!
//! // Engine plays Black's opening move
//! let result = session.engine_move(&mut engine).unwrap();
//! if let Some(pos) = result.best_move {
//!     println!("AI plays {pos}");
//! }
//! assert_eq!(session.to_move(), Tile::White);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Tile, BOARD_SIZE};
pub use engine::{AIEngine, Difficulty, MoveResult};
pub use error::{GameError, GameResult};
pub use game::{Outcome, Session};
pub use state::GameState;
