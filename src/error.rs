//! Error types for the game-loop boundary
//!
//! The engine core never fails: no legal moves and reaching the depth limit
//! are ordinary outcomes. These errors cover input the session rejects
//! before it reaches the core.

use crate::board::{Pos, Tile};

/// Errors that can occur when driving a game session
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Cell is not in the side's legal-move set
    #[error("Illegal move {pos} for {side:?}")]
    IllegalMove { pos: Pos, side: Tile },

    /// Move text could not be parsed
    #[error("Invalid position '{input}', expected a letter A-H and a digit 1-8")]
    InvalidNotation { input: String },

    /// Pass requested while moves exist
    #[error("{side:?} has {count} legal moves and cannot pass")]
    PassWithMovesAvailable { side: Tile, count: u32 },

    /// Both sides have passed in succession
    #[error("Game is over")]
    GameOver,

    /// Nothing to undo
    #[error("No moves to undo")]
    EmptyHistory,
}

/// Result type alias for session operations
pub type GameResult<T> = Result<T, GameError>;
