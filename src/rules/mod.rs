//! Game rules for Othello
//!
//! This module implements the rule set:
//! - Legal-move discovery by ray casting from the mover's tiles
//! - Capture resolution (flanked runs flip to the mover's colour)

pub mod capture;
pub mod moves;

/// The eight compass directions as (row, column) steps
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),  // N
    (-1, 1),  // NE
    (0, 1),   // E
    (1, 1),   // SE
    (1, 0),   // S
    (1, -1),  // SW
    (0, -1),  // W
    (-1, -1), // NW
];

// Re-exports for convenient access
pub use capture::{apply_move, count_flips, flips_in_direction, get_flipped_positions};
pub use moves::{generate_moves, has_moves, is_legal_move};
