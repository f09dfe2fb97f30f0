//! Board representation for Othello

pub mod bitboard;
pub mod board;
pub mod regions;


use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    /// Moves first
    Black,
    White,
}

impl Tile {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Tile {
        match self {
            Tile::Black => Tile::White,
            Tile::White => Tile::Black,
            Tile::Empty => Tile::Empty,
        }
    }

    /// Single-letter symbol (`X` for Black, `O` for White)
    pub fn symbol(self) -> char {
        match self {
            Tile::Black => 'X',
            Tile::White => 'O',
            Tile::Empty => '.',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Bit index (0..64)
    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    /// Compact move identifier `row * 8 + col + 1` (1..=64).
    #[inline]
    pub fn move_index(self) -> u8 {
        self.row * BOARD_SIZE as u8 + self.col + 1
    }

    /// Inverse of [`Pos::move_index`]. 0 and anything above 64 are rejected.
    pub fn from_move_index(index: u8) -> Option<Self> {
        if index == 0 || index as usize > TOTAL_CELLS {
            return None;
        }
        Some(Self::from_index(index as usize - 1))
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Step `dist` cells along `(dr, dc)`, `None` when leaving the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, dist: i32) -> Option<Pos> {
        let r = i32::from(self.row) + dr * dist;
        let c = i32::from(self.col) + dc * dist;
        if Pos::is_valid(r, c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// Algebraic notation: column letter then row number, e.g. `D3` is row 2, column 3.
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Pos {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = cleaned.to_ascii_uppercase().into_bytes();
        let &[letter, digit] = bytes.as_slice() else {
            return Err(GameError::InvalidNotation { input: s.to_string() });
        };
        if !(b'A'..=b'H').contains(&letter) || !(b'1'..=b'8').contains(&digit) {
            return Err(GameError::InvalidNotation { input: s.to_string() });
        }
        Ok(Pos::new(digit - b'1', letter - b'A'))
    }
}
