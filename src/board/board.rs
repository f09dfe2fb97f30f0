//! Board structure with tile counting

use super::bitboard::Bitboard;
use super::{Pos, Tile, BOARD_SIZE, TOTAL_CELLS};

/// Game board: one bitboard per colour.
///
/// A cell is never set in both bitboards, so every cell holds exactly one
/// of Empty/Black/White.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Black tiles bitboard
    pub black: Bitboard,
    /// White tiles bitboard
    pub white: Bitboard,
}

impl Board {
    /// Standard start position: White on D4/E5, Black on E4/D5.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place_tile(Pos::new(3, 3), Tile::White);
        board.place_tile(Pos::new(3, 4), Tile::Black);
        board.place_tile(Pos::new(4, 3), Tile::Black);
        board.place_tile(Pos::new(4, 4), Tile::White);
        board
    }

    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get tile at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Tile {
        if self.black.get(pos) {
            Tile::Black
        } else if self.white.get(pos) {
            Tile::White
        } else {
            Tile::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Put a tile on a cell, replacing whatever was there.
    /// Use `rules::apply_move` for game moves.
    #[inline]
    pub fn place_tile(&mut self, pos: Pos, tile: Tile) {
        self.black.clear(pos);
        self.white.clear(pos);
        match tile {
            Tile::Black => self.black.set(pos),
            Tile::White => self.white.set(pos),
            Tile::Empty => {}
        }
    }

    /// Turn an occupied cell over to the other colour.
    #[inline]
    pub fn flip_tile(&mut self, pos: Pos) {
        let flipped = self.get(pos).opponent();
        self.place_tile(pos, flipped);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn tiles(&self, tile: Tile) -> Option<&Bitboard> {
        match tile {
            Tile::Black => Some(&self.black),
            Tile::White => Some(&self.white),
            Tile::Empty => None,
        }
    }

    /// Number of cells holding `tile` (Empty counts empty cells)
    #[inline]
    pub fn count(&self, tile: Tile) -> u32 {
        match tile {
            Tile::Black => self.black.count(),
            Tile::White => self.white.count(),
            Tile::Empty => self.empty_count(),
        }
    }

    /// Number of cells of `tile` inside `region`
    #[inline]
    pub fn count_in(&self, tile: Tile, region: Bitboard) -> u32 {
        match self.tiles(tile) {
            Some(bb) => bb.intersect(region).count(),
            None => region.count() - self.occupied().intersect(region).count(),
        }
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(self.white)
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.tile_count()
    }

    /// Total tiles on board (both colours)
    #[inline]
    pub fn tile_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Cells of `tile`, lowest index first
    pub fn positions(&self, tile: Tile) -> impl Iterator<Item = Pos> + '_ {
        let bb = match tile {
            Tile::Black => self.black,
            Tile::White => self.white,
            Tile::Empty => Bitboard::from_bits(!self.occupied().bits()),
        };
        bb.iter_ones()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Text grid, row 1 at the top, used in logs and test failure output.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  A B C D E F G H")?;
        for row in 0..BOARD_SIZE as u8 {
            write!(f, "{}", row + 1)?;
            for col in 0..BOARD_SIZE as u8 {
                write!(f, " {}", self.get(Pos::new(row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
