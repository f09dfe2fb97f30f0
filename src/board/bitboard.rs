//! Bitboard implementation for the 8x8 board

use super::{Pos, TOTAL_CELLS};

/// One bit per cell, bit `row * 8 + col`.
///
/// Also used as the legal-move set: inserting the same cell twice
/// leaves a single bit, so duplicate destinations collapse for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u64 << pos.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u64 << pos.to_index());
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub fn intersect(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits & other.bits)
    }

    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits | other.bits)
    }

    /// Iterate over set bit positions, lowest index first
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl FromIterator<Pos> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        let mut board = Bitboard::new();
        for pos in iter {
            board.set(pos);
        }
        board
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;

        debug_assert!(idx < TOTAL_CELLS);
        Some(Pos::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new();
        let pos = Pos::new(7, 7);
        bb.set(pos);
        assert!(bb.get(pos));
        assert_eq!(bb.bits(), 1u64 << 63);
        bb.clear(pos);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_duplicate_set_collapses() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(2, 3));
        bb.set(Pos::new(2, 3));
        assert_eq!(bb.count(), 1);
    }

    #[test]
    fn test_iter_ones_ascending() {
        let bb: Bitboard = [Pos::new(5, 0), Pos::new(0, 1), Pos::new(3, 3)]
            .into_iter()
            .collect();
        let cells: Vec<Pos> = bb.iter_ones().collect();
        assert_eq!(cells, vec![Pos::new(0, 1), Pos::new(3, 3), Pos::new(5, 0)]);
        assert_eq!(bb.iter_ones().len(), 3);
    }

    #[test]
    fn test_intersect_union() {
        let a: Bitboard = [Pos::new(0, 0), Pos::new(1, 1)].into_iter().collect();
        let b: Bitboard = [Pos::new(1, 1), Pos::new(2, 2)].into_iter().collect();
        assert_eq!(a.intersect(b).count(), 1);
        assert_eq!(a.union(b).count(), 3);
    }
}
