//! Named board regions used by the evaluator
//!
//! Row/column ranges are half-open (`2..6` is rows 2, 3, 4 and 5).

use super::{Bitboard, Pos, BOARD_SIZE};

/// Mask of every cell with row in `rows` and column in `cols`.
const fn block(row_start: usize, row_end: usize, col_start: usize, col_end: usize) -> u64 {
    let mut bits = 0u64;
    let mut r = row_start;
    while r < row_end {
        let mut c = col_start;
        while c < col_end {
            bits |= 1u64 << (r * BOARD_SIZE + c);
            c += 1;
        }
        r += 1;
    }
    bits
}

/// The four corner cells.
pub const CORNERS: Bitboard = Bitboard::from_bits(
    block(0, 1, 0, 1) | block(0, 1, 7, 8) | block(7, 8, 0, 1) | block(7, 8, 7, 8),
);

/// Inner 4x4 block, rows and columns `2..6`.
pub const CENTER_SQUARE: Bitboard = Bitboard::from_bits(block(2, 6, 2, 6));

/// Edge ring minus the corners and their edge neighbours:
/// columns 0 and 7 over rows `2..6`, rows 0 and 7 over columns `2..6`.
pub const PERIMETER: Bitboard = Bitboard::from_bits(
    block(2, 6, 0, 1) | block(2, 6, 7, 8) | block(0, 1, 2, 6) | block(7, 8, 2, 6),
);

/// Second ring in, same shape as [`PERIMETER`]:
/// columns 1 and 6 over rows `2..6`, rows 1 and 6 over columns `2..6`.
pub const DANGER_ZONE: Bitboard = Bitboard::from_bits(
    block(2, 6, 1, 2) | block(2, 6, 6, 7) | block(1, 2, 2, 6) | block(6, 7, 2, 6),
);

/// Each corner paired with its three adjacent cells.
pub const CORNER_NEIGHBORS: [(Pos, [Pos; 3]); 4] = [
    (
        Pos { row: 0, col: 0 },
        [Pos { row: 0, col: 1 }, Pos { row: 1, col: 0 }, Pos { row: 1, col: 1 }],
    ),
    (
        Pos { row: 0, col: 7 },
        [Pos { row: 0, col: 6 }, Pos { row: 1, col: 6 }, Pos { row: 1, col: 7 }],
    ),
    (
        Pos { row: 7, col: 0 },
        [Pos { row: 6, col: 0 }, Pos { row: 6, col: 1 }, Pos { row: 7, col: 1 }],
    ),
    (
        Pos { row: 7, col: 7 },
        [Pos { row: 7, col: 6 }, Pos { row: 6, col: 7 }, Pos { row: 6, col: 6 }],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_sizes() {
        assert_eq!(CORNERS.count(), 4);
        assert_eq!(CENTER_SQUARE.count(), 16);
        assert_eq!(PERIMETER.count(), 16);
        assert_eq!(DANGER_ZONE.count(), 16);
    }

    #[test]
    fn test_regions_disjoint() {
        assert!(PERIMETER.intersect(DANGER_ZONE).is_empty());
        assert!(PERIMETER.intersect(CENTER_SQUARE).is_empty());
        assert!(DANGER_ZONE.intersect(CENTER_SQUARE).is_empty());
        assert!(CORNERS.intersect(PERIMETER).is_empty());
    }

    #[test]
    fn test_region_membership() {
        assert!(CORNERS.get(Pos::new(7, 0)));
        assert!(CENTER_SQUARE.get(Pos::new(2, 5)));
        assert!(!CENTER_SQUARE.get(Pos::new(1, 5)));
        assert!(PERIMETER.get(Pos::new(0, 2)));
        assert!(!PERIMETER.get(Pos::new(0, 1)));
        assert!(DANGER_ZONE.get(Pos::new(6, 3)));
        assert!(!DANGER_ZONE.get(Pos::new(1, 1)));
    }

    #[test]
    fn test_corner_neighbors_adjacent() {
        for (corner, neighbors) in CORNER_NEIGHBORS {
            assert!(CORNERS.get(corner));
            for n in neighbors {
                let dr = (i32::from(n.row) - i32::from(corner.row)).abs();
                let dc = (i32::from(n.col) - i32::from(corner.col)).abs();
                assert!(dr <= 1 && dc <= 1 && (dr, dc) != (0, 0));
            }
        }
    }
}
