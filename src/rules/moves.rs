//! Legal-move discovery
//!
//! From every tile of the moving side, a ray is cast in each of the eight
//! directions. The ray walks over opponent tiles; if at least one was
//! crossed and the first cell after the run is empty, that cell is a legal
//! destination. An own tile or the board edge ends the ray with no move.

use crate::board::{Bitboard, Board, Pos, Tile};

use super::DIRECTIONS;

/// Cast one ray from `from` and return the empty cell that ends an opponent
/// run, if there is one.
fn ray_destination(board: &Board, from: Pos, dr: i32, dc: i32, side: Tile) -> Option<Pos> {
    let opponent = side.opponent();
    let mut dist = 1;
    let mut crossed = false;

    while let Some(pos) = from.offset(dr, dc, dist) {
        match board.get(pos) {
            t if t == opponent => {
                crossed = true;
                dist += 1;
            }
            Tile::Empty if crossed => return Some(pos),
            _ => return None,
        }
    }
    None
}

/// Compute the set of legal destination cells for `side`.
///
/// An empty result is not an error: it means `side` has to pass.
///
/// # Example
///
/// ```
/// use othello::board::{Board, Tile};
/// use othello::rules::generate_moves;
///
/// let moves = generate_moves(&Board::new(), Tile::Black);
/// assert_eq!(moves.count(), 4);
/// ```
#[must_use]
pub fn generate_moves(board: &Board, side: Tile) -> Bitboard {
    let mut moves = Bitboard::new();
    let Some(own) = board.tiles(side) else {
        return moves;
    };

    for from in own.iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            if let Some(dest) = ray_destination(board, from, dr, dc, side) {
                moves.set(dest);
            }
        }
    }
    moves
}

/// Check whether `side` has at least one legal move.
#[inline]
pub fn has_moves(board: &Board, side: Tile) -> bool {
    !generate_moves(board, side).is_empty()
}

/// Check a single cell without building the whole move set.
///
/// Equivalent to `generate_moves(board, side).get(pos)`: the cell must be
/// empty and flank at least one opponent run.
pub fn is_legal_move(board: &Board, pos: Pos, side: Tile) -> bool {
    if side == Tile::Empty || !board.is_empty(pos) {
        return false;
    }
    super::capture::count_flips(board, pos, side) > 0
}
