//! Capture resolution for Othello
//!
//! After a tile is placed, each of the eight directions is resolved on its
//! own: walk over the opponent's tiles collecting them, and stop at the first
//! cell that is not the opponent's. If that cell holds the mover's tile the
//! collected run is flipped; if it is empty or the walk left the board the
//! run is discarded.

use crate::board::{Board, Pos, Tile};

use super::DIRECTIONS;

/// Tiles that a tile of `side` at `pos` would flip along one direction.
///
/// The buffer is local to this call and returned by value. It is empty when
/// the run is not flanked.
pub fn flips_in_direction(board: &Board, pos: Pos, side: Tile, dr: i32, dc: i32) -> Vec<Pos> {
    if side == Tile::Empty {
        return Vec::new();
    }
    let opponent = side.opponent();
    let mut run = Vec::new();
    let mut dist = 1;

    while let Some(next) = pos.offset(dr, dc, dist) {
        match board.get(next) {
            t if t == opponent => run.push(next),
            t if t == side => return run,
            _ => break,
        }
        dist += 1;
    }

    // Ran into an empty cell or off the board: nothing flips
    Vec::new()
}

/// Find every tile that would flip if `side` played at `pos`.
///
/// # Arguments
/// * `board` - Current board state
/// * `pos` - Cell where the tile will be placed
/// * `side` - Colour of the tile being placed
pub fn get_flipped_positions(board: &Board, pos: Pos, side: Tile) -> Vec<Pos> {
    let mut flipped = Vec::new();
    for &(dr, dc) in &DIRECTIONS {
        flipped.extend(flips_in_direction(board, pos, side, dr, dc));
    }
    flipped
}

/// Number of tiles a move at `pos` would flip.
#[inline]
pub fn count_flips(board: &Board, pos: Pos, side: Tile) -> usize {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| flips_in_direction(board, pos, side, dr, dc).len())
        .sum()
}

/// Place `side`'s tile at `pos` and flip every flanked run.
///
/// Precondition: `pos` is in `generate_moves(board, side)`. This is not
/// checked here; the caller (the game session) validates human input.
///
/// # Returns
/// The cells that were flipped.
pub fn apply_move(board: &mut Board, pos: Pos, side: Tile) -> Vec<Pos> {
    debug_assert!(board.is_empty(pos), "apply_move on occupied cell {pos}");

    let flipped = get_flipped_positions(board, pos, side);
    board.place_tile(pos, side);
    for &cell in &flipped {
        board.place_tile(cell, side);
    }
    flipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::generate_moves;

    #[test]
    fn test_flip_horizontal() {
        let mut board = Board::empty();
        // _ W W B
        board.place_tile(Pos::new(2, 2), Tile::White);
        board.place_tile(Pos::new(2, 3), Tile::White);
        board.place_tile(Pos::new(2, 4), Tile::Black);

        let flipped = apply_move(&mut board, Pos::new(2, 1), Tile::Black);
        assert_eq!(flipped, vec![Pos::new(2, 2), Pos::new(2, 3)]);
        assert_eq!(board.get(Pos::new(2, 2)), Tile::Black);
        assert_eq!(board.get(Pos::new(2, 3)), Tile::Black);
        assert_eq!(board.count(Tile::White), 0);
    }

    #[test]
    fn test_flip_stops_at_flanking_tile() {
        let mut board = Board::empty();
        // _ W B W : the W beyond the flanking tile stays
        board.place_tile(Pos::new(5, 1), Tile::White);
        board.place_tile(Pos::new(5, 2), Tile::Black);
        board.place_tile(Pos::new(5, 3), Tile::White);

        let flipped = apply_move(&mut board, Pos::new(5, 0), Tile::Black);
        assert_eq!(flipped, vec![Pos::new(5, 1)]);
        assert_eq!(board.get(Pos::new(5, 3)), Tile::White);
    }

    #[test]
    fn test_no_flip_at_edge() {
        let mut board = Board::empty();
        // B _ W W | edge, plus a legal vertical capture so the move is legal
        board.place_tile(Pos::new(3, 6), Tile::White);
        board.place_tile(Pos::new(3, 7), Tile::White);
        board.place_tile(Pos::new(4, 5), Tile::White);
        board.place_tile(Pos::new(5, 5), Tile::Black);

        let flipped = apply_move(&mut board, Pos::new(3, 5), Tile::Black);
        assert_eq!(flipped, vec![Pos::new(4, 5)]);
        assert_eq!(board.get(Pos::new(3, 6)), Tile::White);
        assert_eq!(board.get(Pos::new(3, 7)), Tile::White);
    }

    #[test]
    fn test_no_wraparound_across_rows() {
        let mut board = Board::empty();
        // W at end of row 0, B at start of row 1: adjacent indices, not a line
        board.place_tile(Pos::new(0, 7), Tile::White);
        board.place_tile(Pos::new(1, 0), Tile::Black);

        assert!(get_flipped_positions(&board, Pos::new(0, 6), Tile::Black).is_empty());
    }

    #[test]
    fn test_run_ending_in_empty_discarded() {
        let mut board = Board::empty();
        board.place_tile(Pos::new(1, 1), Tile::White);
        board.place_tile(Pos::new(2, 2), Tile::White);
        assert!(flips_in_direction(&board, Pos::new(0, 0), Tile::Black, 1, 1).is_empty());
    }

    #[test]
    fn test_directions_independent() {
        let mut board = Board::empty();
        let center = Pos::new(3, 3);
        // East flanked, north open-ended
        board.place_tile(Pos::new(3, 4), Tile::White);
        board.place_tile(Pos::new(3, 5), Tile::Black);
        board.place_tile(Pos::new(2, 3), Tile::White);
        board.place_tile(Pos::new(1, 3), Tile::White);

        let flipped = apply_move(&mut board, center, Tile::Black);
        assert_eq!(flipped, vec![Pos::new(3, 4)]);
        assert_eq!(board.get(Pos::new(2, 3)), Tile::White);
        assert_eq!(board.get(Pos::new(1, 3)), Tile::White);
    }

    #[test]
    fn test_multi_direction_capture() {
        let mut board = Board::empty();
        let center = Pos::new(4, 4);
        // W ring around the center, each backed by a B
        for &(dr, dc) in &DIRECTIONS {
            let w = center.offset(dr, dc, 1).unwrap();
            let b = center.offset(dr, dc, 2).unwrap();
            board.place_tile(w, Tile::White);
            board.place_tile(b, Tile::Black);
        }

        assert_eq!(count_flips(&board, center, Tile::Black), 8);
        let flipped = apply_move(&mut board, center, Tile::Black);
        assert_eq!(flipped.len(), 8);
        assert_eq!(board.count(Tile::White), 0);
        assert_eq!(board.count(Tile::Black), 17);
    }

    #[test]
    fn test_white_captures_black() {
        let mut board = Board::new();
        let flipped = apply_move(&mut board, Pos::new(2, 4), Tile::White);
        assert_eq!(flipped, vec![Pos::new(3, 4)]);
        assert_eq!(board.count(Tile::White), 4);
        assert_eq!(board.count(Tile::Black), 1);
    }

    #[test]
    fn test_opening_moves_flip_exactly_one() {
        let board = Board::new();
        for pos in generate_moves(&board, Tile::Black).iter_ones() {
            let mut child = board;
            let flipped = apply_move(&mut child, pos, Tile::Black);
            assert_eq!(flipped.len(), 1, "{pos}");
            assert_eq!(child.count(Tile::Black), 4);
            assert_eq!(child.count(Tile::White), 1);
        }
    }

    #[test]
    fn test_played_cell_not_legal_for_opponent() {
        let board = Board::new();
        for pos in generate_moves(&board, Tile::Black).iter_ones() {
            let mut child = board;
            apply_move(&mut child, pos, Tile::Black);
            assert!(!generate_moves(&child, Tile::White).get(pos));
        }
    }

    #[test]
    fn test_flips_nothing_for_empty_side() {
        assert!(get_flipped_positions(&Board::new(), Pos::new(2, 3), Tile::Empty).is_empty());
    }
}
