//! Placement validity.
//!
//! A placement is legal when every mino lands inside the board columns, above
//! the floor, and on an empty cell. Rows above the board (negative y) are
//! always free so pieces can spawn partially off-screen.

use crate::board::Board;
use crate::pieces::PieceShape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `shape` fits at origin (`x`, `y`) on `board`.
pub fn is_valid(board: &Board, shape: &PieceShape, x: i8, y: i8) -> bool {
    shape
        .iter()
        .all(|&(dx, dy)| cell_free(board, x.saturating_add(dx), y.saturating_add(dy)))
}

/// Single-cell form of [`is_valid`].
#[inline]
pub fn cell_free(board: &Board, x: i8, y: i8) -> bool {
    if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
        return false;
    }
    y < 0 || !board.is_occupied(x, y)
}

/// How many rows `shape` can fall from (`x`, `y`) before it rests.
pub fn drop_distance(board: &Board, shape: &PieceShape, x: i8, y: i8) -> i8 {
    let mut distance: i8 = 0;
    while let Some(next) = distance.checked_add(1) {
        match y.checked_add(next) {
            Some(row) if is_valid(board, shape, x, row) => distance = next,
            _ => break,
        }
    }
    distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::get_shape;
    use crate::types::{PieceKind, Rotation};

    #[test]
    fn extreme_origins_do_not_overflow() {
        let board = Board::new();
        let t = get_shape(PieceKind::T, Rotation::North);
        assert!(!is_valid(&board, &t, i8::MAX, 0));
        assert!(!is_valid(&board, &t, 0, i8::MAX));
        assert!(!is_valid(&board, &t, i8::MIN, i8::MIN));
        assert_eq!(drop_distance(&board, &t, 3, i8::MIN), i8::MAX);
        assert_eq!(drop_distance(&board, &t, 3, i8::MAX), 0);
    }

    #[test]
    fn walls_and_floor_reject() {
        let board = Board::new();
        let i = get_shape(PieceKind::I, Rotation::North);
        assert!(is_valid(&board, &i, 0, 0));
        assert!(is_valid(&board, &i, 6, 0));
        assert!(!is_valid(&board, &i, -1, 0));
        assert!(!is_valid(&board, &i, 7, 0));
        // Row 1 of the box on row 19 is fine, row 20 is the floor.
        assert!(is_valid(&board, &i, 0, 18));
        assert!(!is_valid(&board, &i, 0, 19));
    }

    #[test]
    fn rows_above_board_are_free_even_over_occupied_columns() {
        let mut board = Board::new();
        board.set(4, 0, Some(PieceKind::Z));
        let t = get_shape(PieceKind::T, Rotation::North);
        // Minos at (4,-2) and (3..=5,-1): entirely above the stack.
        assert!(is_valid(&board, &t, 3, -2));
        // One row lower the flat side reaches row 0 and hits (4,0).
        assert!(!is_valid(&board, &t, 3, -1));
        // Off-board columns stay illegal above the board too.
        assert!(!is_valid(&board, &t, -1, -2));
    }

    #[test]
    fn drop_distance_on_empty_board() {
        let board = Board::new();
        let o = get_shape(PieceKind::O, Rotation::North);
        assert_eq!(drop_distance(&board, &o, 3, 0), 18);
    }
}
