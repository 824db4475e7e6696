//! Board module - the locked-cell grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that was locked there. Storage is a flat array for cache locality.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Nothing outside that rectangle is ever stored; callers that deal with rows
//! above the board (spawning pieces) go through [`crate::collision`].

use arrayvec::ArrayVec;

use crate::types::{cell_id, Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Upper bound on rows removed by one [`Board::clear_full_rows`] call.
pub const MAX_CLEARED_ROWS: usize = BOARD_HEIGHT as usize;

/// Board as rows of numeric cell ids (0 = empty, 1..=7 = piece id).
pub type BoardGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Row-major (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::in_bounds(x, y) {
            Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Whether (x, y) lies inside the visible grid.
    #[inline(always)]
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y), `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Fill every cell of row `y` except the given columns.
    pub fn fill_row_except(&mut self, y: i8, kind: PieceKind, holes: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            if !holes.contains(&x) {
                self.set(x, y, Some(kind));
            }
        }
    }

    /// Remove every full row, shifting the rows above down.
    ///
    /// Rows are scanned bottom to top. Each removal drops everything above by
    /// one and leaves an empty row at the top, so the row count never changes.
    /// Returns the cleared row indices in the original (pre-shift) numbering,
    /// bottom first. A piece completes at most four rows, but boards built
    /// with setup helpers may hold more and every one of them is removed.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared_rows
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Write the board as numeric ids.
    pub fn write_grid(&self, out: &mut BoardGrid) {
        for (dst, row) in out.iter_mut().zip(self.rows()) {
            for (d, cell) in dst.iter_mut().zip(row) {
                *d = cell_id(*cell);
            }
        }
    }

    pub fn to_grid(&self) -> BoardGrid {
        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.write_grid(&mut grid);
        grid
    }

    /// Build a board from numeric ids. Unknown ids are treated as empty.
    pub fn from_grid(grid: &BoardGrid) -> Self {
        let mut board = Self::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                board.cells[y * BOARD_WIDTH as usize + x] = PieceKind::from_id(id);
            }
        }
        board
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_clear_full_rows_keeps_row_count() {
        let mut board = Board::new();
        board.fill_row_except(19, PieceKind::I, &[]);
        board.fill_row_except(18, PieceKind::T, &[4]);
        board.fill_row_except(17, PieceKind::O, &[]);
        board.set(0, 16, Some(PieceKind::L));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);

        assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
        // Partial row 18 dropped to 19, marker at 16 dropped two rows.
        assert!(!board.is_row_full(19));
        assert_eq!(board.get(4, 19), Some(None));
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.get(0, 18), Some(Some(PieceKind::L)));
        assert!(board.rows().take(2).all(|row| row.iter().all(|c| c.is_none())));
    }

    #[test]
    fn test_clear_more_than_four_full_rows() {
        let mut board = Board::new();
        for y in 13..20 {
            board.fill_row_except(y, PieceKind::Z, &[]);
        }
        board.set(2, 12, Some(PieceKind::S));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 18, 17, 16, 15, 14, 13]);
        assert!((0..BOARD_HEIGHT as usize).all(|y| !board.is_row_full(y)));
        assert_eq!(board.filled_count(), 1);
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::S)));
    }

    #[test]
    fn test_clear_every_row() {
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT as i8 {
            board.fill_row_except(y, PieceKind::I, &[]);
        }
        assert_eq!(board.clear_full_rows().len(), MAX_CLEARED_ROWS);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_grid_conversion() {
        let mut board = Board::new();
        board.set(3, 5, Some(PieceKind::J));
        board.set(9, 19, Some(PieceKind::I));

        let grid = board.to_grid();
        assert_eq!(grid[5][3], 6);
        assert_eq!(grid[19][9], 1);
        assert_eq!(Board::from_grid(&grid), board);
    }
}
