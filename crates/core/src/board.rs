//! Board module - manages the game grid
//!
//! The board is a `width x height` grid (10x20 by default) where each cell is
//! either empty or holds the kind of the piece that locked there.
//! Cells are stored in a flat row-major `Vec` for cache locality; the
//! dimensions never change after creation.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::types::{cell_tag, Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_SIDE};

/// The locked game grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the given dimensions
    ///
    /// Each side is clamped to [`MAX_BOARD_SIDE`] (127) so coordinates fit in `i8`.
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.min(MAX_BOARD_SIDE);
        let height = height.min(MAX_BOARD_SIDE);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Create an empty 10x20 board
    pub fn standard() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Check if (x, y) lies inside the grid
    #[inline]
    pub fn in_bounds(&self, x: i8, y: i8) -> bool {
        x >= 0 && (x as u8) < self.width && y >= 0 && (y as u8) < self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True iff (x, y) is inside the grid and filled.
    ///
    /// Out-of-range coordinates report `false`; wall and floor handling belongs
    /// to the placement check.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Write each `(x, y, kind)` into the grid.
    ///
    /// Callers validate the placement first; an out-of-range cell is a
    /// contract violation.
    pub fn lock_cells(&mut self, cells: &[(i8, i8, PieceKind)]) {
        for &(x, y, kind) in cells {
            let written = self.set(x, y, Some(kind));
            debug_assert!(written, "lock_cells out of bounds at ({x}, {y})");
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Cells of row `y`, if it exists
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Remove row `y`, shift all rows above it down by one and insert an
    /// empty row at the top.
    pub fn clear_row(&mut self, y: usize) {
        if y >= self.height as usize {
            return;
        }

        let width = self.width as usize;

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Scans bottom to top. After a removal the same index is tested again,
    /// since the row that was above has just shifted into it.
    pub fn clear_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height as usize;

        while y > 0 {
            if self.is_row_full(y - 1) {
                self.clear_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Write the cell tags (0 empty, 1-7 piece kinds) into `out`, row-major.
    pub fn write_tags(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|&cell| cell_tag(cell)));
    }

    /// Check if every cell is empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the whole board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill row `y` completely with `kind`
    pub fn fill_row(&mut self, y: i8, kind: PieceKind) {
        for x in 0..self.width as i8 {
            self.set(x, y, Some(kind));
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::standard();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_clear_row_shifts_rows_above() {
        let mut board = Board::new(4, 4);
        board.set(1, 0, Some(PieceKind::T));
        board.set(2, 1, Some(PieceKind::S));
        board.fill_row(2, PieceKind::I);

        board.clear_row(2);

        assert_eq!(board.row(0).unwrap(), &[None; 4]);
        assert_eq!(board.get(1, 1), Some(Some(PieceKind::T)));
        assert_eq!(board.get(2, 2), Some(Some(PieceKind::S)));
        assert!(!board.is_row_full(2));
    }

    #[test]
    fn test_clear_lines_rescans_same_index() {
        let mut board = Board::new(3, 5);
        // Two adjacent full rows: after the bottom one goes, the upper one
        // slides into the same index and must be caught too.
        board.fill_row(3, PieceKind::J);
        board.fill_row(4, PieceKind::L);
        board.set(0, 2, Some(PieceKind::O));

        assert_eq!(board.clear_lines(), 2);
        assert_eq!(board.get(0, 4), Some(Some(PieceKind::O)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn test_sides_are_clamped_to_i8_range() {
        let board = Board::new(255, 200);
        assert_eq!(board.width(), MAX_BOARD_SIDE);
        assert_eq!(board.height(), MAX_BOARD_SIDE);
        assert_eq!(board.cells().len(), 127 * 127);

        let last = MAX_BOARD_SIDE as i8 - 1;
        assert!(board.in_bounds(last, last));
        assert!(!board.in_bounds(0, i8::MAX));
    }

    #[test]
    fn test_write_tags() {
        let mut board = Board::new(2, 2);
        board.set(1, 1, Some(PieceKind::Z));
        let mut tags = Vec::new();
        board.write_tags(&mut tags);
        assert_eq!(tags, vec![0, 0, 0, 5]);
    }
}
