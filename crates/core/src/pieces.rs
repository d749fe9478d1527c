//! Pieces module - tetromino shape templates, rotation and the falling piece
//!
//! A shape is a small grid of cells in its own local frame. Rotation turns
//! the grid 90° clockwise inside its bounding box (transpose, then reverse
//! each row). The pivot is the top-left of the box and no kick offset is
//! applied, so some rotations appear to jump sideways.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind};

/// Largest side of any shape bounding box (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Local (col, row) offset of an occupied shape cell
pub type MinoOffset = (i8, i8);

/// Occupied offsets of a shape; a 4x4 box holds at most 16
pub type Minos = ArrayVec<MinoOffset, { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Grid of cells describing one orientation of a piece.
///
/// Backed by a fixed 4x4 array so copies are cheap and never share storage
/// with the template they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from rows of occupancy flags, filled with `kind`.
    ///
    /// Rows must be non-empty, equally long and at most 4x4.
    pub fn from_rows(kind: PieceKind, rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        assert!(height > 0 && height <= MAX_SHAPE_SIZE, "shape height {height}");
        assert!(width > 0 && width <= MAX_SHAPE_SIZE, "shape width {width}");

        let mut cells = [[None; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "ragged shape row {r}");
            for (c, &filled) in row.iter().enumerate() {
                if filled != 0 {
                    cells[r][c] = Some(kind);
                }
            }
        }

        Self {
            width: width as u8,
            height: height as u8,
            cells,
        }
    }

    /// Spawn orientation template for a piece kind
    pub fn template(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(
                kind,
                &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]],
            ),
            PieceKind::O => Self::from_rows(kind, &[&[1, 1], &[1, 1]]),
            PieceKind::T => Self::from_rows(kind, &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::S => Self::from_rows(kind, &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
            PieceKind::Z => Self::from_rows(kind, &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
            PieceKind::J => Self::from_rows(kind, &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::L => Self::from_rows(kind, &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
        }
    }

    /// Columns in the bounding box
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Rows in the bounding box
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at local (col, row); `None` outside the box
    pub fn get(&self, col: usize, row: usize) -> Cell {
        if col >= self.width as usize || row >= self.height as usize {
            return None;
        }
        self.cells[row][col]
    }

    /// Rotate 90° clockwise: transpose, then reverse each resulting row.
    ///
    /// A `w x h` shape becomes `h x w`; `out[r][c] = in[h - 1 - c][r]`.
    pub fn rotated_clockwise(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut cells = [[None; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, out_row) in cells.iter_mut().enumerate().take(w) {
            for (c, out) in out_row.iter_mut().enumerate().take(h) {
                *out = self.cells[h - 1 - c][r];
            }
        }

        Self {
            width: h as u8,
            height: w as u8,
            cells,
        }
    }

    /// Local offsets of the occupied cells, row by row
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for row in 0..self.height as usize {
            for col in 0..self.width as usize {
                if self.cells[row][col].is_some() {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }
}

/// The falling piece: an owned shape plus the board position of its local origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// New piece of `kind`, horizontally centered and top-aligned.
    ///
    /// `x = floor(board_width / 2) - floor(shape_width / 2)`, `y = 0`.
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let shape = Shape::template(kind);
        Self {
            kind,
            shape,
            x: (board_width / 2) as i8 - (shape.width() / 2) as i8,
            y: 0,
        }
    }

    /// Position after moving by (dx, dy); does not check validity
    pub fn translated(&self, dx: i8, dy: i8) -> (i8, i8) {
        (self.x + dx, self.y + dy)
    }

    /// Shape after a clockwise rotation; does not check validity
    pub fn rotated_clockwise(&self) -> Shape {
        self.shape.rotated_clockwise()
    }

    /// Board coordinates of every occupied cell, tagged with the piece kind
    pub fn cells(&self) -> ArrayVec<(i8, i8, PieceKind), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }> {
        self.shape
            .minos()
            .iter()
            .map(|&(dx, dy)| (self.x + dx, self.y + dy, self.kind))
            .collect()
    }
}
