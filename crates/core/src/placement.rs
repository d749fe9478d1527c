//! Placement check shared by gravity, soft drop, horizontal moves and rotation.

use crate::board::Board;
use crate::pieces::Shape;

/// Whether `shape` with its local origin at board (x, y) fits.
///
/// Every occupied cell must be inside the side walls and above the floor.
/// Cells above the top edge (board y < 0) skip the overlap test so pieces can
/// sit partially off the board; cells on the board must land on empty cells.
pub fn is_valid_placement(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    let width = board.width() as i16;
    let height = board.height() as i16;

    shape.minos().iter().all(|&(dx, dy)| {
        let bx = x as i16 + dx as i16;
        let by = y as i16 + dy as i16;

        if bx < 0 || bx >= width || by >= height {
            return false;
        }
        by < 0 || !board.is_occupied(bx as i8, by as i8)
    })
}
