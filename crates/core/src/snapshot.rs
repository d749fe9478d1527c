use arrayvec::ArrayVec;

use crate::pieces::{Piece, MAX_SHAPE_SIZE};
use crate::types::{GameStatus, PieceKind};

/// Falling piece as the renderer sees it: kind plus board coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub cells: ArrayVec<(i8, i8), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            cells: value.cells().iter().map(|&(x, y, _)| (x, y)).collect(),
        }
    }
}

/// Read-only view of a game for rendering.
///
/// `board` holds the cell tags row-major (0 empty, 1-7 piece kinds).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    pub board: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub status: GameStatus,
    pub score: u32,
    pub lines: u32,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    /// Tag at (x, y); 0 outside the board
    pub fn tag_at(&self, x: usize, y: usize) -> u8 {
        if x >= self.width as usize || y >= self.height as usize {
            return 0;
        }
        self.board
            .get(y * self.width as usize + x)
            .copied()
            .unwrap_or(0)
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }
}
