//! Game state module - the game controller
//!
//! Owns the board, the falling piece, the score and the drop clock, and runs
//! the spawn → fall → lock → clear → respawn cycle. Every mutating operation
//! is a no-op unless the game is running, except [`GameState::start`], which
//! re-initializes from any state.

use tracing::{debug, info};

use crate::board::Board;
use crate::clock::DropClock;
use crate::pieces::Piece;
use crate::placement::is_valid_placement;
use crate::rng::PieceGenerator;
use crate::scoring::clear_lines;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    generator: PieceGenerator,
    clock: DropClock,
    status: GameStatus,
    score: u32,
    /// Total rows cleared this game.
    lines: u32,
    /// Monotonic game counter (increments on every start).
    episode_id: u32,
    /// Last lock event (consumed by the score observer).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create an idle 10x20 game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board_size(BOARD_WIDTH, BOARD_HEIGHT, seed)
    }

    /// Create an idle game on a `width x height` board
    pub fn with_board_size(width: u8, height: u8, seed: u32) -> Self {
        Self {
            board: Board::new(width, height),
            active: None,
            generator: PieceGenerator::new(seed),
            clock: DropClock::new(BASE_DROP_MS),
            status: GameStatus::Idle,
            score: 0,
            lines: 0,
            episode_id: 0,
            last_event: None,
        }
    }

    /// Use a different gravity interval
    pub fn with_drop_interval(mut self, interval_ms: u32) -> Self {
        self.clock = DropClock::new(interval_ms);
        self
    }

    /// Reset the board, score and drop clock, spawn the first piece and run.
    pub fn start(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.last_event = None;
        self.clock.reset();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.status = GameStatus::Running;

        info!(
            episode = self.episode_id,
            width = self.board.width(),
            height = self.board.height(),
            "game started"
        );

        self.spawn_piece();
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.clock.interval_ms()
    }

    pub fn drop_clock(&self) -> &DropClock {
        &self.clock
    }

    /// Spawn a random piece
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.generator.next_kind();
        self.spawn_piece_of(kind)
    }

    /// Replace the falling piece with a fresh `kind` at the spawn position.
    ///
    /// If the spawn position is already blocked the game ends.
    pub fn spawn_piece_of(&mut self, kind: PieceKind) -> bool {
        if !self.is_running() {
            return false;
        }

        let piece = Piece::spawn(kind, self.board.width());
        if !is_valid_placement(&self.board, &piece.shape, piece.x, piece.y) {
            self.active = None;
            self.status = GameStatus::GameOver;
            info!(kind = kind.as_str(), score = self.score, "spawn blocked, game over");
            return false;
        }

        debug!(kind = kind.as_str(), x = piece.x, y = piece.y, "spawned piece");
        self.active = Some(piece);
        true
    }

    /// Try to move the falling piece by (dx, dy)
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let (x, y) = active.translated(dx, dy);
        if !is_valid_placement(&self.board, &active.shape, x, y) {
            return false;
        }

        self.active = Some(Piece { x, y, ..active });
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Move the piece down one row.
    ///
    /// On success the drop clock restarts. A blocked soft drop locks the
    /// piece immediately.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        if self.try_move(0, 1) {
            self.clock.reset();
            true
        } else {
            self.lock();
            false
        }
    }

    /// Rotate clockwise in place; rejected (and unchanged) if it would collide.
    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let shape = active.rotated_clockwise();
        if !is_valid_placement(&self.board, &shape, active.x, active.y) {
            return false;
        }

        self.active = Some(Piece { shape, ..active });
        true
    }

    /// Gravity step: move down one row, or lock if blocked.
    ///
    /// Returns true if the piece moved.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        if self.try_move(0, 1) {
            return true;
        }

        self.lock();
        false
    }

    /// Feed elapsed frame time; runs a gravity step when the clock fires.
    ///
    /// Returns true if a gravity step ran.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_running() {
            return false;
        }

        if self.clock.advance(elapsed_ms) {
            self.tick();
            return true;
        }

        false
    }

    /// Write the falling piece into the board, clear lines and respawn.
    ///
    /// A piece with any cell above the top edge ends the game instead, and
    /// nothing is written. Pieces spawn at y = 0 and never move up, so in play
    /// the game ends through a blocked spawn; this branch guards direct callers.
    pub fn lock(&mut self) {
        if !self.is_running() {
            return;
        }
        let Some(active) = self.active.take() else {
            return;
        };

        let cells = active.cells();
        if cells.iter().any(|&(_, y, _)| y < 0) {
            self.status = GameStatus::GameOver;
            info!(score = self.score, lines = self.lines, "locked above top, game over");
            return;
        }

        self.board.lock_cells(&cells);
        debug!(kind = active.kind.as_str(), x = active.x, y = active.y, "locked piece");

        let cleared = clear_lines(&mut self.board);
        if cleared.lines > 0 {
            self.lines += cleared.lines;
            self.score = self.score.saturating_add(cleared.score_delta);
            info!(
                lines = cleared.lines,
                points = cleared.score_delta,
                score = self.score,
                "cleared lines"
            );
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared.lines,
            score_delta: cleared.score_delta,
            score: self.score,
        });

        self.spawn_piece();
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => {
                self.start();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_tags(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.status = self.status;
        out.score = self.score;
        out.lines = self.lines;
        out.episode_id = self.episode_id;
        out.seed = self.generator.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
