//! Frame driver: owns the single game instance and routes input, time and
//! score updates to it.
//!
//! There is exactly one `GameState` per `App`. Restarting re-initializes that
//! state in place (board, score, drop clock), so no earlier loop can keep
//! mutating it.

use crossterm::event::KeyEvent;
use tracing::{debug, info};

use crate::config::Config;
use crate::core::{GameSnapshot, GameState};
use crate::input::{handle_key_event, should_quit};
use crate::term::{FrameBuffer, GameView, Viewport};
use crate::types::{GameAction, GameStatus, LockEvent};

/// Notified with the new score after every lock that cleared lines.
pub trait ScoreObserver {
    fn score_changed(&mut self, event: &LockEvent);
}

impl<F: FnMut(&LockEvent)> ScoreObserver for F {
    fn score_changed(&mut self, event: &LockEvent) {
        self(event)
    }
}

/// Default observer: records clears in the log.
#[derive(Debug, Default)]
pub struct LogScore;

impl ScoreObserver for LogScore {
    fn score_changed(&mut self, event: &LockEvent) {
        info!(
            score = event.score,
            lines = event.lines_cleared,
            points = event.score_delta,
            "score updated"
        );
    }
}

pub struct App {
    game: GameState,
    snapshot: GameSnapshot,
    observer: Box<dyn ScoreObserver>,
    quit: bool,
}

impl App {
    /// Idle game built from `config`; the player starts it with Restart.
    pub fn new(config: &Config) -> Self {
        let game = GameState::with_board_size(config.width, config.height, config.resolved_seed())
            .with_drop_interval(config.drop_ms);
        Self::from_game(game)
    }

    pub fn from_game(game: GameState) -> Self {
        Self {
            game,
            snapshot: GameSnapshot::default(),
            observer: Box::new(LogScore),
            quit: false,
        }
    }

    pub fn with_observer(mut self, observer: impl ScoreObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press. Returns true if the game state changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if should_quit(key) {
            info!(score = self.game.score(), "quit requested");
            self.quit = true;
            return false;
        }

        match handle_key_event(key) {
            Some(action) => self.apply(action),
            None => false,
        }
    }

    /// Apply an intent. Movement is only accepted while running; Restart
    /// works from any state.
    pub fn apply(&mut self, action: GameAction) -> bool {
        if action != GameAction::Restart && self.game.status() != GameStatus::Running {
            return false;
        }

        let changed = self.game.apply_action(action);
        debug!(action = action.as_str(), changed, "applied action");
        self.flush_events();
        changed
    }

    /// Advance time by one frame. Returns true if a gravity step ran.
    pub fn on_frame(&mut self, elapsed_ms: u32) -> bool {
        let stepped = self.game.advance(elapsed_ms);
        self.flush_events();
        stepped
    }

    /// Render the current state into `fb`.
    pub fn render_into(&mut self, view: &GameView, viewport: Viewport, fb: &mut FrameBuffer) {
        self.game.snapshot_into(&mut self.snapshot);
        view.render_into(&self.snapshot, viewport, fb);
    }

    fn flush_events(&mut self) {
        if let Some(event) = self.game.take_last_event() {
            if event.lines_cleared > 0 {
                self.observer.score_changed(&event);
            }
        }
    }
}
