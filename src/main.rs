//! Blockfall terminal runner.
//!
//! Crossterm input, a framebuffer renderer and one game driven at a fixed
//! frame cadence. Gravity is fed the real elapsed time of each frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;
use blockfall::{logging, App, Config};

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    logging::init(&config)?;

    let mut app = App::new(&config);
    info!(
        seed = app.game().seed(),
        width = config.width,
        height = config.height,
        drop_ms = config.drop_ms,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut app));

    // Always try to restore terminal state.
    let restored = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "game loop failed");
    }
    info!(score = app.game().score(), lines = app.game().lines(), "exiting");
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();

    while !app.should_quit() {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(&view, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            app.on_frame(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }

    Ok(())
}
