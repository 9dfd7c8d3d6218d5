//! Terminal runner (default binary).
//!
//! Cooperative single-threaded loop: crossterm events are polled with a timeout
//! equal to the time left until the next gravity tick, so key presses and ticks
//! are handled one at a time, each to completion.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::info;

use tui_blockfall::core::{GameLoop, SimpleRng, StepOutcome};
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::{logging, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    config.validate()?;
    logging::init(&config)?;
    info!(
        "starting {}x{} board, tick {}ms, seed {}",
        config.cols, config.rows, config.tick_ms, config.seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = GameLoop::new(config.cols, config.rows, SimpleRng::new(config.seed));
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(config.tick_ms as u64);
    let mut next_tick = Instant::now() + tick;
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(game.state(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit with score {}", game.state().score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let outcome = game.apply(action);
                        log_lock(outcome);
                        dirty |= outcome != StepOutcome::Ignored;
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        if now >= next_tick {
            // Ticks missed while busy are dropped rather than replayed.
            next_tick = now + tick;
            let outcome = game.tick();
            log_lock(outcome);
            dirty |= outcome != StepOutcome::Ignored;
        }
    }
}

fn log_lock(outcome: StepOutcome) {
    if let StepOutcome::Locked(report) = outcome {
        if report.rows_cleared > 0 {
            info!(
                "cleared {} row(s) for {} points",
                report.rows_cleared, report.points
            );
        }
    }
}
