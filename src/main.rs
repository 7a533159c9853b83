//! Terminal Boulder runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input
//! and a framebuffer-based diff renderer, and drives the engine on a
//! fixed 16ms timestep. Input events are applied between ticks, never
//! inside one.
//!
//! Levels come from the embedded built-in set by default; pass a
//! directory argument or set `BOULDER_LEVELS` to play external
//! `<n>.lvl` files.

use std::env;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_boulder::core::{GameState, LevelStore};
use tui_boulder::input::{handle_key_event, should_quit};
use tui_boulder::term::{GameView, TerminalRenderer, Viewport};
use tui_boulder::types::{Command, TICK_MS};

fn main() -> Result<()> {
    env_logger::init();

    let store = match level_dir() {
        Some(dir) => {
            log::info!("using level directory {}", dir);
            LevelStore::from_dir(dir)
        }
        None => LevelStore::builtin(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, store);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn level_dir() -> Option<String> {
    env::args().nth(1).or_else(|| env::var("BOULDER_LEVELS").ok())
}

fn run(term: &mut TerminalRenderer, store: LevelStore) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game_state = GameState::new(store, seed);
    game_state.start().context("loading the first level")?;

    let view = GameView::default();
    let mut fb = tui_boulder::term::FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game_state.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Sound: a pending event becomes one terminal bell.
        if game_state.take_sound().is_some() && game_state.sound_enabled() {
            let _ = term.bell();
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(cmd) = handle_key_event(key) {
                        if cmd == Command::Quit {
                            return Ok(());
                        }
                        game_state.apply_command(cmd);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game_state.tick();

            if let Some(e) = game_state.fatal_error() {
                return Err(anyhow::anyhow!("level data unavailable: {}", e));
            }
        }
    }
}
