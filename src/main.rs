//! Terminal runner (default binary).
//!
//! Loads the save, then drives a [`Session`] from a crossterm event loop:
//! one render per frame, key presses dispatched as they arrive, gravity from
//! the session's scheduler. The game is saved on game over and on exit.

use std::fs::File;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use blockfall::cli::Args;
use blockfall::core::{Clock, GameState, MonotonicClock, Session, Settings};
use blockfall::input::{map_key, should_quit};
use blockfall::store::SaveStore;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, FRAME_MS};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let store = if args.no_save {
        None
    } else {
        Some(SaveStore::new(args.save.clone().unwrap_or_else(SaveStore::default_path)))
    };
    let seed = args.seed.unwrap_or_else(time_seed);
    info!("seed {seed}");

    let mut state = match &store {
        Some(store) => store.load_or_default(seed),
        None => GameState::new(seed, Settings::default()),
    };
    if let Some(theme) = args.theme {
        state = choose_theme(state, theme.into());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, state, store.as_ref());

    // Always try to restore terminal state.
    let _ = term.exit();
    let state = result?;

    if let Some(store) = &store {
        store
            .save(&state.snapshot())
            .with_context(|| format!("saving to {}", store.path().display()))?;
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, state: GameState, store: Option<&SaveStore>) -> Result<GameState> {
    let clock = MonotonicClock::new();
    let mut session = Session::new(state);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut saved_game_over = false;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session.state(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(session.into_state());
                    }
                    if let Some(action) = map_key(&session.state().settings().key_bindings, key) {
                        let now = clock.now_ms();
                        session.dispatch(action, now);
                        // Reset lands on a not-started game; go straight into the next one.
                        if action == GameAction::Reset {
                            session.dispatch(GameAction::Start, now);
                            saved_game_over = false;
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        session.frame(clock.now_ms());

        if session.state().game_over() && !saved_game_over {
            saved_game_over = true;
            info!("final score {}", session.state().stats().score);
            if let Some(store) = store {
                if let Err(e) = store.save(&session.state().snapshot()) {
                    warn!("could not save: {e:#}");
                }
            }
        }
    }
}

/// Apply a theme from the command line if the player owns it.
fn choose_theme(state: GameState, theme: blockfall::core::Theme) -> GameState {
    let owned = theme
        .unlocked_by()
        .map_or(true, |item| state.stats().owned(item) > 0);
    if !owned {
        warn!("theme {theme:?} is locked; buy it in the shop first");
        return state;
    }
    let mut settings = state.settings().clone();
    settings.theme = theme;
    state.with_settings(settings)
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_module_path(false)
        .init();
    Ok(())
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}
