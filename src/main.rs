//! Terminal 2048 runner (default binary).
//!
//! Blocks on one key event at a time, applies it to the game, redraws, and
//! stops once the game reaches a terminal status. A won or lost board stays
//! on screen until the next key press; the final message is printed after
//! the terminal has been restored.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};

use tui_2048::config::GameConfig;
use tui_2048::core::GameState;
use tui_2048::input::handle_key_event;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameStatus;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;
    log::info!("config: {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let status = result?;
    if let Some(message) = status.message() {
        println!("{}", message);
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<GameStatus> {
    let mut game = GameState::new(config.seed).with_undo(config.undo);
    game.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let status = game.status();
        if status.is_terminal() {
            if holds_final_screen(status) {
                wait_for_key()?;
            }
            return Ok(status);
        }

        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = handle_key_event(key) {
                    game.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

/// Won and lost boards stay up with their overlay; quitting leaves at once.
fn holds_final_screen(status: GameStatus) -> bool {
    matches!(status, GameStatus::Won | GameStatus::Lost)
}

/// Keep the final board on screen until the player presses a key.
fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// The game owns the screen, so logs go to a file or nowhere.
fn init_logging(config: &GameConfig) -> Result<()> {
    let mut builder = match &config.log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path))?;
            let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => env_logger::Builder::from_env(Env::default().default_filter_or("off")),
    };
    builder.try_init()?;
    Ok(())
}
