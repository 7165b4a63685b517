//! Terminal tetrimino player (default binary).
//!
//! A single-threaded loop owns the game: it renders, waits for a key until the
//! next gravity tick is due, applies the key's action, then runs the tick.
//! Input and gravity are therefore never interleaved inside one engine call.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use tui_tetrimino::config::Config;
use tui_tetrimino::core::{Game, GameOver, GameSnapshot, PieceSource, StepOutcome};
use tui_tetrimino::input::{handle_key_event, should_quit};
use tui_tetrimino::logging;
use tui_tetrimino::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_tetrimino::types::PieceChoice;

/// How a session ended
enum Ending {
    Quit,
    GameOver(GameOver),
}

fn main() -> Result<()> {
    let config = Config::from_env();
    if let Some(path) = &config.log_file {
        logging::init_file_log(path, config.log_level)?;
    }

    let source = match config.seed {
        Some(seed) => PieceSource::new(seed),
        None => PieceSource::from_entropy(),
    };
    let mut game = Game::with_source(source);

    let mut term = TerminalRenderer::new();
    if let Err(e) = term.enter() {
        let _ = term.exit();
        return Err(e);
    }

    let result = run(&mut term, &mut game, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        Ending::Quit => info!("quit after {} pieces", game.pieces_spawned()),
        Ending::GameOver(over) => {
            println!("{over}");
            println!("pieces: {}  seed: {}", game.pieces_spawned(), game.seed());
        }
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut Game, config: &Config) -> Result<Ending> {
    let first = config
        .first_piece
        .map_or(PieceChoice::Random, PieceChoice::Kind);
    info!("session start: seed {}, tick {:?}", game.seed(), config.tick);
    if let Err(over) = game.spawn_next(first) {
        return Ok(Ending::GameOver(over));
    }

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut last_tick = Instant::now();

    loop {
        draw(term, &view, game, &mut snap, &mut fb)?;

        let timeout = config.tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(Ending::Quit);
                    }
                    match handle_key_event(key) {
                        Some(action) => {
                            debug!("key {:?} -> {}", key.code, action.as_str());
                            match game.apply(action) {
                                Ok(StepOutcome::Landed { cleared }) if !cleared.is_empty() => {
                                    info!("cleared {} row(s)", cleared.len());
                                }
                                Ok(_) => {}
                                Err(over) => return finish(term, &view, game, over),
                            }
                        }
                        None => debug!("unmapped key {:?}", key.code),
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= config.tick {
            last_tick = Instant::now();
            match game.tick() {
                Ok(StepOutcome::Landed { cleared }) if !cleared.is_empty() => {
                    info!("cleared {} row(s)", cleared.len());
                }
                Ok(_) => {}
                Err(over) => return finish(term, &view, game, over),
            }
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    game: &Game,
    snap: &mut GameSnapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    game.snapshot_into(snap);
    view.render_into(snap, Viewport::new(w, h), fb);
    term.draw(fb)
}

/// Show the final field with the game-over banner until a key is pressed.
fn finish(
    term: &mut TerminalRenderer,
    view: &GameView,
    game: &Game,
    over: GameOver,
) -> Result<Ending> {
    info!("{over}");
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    draw(term, view, game, &mut snap, &mut fb)?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => break,
            Event::Resize(..) => {
                term.invalidate();
                draw(term, view, game, &mut snap, &mut fb)?;
            }
            _ => {}
        }
    }
    Ok(Ending::GameOver(over))
}
