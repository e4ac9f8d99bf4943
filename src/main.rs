//! Terminal memory game runner (default binary).
//!
//! Prompts for credentials on the plain terminal, then switches to raw mode
//! and runs the frame loop: pump the engine's timers, render a snapshot,
//! and dispatch key events.

use std::io::{self, BufRead, Write};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_pairs::auth::AuthService;
use tui_pairs::core::{GameSnapshot, GameState};
use tui_pairs::input::{handle_key_event, should_quit, BoardAction, GridCursor};
use tui_pairs::term::{GameView, TerminalRenderer, Viewport};
use tui_pairs::types::{GameCommand, DEFAULT_PAIR_COUNT, GRID_COLUMNS};

/// Input poll timeout per frame; timer deadlines are pumped at least this often.
const FRAME_POLL_MS: u64 = 50;

fn main() -> Result<()> {
    let mut auth = AuthService::with_demo_users();
    println!("tui-pairs - log in to play (demo: player1/pass1 or player2/pass2)");
    if !login_prompt(&mut auth)? {
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Read credentials from stdin until the gate opens. Returns false on EOF.
fn login_prompt(auth: &mut AuthService) -> Result<bool> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("username: ");
        io::stdout().flush()?;
        let Some(username) = lines.next().transpose()? else {
            return Ok(false);
        };

        print!("password: ");
        io::stdout().flush()?;
        let Some(password) = lines.next().transpose()? else {
            return Ok(false);
        };

        if auth.login(username.trim(), password.trim()) {
            return Ok(true);
        }
        println!("invalid username or password");
    }
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(wall_seed());
    game.init(DEFAULT_PAIR_COUNT);

    let view = GameView::default();
    let mut cursor = GridCursor::new(game.tiles().len(), GRID_COLUMNS);
    let mut snap = GameSnapshot::default();

    loop {
        game.pump();
        game.snapshot_into(&mut snap);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snap, Some(cursor.index()), Viewport::new(w, h));
        term.draw(&fb)?;

        if !event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                match action {
                    BoardAction::CursorUp => cursor.move_up(),
                    BoardAction::CursorDown => cursor.move_down(),
                    BoardAction::CursorLeft => cursor.move_left(),
                    BoardAction::CursorRight => cursor.move_right(),
                    BoardAction::Flip => {
                        if let Some(tile) = snap.tiles.get(cursor.index()) {
                            game.apply(GameCommand::Flip(tile.id));
                        }
                    }
                    BoardAction::NewGame => {
                        game.apply(GameCommand::NewGame {
                            pairs: DEFAULT_PAIR_COUNT,
                        });
                        cursor.reset(game.tiles().len());
                    }
                    BoardAction::Reset => {
                        game.apply(GameCommand::Reset);
                        cursor.reset(game.tiles().len());
                    }
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

/// Seed the deck from wall time so every launch deals differently.
fn wall_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1)
}
