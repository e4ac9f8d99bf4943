//! Key mapping from terminal events to board actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the player asked the board to do.
///
/// Cursor movement is a presentation concern; only `Flip`, `NewGame` and
/// `Reset` reach the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Flip the tile under the cursor
    Flip,
    /// Deal a fresh deck
    NewGame,
    /// Replay with the same pair count
    Reset,
}

/// Map keyboard input to board actions.
pub fn handle_key_event(key: KeyEvent) -> Option<BoardAction> {
    match key.code {
        // Cursor movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(BoardAction::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(BoardAction::CursorDown)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(BoardAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(BoardAction::CursorRight)
        }

        // Flip the selected tile
        KeyCode::Enter | KeyCode::Char(' ') => Some(BoardAction::Flip),

        // Session control
        KeyCode::Char('n') | KeyCode::Char('N') => Some(BoardAction::NewGame),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(BoardAction::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
