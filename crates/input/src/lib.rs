//! Terminal input module.
//!
//! Maps `crossterm` key events into [`BoardAction`]s and tracks the keyboard
//! cursor over the tile grid. Independent of the engine: the binary turns
//! `Flip` plus the cursor position into an actual tile id.

pub mod cursor;
pub mod map;

pub use cursor::GridCursor;
pub use map::{handle_key_event, should_quit, BoardAction};
