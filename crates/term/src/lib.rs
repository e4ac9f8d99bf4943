//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: the game view draws snapshots into
//! a plain framebuffer of styled cells, and the renderer flushes framebuffers
//! to the terminal (raw mode + alternate screen), re-encoding only what
//! changed between frames.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pairs_core as core;
pub use tui_pairs_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{format_elapsed, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
