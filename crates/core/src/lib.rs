//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole memory-game rule set and state machine.
//! It has no dependencies on UI, networking, or wall-clock waits, making it:
//!
//! - **Deterministic**: the same seed deals the same decks, and time is
//!   injected, so whole games replay exactly
//! - **Testable**: the mismatch delay and the elapsed-time ticks run against
//!   a virtual clock in tests
//! - **Portable**: can run under any front-end that forwards flips and reads
//!   snapshots
//!
//! # Module Structure
//!
//! - [`shuffle`]: unbiased Fisher-Yates permutation
//! - [`deck`]: paired-tile deck generation (two tiles per `"pair-{i}"` key)
//! - [`matching`]: pure match verdict over the two tiles of a turn
//! - [`clock`]: injectable time source (wall clock and virtual test clock)
//! - [`timer`]: deadline queue for the tick stream and the conceal delay
//! - [`game_state`]: the engine owning the session and its operations
//! - [`snapshot`]: owned copies of the observable session
//!
//! # Game Rules
//!
//! - A turn is two flips; two pending tiles lock the board
//! - Matching tiles settle immediately; a mismatch stays face-up for one
//!   second, then both turn back down and the board unlocks
//! - A move is counted when a turn settles, matched or not
//! - The clock starts on the first flip and stops on victory or restart
//! - Illegal flips (locked board, unknown id, tile already face-up or
//!   matched) are silently ignored
//!
//! # Example
//!
//! ```
//! use tui_pairs_core::clock::VirtualClock;
//! use tui_pairs_core::GameState;
//! use tui_pairs_types::GamePhase;
//!
//! let clock = VirtualClock::new();
//! let mut game = GameState::with_clock(12345, Box::new(clock.clone()));
//! game.init(2);
//! assert_eq!(game.tiles().len(), 4);
//!
//! let first = game.tiles()[0].id;
//! game.flip(first);
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! clock.advance_ms(2000);
//! game.pump();
//! assert_eq!(game.elapsed_seconds(), 2);
//! ```

pub mod clock;
pub mod deck;
pub mod game_state;
pub mod matching;
pub mod shuffle;
pub mod snapshot;
pub mod timer;

pub use tui_pairs_types as types;

// Re-export commonly used items for convenience
pub use clock::{Clock, VirtualClock, WallClock};
pub use deck::generate_tiles;
pub use game_state::GameState;
pub use matching::{evaluate_pair, MatchVerdict};
pub use shuffle::{shuffle_in_place, shuffled};
pub use snapshot::GameSnapshot;
pub use timer::{TimerHandle, TimerQueue};
