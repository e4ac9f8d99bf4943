//! Terminal memory matching game (workspace facade crate).
//!
//! This package keeps a single `tui_pairs::{auth,core,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_pairs_auth as auth;
pub use tui_pairs_core as core;
pub use tui_pairs_input as input;
pub use tui_pairs_term as term;
pub use tui_pairs_types as types;
