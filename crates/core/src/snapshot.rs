//! Snapshot of the observable game session.
//!
//! Observers (the terminal view, tests) never hold references into the
//! engine; they read owned snapshots, so every state transition they see is
//! atomic. `GameState::snapshot_into` refills an existing snapshot to keep
//! the per-frame path allocation-light.

use arrayvec::ArrayVec;
use tui_pairs_types::{GamePhase, Tile, TileId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Tiles in board order.
    pub tiles: Vec<Tile>,
    /// Ids flipped in the current turn (0, 1, or 2).
    pub pending: ArrayVec<TileId, 2>,
    pub moves: u32,
    pub phase: GamePhase,
    pub started_at_ms: Option<u64>,
    pub elapsed_seconds: u32,
    pub pair_count: usize,
    pub session_id: u32,
    /// Two tiles pending: flips are rejected until settlement.
    pub locked: bool,
    pub matched_count: u32,
    pub victory: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            tiles: Vec::new(),
            pending: ArrayVec::new(),
            moves: 0,
            phase: GamePhase::Idle,
            started_at_ms: None,
            elapsed_seconds: 0,
            pair_count: 0,
            session_id: 0,
            locked: false,
            matched_count: 0,
            victory: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_an_empty_idle_session() {
        let snap = GameSnapshot::default();

        assert!(snap.tiles.is_empty());
        assert!(snap.pending.is_empty());
        assert_eq!(snap.phase, GamePhase::Idle);
        assert!(!snap.locked);
        assert!(!snap.victory);
    }
}
