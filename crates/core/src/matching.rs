//! Matching module - decides whether two flipped tiles form a pair
//!
//! Pure predicate over the two tiles of a completed turn. The engine applies
//! the resulting settlement; nothing here mutates.

use tui_pairs_types::Tile;

/// Verdict produced by comparing the two tiles of a completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchVerdict {
    pub is_match: bool,
}

/// Compare two distinct tiles by pair key.
///
/// Feeding the same tile twice is a caller bug, not a game state.
pub fn evaluate_pair(a: &Tile, b: &Tile) -> MatchVerdict {
    debug_assert_ne!(a.id, b.id, "evaluated a tile against itself");
    MatchVerdict {
        is_match: a.pair_key == b.pair_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_pairs_types::TileId;

    fn tile(id: u32, pair_key: &str) -> Tile {
        Tile::new(TileId::new(id), pair_key.to_string())
    }

    #[test]
    fn test_same_pair_key_matches() {
        let a = tile(0, "pair-3");
        let b = tile(1, "pair-3");
        assert!(evaluate_pair(&a, &b).is_match);
    }

    #[test]
    fn test_different_pair_keys_do_not_match() {
        let a = tile(0, "pair-0");
        let b = tile(1, "pair-1");
        assert!(!evaluate_pair(&a, &b).is_match);
    }

    #[test]
    fn test_evaluation_ignores_flip_state() {
        let mut a = tile(0, "pair-2");
        let mut b = tile(1, "pair-2");
        a.revealed = true;
        a.reveal_count = 3;
        b.matched = true;

        assert!(evaluate_pair(&a, &b).is_match);
    }

    #[test]
    fn test_evaluation_is_symmetric() {
        let a = tile(0, "pair-0");
        let b = tile(1, "pair-1");
        assert_eq!(evaluate_pair(&a, &b), evaluate_pair(&b, &a));
    }
}
