//! Deck and shuffle property tests through the facade.

use std::collections::{HashMap, HashSet};

use tui_pairs::core::GameState;

#[test]
fn test_every_deck_size_has_complete_pairs() {
    for pairs in 1..=12usize {
        let mut game = GameState::new(pairs as u64);
        game.init(pairs);

        assert_eq!(game.tiles().len(), pairs * 2);

        let mut counts: HashMap<String, usize> = HashMap::new();
        for tile in game.tiles() {
            *counts.entry(tile.pair_key.clone()).or_default() += 1;
        }
        assert_eq!(counts.len(), pairs);
        assert!(counts.values().all(|&c| c == 2), "pairs of {pairs}");
    }
}

#[test]
fn test_ids_unique_within_and_across_sessions() {
    let mut game = GameState::new(99);
    let mut seen = HashSet::new();

    for _ in 0..5 {
        game.init(6);
        for tile in game.tiles() {
            assert!(seen.insert(tile.id), "id {:?} reused", tile.id);
        }
    }
    assert_eq!(seen.len(), 5 * 12);
}

#[test]
fn test_same_seed_deals_identical_decks() {
    let mut game1 = GameState::new(7);
    let mut game2 = GameState::new(7);
    game1.init(8);
    game2.init(8);

    assert_eq!(game1.tiles(), game2.tiles());
}

#[test]
fn test_different_seeds_eventually_differ() {
    // Orders are random, so compare the pair-key sequence across seeds; at
    // least one of a handful of seeds must disagree with seed 1.
    let mut base = GameState::new(1);
    base.init(8);
    let base_keys: Vec<_> = base.tiles().iter().map(|t| t.pair_key.clone()).collect();

    let mut any_differs = false;
    for seed in 2..8u64 {
        let mut other = GameState::new(seed);
        other.init(8);
        let keys: Vec<_> = other.tiles().iter().map(|t| t.pair_key.clone()).collect();
        if keys != base_keys {
            any_differs = true;
            break;
        }
    }
    assert!(any_differs);
}

#[test]
fn test_deck_is_dealt_face_down() {
    let mut game = GameState::new(3);
    game.init(10);

    for tile in game.tiles() {
        assert!(!tile.revealed);
        assert!(!tile.matched);
        assert_eq!(tile.reveal_count, 0);
    }
}
