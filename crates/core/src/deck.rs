//! Deck module - builds the shuffled set of paired tiles
//!
//! A deck of `n` pairs holds `2n` tiles: two tiles per `"pair-{i}"` key, all
//! face-down and never flipped. Tile ids come from the caller's allocator so
//! they stay unique across successive decks.

use rand::Rng;
use tui_pairs_types::{Tile, TileId};

use crate::shuffle;

/// Generate a freshly shuffled deck of `pair_count` pairs.
///
/// `next_id` is the engine's id allocator; it is advanced by one per tile
/// created, so a restart can never hand out an id the previous deck used.
pub fn generate_tiles<R: Rng>(rng: &mut R, pair_count: usize, next_id: &mut u32) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(pair_count * 2);

    for i in 0..pair_count {
        let pair_key = format!("pair-{i}");
        for _ in 0..2 {
            let id = TileId::new(*next_id);
            *next_id = next_id.wrapping_add(1);
            tiles.push(Tile::new(id, pair_key.clone()));
        }
    }

    shuffle::shuffle_in_place(rng, &mut tiles);
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_generate_tile_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for pairs in [1usize, 2, 8, 13] {
            let mut next_id = 0;
            let tiles = generate_tiles(&mut rng, pairs, &mut next_id);
            assert_eq!(tiles.len(), pairs * 2);
            assert_eq!(next_id, (pairs * 2) as u32);
        }
    }

    #[test]
    fn test_generate_each_pair_key_twice() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut next_id = 0;
        let tiles = generate_tiles(&mut rng, 8, &mut next_id);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for tile in &tiles {
            *counts.entry(tile.pair_key.as_str()).or_default() += 1;
        }

        assert_eq!(counts.len(), 8);
        for i in 0..8 {
            assert_eq!(counts[format!("pair-{i}").as_str()], 2);
        }
    }

    #[test]
    fn test_generate_unique_ids_across_decks() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut next_id = 0;

        let first = generate_tiles(&mut rng, 4, &mut next_id);
        let second = generate_tiles(&mut rng, 4, &mut next_id);

        let mut ids: HashSet<TileId> = HashSet::new();
        for tile in first.iter().chain(second.iter()) {
            assert!(ids.insert(tile.id), "duplicate id {:?}", tile.id);
        }
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn test_generate_tiles_start_face_down() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut next_id = 0;
        let tiles = generate_tiles(&mut rng, 5, &mut next_id);

        for tile in &tiles {
            assert!(!tile.revealed);
            assert!(!tile.matched);
            assert_eq!(tile.reveal_count, 0);
        }
    }

    #[test]
    fn test_generate_zero_pairs_is_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut next_id = 10;
        let tiles = generate_tiles(&mut rng, 0, &mut next_id);

        assert!(tiles.is_empty());
        assert_eq!(next_id, 10);
    }

    #[test]
    fn test_generate_deterministic_per_seed() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng2 = ChaCha8Rng::seed_from_u64(42);
        let mut ids1 = 0;
        let mut ids2 = 0;

        let deck1 = generate_tiles(&mut rng1, 6, &mut ids1);
        let deck2 = generate_tiles(&mut rng2, 6, &mut ids2);

        assert_eq!(deck1, deck2);
    }
}
