//! Game state module - owns the complete game session
//!
//! This module ties together the other core components: deck, matching,
//! clock, and timers. It handles flip sequencing, turn locking, match
//! settlement, move counting, and the elapsed-time clock.
//!
//! All mutation goes through [`GameState::flip`], [`GameState::init`],
//! [`GameState::reset`] and [`GameState::pump`]; everything else is
//! read-only. Illegal flips are silent no-ops rather than errors: the UI
//! simply ignores clicks that change nothing.

use arrayvec::ArrayVec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tui_pairs_types::{GameCommand, GamePhase, Tile, TileId, REVEAL_DELAY_MS, TIMER_TICK_MS};

use crate::clock::{Clock, WallClock};
use crate::deck;
use crate::matching;
use crate::snapshot::GameSnapshot;
use crate::timer::{TimerHandle, TimerQueue};

/// Work the engine schedules against its own timer queue.
///
/// A conceal task carries the session generation it was scheduled under;
/// if the session has been replaced by the time it fires, it must not touch
/// the new one, and the generation check guarantees that even if the queue
/// were not cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerTask {
    /// One elapsed second of play time.
    Tick,
    /// Turn a mismatched pair face-down again and unlock the board.
    ConcealMismatch {
        session_id: u32,
        tiles: [TileId; 2],
    },
}

/// Complete game session state.
///
/// Owned exclusively by its holder; observers read it through
/// [`GameState::snapshot`]. Time enters through the injected clock and is
/// acted on when [`GameState::pump`] is called, so all mutation happens on
/// the caller's thread in the caller's order.
#[derive(Debug)]
pub struct GameState {
    tiles: Vec<Tile>,
    /// Ids flipped in the current turn. Two entries lock the board.
    pending: ArrayVec<TileId, 2>,
    moves: u32,
    phase: GamePhase,
    started_at_ms: Option<u64>,
    elapsed_seconds: u32,
    pair_count: usize,
    /// Session generation; increments on every init/reset.
    session_id: u32,
    /// Monotonic tile id allocator. Never rewinds, so ids are unique across
    /// restarts.
    next_tile_id: u32,
    rng: ChaCha8Rng,
    clock: Box<dyn Clock>,
    timers: TimerQueue<TimerTask>,
    tick_handle: Option<TimerHandle>,
}

impl GameState {
    /// Create an engine on the real clock. The session is empty until
    /// [`GameState::init`] deals a deck.
    pub fn new(seed: u64) -> Self {
        Self::with_clock(seed, Box::new(WallClock::new()))
    }

    /// Create an engine on an injected clock (tests use a virtual one).
    pub fn with_clock(seed: u64, clock: Box<dyn Clock>) -> Self {
        Self {
            tiles: Vec::new(),
            pending: ArrayVec::new(),
            moves: 0,
            phase: GamePhase::Idle,
            started_at_ms: None,
            elapsed_seconds: 0,
            pair_count: 0,
            session_id: 0,
            next_tile_id: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            clock,
            timers: TimerQueue::new(),
            tick_handle: None,
        }
    }

    /// Replace the session with a freshly shuffled deck of `pair_count`
    /// pairs. Valid for any count including zero (an empty board that can
    /// only be left through another init).
    pub fn init(&mut self, pair_count: usize) {
        // Cancel before replace: nothing scheduled against the old session
        // may survive into the new one.
        self.stop_timer();
        self.timers.clear();
        self.session_id = self.session_id.wrapping_add(1);

        self.tiles = deck::generate_tiles(&mut self.rng, pair_count, &mut self.next_tile_id);
        self.pending.clear();
        self.moves = 0;
        self.elapsed_seconds = 0;
        self.phase = GamePhase::Idle;
        self.started_at_ms = None;
        self.pair_count = pair_count;
    }

    /// Deal a new deck with the same pair count as the current session.
    pub fn reset(&mut self) {
        self.init(self.pair_count);
    }

    /// Flip a tile face-up.
    ///
    /// Silently ignored while the board is locked, for ids that do not
    /// resolve, and for tiles already face-up or matched. The first flip of
    /// a session starts the clock.
    pub fn flip(&mut self, id: TileId) {
        if self.pending.is_full() {
            return;
        }
        let Some(idx) = self.index_of(id) else {
            return;
        };
        if self.tiles[idx].revealed || self.tiles[idx].matched {
            return;
        }

        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Playing;
            self.started_at_ms = Some(self.clock.now_ms());
            self.start_timer();
        }

        let tile = &mut self.tiles[idx];
        tile.revealed = true;
        tile.reveal_count += 1;
        self.pending.push(id);

        if self.pending.is_full() {
            self.settle();
        }
    }

    /// Fire every timer whose deadline has passed on the injected clock.
    ///
    /// The runner calls this once per frame; tests call it after advancing
    /// a virtual clock.
    pub fn pump(&mut self) {
        let now = self.clock.now_ms();
        while let Some(task) = self.timers.pop_due(now) {
            match task {
                TimerTask::Tick => self.elapsed_seconds += 1,
                TimerTask::ConcealMismatch { session_id, tiles } => {
                    self.conceal_mismatch(session_id, tiles)
                }
            }
        }
    }

    /// Apply a presentation-layer command.
    pub fn apply(&mut self, command: GameCommand) {
        match command {
            GameCommand::Flip(id) => self.flip(id),
            GameCommand::NewGame { pairs } => self.init(pairs),
            GameCommand::Reset => self.reset(),
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn pending_ids(&self) -> &[TileId] {
        &self.pending
    }

    /// Pairs attempted so far. A turn counts the moment its settlement
    /// begins, not when a delayed conceal completes.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn started_at_ms(&self) -> Option<u64> {
        self.started_at_ms
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    /// Two tiles pending means the board rejects flips until settlement.
    pub fn is_locked(&self) -> bool {
        self.pending.is_full()
    }

    pub fn matched_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.matched).count()
    }

    /// Whether every tile is matched. An empty board is never a victory;
    /// a zero-pair session stays idle until the next init.
    pub fn is_victory(&self) -> bool {
        !self.tiles.is_empty() && self.matched_count() == self.tiles.len()
    }

    /// Copy the observable session into a reusable snapshot.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.tiles.clone_from(&self.tiles);
        out.pending = self.pending.clone();
        out.moves = self.moves;
        out.phase = self.phase;
        out.started_at_ms = self.started_at_ms;
        out.elapsed_seconds = self.elapsed_seconds;
        out.pair_count = self.pair_count;
        out.session_id = self.session_id;
        out.locked = self.is_locked();
        out.matched_count = self.matched_count() as u32;
        out.victory = self.is_victory();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn index_of(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|t| t.id == id)
    }

    /// Resolve the turn once two tiles are pending.
    fn settle(&mut self) {
        debug_assert!(self.pending.is_full(), "settlement without a full turn");
        debug_assert_eq!(
            self.tiles.iter().filter(|t| t.revealed).count(),
            self.pending.len(),
            "revealed tiles drifted from the pending turn"
        );
        let a_id = self.pending[0];
        let b_id = self.pending[1];

        let (Some(a_idx), Some(b_idx)) = (self.index_of(a_id), self.index_of(b_id)) else {
            debug_assert!(false, "pending id does not resolve");
            self.pending.clear();
            return;
        };

        let verdict = matching::evaluate_pair(&self.tiles[a_idx], &self.tiles[b_idx]);
        self.moves += 1;

        if verdict.is_match {
            for idx in [a_idx, b_idx] {
                let tile = &mut self.tiles[idx];
                tile.matched = true;
                tile.revealed = false;
            }
            self.pending.clear();

            if self.is_victory() {
                self.phase = GamePhase::Won;
                self.stop_timer();
            }
        } else {
            // Keep both face-up for the reveal window. The board stays
            // locked (pending full) until the conceal task fires.
            let now = self.clock.now_ms();
            self.timers.schedule(
                now,
                REVEAL_DELAY_MS,
                TimerTask::ConcealMismatch {
                    session_id: self.session_id,
                    tiles: [a_id, b_id],
                },
            );
        }
    }

    /// Delayed half of a mismatch settlement.
    fn conceal_mismatch(&mut self, session_id: u32, ids: [TileId; 2]) {
        if session_id != self.session_id {
            // Scheduled against a session that has since been replaced.
            return;
        }
        for tile in &mut self.tiles {
            if tile.id == ids[0] || tile.id == ids[1] {
                tile.revealed = false;
            }
        }
        self.pending.clear();
    }

    /// Start the elapsed-seconds tick stream. Starting while running is a
    /// no-op; there is never a second concurrent stream.
    fn start_timer(&mut self) {
        if self.tick_handle.is_some() {
            return;
        }
        let now = self.clock.now_ms();
        self.tick_handle = Some(
            self.timers
                .schedule_repeating(now, TIMER_TICK_MS, TimerTask::Tick),
        );
    }

    /// Stop the tick stream. Idempotent; once this returns no further tick
    /// can be observed.
    fn stop_timer(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            self.timers.cancel(handle);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
