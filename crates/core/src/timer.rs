//! Timer module - deadline queue for one-shot and repeating tasks
//!
//! The engine schedules tasks against a [`Clock`](crate::clock::Clock)
//! reading and drains them by pumping [`TimerQueue::pop_due`]. Nothing fires
//! spontaneously: a task can only be observed between a deadline passing and
//! the next pump, and a cancelled task can never be observed at all. That is
//! what keeps every session mutation on one logical thread.

/// Identifies a scheduled task so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repeat {
    Once,
    Every(u64),
}

#[derive(Debug)]
struct Entry<T> {
    handle: TimerHandle,
    deadline_ms: u64,
    repeat: Repeat,
    task: T,
}

/// Deadline queue driven by an external clock.
///
/// Kept as a plain vector: the game never holds more than a couple of
/// entries (the elapsed-time tick and at most one pending conceal).
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_handle: u64,
}

impl<T: Clone> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_handle: 1,
        }
    }

    fn push(&mut self, deadline_ms: u64, repeat: Repeat, task: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry {
            handle,
            deadline_ms,
            repeat,
            task,
        });
        handle
    }

    /// Schedule a one-shot task to fire once `delay_ms` has elapsed.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, task: T) -> TimerHandle {
        self.push(now_ms + delay_ms, Repeat::Once, task)
    }

    /// Schedule a task to fire every `interval_ms`, starting one interval
    /// from now. Missed intervals are delivered one by one on the next pump.
    pub fn schedule_repeating(&mut self, now_ms: u64, interval_ms: u64, task: T) -> TimerHandle {
        debug_assert!(interval_ms > 0, "zero-interval repeating timer");
        self.push(now_ms + interval_ms, Repeat::Every(interval_ms), task)
    }

    /// Cancel a scheduled task. Safe to call for a handle that already fired
    /// or was already cancelled; returns whether an entry was removed.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    /// Whether the handle still refers to a queued entry.
    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Drop every queued entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Take the earliest task whose deadline has passed, if any.
    ///
    /// One-shot entries leave the queue; repeating entries re-arm one
    /// interval later, so a large clock jump yields one pop per interval.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<T> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline_ms <= now_ms)
            .min_by_key(|(_, e)| e.deadline_ms)
            .map(|(i, _)| i)?;

        match self.entries[idx].repeat {
            Repeat::Once => Some(self.entries.remove(idx).task),
            Repeat::Every(interval_ms) => {
                let entry = &mut self.entries[idx];
                entry.deadline_ms += interval_ms;
                Some(entry.task.clone())
            }
        }
    }
}

impl<T: Clone> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
