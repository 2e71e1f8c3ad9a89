// src/player/timer.rs
//! Deadline-ordered timers with cancellation handles.
//!
//! Nothing here sleeps: the caller polls `pop_due` with the current instant,
//! which keeps the queue usable from a single-threaded event loop and from
//! tests that feed synthetic instants.

use std::time::{Duration, Instant};

/// Handle owning one scheduled timer. Cancelling a fired or unknown handle is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// What a timer signals when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Periodic playback clock tick
    Tick,
    /// Transition gate delay elapsed
    GateElapsed,
}

/// A timer that has fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub handle: TimerHandle,
    pub event: TimerEvent,
    /// When it was due, which may be earlier than the poll instant
    pub deadline: Instant,
}

#[derive(Debug, Clone)]
struct Entry {
    handle: TimerHandle,
    deadline: Instant,
    period: Option<Duration>,
    event: TimerEvent,
}

#[derive(Debug, Default)]
pub struct Timers {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(
        &mut self,
        deadline: Instant,
        period: Option<Duration>,
        event: TimerEvent,
    ) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            deadline,
            period,
            event,
        });
        handle
    }

    /// Fire `event` once, `delay` after `anchor`.
    pub fn once(&mut self, anchor: Instant, delay: Duration, event: TimerEvent) -> TimerHandle {
        self.insert(anchor + delay, None, event)
    }

    /// Fire `event` every `period`, starting one period after `anchor`.
    ///
    /// A zero period is bumped to one millisecond so the queue always drains.
    pub fn every(&mut self, anchor: Instant, period: Duration, event: TimerEvent) -> TimerHandle {
        let period = period.max(Duration::from_millis(1));
        self.insert(anchor + period, Some(period), event)
    }

    /// Cancel a timer. Returns whether it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    /// Cancel every pending timer, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Take the earliest timer due at `now`.
    ///
    /// One-shot timers are removed. Periodic timers are re-armed one period
    /// after their previous deadline, so a late poll fires every missed tick
    /// in order. Ties go to the timer scheduled first.
    pub fn pop_due(&mut self, now: Instant) -> Option<Fired> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| (e.deadline, e.handle.0))
            .map(|(i, _)| i)?;

        let entry = self.entries[idx].clone();
        match entry.period {
            Some(period) => self.entries[idx].deadline += period,
            None => {
                self.entries.swap_remove(idx);
            }
        }
        Some(Fired {
            handle: entry.handle,
            event: entry.event,
            deadline: entry.deadline,
        })
    }
}
