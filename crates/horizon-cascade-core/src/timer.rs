//! One-shot timers for delayed state transitions.
//!
//! Timers are never run on a background thread. Whoever owns the event loop
//! polls [`SharedTimerManager::process_expired`] and routes the returned
//! [`TimerId`]s back to the objects that armed them. A timer event is therefore
//! always observed after the call that scheduled it has returned.
//!
//! [`TimerId`] is a versioned slotmap key: once a timer is stopped or has
//! fired, its id never compares equal to a later timer's id, even if the
//! underlying slot is reused. Owners compare the id they stored against the id
//! they are handed to reject stale events.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::error::{Result, TimerError};

/// Longest delay a timer honours; longer delays are clamped to it.
pub const MAX_TIMER_DURATION: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Stopped entries tolerated in the queue before it is compacted.
const QUEUE_SLACK: usize = 64;

new_key_type! {
    /// A unique, generation-checked identifier for a timer.
    pub struct TimerId;
}

/// Source of the current time for a [`TimerManager`].
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// A clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Used to drive timers deterministically.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    /// Create a manual clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

#[derive(Debug)]
struct TimerData {
    deadline: Instant,
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Owns all pending one-shot timers.
pub struct TimerManager {
    timers: SlotMap<TimerId, TimerData>,
    queue: BinaryHeap<TimerQueueEntry>,
    clock: Arc<dyn Clock>,
}

impl TimerManager {
    /// Create a timer manager using the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a timer manager reading time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
            clock,
        }
    }

    /// The current time according to this manager's clock.
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Start a one-shot timer that fires after `duration`.
    ///
    /// Durations beyond [`MAX_TIMER_DURATION`] (or beyond what the clock can
    /// represent) are clamped.
    pub fn start_one_shot(&mut self, duration: Duration) -> TimerId {
        let deadline = saturating_deadline(self.clock.now(), duration);
        let id = self.timers.insert(TimerData { deadline });
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: deadline,
        });
        tracing::trace!(target: "horizon_cascade_core::timer", ?id, ?duration, "timer armed");
        id
    }

    /// Stop and remove a timer.
    ///
    /// Fails with [`TimerError::InvalidTimerId`] if the timer already fired or
    /// was already stopped.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        match self.timers.remove(id) {
            Some(_) => {
                tracing::trace!(target: "horizon_cascade_core::timer", ?id, "timer stopped");
                self.compact();
                Ok(())
            }
            None => Err(TimerError::InvalidTimerId.into()),
        }
    }

    /// Check if a timer is still pending.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// The deadline of a pending timer.
    pub fn deadline(&self, id: TimerId) -> Option<Instant> {
        self.timers.get(id).map(|t| t.deadline)
    }

    /// Get the duration until the next timer fires, if any.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        self.discard_stopped();
        let now = self.clock.now();
        self.queue
            .peek()
            .map(|entry| entry.fire_time.saturating_duration_since(now))
    }

    /// Remove and return every timer whose deadline has passed, earliest first.
    #[tracing::instrument(skip(self), target = "horizon_cascade_core::timer", level = "trace")]
    pub fn process_expired(&mut self) -> Vec<TimerId> {
        let now = self.clock.now();
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek().copied() {
            if entry.fire_time > now {
                break;
            }
            self.queue.pop();

            // Stopped timers leave their queue entry behind.
            if self.timers.remove(entry.id).is_some() {
                tracing::trace!(target: "horizon_cascade_core::timer", id = ?entry.id, "timer fired");
                fired.push(entry.id);
            }
        }

        fired
    }

    /// Get the number of pending timers.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Drop queue entries of stopped timers once they dominate the queue.
    fn compact(&mut self) {
        if self.queue.len() <= 2 * self.timers.len() + QUEUE_SLACK {
            return;
        }
        let timers = &self.timers;
        self.queue.retain(|entry| timers.contains_key(entry.id));
        tracing::trace!(target: "horizon_cascade_core::timer", queued = self.queue.len(), "timer queue compacted");
    }

    fn discard_stopped(&mut self) {
        while let Some(entry) = self.queue.peek() {
            if self.timers.contains_key(entry.id) {
                break;
            }
            self.queue.pop();
        }
    }
}

fn saturating_deadline(now: Instant, duration: Duration) -> Instant {
    let mut duration = duration.min(MAX_TIMER_DURATION);
    loop {
        if let Some(deadline) = now.checked_add(duration) {
            return deadline;
        }
        duration /= 2;
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TimerManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerManager")
            .field("active", &self.timers.len())
            .field("queued", &self.queue.len())
            .finish()
    }
}

/// A cloneable, lock-guarded handle to a [`TimerManager`].
///
/// Every control that needs a timer holds a clone of the same handle.
#[derive(Clone, Debug, Default)]
pub struct SharedTimerManager {
    inner: Arc<Mutex<TimerManager>>,
}

impl SharedTimerManager {
    /// Create a shared manager using the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared manager reading time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(TimerManager::with_clock(clock))),
        }
    }

    pub fn now(&self) -> Instant {
        self.inner.lock().now()
    }

    pub fn start_one_shot(&self, duration: Duration) -> TimerId {
        self.inner.lock().start_one_shot(duration)
    }

    pub fn stop(&self, id: TimerId) -> Result<()> {
        self.inner.lock().stop(id)
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.inner.lock().is_active(id)
    }

    pub fn deadline(&self, id: TimerId) -> Option<Instant> {
        self.inner.lock().deadline(id)
    }

    pub fn time_until_next(&self) -> Option<Duration> {
        self.inner.lock().time_until_next()
    }

    pub fn process_expired(&self) -> Vec<TimerId> {
        self.inner.lock().process_expired()
    }

    pub fn active_count(&self) -> usize {
        self.inner.lock().active_count()
    }
}

static_assertions::assert_impl_all!(SharedTimerManager: Send, Sync);
