//! Timer system for Tactile.
//!
//! Provides one-shot timers driven by an explicit clock. The manager never
//! reads the wall clock itself; the hosting runtime passes the current
//! `Instant` to every call that depends on time. Tests pass synthetic
//! instants and never sleep.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use crate::error::{Result, TimerError};
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// Internal timer data.
#[derive(Debug)]
struct TimerData {
    /// When this timer should fire.
    fire_time: Instant,
    /// Whether this timer is active.
    active: bool,
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

/// Manages one-shot timers for an input context.
pub struct TimerManager {
    /// All registered timers.
    timers: SlotMap<TimerId, TimerData>,
    /// Priority queue of pending timer fires (min-heap by fire time).
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create a new timer manager.
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
        }
    }

    /// Start a one-shot timer that fires `duration` after `now`.
    ///
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_one_shot(&mut self, now: Instant, duration: Duration) -> TimerId {
        let fire_time = now + duration;

        let id = self.timers.insert(TimerData {
            fire_time,
            active: true,
        });
        self.queue.push(TimerQueueEntry { id, fire_time });

        tracing::trace!(target: "tactile_core::timer", ?id, ?duration, "timer started");
        id
    }

    /// Stop and remove a timer.
    ///
    /// Returns `Ok(())` if the timer was found and removed, or an error if not found.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        if let Some(timer) = self.timers.get_mut(id) {
            timer.active = false;
            self.timers.remove(id);
            tracing::trace!(target: "tactile_core::timer", ?id, "timer stopped");
            Ok(())
        } else {
            Err(TimerError::InvalidTimerId.into())
        }
    }

    /// Check if a timer is currently active.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.get(id).is_some_and(|t| t.active)
    }

    /// Get the duration from `now` until the next timer fires, if any.
    ///
    /// Returns `None` if there are no active timers.
    pub fn time_until_next(&mut self, now: Instant) -> Option<Duration> {
        // Clean up any inactive timers from the front of the queue.
        while let Some(entry) = self.queue.peek() {
            if !self.timers.get(entry.id).is_some_and(|t| t.active) {
                self.queue.pop();
            } else {
                break;
            }
        }

        self.queue.peek().map(|entry| {
            if entry.fire_time > now {
                entry.fire_time - now
            } else {
                Duration::ZERO
            }
        })
    }

    /// Process all timers whose fire time is at or before `now`.
    ///
    /// Fired timers are removed. Returns the IDs that fired, in fire-time
    /// order.
    pub fn process_expired(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek() {
            if entry.fire_time > now {
                break;
            }

            let id = entry.id;
            self.queue.pop();

            // Stale entries for cancelled timers are skipped.
            let Some(timer) = self.timers.get_mut(id) else {
                continue;
            };
            if !timer.active {
                continue;
            }

            tracing::trace!(target: "tactile_core::timer", ?id, "timer fired");
            timer.active = false;
            self.timers.remove(id);
            fired.push(id);
        }

        fired
    }

    /// Get the number of active timers.
    pub fn active_count(&self) -> usize {
        self.timers.iter().filter(|(_, t)| t.active).count()
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(TimerManager: Send);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_fires_once() {
        let mut timers = TimerManager::new();
        let now = Instant::now();

        let id = timers.start_one_shot(now, Duration::from_millis(100));
        assert!(timers.is_active(id));

        assert!(timers.process_expired(now + Duration::from_millis(50)).is_empty());

        let fired = timers.process_expired(now + Duration::from_millis(150));
        assert_eq!(fired, vec![id]);
        assert!(!timers.is_active(id));

        // Second pass finds nothing.
        assert!(timers.process_expired(now + Duration::from_millis(500)).is_empty());
    }

    #[test]
    fn test_stop_prevents_fire() {
        let mut timers = TimerManager::new();
        let now = Instant::now();

        let id = timers.start_one_shot(now, Duration::from_millis(100));
        timers.stop(id).unwrap();

        assert!(!timers.is_active(id));
        assert!(timers.process_expired(now + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_stop_unknown_id_errors() {
        let mut timers = TimerManager::new();
        let now = Instant::now();

        let id = timers.start_one_shot(now, Duration::from_millis(10));
        timers.stop(id).unwrap();
        assert!(timers.stop(id).is_err());
    }

    #[test]
    fn test_fire_order() {
        let mut timers = TimerManager::new();
        let now = Instant::now();

        let late = timers.start_one_shot(now, Duration::from_millis(300));
        let early = timers.start_one_shot(now, Duration::from_millis(100));

        let fired = timers.process_expired(now + Duration::from_millis(400));
        assert_eq!(fired, vec![early, late]);
    }

    #[test]
    fn test_time_until_next() {
        let mut timers = TimerManager::new();
        let now = Instant::now();

        assert!(timers.time_until_next(now).is_none());

        let id = timers.start_one_shot(now, Duration::from_millis(200));
        assert_eq!(
            timers.time_until_next(now + Duration::from_millis(50)),
            Some(Duration::from_millis(150))
        );

        // Past-due timers report zero remaining.
        assert_eq!(
            timers.time_until_next(now + Duration::from_millis(300)),
            Some(Duration::ZERO)
        );

        timers.stop(id).unwrap();
        assert!(timers.time_until_next(now).is_none());
    }

    #[test]
    fn test_active_count() {
        let mut timers = TimerManager::new();
        let now = Instant::now();

        let a = timers.start_one_shot(now, Duration::from_millis(10));
        let _b = timers.start_one_shot(now, Duration::from_millis(20));
        assert_eq!(timers.active_count(), 2);

        timers.stop(a).unwrap();
        assert_eq!(timers.active_count(), 1);
    }
}
