//! Shared input context.
//!
//! [`InputContext`] bundles the global resources the button family needs:
//! the timer manager with its owner map, the deferred task queue, the
//! keyboard bus, and the outside-click watch set. The hosting UI runtime
//! owns one context, hands an `Arc` of it to widgets that need timers or
//! global input, and performs three duties between events:
//!
//! 1. [`InputContext::advance`] moves the clock and returns fired timers,
//!    which the host delivers to their owners as `WidgetEvent::Timer`;
//! 2. [`InputContext::process_deferred`] drains work posted during event
//!    callbacks;
//! 3. for every mouse press, the host checks [`InputContext::click_watchers`]
//!    and delivers `WidgetEvent::ClickOutside` to each watcher whose widget
//!    tree did not contain the press.
//!
//! The clock only moves when the host says so. Tests advance it with
//! synthetic durations and never sleep.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tactile_core::{ObjectId, TaskId, TaskQueue, TimerId, TimerManager};

use crate::widget::{KeyPressEvent, KeyboardBus};

/// Shared handle for timers, deferred tasks, keyboard filters, and
/// outside-click watches.
pub struct InputContext {
    /// One-shot timers, keyed by the explicit clock below.
    timers: Mutex<TimerManager>,
    /// Which widget owns each live timer.
    timer_owners: Mutex<HashMap<TimerId, ObjectId>>,
    /// Work posted during event callbacks, drained between events.
    tasks: Mutex<TaskQueue>,
    /// Global key filter bus.
    keyboard: Arc<KeyboardBus>,
    /// Widgets that want outside-click notifications.
    click_watches: Mutex<HashSet<ObjectId>>,
    /// The context clock. Moves only via `advance`.
    clock: Mutex<Instant>,
}

impl InputContext {
    /// Create a new input context.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            timers: Mutex::new(TimerManager::new()),
            timer_owners: Mutex::new(HashMap::new()),
            tasks: Mutex::new(TaskQueue::new()),
            keyboard: Arc::new(KeyboardBus::new()),
            click_watches: Mutex::new(HashSet::new()),
            clock: Mutex::new(Instant::now()),
        })
    }

    // =========================================================================
    // Clock and Timers
    // =========================================================================

    /// Get the current context time.
    pub fn now(&self) -> Instant {
        *self.clock.lock()
    }

    /// Advance the clock and collect fired timers.
    ///
    /// Returns `(owner, timer)` pairs in fire order. The host delivers each
    /// as a `WidgetEvent::Timer` to the owning widget.
    pub fn advance(&self, elapsed: Duration) -> Vec<(ObjectId, TimerId)> {
        let now = {
            let mut clock = self.clock.lock();
            *clock += elapsed;
            *clock
        };

        let fired = self.timers.lock().process_expired(now);
        let mut owners = self.timer_owners.lock();
        fired
            .into_iter()
            .filter_map(|id| owners.remove(&id).map(|owner| (owner, id)))
            .collect()
    }

    /// Start a one-shot timer owned by a widget.
    ///
    /// When the timer fires, `advance` reports it against `owner`. Widgets
    /// use [`crate::widget::OwnedTimer`] rather than calling this directly.
    pub fn start_owned_timer(&self, owner: ObjectId, duration: Duration) -> TimerId {
        let now = self.now();
        let id = self.timers.lock().start_one_shot(now, duration);
        self.timer_owners.lock().insert(id, owner);
        id
    }

    /// Cancel a timer.
    ///
    /// Returns `true` if the timer was live. Cancelling an already-fired
    /// timer is a no-op.
    pub fn cancel_timer(&self, id: TimerId) -> bool {
        self.timer_owners.lock().remove(&id);
        self.timers.lock().stop(id).is_ok()
    }

    /// Check if a timer is live.
    pub fn is_timer_active(&self, id: TimerId) -> bool {
        self.timers.lock().is_active(id)
    }

    // =========================================================================
    // Deferred Tasks
    // =========================================================================

    /// Post work to run after the current event finishes dispatching.
    pub fn defer<F>(&self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        self.tasks.lock().post(task)
    }

    /// Cancel a pending deferred task.
    pub fn cancel_deferred(&self, id: TaskId) -> bool {
        self.tasks.lock().cancel(id)
    }

    /// Get the number of pending deferred tasks.
    pub fn pending_deferred(&self) -> usize {
        self.tasks.lock().pending_count()
    }

    /// Run all pending deferred tasks.
    ///
    /// The queue is drained under the lock and the closures run after it is
    /// released, so a task may post further tasks (they run on the next
    /// drain). Returns the number of tasks run.
    pub fn process_deferred(&self) -> usize {
        let tasks = self.tasks.lock().take_all();
        let count = tasks.len();
        for task in tasks {
            task();
        }
        count
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Get the keyboard filter bus.
    pub fn keyboard(&self) -> &Arc<KeyboardBus> {
        &self.keyboard
    }

    /// Run a key press through the keyboard bus.
    ///
    /// Returns `true` if a filter accepted the event; the host must then
    /// skip its normal focus-based delivery.
    pub fn dispatch_key_press(&self, event: &mut KeyPressEvent) -> bool {
        self.keyboard.dispatch_key_press(event)
    }

    // =========================================================================
    // Outside-Click Watches
    // =========================================================================

    /// Register a widget for outside-click notifications.
    pub fn add_click_watch(&self, owner: ObjectId) {
        self.click_watches.lock().insert(owner);
        tracing::trace!(target: "tactile::widget", ?owner, "click watch installed");
    }

    /// Remove a widget's outside-click watch.
    ///
    /// Returns `true` if a watch was present. Idempotent.
    pub fn remove_click_watch(&self, owner: ObjectId) -> bool {
        let removed = self.click_watches.lock().remove(&owner);
        if removed {
            tracing::trace!(target: "tactile::widget", ?owner, "click watch removed");
        }
        removed
    }

    /// Check if a widget currently watches for outside clicks.
    pub fn is_watching_clicks(&self, owner: ObjectId) -> bool {
        self.click_watches.lock().contains(&owner)
    }

    /// Get all widgets currently watching for outside clicks.
    pub fn click_watchers(&self) -> Vec<ObjectId> {
        self.click_watches.lock().iter().copied().collect()
    }
}

/// RAII handle for an outside-click watch with deferred installation.
///
/// Created while an event callback is still running, the guard does not
/// install the watch immediately; it posts a deferred task so the watch
/// goes live only after the current event finishes dispatching. The click
/// that armed a confirm button can therefore never disarm it.
///
/// Dropping the guard removes the watch and neutralizes a still-pending
/// install.
pub struct ClickWatchGuard {
    ctx: Arc<InputContext>,
    owner: ObjectId,
    /// Cleared on drop so a pending deferred install becomes a no-op.
    active: Arc<AtomicBool>,
}

impl ClickWatchGuard {
    /// Schedule a watch for `owner`, installed on the next deferred drain.
    pub fn deferred(ctx: &Arc<InputContext>, owner: ObjectId) -> Self {
        let active = Arc::new(AtomicBool::new(true));

        let install_ctx = Arc::clone(ctx);
        let install_active = Arc::clone(&active);
        ctx.defer(move || {
            if install_active.load(Ordering::SeqCst) {
                install_ctx.add_click_watch(owner);
            }
        });

        Self {
            ctx: Arc::clone(ctx),
            owner,
            active,
        }
    }

    /// Get the watching widget's ID.
    pub fn owner(&self) -> ObjectId {
        self.owner
    }
}

impl Drop for ClickWatchGuard {
    fn drop(&mut self) {
        self.active.store(false, Ordering::SeqCst);
        self.ctx.remove_click_watch(self.owner);
    }
}

static_assertions::assert_impl_all!(InputContext: Send, Sync);
static_assertions::assert_impl_all!(ClickWatchGuard: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_reports_owner() {
        let ctx = InputContext::new();
        let owner = ObjectId::next();

        let id = ctx.start_owned_timer(owner, Duration::from_millis(200));
        assert!(ctx.advance(Duration::from_millis(100)).is_empty());

        let fired = ctx.advance(Duration::from_millis(150));
        assert_eq!(fired, vec![(owner, id)]);
        assert!(!ctx.is_timer_active(id));
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let ctx = InputContext::new();
        let owner = ObjectId::next();

        let id = ctx.start_owned_timer(owner, Duration::from_millis(50));
        assert!(ctx.cancel_timer(id));
        assert!(!ctx.cancel_timer(id));
        assert!(ctx.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_deferred_runs_after_drain() {
        let ctx = InputContext::new();
        let ran = Arc::new(AtomicBool::new(false));

        let ran_clone = ran.clone();
        ctx.defer(move || ran_clone.store(true, Ordering::SeqCst));

        assert!(!ran.load(Ordering::SeqCst));
        assert_eq!(ctx.process_deferred(), 1);
        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_deferred_task_may_post_more() {
        let ctx = InputContext::new();

        let ctx_clone = Arc::clone(&ctx);
        ctx.defer(move || {
            ctx_clone.defer(|| {});
        });

        assert_eq!(ctx.process_deferred(), 1);
        assert_eq!(ctx.pending_deferred(), 1);
        assert_eq!(ctx.process_deferred(), 1);
    }

    #[test]
    fn test_click_watch_guard_installs_on_drain() {
        let ctx = InputContext::new();
        let owner = ObjectId::next();

        let guard = ClickWatchGuard::deferred(&ctx, owner);
        // Not yet installed: the arming event is still "in flight".
        assert!(!ctx.is_watching_clicks(owner));

        ctx.process_deferred();
        assert!(ctx.is_watching_clicks(owner));

        drop(guard);
        assert!(!ctx.is_watching_clicks(owner));
    }

    #[test]
    fn test_click_watch_guard_dropped_before_drain() {
        let ctx = InputContext::new();
        let owner = ObjectId::next();

        let guard = ClickWatchGuard::deferred(&ctx, owner);
        drop(guard);

        // The pending install is neutralized, not just removed afterwards.
        ctx.process_deferred();
        assert!(!ctx.is_watching_clicks(owner));
    }
}
