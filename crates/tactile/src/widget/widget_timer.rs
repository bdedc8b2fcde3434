//! Widget-owned timers.
//!
//! [`OwnedTimer`] is the widget-side handle for a single restartable
//! one-shot timer. Rearming always cancels the previous instance first, so
//! a widget can never have two of its timers live at once; the timer is
//! cancelled on drop.

use std::time::Duration;

use tactile_core::{ObjectId, TimerId};

use crate::widget::InputContext;
use std::sync::Arc;

/// A single restartable one-shot timer owned by a widget.
pub struct OwnedTimer {
    ctx: Arc<InputContext>,
    owner: ObjectId,
    id: Option<TimerId>,
}

impl OwnedTimer {
    /// Create an unarmed timer for the widget identified by `owner`.
    pub fn new(ctx: Arc<InputContext>, owner: ObjectId) -> Self {
        Self {
            ctx,
            owner,
            id: None,
        }
    }

    /// Arm the timer, cancelling any previous instance first.
    ///
    /// This is the only way to (re)start the timer, which keeps the
    /// one-live-timer invariant by construction.
    pub fn rearm(&mut self, duration: Duration) {
        self.cancel();
        self.id = Some(self.ctx.start_owned_timer(self.owner, duration));
    }

    /// Cancel the timer if armed. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            self.ctx.cancel_timer(id);
        }
    }

    /// Check if `id` is this timer's current instance.
    ///
    /// Widgets use this to tell their own timer fire apart from any other
    /// `Timer` event.
    pub fn owns(&self, id: TimerId) -> bool {
        self.id == Some(id)
    }

    /// Check if the timer is armed and has not fired yet.
    pub fn is_armed(&self) -> bool {
        self.id.is_some_and(|id| self.ctx.is_timer_active(id))
    }
}

impl Drop for OwnedTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

static_assertions::assert_impl_all!(OwnedTimer: Send, Sync);
