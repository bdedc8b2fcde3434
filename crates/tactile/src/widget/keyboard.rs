//! Global keyboard event bus.
//!
//! A widget that needs to see key events before the surrounding UI (the key
//! recorder suppressing passthrough while capturing) installs a filter on
//! the [`KeyboardBus`]. The host routes every key press through
//! [`KeyboardBus::dispatch_key_press`] before its normal focus-based
//! delivery; if any filter accepts the event, the press goes no further.
//!
//! Filters are released through the RAII [`KeyFilterGuard`], so the
//! intercept is removed on every exit path including drop.

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::widget::KeyPressEvent;

new_key_type! {
    /// A unique identifier for an installed key filter.
    pub struct FilterId;
}

/// A filter closure. May accept the event to suppress passthrough.
type KeyFilter = Arc<dyn Fn(&mut KeyPressEvent) + Send + Sync>;

/// Routes key presses through installed filters before normal delivery.
pub struct KeyboardBus {
    /// Installed filters. Iteration order is unspecified; filters must not
    /// rely on it.
    filters: Mutex<SlotMap<FilterId, KeyFilter>>,
}

impl KeyboardBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self {
            filters: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Install a filter. Prefer [`KeyboardBus::add_filter_scoped`] so
    /// removal is guaranteed.
    pub fn add_filter<F>(&self, filter: F) -> FilterId
    where
        F: Fn(&mut KeyPressEvent) + Send + Sync + 'static,
    {
        let id = self.filters.lock().insert(Arc::new(filter));
        tracing::trace!(target: "tactile::keyboard", ?id, "key filter installed");
        id
    }

    /// Install a filter behind an RAII guard that removes it on drop.
    pub fn add_filter_scoped<F>(self: &Arc<Self>, filter: F) -> KeyFilterGuard
    where
        F: Fn(&mut KeyPressEvent) + Send + Sync + 'static,
    {
        KeyFilterGuard {
            bus: Arc::clone(self),
            id: self.add_filter(filter),
        }
    }

    /// Remove a filter.
    ///
    /// Returns `true` if the filter was found and removed.
    pub fn remove_filter(&self, id: FilterId) -> bool {
        let removed = self.filters.lock().remove(id).is_some();
        if removed {
            tracing::trace!(target: "tactile::keyboard", ?id, "key filter removed");
        }
        removed
    }

    /// Get the number of installed filters.
    pub fn filter_count(&self) -> usize {
        self.filters.lock().len()
    }

    /// Run a key press through every installed filter.
    ///
    /// Returns `true` if any filter accepted the event, meaning it must not
    /// be delivered to the surrounding UI.
    pub fn dispatch_key_press(&self, event: &mut KeyPressEvent) -> bool {
        let filters: Vec<KeyFilter> = {
            let table = self.filters.lock();
            table.iter().map(|(_, f)| f.clone()).collect()
        };

        for filter in filters {
            filter(event);
        }
        event.base.is_accepted()
    }
}

impl Default for KeyboardBus {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII handle for an installed key filter.
///
/// Dropping the guard removes the filter, so a widget that is dropped while
/// capturing cannot leave a stale intercept behind.
pub struct KeyFilterGuard {
    bus: Arc<KeyboardBus>,
    id: FilterId,
}

impl KeyFilterGuard {
    /// Get the ID of the guarded filter.
    pub fn id(&self) -> FilterId {
        self.id
    }
}

impl Drop for KeyFilterGuard {
    fn drop(&mut self) {
        self.bus.remove_filter(self.id);
    }
}

static_assertions::assert_impl_all!(KeyboardBus: Send, Sync);
static_assertions::assert_impl_all!(KeyFilterGuard: Send, Sync);
