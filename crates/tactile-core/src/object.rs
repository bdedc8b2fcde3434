//! Object identity for Tactile.
//!
//! Widgets and other event receivers are identified by a process-unique
//! [`ObjectId`]. The toolkit uses these IDs to route timer fires and global
//! click notifications back to their owners; all other state is private to
//! the instance that owns it, so no registry or parent-child tracking is
//! needed here.

use std::sync::atomic::{AtomicU64, Ordering};

/// A process-unique identifier for an object (widget, timer owner, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

/// Global counter for generating unique object IDs.
static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

impl ObjectId {
    /// Allocate a fresh, process-unique ID.
    pub fn next() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw u64 value of this object ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Base trait for types that participate in event routing.
pub trait Object {
    /// Get this object's unique ID.
    fn object_id(&self) -> ObjectId;
}
