//! Core systems for Tactile.
//!
//! This crate provides the foundational components of the Tactile control
//! toolkit:
//!
//! - **Object Identity**: Process-unique IDs for routing events to widgets
//! - **Signal/Slot System**: Type-safe inter-object communication
//! - **Timers**: One-shot timers driven by an explicit clock
//! - **Task Queue**: Deferred ("next tick") work posted from event callbacks
//!
//! The toolkit is single-threaded and cooperative: the hosting UI runtime
//! dispatches one input event at a time, advances the clock, and drains the
//! deferred queue between events. Nothing in this crate spins up threads or
//! blocks; the host decides when time passes and when deferred work runs.
//!
//! # Signal/Slot Example
//!
//! ```
//! use tactile_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Timer Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use tactile_core::TimerManager;
//!
//! let mut timers = TimerManager::new();
//! let now = Instant::now();
//!
//! let id = timers.start_one_shot(now, Duration::from_millis(200));
//! assert!(timers.process_expired(now).is_empty());
//!
//! // The host decides when time passes; tests pass synthetic instants.
//! let fired = timers.process_expired(now + Duration::from_millis(250));
//! assert_eq!(fired, vec![id]);
//! ```

mod error;
pub mod logging;
pub mod object;
pub mod signal;
mod task;
mod timer;

pub use error::{CoreError, Result, TimerError};
pub use object::{Object, ObjectId};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use task::{TaskId, TaskQueue};
pub use timer::{TimerId, TimerManager};
