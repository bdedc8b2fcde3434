//! Logging facilities for Tactile.
//!
//! Tactile is instrumented with the `tracing` crate. The crate never installs
//! a subscriber itself; to see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every log line carries a per-subsystem target so you can filter with
//! `tracing` directives, for example `tactile_core::timer=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "tactile_core";
    /// Timer system target.
    pub const TIMER: &str = "tactile_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "tactile_core::signal";
    /// Deferred task queue target.
    pub const TASK: &str = "tactile_core::task";
}
