//! Logging facilities for Horizon Cascade.
//!
//! Horizon Cascade uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_cascade_core=debug,horizon_cascade_button=debug")
//!         .init();
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_cascade_core";
    /// Ambient scope target.
    pub const SCOPE: &str = "horizon_cascade_core::scope";
    /// Config provider target.
    pub const CONFIG: &str = "horizon_cascade_core::config";
    /// Timer system target.
    pub const TIMER: &str = "horizon_cascade_core::timer";
    /// Signal system target.
    pub const SIGNAL: &str = "horizon_cascade_core::signal";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time a render pass or a batch of timer processing.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "horizon_cascade::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

/// Trace-level event with the core target.
#[macro_export]
macro_rules! cascade_trace {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "horizon_cascade_core", $($arg)*)
    };
}

/// Debug-level event with the core target.
#[macro_export]
macro_rules! cascade_debug {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "horizon_cascade_core", $($arg)*)
    };
}
