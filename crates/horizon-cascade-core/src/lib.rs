//! Core systems for Horizon Cascade.
//!
//! This crate provides the foundations the button crate resolves against:
//!
//! - **Scopes**: ambient, tree-scoped configuration, size and disabled
//!   cascades, passed explicitly down the render call chain
//! - **Config provider**: a boundary that overrides several cascades at once,
//!   loadable from TOML
//! - **Timers**: one-shot timers with generation-checked ids and an
//!   injectable clock
//! - **Signals**: change notification for stateful components
//!
//! # Scope Example
//!
//! ```
//! use horizon_cascade_core::scope::{Scopes, SizeType};
//!
//! let root = Scopes::root();
//! let (size, disabled) = root.provide_size(Some(SizeType::Large), |scopes| {
//!     scopes.provide_disabled(true, |scopes| (scopes.size(), scopes.disabled()))
//! });
//!
//! assert_eq!(size, Some(SizeType::Large));
//! assert!(disabled);
//! assert!(!root.disabled());
//! ```
//!
//! # Timer Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use horizon_cascade_core::{ManualClock, SharedTimerManager};
//!
//! let clock = Arc::new(ManualClock::new());
//! let timers = SharedTimerManager::with_clock(clock.clone());
//!
//! let id = timers.start_one_shot(Duration::from_millis(300));
//! clock.advance(Duration::from_millis(300));
//! assert_eq!(timers.process_expired(), vec![id]);
//! ```

mod error;
pub mod logging;
pub mod scope;
pub mod signal;
pub mod timer;

pub use error::{Error, Result, TimerError};
pub use logging::PerfSpan;
pub use scope::Scopes;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use timer::{Clock, ManualClock, SharedTimerManager, SystemClock, TimerId, TimerManager};
