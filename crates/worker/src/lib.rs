//! Debounced scheduling.
//!
//! Every consumer (highlighter, word counter, search markers) owns at most
//! one pending job. Arming a consumer replaces its pending job, so a burst of
//! edits collapses into a single run once input settles.
//!
//! [`Debouncer`] is a deadline table polled by the host's event loop with an
//! explicit clock; nothing blocks and nothing spawns. [`Scheduler`] adds the
//! handler each key runs when it fires.

mod debounce;
mod scheduler;

use std::time::Duration;

pub use debounce::Debouncer;
pub use scheduler::Scheduler;

/// Delay before the highlighter and word counter run after the last trigger.
pub const UPDATE_DELAY: Duration = Duration::from_millis(128);

/// Delay before search markers are re-applied after the last edit.
pub const FIND_DELAY: Duration = Duration::from_millis(128);
