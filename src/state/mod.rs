//! State management module
//!
//! This module contains the countdown state machine, its serializable
//! snapshots and the handle the console uses to drive it.

pub mod app_state;
pub mod snapshot;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use snapshot::{StatusReport, TimerSnapshot};
pub use timer_state::{parse_duration, RunState, TickOutcome, TimerState};
