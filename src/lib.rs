//! Countdown - A terminal countdown timer
//!
//! This library provides a countdown state machine driven by a one-second
//! ticker, with set, start/resume, pause and reset controls and an `MM:SS`
//! display.

pub mod config;
pub mod console;
pub mod error;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::TimerError;
pub use state::{AppState, RunState, TimerSnapshot, TimerState};
pub use utils::{format_time, shutdown_signal};
