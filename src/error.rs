//! Rejections raised by the timer state machine
//!
//! None of these reach the user as messages: the component logs them at
//! debug level and leaves its state untouched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// Duration input that is not a finite number of at least one second
    #[error("invalid duration input: {0:?}")]
    InvalidDuration(String),

    #[error("no time left to count down")]
    NothingToCount,

    #[error("timer is already running")]
    AlreadyRunning,

    #[error("timer is not running")]
    NotRunning,
}
