//! Countdown state machine
//!
//! Pure state: no clocks, no tasks. The ticker task owns one of these and
//! is responsible for holding a live ticker exactly while it reports
//! [`RunState::Running`].

use serde::{Deserialize, Serialize};

use crate::error::TimerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Idle,
    Running,
    Paused,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Paused => "paused",
        }
    }
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting, with this many seconds left
    Remaining(u64),
    /// Reached zero on this tick; the ticker must be released
    Finished,
    /// Tick arrived while not running and changed nothing
    Ignored,
}

/// Timer state for a single countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    time_left: u64,
    run_state: RunState,
    /// Last duration accepted by `set_duration`, restored by `reset`
    duration: Option<u64>,
}

impl TimerState {
    /// Create an idle timer with nothing on the clock
    pub fn new() -> Self {
        Self {
            time_left: 0,
            run_state: RunState::Idle,
            duration: None,
        }
    }

    pub fn time_left(&self) -> u64 {
        self.time_left
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn duration(&self) -> Option<u64> {
        self.duration
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Arm the timer with a fresh duration, dropping whatever was running
    pub fn set_duration(&mut self, seconds: u64) -> Result<(), TimerError> {
        if seconds == 0 {
            return Err(TimerError::InvalidDuration(seconds.to_string()));
        }
        self.time_left = seconds;
        self.duration = Some(seconds);
        self.run_state = RunState::Idle;
        Ok(())
    }

    /// Start counting down, or resume from a pause
    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.run_state == RunState::Running {
            return Err(TimerError::AlreadyRunning);
        }
        if self.time_left == 0 {
            return Err(TimerError::NothingToCount);
        }
        self.run_state = RunState::Running;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), TimerError> {
        if self.run_state != RunState::Running {
            return Err(TimerError::NotRunning);
        }
        self.run_state = RunState::Paused;
        Ok(())
    }

    /// Back to idle with the last entered duration on the clock
    pub fn reset(&mut self) {
        self.run_state = RunState::Idle;
        self.time_left = self.duration.unwrap_or(0);
    }

    /// Count down one second.
    ///
    /// Reaching zero drops the machine back to `Idle`, so the running state
    /// and the presence of a ticker never disagree.
    pub fn tick(&mut self) -> TickOutcome {
        if self.run_state != RunState::Running {
            return TickOutcome::Ignored;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.run_state = RunState::Idle;
            TickOutcome::Finished
        } else {
            TickOutcome::Remaining(self.time_left)
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the text of the duration input into whole seconds.
///
/// Accepts any finite decimal number; fractions are truncated and the
/// result must be at least one second.
pub fn parse_duration(input: &str) -> Result<u64, TimerError> {
    let invalid = || TimerError::InvalidDuration(input.to_string());

    let value: f64 = input.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() || value <= 0.0 || value >= u64::MAX as f64 {
        return Err(invalid());
    }

    match value.trunc() as u64 {
        0 => Err(invalid()),
        seconds => Ok(seconds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed(seconds: u64) -> TimerState {
        let mut timer = TimerState::new();
        timer.set_duration(seconds).unwrap();
        timer
    }

    #[test]
    fn rejects_non_positive_durations() {
        assert!(matches!(parse_duration("0"), Err(TimerError::InvalidDuration(_))));
        assert!(matches!(parse_duration("-5"), Err(TimerError::InvalidDuration(_))));
        assert!(parse_duration("0.4").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("").is_err());
        assert!(parse_duration("inf").is_err());
        assert!(parse_duration("NaN").is_err());
        assert!(parse_duration("1e30").is_err());
    }

    #[test]
    fn parses_and_truncates_durations() {
        assert_eq!(parse_duration("90"), Ok(90));
        assert_eq!(parse_duration("  12 "), Ok(12));
        assert_eq!(parse_duration("2.9"), Ok(2));
        assert_eq!(parse_duration("1e3"), Ok(1000));
    }

    #[test]
    fn zero_duration_leaves_state_untouched() {
        let mut timer = armed(30);
        timer.start().unwrap();
        let before = timer.clone();

        assert!(timer.set_duration(0).is_err());
        assert_eq!(timer, before);
    }

    #[test]
    fn set_duration_forces_idle() {
        let mut timer = armed(30);
        timer.start().unwrap();
        timer.tick();

        timer.set_duration(5).unwrap();
        assert_eq!(timer.run_state(), RunState::Idle);
        assert_eq!(timer.time_left(), 5);
        assert_eq!(timer.duration(), Some(5));
    }

    #[test]
    fn start_needs_time_on_the_clock() {
        let mut timer = TimerState::new();
        assert_eq!(timer.start(), Err(TimerError::NothingToCount));
        assert_eq!(timer.run_state(), RunState::Idle);
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut timer = armed(3);
        timer.start().unwrap();
        assert_eq!(timer.start(), Err(TimerError::AlreadyRunning));
        assert!(timer.is_running());
    }

    #[test]
    fn pause_only_from_running() {
        let mut timer = armed(3);
        assert_eq!(timer.pause(), Err(TimerError::NotRunning));

        timer.start().unwrap();
        timer.tick();
        timer.pause().unwrap();
        assert_eq!(timer.run_state(), RunState::Paused);
        assert_eq!(timer.time_left(), 2);
        assert_eq!(timer.pause(), Err(TimerError::NotRunning));
    }

    #[test]
    fn ticks_are_ignored_unless_running() {
        let mut timer = armed(3);
        assert_eq!(timer.tick(), TickOutcome::Ignored);

        timer.start().unwrap();
        timer.pause().unwrap();
        assert_eq!(timer.tick(), TickOutcome::Ignored);
        assert_eq!(timer.time_left(), 3);
    }

    #[test]
    fn counts_down_to_zero_then_goes_idle() {
        let mut timer = armed(10);
        timer.start().unwrap();

        for expected in (1..10).rev() {
            assert_eq!(timer.tick(), TickOutcome::Remaining(expected));
        }
        assert_eq!(timer.tick(), TickOutcome::Finished);
        assert_eq!(timer.time_left(), 0);
        assert_eq!(timer.run_state(), RunState::Idle);
        assert_eq!(timer.start(), Err(TimerError::NothingToCount));
    }

    #[test]
    fn reset_restores_last_duration() {
        let mut timer = armed(10);
        timer.start().unwrap();
        timer.tick();
        timer.tick();
        timer.pause().unwrap();

        timer.reset();
        assert_eq!(timer.run_state(), RunState::Idle);
        assert_eq!(timer.time_left(), 10);
    }

    #[test]
    fn reset_without_duration_is_zero() {
        let mut timer = TimerState::new();
        timer.reset();
        assert_eq!(timer.time_left(), 0);
        assert_eq!(timer.run_state(), RunState::Idle);
    }
}
