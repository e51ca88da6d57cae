//! Serializable views of the countdown

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RunState, TimerState};
use crate::utils::format_time;

/// Point-in-time view of the timer, published on every change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub time_left: u64,
    /// `time_left` rendered as `MM:SS`
    pub display: String,
    pub run_state: RunState,
    pub duration: Option<u64>,
    pub ticker_active: bool,
}

impl TimerSnapshot {
    pub fn capture(timer: &TimerState, ticker_active: bool) -> Self {
        Self {
            time_left: timer.time_left(),
            display: format_time(timer.time_left()),
            run_state: timer.run_state(),
            duration: timer.duration(),
            ticker_active,
        }
    }

    /// Label of the start button: resuming a pause reads differently
    pub fn start_label(&self) -> &'static str {
        match self.run_state {
            RunState::Paused => "Resume",
            _ => "Start",
        }
    }
}

impl Default for TimerSnapshot {
    fn default() -> Self {
        Self::capture(&TimerState::new(), false)
    }
}

/// Full status printed by the `status` console command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    #[serde(flatten)]
    pub timer: TimerSnapshot,
    pub pending_input: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
    pub uptime: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_label_follows_run_state() {
        let mut timer = TimerState::new();
        timer.set_duration(5).unwrap();
        assert_eq!(TimerSnapshot::capture(&timer, false).start_label(), "Start");

        timer.start().unwrap();
        timer.pause().unwrap();
        assert_eq!(TimerSnapshot::capture(&timer, false).start_label(), "Resume");
    }

    #[test]
    fn report_flattens_snapshot() {
        let mut timer = TimerState::new();
        timer.set_duration(65).unwrap();

        let report = StatusReport {
            timer: TimerSnapshot::capture(&timer, false),
            pending_input: String::new(),
            last_action: Some("set".to_string()),
            last_action_time: None,
            uptime: "0s".to_string(),
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["display"], "01:05");
        assert_eq!(json["run_state"], "idle");
        assert_eq!(json["duration"], 65);
        assert_eq!(json["last_action"], "set");
    }
}
