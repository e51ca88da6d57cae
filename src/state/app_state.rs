//! Handle to the running countdown

use std::{sync::Mutex, time::{Duration, Instant}};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

use super::{parse_duration, StatusReport, TimerSnapshot};
use crate::{
    tasks::{Command, Request, TickerTask},
    utils::format_uptime,
};

/// Depth of the command queue between the console and the ticker task
const REQUEST_QUEUE: usize = 32;

/// Presentation-side state plus the channel to the ticker task
#[derive(Debug)]
pub struct AppState {
    requests: mpsc::Sender<Request>,
    /// Latest snapshot published by the ticker task
    snapshot_rx: watch::Receiver<TimerSnapshot>,
    /// Text currently typed into the duration input
    pending_input: Mutex<String>,
    /// Last action tracking
    last_action: Mutex<Option<String>>,
    last_action_time: Mutex<Option<DateTime<Utc>>>,
    start_time: Instant,
}

impl AppState {
    /// Create the handle and the ticker task it drives.
    ///
    /// The task does nothing until spawned; dropping every handle stops it.
    pub fn new(tick_period: Duration) -> (Self, TickerTask) {
        let (requests, requests_rx) = mpsc::channel(REQUEST_QUEUE);
        let (snapshot_tx, snapshot_rx) = watch::channel(TimerSnapshot::default());

        let state = Self {
            requests,
            snapshot_rx,
            pending_input: Mutex::new(String::new()),
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            start_time: Instant::now(),
        };
        let task = TickerTask::new(requests_rx, snapshot_tx, tick_period);

        (state, task)
    }

    /// Replace the text of the duration input
    pub fn type_input(&self, text: &str) -> Result<(), String> {
        let mut input = self.pending_input.lock()
            .map_err(|e| format!("Failed to lock duration input: {}", e))?;
        *input = text.to_string();
        Ok(())
    }

    pub fn pending_input(&self) -> Result<String, String> {
        self.pending_input.lock()
            .map(|input| input.clone())
            .map_err(|e| format!("Failed to lock duration input: {}", e))
    }

    /// Press Set: arm the timer with whatever the input holds.
    ///
    /// Input that is not a positive number is ignored and left in place.
    pub async fn press_set(&self) -> Result<TimerSnapshot, String> {
        let parsed = {
            let mut input = self.pending_input.lock()
                .map_err(|e| format!("Failed to lock duration input: {}", e))?;

            let parsed = parse_duration(&input);
            if parsed.is_ok() {
                input.clear();
            }
            parsed
        };

        match parsed {
            Ok(seconds) => self.send("set", Command::SetDuration(seconds)).await,
            Err(e) => {
                debug!("Set ignored: {}", e);
                self.snapshot().await
            }
        }
    }

    /// Type `text` into the input and press Set
    pub async fn set_duration(&self, text: &str) -> Result<TimerSnapshot, String> {
        self.type_input(text)?;
        self.press_set().await
    }

    pub async fn start(&self) -> Result<TimerSnapshot, String> {
        self.send("start", Command::Start).await
    }

    pub async fn pause(&self) -> Result<TimerSnapshot, String> {
        self.send("pause", Command::Pause).await
    }

    pub async fn reset(&self) -> Result<TimerSnapshot, String> {
        self.send("reset", Command::Reset).await
    }

    /// Ask the ticker task for its current snapshot
    pub async fn snapshot(&self) -> Result<TimerSnapshot, String> {
        self.request(Command::Inspect).await
    }

    /// Release the ticker and stop the ticker task
    pub async fn shutdown(&self) -> Result<TimerSnapshot, String> {
        info!("Tearing down countdown");
        self.request(Command::Teardown).await
    }

    /// Receiver for every snapshot the ticker task publishes
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Snapshot plus presentation state, for the status command
    pub async fn status(&self) -> Result<StatusReport, String> {
        let timer = self.snapshot().await?;
        let (last_action, last_action_time) = self.get_last_action();

        Ok(StatusReport {
            timer,
            pending_input: self.pending_input()?,
            last_action,
            last_action_time,
            uptime: format_uptime(self.start_time),
        })
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    async fn send(&self, action: &str, command: Command) -> Result<TimerSnapshot, String> {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        self.request(command).await
    }

    async fn request(&self, command: Command) -> Result<TimerSnapshot, String> {
        let (reply, reply_rx) = oneshot::channel();

        self.requests
            .send(Request { command, reply })
            .await
            .map_err(|_| format!("Ticker task is gone, cannot send {:?}", command))?;

        reply_rx
            .await
            .map_err(|_| format!("Ticker task stopped before answering {:?}", command))
    }
}
