//! Ticker background task
//!
//! The task is the single owner of the [`TimerState`] and of the live
//! ticker. Commands and ticks are handled one at a time, so every update
//! is atomic and a new ticker is only ever created after the previous
//! one was dropped.

use std::time::Duration;
use tokio::{
    sync::{mpsc, oneshot, watch},
    time::{interval_at, Instant, Interval, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::state::{TickOutcome, TimerSnapshot, TimerState};

/// Button presses understood by the ticker task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetDuration(u64),
    Start,
    Pause,
    Reset,
    /// Reply with the current snapshot, change nothing
    Inspect,
    /// Release the ticker and stop the task
    Teardown,
}

/// A command together with the channel its resulting snapshot goes to
#[derive(Debug)]
pub struct Request {
    pub command: Command,
    pub reply: oneshot::Sender<TimerSnapshot>,
}

pub struct TickerTask {
    requests: mpsc::Receiver<Request>,
    snapshot_tx: watch::Sender<TimerSnapshot>,
    period: Duration,
    timer: TimerState,
    /// Present exactly while the timer is running
    ticker: Option<Interval>,
}

impl TickerTask {
    pub fn new(
        requests: mpsc::Receiver<Request>,
        snapshot_tx: watch::Sender<TimerSnapshot>,
        period: Duration,
    ) -> Self {
        Self {
            requests,
            snapshot_tx,
            period,
            timer: TimerState::new(),
            ticker: None,
        }
    }

    /// Process commands and ticks until torn down or every handle is gone
    pub async fn run(mut self) {
        info!("Starting ticker task with {:?} period", self.period);

        loop {
            tokio::select! {
                request = self.requests.recv() => {
                    let Some(Request { command, reply }) = request else {
                        debug!("All timer handles dropped");
                        break;
                    };

                    self.apply(command);

                    // The caller may have stopped waiting; the state change stands
                    if reply.send(self.snapshot()).is_err() {
                        debug!("Reply for {:?} dropped", command);
                    }

                    if command == Command::Teardown {
                        break;
                    }
                }

                _ = next_tick(&mut self.ticker) => {
                    self.on_tick();
                }
            }
        }

        self.release_ticker();
        info!("Ticker task stopped");
    }

    fn apply(&mut self, command: Command) {
        let result = match command {
            Command::SetDuration(seconds) => self.timer.set_duration(seconds),
            Command::Start => self.timer.start(),
            Command::Pause => self.timer.pause(),
            Command::Reset => {
                self.timer.reset();
                Ok(())
            }
            Command::Inspect => return,
            Command::Teardown => {
                self.release_ticker();
                return;
            }
        };

        match result {
            Ok(()) => {
                self.sync_ticker();
                info!(
                    "{:?}: {} seconds left, {}",
                    command,
                    self.timer.time_left(),
                    self.timer.run_state().as_str()
                );
                self.publish();
            }
            Err(e) => debug!("Ignoring {:?}: {}", command, e),
        }
    }

    fn on_tick(&mut self) {
        match self.timer.tick() {
            TickOutcome::Remaining(left) => debug!("Tick: {} seconds left", left),
            TickOutcome::Finished => info!("Countdown finished"),
            TickOutcome::Ignored => warn!("Tick fired while the timer was not running"),
        }
        self.sync_ticker();
        self.publish();
    }

    /// Hold a ticker if and only if the timer is running
    fn sync_ticker(&mut self) {
        match (self.timer.is_running(), self.ticker.is_some()) {
            (true, false) => {
                let mut ticker = interval_at(Instant::now() + self.period, self.period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                self.ticker = Some(ticker);
                debug!("Ticker established");
            }
            (false, true) => self.release_ticker(),
            _ => {}
        }
    }

    fn release_ticker(&mut self) {
        if self.ticker.take().is_some() {
            debug!("Ticker released");
        }
    }

    fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::capture(&self.timer, self.ticker.is_some())
    }

    fn publish(&self) {
        if let Err(e) = self.snapshot_tx.send(self.snapshot()) {
            debug!("No display listening for timer updates: {}", e);
        }
    }
}

/// Resolve on the next tick, or never when no ticker is held
async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
