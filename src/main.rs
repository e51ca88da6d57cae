//! Countdown - A terminal countdown timer
//!
//! This is the main entry point for the countdown application.

use tracing::{error, info, warn};

use countdown::{
    config::Config,
    console::{run_console, spawn_stdin_reader, HELP},
    state::AppState,
    tasks::display_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr, stdout belongs to the display
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting countdown v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: tick={}ms, duration={:?}", config.tick_ms, config.duration);

    let (state, ticker) = AppState::new(config.tick_period());
    let ticker_handle = tokio::spawn(ticker.run());
    let display_handle = tokio::spawn(display_task(state.subscribe(), tokio::io::stdout()));

    if let Some(duration) = &config.duration {
        state.set_duration(duration).await.map_err(anyhow::Error::msg)?;
    }

    println!("{}", HELP);

    let mut stdout = tokio::io::stdout();
    tokio::select! {
        result = run_console(&state, spawn_stdin_reader(), &mut stdout) => {
            if let Err(e) = result {
                error!("Console error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    if let Err(e) = state.shutdown().await {
        warn!("Failed to tear down timer: {}", e);
    }
    if let Err(e) = ticker_handle.await {
        error!("Ticker task failed: {}", e);
    }

    // The ticker task held the only sender, so the display drains and stops
    if let Err(e) = display_handle.await {
        error!("Display task failed: {}", e);
    }

    info!("Countdown shutdown complete");
    Ok(())
}
