//! Terminal console
//!
//! Each stdin line is one press on the timer's controls; see
//! [`ConsoleCommand`] for the vocabulary.

pub mod command;
pub mod render;

use std::io::BufRead;
use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::mpsc,
};
use tracing::{debug, error, info, warn};

use crate::state::AppState;

pub use command::ConsoleCommand;
pub use render::{render_line, HELP};

/// Read stdin on a dedicated thread and forward its lines.
///
/// A blocking read cannot be cancelled, so it lives outside the runtime
/// where it never holds up shutdown. The channel closes on EOF.
pub fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
        debug!("Stdin reader finished");
    });

    rx
}

/// Drive the timer from console lines until `quit` or end of input
pub async fn run_console<W>(
    state: &AppState,
    mut lines: mpsc::Receiver<String>,
    out: &mut W,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(line) = lines.recv().await {
        let command = ConsoleCommand::parse(&line);
        debug!("Console command: {:?}", command);

        let result = match command {
            ConsoleCommand::Nothing => continue,
            ConsoleCommand::Quit => {
                info!("Quit requested");
                return Ok(());
            }
            ConsoleCommand::Help => {
                out.write_all(HELP.as_bytes()).await?;
                out.write_all(b"\n").await?;
                out.flush().await?;
                continue;
            }
            ConsoleCommand::Status => {
                match state.status().await {
                    Ok(report) => {
                        let json = serde_json::to_string_pretty(&report)?;
                        out.write_all(json.as_bytes()).await?;
                        out.write_all(b"\n").await?;
                        out.flush().await?;
                    }
                    Err(e) => error!("Failed to get status: {}", e),
                }
                continue;
            }
            ConsoleCommand::Input(text) => state.type_input(&text),
            ConsoleCommand::Set(Some(text)) => state.set_duration(&text).await.map(|_| ()),
            ConsoleCommand::Set(None) => state.press_set().await.map(|_| ()),
            ConsoleCommand::Start => state.start().await.map(|_| ()),
            ConsoleCommand::Pause => state.pause().await.map(|_| ()),
            ConsoleCommand::Reset => state.reset().await.map(|_| ()),
        };

        if let Err(e) = result {
            error!("Timer command failed: {}", e);
        }
    }

    info!("Console input closed");
    Ok(())
}
