//! Display refresh background task

use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::watch,
};
use tracing::{debug, warn};

use crate::{console::render_line, state::TimerSnapshot};

/// Render the current snapshot, then every change until the ticker task
/// goes away
pub async fn display_task<W>(mut snapshots: watch::Receiver<TimerSnapshot>, mut out: W)
where
    W: AsyncWrite + Unpin,
{
    debug!("Starting display task");
    let mut last_line = String::new();

    loop {
        let line = render_line(&snapshots.borrow_and_update());
        if line != last_line {
            if let Err(e) = write_line(&mut out, &line).await {
                warn!("Failed to refresh display: {}", e);
                break;
            }
            last_line = line;
        }

        if snapshots.changed().await.is_err() {
            break;
        }
    }

    debug!("Display task stopped");
}

async fn write_line<W>(out: &mut W, line: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}
