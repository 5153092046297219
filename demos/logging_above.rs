//! Logging Demo: Route `tracing` output above a live spinner.
//!
//! A `Refresher` thread flushes the spinner; log events are written through
//! an `Immediate` handle so they scroll above it instead of tearing it.
//! Set `RUST_LOG=debug` to see the writer's own events.

use std::io::Write;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use termview::{LiveWriter, Refresher};
use tracing_subscriber::EnvFilter;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn main() -> std::io::Result<()> {
    let live = Arc::new(LiveWriter::new());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(live.immediate())
        .init();

    let refresher = Refresher::spawn(Arc::clone(&live), Duration::from_millis(60))?;

    for i in 0..60_usize {
        let mut frame = &*live;
        live.clear_pending();
        writeln!(frame, "{} working... step {i}/60", TICKS[i % TICKS.len()])?;
        if i % 10 == 0 {
            tracing::info!(step = i, "checkpoint reached");
        }
        thread::sleep(Duration::from_millis(60));
    }

    let stats = refresher.stop();

    // The last frame stays on screen; the summary replaces it through the hook.
    writeln!(&*live, "done")?;
    live.flush_with(|out| writeln!(out, "{} frames drawn", stats.frames))
        .map_err(std::io::Error::from)?;
    Ok(())
}
