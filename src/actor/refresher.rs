//! Refresher Actor: Dedicated thread that flushes a live writer on a timer.
//!
//! Producers only ever call [`LiveWriter::write`] and
//! [`LiveWriter::write_immediate`]; this thread is the single refresh loop
//! that turns buffered content into frames.

use crate::error::HookError;
use crate::terminal::Terminal;
use crate::writer::LiveWriter;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Refresh statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshStats {
    /// Non-empty frames flushed.
    pub frames: u64,
    /// Flushes that returned an error.
    pub failures: u64,
}

#[derive(Debug, Default)]
struct Counters {
    frames: AtomicU64,
    failures: AtomicU64,
}

/// Refresher actor that periodically flushes a [`LiveWriter`].
pub struct Refresher {
    /// Handle to the refresh thread.
    handle: Option<JoinHandle<()>>,
    /// Dropping or sending on this stops the loop.
    shutdown_tx: Sender<()>,
    counters: Arc<Counters>,
}

impl Refresher {
    /// Spawn a refresher using the writer's configured interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the thread.
    pub fn start<W>(writer: Arc<LiveWriter<W>>) -> io::Result<Self>
    where
        W: Terminal + Send + 'static,
    {
        let interval = writer.config().refresh_interval;
        Self::spawn(writer, interval)
    }

    /// Spawn a refresher that flushes `writer` every `interval`.
    ///
    /// The last frame is flushed once more when the refresher stops.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the thread.
    pub fn spawn<W>(writer: Arc<LiveWriter<W>>, interval: Duration) -> io::Result<Self>
    where
        W: Terminal + Send + 'static,
    {
        let (shutdown_tx, shutdown_rx) = bounded(1);
        let counters = Arc::new(Counters::default());
        let counters_clone = Arc::clone(&counters);

        let handle = thread::Builder::new()
            .name("termview-refresh".to_string())
            .spawn(move || {
                Self::run_loop(&writer, &shutdown_rx, &counters_clone, interval);
            })?;

        tracing::debug!(target: "termview.refresh", interval = ?interval, "refresher_started");

        Ok(Self {
            handle: Some(handle),
            shutdown_tx,
            counters,
        })
    }

    /// Current statistics.
    pub fn stats(&self) -> RefreshStats {
        RefreshStats {
            frames: self.counters.frames.load(Ordering::Relaxed),
            failures: self.counters.failures.load(Ordering::Relaxed),
        }
    }

    /// Signal the refresh thread to shutdown.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.try_send(());
    }

    /// Stop the thread, wait for its final flush and return the statistics.
    pub fn stop(mut self) -> RefreshStats {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        let stats = self.stats();
        tracing::debug!(
            target: "termview.refresh",
            frames = stats.frames,
            failures = stats.failures,
            "refresher_stopped"
        );
        stats
    }

    /// Main refresh loop.
    fn run_loop<W: Terminal>(
        writer: &LiveWriter<W>,
        shutdown_rx: &Receiver<()>,
        counters: &Counters,
        interval: Duration,
    ) {
        loop {
            match shutdown_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => Self::tick(writer, counters),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    Self::tick(writer, counters);
                    break;
                }
            }
        }
    }

    fn tick<W: Terminal>(writer: &LiveWriter<W>, counters: &Counters) {
        match writer.flush_inner(|_| Ok::<(), HookError>(())) {
            Ok(Some(_)) => {
                counters.frames.fetch_add(1, Ordering::Relaxed);
            }
            Ok(None) => {}
            Err(e) => {
                counters.failures.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(target: "termview.refresh", error = ?e, "refresh_failed");
            }
        }
    }
}

impl Drop for Refresher {
    fn drop(&mut self) {
        self.shutdown();
    }
}
