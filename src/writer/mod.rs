//! `LiveWriter`: Buffered, in-place redraw of a terminal region.
//!
//! Content written to a [`LiveWriter`] is held back as the next *frame*.
//! Flushing erases the lines the previous frame occupied and writes the new
//! one in its place, so a progress table redraws instead of scrolling.
//!
//! ```text
//!  write()  write()        flush()                write_immediate()
//!    │        │              │                          │
//!    ▼        ▼              ▼                          ▼
//!  ┌──────────────┐   erase N lines ─▶ hook ─▶    erase N lines
//!  │   pending    │ ─────────────────────────▶    write message
//!  └──────────────┘   write frame, N = '\n' count  (pending untouched)
//! ```
//!
//! Only logical newlines are counted. A line wider than the terminal wraps
//! onto extra rows that the next erase will not reach.

mod immediate;

pub use immediate::Immediate;

use crate::error::{Error, HookError, Result};
use crate::terminal::{Interactivity, Terminal};
use std::io::{self, Stdout, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Configuration for a [`LiveWriter`].
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Initial capacity of the pending frame buffer.
    pub capacity: usize,
    /// Whether erasing follows the target or is switched off.
    pub interactivity: Interactivity,
    /// Interval used by [`Refresher::start`](crate::Refresher::start).
    pub refresh_interval: Duration,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            capacity: 4096,
            interactivity: Interactivity::Auto,
            refresh_interval: Duration::from_millis(100),
        }
    }
}

/// Summary of a frame committed by a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    /// Bytes written to the target.
    pub bytes: usize,
    /// Lines the frame now occupies.
    pub lines: usize,
    /// Lines erased before writing, `None` if the target was not interactive.
    pub erased: Option<usize>,
}

/// State guarded by the writer's lock.
struct State<W> {
    target: W,
    pending: Vec<u8>,
    /// Lines occupied by the last flushed frame.
    rendered_lines: usize,
}

impl<W: Terminal> State<W> {
    /// Erase the live region if the target is interactive.
    fn erase(&mut self, interactivity: Interactivity) -> io::Result<Option<usize>> {
        if !interactivity.resolve(&self.target) {
            return Ok(None);
        }
        self.target.erase_lines(self.rendered_lines)?;
        Ok(Some(self.rendered_lines))
    }

    /// Run one flush. A failed erase does not stop the frame; its error is
    /// handed back separately so it can be logged once the lock is released.
    fn flush<F, E>(
        &mut self,
        interactivity: Interactivity,
        on_erased: F,
    ) -> (Result<Option<Frame>>, Option<io::Error>)
    where
        F: FnOnce(&mut W) -> std::result::Result<(), E>,
        E: Into<HookError>,
    {
        if self.pending.is_empty() {
            return (Ok(None), None);
        }

        let (erased, erase_error) = match self.erase(interactivity) {
            Ok(erased) => (erased, None),
            Err(e) => (None, Some(e)),
        };
        (self.commit(on_erased, erased), erase_error)
    }

    fn commit<F, E>(&mut self, on_erased: F, erased: Option<usize>) -> Result<Option<Frame>>
    where
        F: FnOnce(&mut W) -> std::result::Result<(), E>,
        E: Into<HookError>,
    {
        on_erased(&mut self.target).map_err(|e| Error::Hook(e.into()))?;

        // Committed before the write; a failed write still consumes the frame.
        self.rendered_lines = count_lines(&self.pending);
        let written = write_through(&mut self.target, &self.pending);
        let bytes = self.pending.len();
        self.pending.clear();
        written?;

        Ok(Some(Frame {
            bytes,
            lines: self.rendered_lines,
            erased,
        }))
    }
}

/// Number of terminal lines a frame occupies.
///
/// A trailing partial line has no newline yet and does not count.
fn count_lines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == b'\n').count()
}

fn write_through<W: Write + ?Sized>(target: &mut W, bytes: &[u8]) -> io::Result<()> {
    target.write_all(bytes)?;
    target.flush()
}

fn log_erase_failure(error: &io::Error) {
    tracing::warn!(target: "termview.erase", error = %error, "erase_failed");
}

/// A writer that redraws its last frame in place.
///
/// All operations take a single lock, so one writer can be shared between a
/// refresh loop and any number of producer threads. There is exactly one live
/// region per writer; two writers on the same terminal will erase each other's
/// lines.
pub struct LiveWriter<W: Terminal = Stdout> {
    state: Mutex<State<W>>,
    config: WriterConfig,
}

impl LiveWriter<Stdout> {
    /// Create a writer bound to the process's standard output.
    pub fn new() -> Self {
        Self::with_target(io::stdout())
    }
}

impl Default for LiveWriter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Terminal> LiveWriter<W> {
    /// Create a writer bound to `target` with default configuration.
    pub fn with_target(target: W) -> Self {
        Self::with_config(target, WriterConfig::default())
    }

    /// Create a writer bound to `target` with custom configuration.
    pub fn with_config(target: W, config: WriterConfig) -> Self {
        Self {
            state: Mutex::new(State {
                target,
                pending: Vec::with_capacity(config.capacity),
                rendered_lines: 0,
            }),
            config,
        }
    }

    /// Get the configuration.
    pub const fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Hook panics leave the state structurally valid, so a poisoned lock is
    /// recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, State<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append `buf` to the next frame.
    ///
    /// Never touches the terminal.
    pub fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.lock().pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    /// Erase the live region, then write `buf` straight to the target.
    ///
    /// The pending frame and the rendered line count are left alone, so the
    /// next flush redraws the frame below the message. The message is written
    /// even if the erase fails; only the target's write error is returned.
    pub fn write_immediate(&self, buf: &[u8]) -> io::Result<usize> {
        let (erase_error, written) = {
            let mut state = self.lock();
            let erase_error = state.erase(self.config.interactivity).err();
            (erase_error, write_through(&mut state.target, buf))
        };
        if let Some(e) = &erase_error {
            log_erase_failure(e);
        }
        written.map(|()| buf.len())
    }

    /// Erase the lines of the last flushed frame, if the target is interactive.
    pub fn erase(&self) -> io::Result<()> {
        let erased = self.lock().erase(self.config.interactivity)?;
        tracing::trace!(target: "termview.erase", erased = ?erased, "region_erased");
        Ok(())
    }

    /// Erase the last frame and write the pending one in its place.
    ///
    /// A no-op when nothing was written since the last flush.
    pub fn flush_frame(&self) -> Result<()> {
        self.flush_with(|_| Ok::<(), HookError>(()))
    }

    /// Like [`flush_frame`](Self::flush_frame), calling `on_erased` after the
    /// old frame is erased and before the new one is written.
    ///
    /// A failed erase is logged and the flush carries on.
    ///
    /// The hook runs with the lock held and receives the target directly; it
    /// must not call back into this writer. If it fails the flush is aborted
    /// and the pending frame is kept for the next attempt, which will erase
    /// the same line count again.
    pub fn flush_with<F, E>(&self, on_erased: F) -> Result<()>
    where
        F: FnOnce(&mut W) -> std::result::Result<(), E>,
        E: Into<HookError>,
    {
        self.flush_inner(on_erased).map(|_| ())
    }

    pub(crate) fn flush_inner<F, E>(&self, on_erased: F) -> Result<Option<Frame>>
    where
        F: FnOnce(&mut W) -> std::result::Result<(), E>,
        E: Into<HookError>,
    {
        let (outcome, erase_error) = self.lock().flush(self.config.interactivity, on_erased);

        // Logged with the lock released: a subscriber may write through us.
        if let Some(e) = &erase_error {
            log_erase_failure(e);
        }
        match &outcome {
            Ok(Some(frame)) => tracing::trace!(
                target: "termview.flush",
                bytes = frame.bytes,
                lines = frame.lines,
                erased = ?frame.erased,
                "frame_flushed"
            ),
            Ok(None) => {}
            Err(e) => tracing::debug!(target: "termview.flush", error = ?e, "flush_failed"),
        }
        outcome
    }

    /// Flush the target without touching the frame.
    pub(crate) fn flush_target(&self) -> io::Result<()> {
        self.lock().target.flush()
    }

    /// Drop the pending frame without writing it.
    pub fn clear_pending(&self) {
        self.lock().pending.clear();
    }

    /// Lines occupied by the last flushed frame.
    pub fn rendered_lines(&self) -> usize {
        self.lock().rendered_lines
    }

    /// Bytes written since the last flush.
    pub fn pending_len(&self) -> usize {
        self.lock().pending.len()
    }

    /// Whether the next erase would reach the terminal.
    pub fn is_interactive(&self) -> bool {
        self.config.interactivity.resolve(&self.lock().target)
    }

    /// A handle whose writes go through [`write_immediate`](Self::write_immediate).
    pub fn immediate(self: &Arc<Self>) -> Immediate<W> {
        Immediate::new(Arc::clone(self))
    }

    /// Recover the target. Any unflushed frame is discarded.
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .target
    }
}

impl<W: Terminal> Write for LiveWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        LiveWriter::<W>::write(self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_frame().map_err(io::Error::from)
    }
}

impl<W: Terminal> Write for &LiveWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        LiveWriter::<W>::write(*self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_frame().map_err(io::Error::from)
    }
}
