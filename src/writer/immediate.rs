//! Pass-through handle for messages that must not land in the live region.

use super::LiveWriter;
use crate::terminal::Terminal;
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;

/// A cloneable [`Write`] handle that prints above a shared [`LiveWriter`].
///
/// Every write erases the live region first; the region reappears on the
/// writer's next flush. It also works as a `tracing_subscriber` writer:
///
/// ```rust,ignore
/// let live = Arc::new(LiveWriter::new());
/// tracing_subscriber::fmt().with_writer(live.immediate()).init();
/// ```
pub struct Immediate<W: Terminal> {
    writer: Arc<LiveWriter<W>>,
}

impl<W: Terminal> Immediate<W> {
    pub(super) const fn new(writer: Arc<LiveWriter<W>>) -> Self {
        Self { writer }
    }

    /// The live writer this handle prints above.
    pub const fn live(&self) -> &Arc<LiveWriter<W>> {
        &self.writer
    }
}

impl<W: Terminal> Clone for Immediate<W> {
    fn clone(&self) -> Self {
        Self {
            writer: Arc::clone(&self.writer),
        }
    }
}

impl<W: Terminal> Write for Immediate<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write_immediate(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush_target()
    }
}

impl<'a, W: Terminal + 'a> MakeWriter<'a> for Immediate<W> {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
