//! Error type returned by [`LiveWriter`](crate::LiveWriter) flushes.

use std::io;

/// Boxed error produced by a flush hook.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by a flush.
///
/// A non-interactive target is never an error: erasing is simply skipped.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target failed while writing a frame.
    #[error("terminal write failed")]
    Io(#[from] io::Error),

    /// The hook passed to [`LiveWriter::flush_with`](crate::LiveWriter::flush_with)
    /// failed. The pending frame was kept for the next flush.
    #[error("flush hook failed")]
    Hook(#[source] HookError),
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(e) => e,
            Error::Hook(e) => Self::other(e),
        }
    }
}

/// Result alias for flush operations.
pub type Result<T> = std::result::Result<T, Error>;
