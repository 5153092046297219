//! `OutputBuffer`: Single-syscall buffer for erase control sequences.

use crossterm::{
    cursor::MoveUp,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// Erase sequences are accumulated here, then flushed in a single `write()`
/// so a half-erased region is never visible.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical live region.
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Queue the sequence that erases `count` lines above the cursor.
    ///
    /// Each line is one cursor-up followed by a whole-line clear, leaving the
    /// cursor at the start of the topmost erased line.
    pub fn erase_lines(&mut self, count: usize) -> io::Result<()> {
        for _ in 0..count {
            queue!(self.data, MoveUp(1), Clear(ClearType::CurrentLine))?;
        }
        Ok(())
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erase_zero_lines_is_empty() {
        let mut out = OutputBuffer::new();
        out.erase_lines(0).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_erase_lines_sequence() {
        let mut out = OutputBuffer::new();
        out.erase_lines(2).unwrap();
        assert_eq!(out.as_bytes(), b"\x1b[1A\x1b[2K\x1b[1A\x1b[2K");
    }

    #[test]
    fn test_flush_to_single_write() {
        let mut out = OutputBuffer::new();
        out.erase_lines(1).unwrap();

        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"\x1b[1A\x1b[2K");

        out.clear();
        assert!(out.is_empty());
    }
}
