//! Terminal capabilities: interactivity detection and line erasing.
//!
//! A [`LiveWriter`](crate::LiveWriter) only erases lines on targets that
//! report themselves interactive. Anything else (files, pipes, in-memory
//! buffers) degrades to plain sequential output.

mod output;

#[cfg(test)]
pub(crate) mod mock;

pub use output::OutputBuffer;

use crossterm::tty::IsTty;
use std::fs::File;
use std::io::{self, Cursor, Sink, Stderr, Stdout, Write};

/// An output sink that may be an interactive terminal.
///
/// The defaults describe a non-interactive sink that still knows how to emit
/// the erase sequence, so in-memory and file targets only need an empty impl.
pub trait Terminal: Write {
    /// Whether the sink is currently attached to an interactive terminal.
    ///
    /// Called before every erase; implementations must not cache the answer.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Move the cursor up `count` lines, clearing each one.
    fn erase_lines(&mut self, count: usize) -> io::Result<()> {
        if count == 0 {
            return Ok(());
        }
        let mut out = OutputBuffer::with_capacity(count * 8);
        out.erase_lines(count)?;
        out.flush_to(self)
    }
}

impl Terminal for Stdout {
    fn is_interactive(&self) -> bool {
        self.is_tty()
    }
}

impl Terminal for Stderr {
    fn is_interactive(&self) -> bool {
        self.is_tty()
    }
}

impl Terminal for File {
    fn is_interactive(&self) -> bool {
        self.is_tty()
    }
}

impl Terminal for Vec<u8> {}

impl Terminal for Sink {}

impl<T> Terminal for Cursor<T> where Cursor<T>: Write {}

impl<T: Terminal + ?Sized> Terminal for Box<T> {
    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }

    fn erase_lines(&mut self, count: usize) -> io::Result<()> {
        (**self).erase_lines(count)
    }
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }

    fn erase_lines(&mut self, count: usize) -> io::Result<()> {
        (**self).erase_lines(count)
    }
}

/// How a writer decides whether its target is interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interactivity {
    /// Ask the target on every erase.
    #[default]
    Auto,
    /// Never erase, even on an interactive target.
    Never,
}

impl Interactivity {
    /// Resolve against a target.
    pub fn resolve<T: Terminal + ?Sized>(self, target: &T) -> bool {
        match self {
            Self::Auto => target.is_interactive(),
            Self::Never => false,
        }
    }
}
