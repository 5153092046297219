//! Recording terminal used by unit tests.

use super::Terminal;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Something that happened to a [`MockTerminal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Write(Vec<u8>),
    Erase(usize),
}

/// A terminal that records writes and erases instead of emitting them.
///
/// Clones share the same log and switches, so a test can keep one handle
/// while a writer owns another.
#[derive(Debug, Clone, Default)]
pub struct MockTerminal {
    events: Arc<Mutex<Vec<Event>>>,
    interactive: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    fail_erases: Arc<AtomicBool>,
}

impl MockTerminal {
    pub fn interactive() -> Self {
        let term = Self::default();
        term.set_interactive(true);
        term
    }

    pub fn piped() -> Self {
        Self::default()
    }

    pub fn set_interactive(&self, interactive: bool) {
        self.interactive.store(interactive, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_erases(&self, fail: bool) {
        self.fail_erases.store(fail, Ordering::SeqCst);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn take_events(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }

    pub fn erases(&self) -> Vec<usize> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Erase(n) => Some(n),
                Event::Write(_) => None,
            })
            .collect()
    }

    /// All written bytes, concatenated.
    pub fn output(&self) -> Vec<u8> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Write(bytes) => Some(bytes),
                Event::Erase(_) => None,
            })
            .flatten()
            .collect()
    }
}

impl Write for MockTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "mock write failure"));
        }
        self.events.lock().unwrap().push(Event::Write(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Terminal for MockTerminal {
    fn is_interactive(&self) -> bool {
        self.interactive.load(Ordering::SeqCst)
    }

    fn erase_lines(&mut self, count: usize) -> io::Result<()> {
        if self.fail_erases.load(Ordering::SeqCst) {
            return Err(io::Error::other("mock erase failure"));
        }
        self.events.lock().unwrap().push(Event::Erase(count));
        Ok(())
    }
}
