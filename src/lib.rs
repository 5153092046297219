//! # Termview
//!
//! In-place terminal redraw for progress tables, bars and spinners.
//!
//! A [`LiveWriter`] buffers everything written to it as the next *frame*.
//! Each flush erases the lines the previous frame occupied and writes the new
//! one in their place, so the region updates instead of scrolling. Messages
//! that must stay on screen go through [`LiveWriter::write_immediate`] (or an
//! [`Immediate`] handle), which clears the region, prints, and lets the next
//! flush redraw below.
//!
//! ## Core Concepts
//!
//! - **Frames**: bytes written since the last flush, committed as one write
//! - **Erase on interactive targets only**: files and pipes get plain output
//! - **Pass-through writes**: log lines printed above the live region
//! - **Refresher**: optional thread that flushes on a fixed interval
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::io::Write;
//! use termview::LiveWriter;
//!
//! let mut live = LiveWriter::new();
//! for pct in (0..=100).step_by(10) {
//!     writeln!(live, "downloading... {pct}%").unwrap();
//!     live.flush_frame().unwrap();
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod error;
pub mod terminal;
pub mod writer;

// Re-exports for convenience
pub use actor::{RefreshStats, Refresher};
pub use error::{Error, HookError, Result};
pub use terminal::{Interactivity, OutputBuffer, Terminal};
pub use writer::{Immediate, LiveWriter, WriterConfig};
