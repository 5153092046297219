//! Actors: background threads that drive a [`LiveWriter`](crate::LiveWriter).
//!
//! ```text
//! ┌──────────────┐   write()             ┌──────────────┐
//! │  Producers   │ ────────────────────▶ │              │
//! └──────────────┘   write_immediate()   │  LiveWriter  │ ──▶ terminal
//!                                        │              │
//! ┌──────────────┐   flush (interval)    │              │
//! │Refresh Thread│ ────────────────────▶ │              │
//! └──────────────┘                       └──────────────┘
//! ```

mod refresher;

pub use refresher::{RefreshStats, Refresher};
