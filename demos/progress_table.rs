//! Progress Table Demo: Redraw a multi-row table in place.
//!
//! Four worker threads advance their own progress; the main thread renders
//! the table into a `LiveWriter` and flushes it every 50ms. When a worker
//! finishes, its completion line is printed above the table.
//!
//! Redirect stdout to a file to see the non-interactive fallback.

use std::io::Write;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use termview::LiveWriter;

const WORKERS: usize = 4;
const BAR_WIDTH: usize = 30;

fn render_bar(pct: u32) -> String {
    let filled = BAR_WIDTH * pct as usize / 100;
    format!("[{}{}]", "=".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

fn main() -> termview::Result<()> {
    let live = Arc::new(LiveWriter::new());
    let progress: Arc<Vec<AtomicU32>> =
        Arc::new((0..WORKERS).map(|_| AtomicU32::new(0)).collect());

    let handles: Vec<_> = (0..WORKERS)
        .map(|id| {
            let live = Arc::clone(&live);
            let progress = Arc::clone(&progress);
            thread::spawn(move || {
                let step = Duration::from_millis(20 + 15 * id as u64);
                for pct in 1..=100 {
                    progress[id].store(pct, Ordering::Relaxed);
                    thread::sleep(step);
                }
                let _ = live.write_immediate(format!("worker {id} finished\n").as_bytes());
            })
        })
        .collect();

    loop {
        let mut frame = &*live;
        writeln!(frame, "{:<10} {:<32} {:>4}", "WORKER", "PROGRESS", "PCT")?;
        let mut done = 0;
        for (id, pct) in progress.iter().enumerate() {
            let pct = pct.load(Ordering::Relaxed);
            writeln!(frame, "{:<10} {} {:>3}%", format!("#{id}"), render_bar(pct), pct)?;
            if pct == 100 {
                done += 1;
            }
        }
        live.flush_frame()?;

        if done == WORKERS {
            break;
        }
        thread::sleep(Duration::from_millis(50));
    }

    for handle in handles {
        let _ = handle.join();
    }
    Ok(())
}
