//! Flush benchmark: Measure frame buffering and redraw cost.
//!
//! Targets are in-memory sinks. `TtySink` reports itself interactive so the
//! control-sequence path is included.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::io::{self, Write};
use termview::{LiveWriter, OutputBuffer, Terminal};

/// A discarding sink that claims to be a terminal.
struct TtySink(io::Sink);

impl TtySink {
    fn new() -> Self {
        Self(io::sink())
    }
}

impl Write for TtySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl Terminal for TtySink {
    fn is_interactive(&self) -> bool {
        true
    }
}

/// A table frame with `rows` lines of typical progress output.
fn table_frame(rows: usize) -> Vec<u8> {
    let mut frame = Vec::new();
    for i in 0..rows {
        frame.extend_from_slice(format!("task {i:>3} [==============      ]  70%\n").as_bytes());
    }
    frame
}

fn buffered_write(c: &mut Criterion) {
    let writer = LiveWriter::with_target(io::sink());
    let line = b"task 001 [==============      ]  70%\n";

    c.bench_function("buffered_write_line", |b| {
        b.iter(|| {
            writer.write(black_box(line)).unwrap();
            writer.clear_pending();
        })
    });
}

fn flush_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("flush_frame");
    for rows in [1, 10, 50] {
        let frame = table_frame(rows);
        let writer = LiveWriter::with_target(TtySink::new());

        group.bench_with_input(BenchmarkId::from_parameter(rows), &frame, |b, frame| {
            b.iter(|| {
                writer.write(black_box(frame)).unwrap();
                writer.flush_frame().unwrap();
            })
        });
    }
    group.finish();
}

fn write_immediate(c: &mut Criterion) {
    let writer = LiveWriter::with_target(TtySink::new());
    writer.write(&table_frame(10)).unwrap();
    writer.flush_frame().unwrap();

    c.bench_function("write_immediate_over_10_lines", |b| {
        b.iter(|| writer.write_immediate(black_box(b"log line\n")).unwrap())
    });
}

fn erase_sequence(c: &mut Criterion) {
    let mut out = OutputBuffer::new();

    c.bench_function("erase_sequence_50_lines", |b| {
        b.iter(|| {
            out.clear();
            out.erase_lines(black_box(50)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    buffered_write,
    flush_frames,
    write_immediate,
    erase_sequence,
);
criterion_main!(benches);
