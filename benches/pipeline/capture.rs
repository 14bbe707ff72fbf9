//! Benchmarks for the realtime capture path.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use mcpdisp::{
    io::{MidiThru, RawMidiEvent, ThruFull},
    transport::frame_queue,
    Capture, CaptureStats,
};

use super::mcp_burst;
use crate::BURST_SIZES;

/// Pass-through that accepts and discards everything.
struct Discard;

impl MidiThru for Discard {
    fn forward(&mut self, event: RawMidiEvent<'_>) -> Result<(), ThruFull> {
        black_box(event);
        Ok(())
    }
}

pub fn bench_capture(c: &mut Criterion) {
    let mut group = c.benchmark_group("capture");

    for &size in BURST_SIZES {
        let burst = mcp_burst(size);
        let (tx, mut rx) = frame_queue(64 * 1024);
        let mut capture = Capture::new(tx, CaptureStats::new());

        group.bench_with_input(BenchmarkId::new("period", size), &size, |b, _| {
            b.iter(|| {
                let events = burst.iter().enumerate().map(|(i, bytes)| RawMidiEvent {
                    time: i as u32,
                    bytes,
                });
                capture.process(black_box(events), &mut Discard);

                // keep the ring from filling up between iterations
                while let Ok(Some(frame)) = rx.next_frame() {
                    black_box(frame);
                }
            })
        });
    }

    group.finish();
}
