//! Benchmarks for one poll tick: deframe, decode and meter decay.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use mcpdisp::{
    surface::{DisplayMode, MeterDecay},
    transport::frame_queue,
    Poller,
};

use super::mcp_burst;
use crate::BURST_SIZES;

pub fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for &size in BURST_SIZES {
        let burst = mcp_burst(size);
        let (mut tx, rx) = frame_queue(64 * 1024);
        let mut poller = Poller::new(rx, DisplayMode::new(true, true), MeterDecay::default());

        group.bench_with_input(BenchmarkId::new("tick", size), &size, |b, _| {
            b.iter(|| {
                for msg in &burst {
                    let _ = tx.push_frame(msg);
                }
                black_box(poller.tick().ok());
                black_box(poller.state());
            })
        });

        // idle tick: nothing queued, decay only
        group.bench_with_input(BenchmarkId::new("idle_tick", size), &size, |b, _| {
            b.iter(|| black_box(poller.tick().ok()))
        });
    }

    group.finish();
}
