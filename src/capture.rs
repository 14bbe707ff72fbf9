//! Realtime capture: the only code that runs inside the audio callback.
//!
//! For every incoming event it forwards a verbatim copy to the
//! pass-through port and frames the event into the transport queue. It
//! does no decoding, no logging and no allocation. Drops are counted in
//! [`CaptureStats`] so the poll thread can report them.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use crate::{
    io::{MidiThru, RawMidiEvent},
    transport::{FrameProducer, PushFrameError},
};

/// Lock-free counters shared between the callback and the poll thread.
#[derive(Debug, Default)]
pub struct CaptureStats {
    captured: AtomicU64,
    queue_full: AtomicU64,
    oversized: AtomicU64,
    thru_dropped: AtomicU64,
}

/// Plain copy of [`CaptureStats`] at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureCounts {
    /// Events framed into the queue.
    pub captured: u64,
    /// Events dropped because the queue had no room.
    pub queue_full: u64,
    /// Events too long to frame.
    pub oversized: u64,
    /// Events the pass-through port could not take.
    pub thru_dropped: u64,
}

impl CaptureStats {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn snapshot(&self) -> CaptureCounts {
        CaptureCounts {
            captured: self.captured.load(Ordering::Relaxed),
            queue_full: self.queue_full.load(Ordering::Relaxed),
            oversized: self.oversized.load(Ordering::Relaxed),
            thru_dropped: self.thru_dropped.load(Ordering::Relaxed),
        }
    }
}

impl CaptureCounts {
    /// Frames lost on the way to the decoder.
    pub fn dropped(&self) -> u64 {
        self.queue_full + self.oversized
    }

    /// Counts accumulated since `earlier`.
    pub fn since(&self, earlier: &CaptureCounts) -> CaptureCounts {
        CaptureCounts {
            captured: self.captured.wrapping_sub(earlier.captured),
            queue_full: self.queue_full.wrapping_sub(earlier.queue_full),
            oversized: self.oversized.wrapping_sub(earlier.oversized),
            thru_dropped: self.thru_dropped.wrapping_sub(earlier.thru_dropped),
        }
    }
}

/// Producer side of the pipeline, owned by the realtime process handler.
pub struct Capture {
    frames: FrameProducer,
    stats: Arc<CaptureStats>,
}

impl Capture {
    pub fn new(frames: FrameProducer, stats: Arc<CaptureStats>) -> Self {
        Self { frames, stats }
    }

    /// Handle every event of one period, in delivery order.
    pub fn process<'a, I, T>(&mut self, events: I, thru: &mut T)
    where
        I: IntoIterator<Item = RawMidiEvent<'a>>,
        T: MidiThru + ?Sized,
    {
        for event in events {
            self.capture(event, thru);
        }
    }

    /// Forward one event, then try to frame it.
    pub fn capture<T: MidiThru + ?Sized>(&mut self, event: RawMidiEvent<'_>, thru: &mut T) {
        if thru.forward(event).is_err() {
            self.stats.thru_dropped.fetch_add(1, Ordering::Relaxed);
        }

        let counter = match self.frames.push_frame(event.bytes) {
            Ok(()) => &self.stats.captured,
            Err(PushFrameError::Full) => &self.stats.queue_full,
            Err(PushFrameError::Oversized) => &self.stats.oversized,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{io::ThruFull, transport::frame_queue};

    /// Pass-through that accepts a fixed number of events per period.
    struct LimitedThru {
        room: usize,
        seen: Vec<(u32, Vec<u8>)>,
    }

    impl MidiThru for LimitedThru {
        fn forward(&mut self, event: RawMidiEvent<'_>) -> Result<(), ThruFull> {
            if self.room == 0 {
                return Err(ThruFull);
            }
            self.room -= 1;
            self.seen.push((event.time, event.bytes.to_vec()));
            Ok(())
        }
    }

    fn event(time: u32, bytes: &[u8]) -> RawMidiEvent<'_> {
        RawMidiEvent { time, bytes }
    }

    #[test]
    fn forwards_and_frames_every_event() {
        let (tx, mut rx) = frame_queue(64);
        let stats = CaptureStats::new();
        let mut capture = Capture::new(tx, stats.clone());
        let mut thru = LimitedThru {
            room: 8,
            seen: Vec::new(),
        };

        let a = [0x90, 0x08, 0x7F];
        let b = [0xD0, 0x25];
        capture.process([event(0, &a), event(17, &b)], &mut thru);

        assert_eq!(thru.seen, vec![(0, a.to_vec()), (17, b.to_vec())]);
        assert_eq!(rx.next_frame().unwrap().unwrap().as_bytes(), &a);
        assert_eq!(rx.next_frame().unwrap().unwrap().as_bytes(), &b);
        assert_eq!(stats.snapshot().captured, 2);
    }

    #[test]
    fn thru_overflow_still_frames() {
        let (tx, mut rx) = frame_queue(64);
        let stats = CaptureStats::new();
        let mut capture = Capture::new(tx, stats.clone());
        let mut thru = LimitedThru {
            room: 0,
            seen: Vec::new(),
        };

        capture.capture(event(3, &[0x90, 0x10, 0x7F]), &mut thru);

        assert!(thru.seen.is_empty());
        assert!(rx.next_frame().unwrap().is_some());
        let counts = stats.snapshot();
        assert_eq!(counts.thru_dropped, 1);
        assert_eq!(counts.captured, 1);
    }

    #[test]
    fn queue_overflow_still_forwards() {
        let (tx, mut rx) = frame_queue(4);
        let stats = CaptureStats::new();
        let mut capture = Capture::new(tx, stats.clone());
        let mut thru = LimitedThru {
            room: 8,
            seen: Vec::new(),
        };

        let lamp = [0x90, 0x00, 0x7F];
        capture.process([event(0, &lamp), event(1, &lamp)], &mut thru);

        assert_eq!(thru.seen.len(), 2);
        assert!(rx.next_frame().unwrap().is_some());
        assert!(rx.next_frame().unwrap().is_none());

        let counts = stats.snapshot();
        assert_eq!(counts.captured, 1);
        assert_eq!(counts.queue_full, 1);
        assert_eq!(counts.dropped(), 1);
    }

    #[test]
    fn counts_since_reports_deltas() {
        let before = CaptureCounts {
            captured: 10,
            queue_full: 1,
            oversized: 0,
            thru_dropped: 2,
        };
        let after = CaptureCounts {
            captured: 15,
            queue_full: 3,
            oversized: 1,
            thru_dropped: 2,
        };

        let delta = after.since(&before);
        assert_eq!(delta.captured, 5);
        assert_eq!(delta.dropped(), 3);
        assert_eq!(delta.thru_dropped, 0);
    }
}
