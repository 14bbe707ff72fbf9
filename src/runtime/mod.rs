//! Poll loop: drains the transport queue into the surface model.
//!
//! The poller owns the consumer end of the queue and the only
//! [`SurfaceState`]. One [`Poller::tick`] drains every complete frame,
//! decodes each one in arrival order, then runs one meter decay step.
//! The caller decides the tick rate and renders between ticks.
//!
//! # Example
//!
//! ```
//! use mcpdisp::{
//!     runtime::Poller,
//!     surface::{DisplayMode, MeterDecay},
//!     transport::frame_queue,
//! };
//!
//! let (mut tx, rx) = frame_queue(64);
//! let mut poller = Poller::new(rx, DisplayMode::EXTENDER, MeterDecay::default());
//!
//! tx.push_frame(&[0x90, 0x08, 0x7F]).unwrap();
//! let report = poller.tick().unwrap();
//!
//! assert_eq!(report.decoded, 1);
//! assert!(poller.state().strip(0).solo);
//! ```

use crate::{
    error::TransportError,
    protocol,
    surface::{DisplayMode, MeterDecay, SurfaceState},
    transport::FrameConsumer,
};

/// What one tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Frames decoded this tick.
    pub decoded: usize,
}

pub struct Poller {
    frames: FrameConsumer,
    state: SurfaceState,
    decay: MeterDecay,
}

impl Poller {
    pub fn new(frames: FrameConsumer, mode: DisplayMode, decay: MeterDecay) -> Self {
        log::debug!(
            "poller: master={} timecode={} decay_interval={}",
            mode.master,
            mode.timecode(),
            decay.interval()
        );
        Self {
            frames,
            state: SurfaceState::new(mode),
            decay,
        }
    }

    /// Drain and decode every complete frame, then step meter decay once.
    ///
    /// A partially written frame stays in the queue for the next tick. A
    /// short read means the queue is corrupt and is returned as an error.
    pub fn tick(&mut self) -> Result<TickReport, TransportError> {
        let mut report = TickReport::default();

        while let Some(frame) = self.frames.next_frame()? {
            log::trace!("decode {:02X?}", frame.as_bytes());
            protocol::decode(&mut self.state, frame.as_bytes());
            report.decoded += 1;
        }

        self.decay.tick(&mut self.state);
        Ok(report)
    }

    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    /// The capture side has gone away.
    pub fn is_abandoned(&self) -> bool {
        self.frames.is_abandoned()
    }
}
