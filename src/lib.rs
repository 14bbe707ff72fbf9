//! Software display for Mackie Control surfaces.
//!
//! MIDI from a DAW arrives on a JACK input port. The realtime callback
//! ([`capture`]) copies every event to a pass-through port and frames it
//! into a lock-free byte queue ([`transport`]). A poll thread
//! ([`runtime`]) drains the queue, decodes each message ([`protocol`])
//! into a [`SurfaceState`](surface::SurfaceState) and decays the meters.
//! The binary renders that state in a terminal.

pub mod capture;
pub mod error;
pub mod io; // JACK client and MIDI port plumbing
pub mod protocol;
pub mod runtime;
pub mod surface;
pub mod transport;

pub use capture::{Capture, CaptureCounts, CaptureStats};
pub use error::{IoError, TransportError};
pub use runtime::{Poller, TickReport};
pub use surface::{DisplayMode, SurfaceState};
