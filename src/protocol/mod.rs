//! Mackie Control Protocol decoder.
//!
//! Each deframed MIDI message is classified ([`McpMessage`]) and applied to
//! the [`SurfaceState`](crate::surface::SurfaceState). Decoding is total:
//! malformed, truncated or unknown messages are dropped without error.
//!
//! ```text
//!   F0 .. 12 col text F7   LCD text, 112 columns over two rows
//!   F0 .. 10 digits   F7   timecode block            (master only)
//!   90 note vel            lamps: <32 channel strips, >=32 master only
//!   D0 cv                  meter, c = channel, v = level / peak
//!   B0 cc val              7-segment characters      (master only)
//! ```

mod decoder;
pub mod lamps;
pub mod message;
pub mod segment;

pub use decoder::{apply, decode};
pub use message::McpMessage;
