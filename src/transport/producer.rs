use rtrb::Producer;

use super::frame::MAX_FRAME_PAYLOAD;

/// Why a frame was not written. Both cases are dropped, never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushFrameError {
    /// Fewer than `len + 1` free slots.
    Full,
    /// Message longer than [`MAX_FRAME_PAYLOAD`].
    Oversized,
}

/// Realtime half of the frame queue.
///
/// Every method is wait-free and allocation-free.
pub struct FrameProducer {
    tx: Producer<u8>,
}

impl FrameProducer {
    pub(crate) fn new(tx: Producer<u8>) -> Self {
        Self { tx }
    }

    /// Write `message` as one frame, or nothing at all.
    pub fn push_frame(&mut self, message: &[u8]) -> Result<(), PushFrameError> {
        if message.len() > MAX_FRAME_PAYLOAD {
            return Err(PushFrameError::Oversized);
        }

        let needed = message.len() + 1;
        let chunk = self
            .tx
            .write_chunk_uninit(needed)
            .map_err(|_| PushFrameError::Full)?;

        let header = std::iter::once(message.len() as u8);
        let written = chunk.fill_from_iter(header.chain(message.iter().copied()));
        debug_assert_eq!(written, needed);

        Ok(())
    }

    /// Free bytes right now.
    pub fn free_slots(&self) -> usize {
        self.tx.slots()
    }
}
