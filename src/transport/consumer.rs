use rtrb::Consumer;

use super::frame::Frame;
use crate::error::TransportError;

/// Poll-thread half of the frame queue: the deframer.
pub struct FrameConsumer {
    rx: Consumer<u8>,
}

impl FrameConsumer {
    pub(crate) fn new(rx: Consumer<u8>) -> Self {
        Self { rx }
    }

    /// Take the next complete frame.
    ///
    /// Returns `Ok(None)` when the queue is empty or the next frame's
    /// payload has not fully arrived; the length byte stays in place until
    /// it has. A read that comes back shorter than the payload it just
    /// checked for is corruption and is reported as
    /// [`TransportError::ShortRead`].
    pub fn next_frame(&mut self) -> Result<Option<Frame>, TransportError> {
        let len = match self.rx.peek() {
            Ok(&len) => len as usize,
            Err(_) => return Ok(None),
        };

        let available = self.rx.slots() - 1;
        if available < len {
            return Ok(None);
        }

        let chunk = self
            .rx
            .read_chunk(len + 1)
            .map_err(|_| TransportError::ShortRead {
                expected: len,
                available,
            })?;

        let (first, second) = chunk.as_slices();
        // skip the length byte, which may sit alone at the end of the ring
        let frame = match first.split_first() {
            Some((_, rest)) => Frame::from_parts(rest, second),
            None => Frame::from_parts(&second[1..], &[]),
        };
        chunk.commit_all();

        Ok(Some(frame))
    }

    /// Readable bytes right now.
    pub fn available(&self) -> usize {
        self.rx.slots()
    }

    /// True once the producer half has been dropped.
    pub fn is_abandoned(&self) -> bool {
        self.rx.is_abandoned()
    }
}
