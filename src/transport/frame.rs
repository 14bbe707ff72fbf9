/// Largest message the queue carries. The length byte must stay below 0x7F.
pub const MAX_FRAME_PAYLOAD: usize = 126;

/// One deframed MIDI message, copied out of the queue.
///
/// Fixed-size so the consumer never allocates per message.
#[derive(Clone, Copy)]
pub struct Frame {
    len: u8,
    bytes: [u8; MAX_FRAME_PAYLOAD],
}

impl Frame {
    pub(crate) fn from_parts(first: &[u8], second: &[u8]) -> Self {
        let mut bytes = [0u8; MAX_FRAME_PAYLOAD];
        let len = first.len() + second.len();
        debug_assert!(len <= MAX_FRAME_PAYLOAD);

        bytes[..first.len()].copy_from_slice(first);
        bytes[first.len()..len].copy_from_slice(second);

        Self {
            len: len as u8,
            bytes,
        }
    }

    /// The message bytes, status byte first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Frame").field(&self.as_bytes()).finish()
    }
}
