//! Framed transport queue between the realtime callback and the poll thread.
//!
//! The queue is a single-producer/single-consumer byte ring. Every MIDI
//! message travels through it as one frame: a length byte followed by the
//! message bytes.

/*
Framing
=======

  ┌─────┬──────────────────────┬─────┬──────────┬─────┬─── ─ ─
  │ len │ payload (len bytes)  │ len │ payload  │ len │ ...
  └─────┴──────────────────────┴─────┴──────────┴─────┴─── ─ ─
    ^ consumer reads here                             ^ producer writes here

Vocabulary
----------

  frame       One length byte plus `len` payload bytes. `len` is 0..=126.

  slots       Free bytes (producer side) or readable bytes (consumer side).

Write rule
----------

The producer reserves `len + 1` slots before writing anything. If the
reservation fails the frame is dropped and the queue is untouched, so a
frame is always either fully present or fully absent.

Read rule
---------

The consumer peeks the length byte without consuming it. Only when
`len` further bytes are readable does it consume the whole frame.
Otherwise it leaves everything in place and tries again next tick. The
write rule makes the "not yet complete" case unreachable in practice;
the read rule keeps the consumer correct even if it were not.
*/

mod consumer;
mod frame;
mod producer;

pub use consumer::FrameConsumer;
pub use frame::{Frame, MAX_FRAME_PAYLOAD};
pub use producer::{FrameProducer, PushFrameError};

use rtrb::RingBuffer;

/// Default queue size in bytes.
pub const DEFAULT_QUEUE_CAPACITY: usize = 16 * 1024;

/// Create a frame queue holding `capacity` bytes.
///
/// Allocates once, here. Neither half allocates afterwards.
pub fn frame_queue(capacity: usize) -> (FrameProducer, FrameConsumer) {
    let (tx, rx) = RingBuffer::<u8>::new(capacity);
    (FrameProducer::new(tx), FrameConsumer::new(rx))
}

/// Lock the process's pages, the queue included, into RAM so the realtime
/// side never faults on swapped-out memory. Call after [`frame_queue`].
#[cfg(unix)]
pub fn lock_memory() -> std::io::Result<()> {
    // SAFETY: mlockall takes no pointers and only changes paging behaviour.
    let res = unsafe { libc::mlockall(libc::MCL_CURRENT | libc::MCL_FUTURE) };
    if res == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
pub fn lock_memory() -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "memory locking needs mlockall",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;

    fn drain(rx: &mut FrameConsumer) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        while let Some(frame) = rx.next_frame().unwrap() {
            out.push(frame.as_bytes().to_vec());
        }
        out
    }

    #[test]
    fn frames_come_back_in_order() {
        let (mut tx, mut rx) = frame_queue(256);

        tx.push_frame(&[0x90, 0x00, 0x7F]).unwrap();
        tx.push_frame(&[0xD0, 0x3E]).unwrap();
        tx.push_frame(&[0xF0, 0x00, 0x00, 0x66, 0x14, 0x12, 0x00, b'A', 0xF7])
            .unwrap();

        let frames = drain(&mut rx);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], vec![0x90, 0x00, 0x7F]);
        assert_eq!(frames[1], vec![0xD0, 0x3E]);
        assert_eq!(frames[2][7], b'A');
        assert!(rx.next_frame().unwrap().is_none());
    }

    #[test]
    fn full_queue_rejects_without_touching_contents() {
        // 8 bytes: room for one 3-byte message (4 slots) plus 4 spare
        let (mut tx, mut rx) = frame_queue(8);

        tx.push_frame(&[0x90, 0x01, 0x7F]).unwrap();
        assert_eq!(tx.free_slots(), 4);

        // needs 5 slots
        assert_eq!(
            tx.push_frame(&[0xB0, 0x40, 0x31, 0x00]),
            Err(PushFrameError::Full)
        );
        assert_eq!(tx.free_slots(), 4);

        // exactly 4 slots fits
        tx.push_frame(&[0xD0, 0x12, 0x00]).unwrap();
        assert_eq!(tx.free_slots(), 0);

        assert_eq!(
            drain(&mut rx),
            vec![vec![0x90, 0x01, 0x7F], vec![0xD0, 0x12, 0x00]]
        );
    }

    #[test]
    fn oversized_messages_are_refused() {
        let (mut tx, rx) = frame_queue(1024);
        let big = [0u8; MAX_FRAME_PAYLOAD + 1];

        assert_eq!(tx.push_frame(&big), Err(PushFrameError::Oversized));
        assert_eq!(rx.available(), 0);

        let max = [0x20u8; MAX_FRAME_PAYLOAD];
        tx.push_frame(&max).unwrap();
        assert_eq!(rx.available(), MAX_FRAME_PAYLOAD + 1);
    }

    #[test]
    fn wraps_around_the_ring() {
        let (mut tx, mut rx) = frame_queue(10);

        for round in 0..20u8 {
            tx.push_frame(&[0x90, round, 0x7F]).unwrap();
            tx.push_frame(&[0xD0, round]).unwrap();
            assert_eq!(
                drain(&mut rx),
                vec![vec![0x90, round, 0x7F], vec![0xD0, round]]
            );
        }
    }

    #[test]
    fn partial_frame_waits_for_its_payload() {
        let (mut raw, rx) = RingBuffer::<u8>::new(16);
        let mut rx = FrameConsumer::new(rx);

        raw.push(3).unwrap();
        raw.push(0x90).unwrap();
        assert!(rx.next_frame().unwrap().is_none());
        // length byte left in place
        assert_eq!(rx.available(), 2);

        raw.push(0x00).unwrap();
        raw.push(0x7F).unwrap();
        let frame = rx.next_frame().unwrap().expect("frame");
        assert_eq!(frame.as_bytes(), &[0x90, 0x00, 0x7F]);
        assert_eq!(rx.available(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn lock_memory_locks_or_reports_os_error() {
        match lock_memory() {
            Ok(()) => {
                // SAFETY: no arguments; undoes the lock taken above.
                unsafe { libc::munlockall() };
            }
            Err(err) => {
                let code = err.raw_os_error().expect("errno");
                assert!(
                    [libc::EPERM, libc::ENOMEM, libc::EAGAIN].contains(&code),
                    "unexpected error {err}"
                );
            }
        }
    }

    #[test]
    fn empty_frame_is_delivered() {
        let (mut tx, mut rx) = frame_queue(16);
        tx.push_frame(&[]).unwrap();

        let frame = rx.next_frame().unwrap().expect("frame");
        assert!(frame.is_empty());
        assert!(rx.next_frame().unwrap().is_none());
    }

    #[test]
    fn short_read_error_reports_sizes() {
        let err = TransportError::ShortRead {
            expected: 9,
            available: 4,
        };
        assert_eq!(
            err.to_string(),
            "short read from transport queue: frame declares 9 bytes, 4 available"
        );
    }
}
