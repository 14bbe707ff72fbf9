//! 7-segment displays driven by control changes 0x40..=0x4B.

use crate::surface::master::TIMECODE_DIGIT_SLOTS;

/// Controllers with this bit set address the 7-segment displays.
pub const SEGMENT_FLAG: u8 = 0x40;

/// Where a 7-segment character lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentSlot {
    /// Index into the two-character assignment readout.
    Assign(usize),
    /// Index into the timecode array.
    Timecode(usize),
}

pub fn segment_slot(controller: u8) -> Option<SegmentSlot> {
    match controller {
        0x4B => Some(SegmentSlot::Assign(0)),
        0x4A => Some(SegmentSlot::Assign(1)),
        // 0x49 is the most significant digit
        0x40..=0x49 => Some(SegmentSlot::Timecode(
            TIMECODE_DIGIT_SLOTS[(0x49 - controller) as usize],
        )),
        _ => None,
    }
}

/// Map a 7-segment value to ASCII.
///
/// Values below 0x20 are letters offset by 0x40. `@` becomes a space,
/// since some hosts send 0x00 for a blank.
pub fn segment_char(value: u8) -> u8 {
    if value < 0x20 {
        match value + 0x40 {
            b'@' => b' ',
            c => c,
        }
    } else {
        value
    }
}

/// Character for one digit of a sysex timecode block.
pub fn timecode_digit(value: u8) -> u8 {
    match value & 0x03 {
        0 => b' ',
        v => b'0' + v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits() {
        assert_eq!(segment_char(0x01), b'A');
        assert_eq!(segment_char(0x1A), b'Z');
        assert_eq!(segment_char(0x00), b' ');
        assert_eq!(segment_char(0x30), b'0');
        assert_eq!(segment_char(0x39), b'9');
        assert_eq!(segment_char(0x20), b' ');
    }

    #[test]
    fn controller_table() {
        assert_eq!(segment_slot(0x4B), Some(SegmentSlot::Assign(0)));
        assert_eq!(segment_slot(0x4A), Some(SegmentSlot::Assign(1)));
        assert_eq!(segment_slot(0x49), Some(SegmentSlot::Timecode(0)));
        assert_eq!(segment_slot(0x46), Some(SegmentSlot::Timecode(4)));
        assert_eq!(segment_slot(0x44), Some(SegmentSlot::Timecode(7)));
        assert_eq!(segment_slot(0x42), Some(SegmentSlot::Timecode(10)));
        assert_eq!(segment_slot(0x40), Some(SegmentSlot::Timecode(12)));
        assert_eq!(segment_slot(0x4C), None);
        assert_eq!(segment_slot(0x10), None);
    }

    #[test]
    fn timecode_slots_skip_separators() {
        for controller in 0x40..=0x49 {
            match segment_slot(controller) {
                Some(SegmentSlot::Timecode(slot)) => assert!(![3, 6, 9].contains(&slot)),
                other => panic!("unexpected slot {other:?}"),
            }
        }
    }

    #[test]
    fn sysex_digits_keep_low_bits() {
        assert_eq!(timecode_digit(0x00), b' ');
        assert_eq!(timecode_digit(0x01), b'1');
        assert_eq!(timecode_digit(0x07), b'3');
        assert_eq!(timecode_digit(0x34), b' ');
    }
}
