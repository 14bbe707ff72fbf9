use super::{
    lamps::{global_lamp, GlobalLamp},
    message::McpMessage,
    segment::{segment_char, segment_slot, timecode_digit, SegmentSlot, SEGMENT_FLAG},
};
use crate::surface::{master::TIMECODE_DIGIT_SLOTS, StripLamp, SurfaceState, CHANNELS};

/// Decode one raw MIDI message into `state`.
pub fn decode(state: &mut SurfaceState, bytes: &[u8]) {
    apply(state, McpMessage::parse(bytes));
}

/// Apply an already classified message.
///
/// Messages outside the current display mode, and messages this surface
/// has no use for, leave `state` untouched.
pub fn apply(state: &mut SurfaceState, message: McpMessage<'_>) {
    let mode = state.mode();

    match message {
        McpMessage::Text { column, text } => state.write_text(column as usize, text),
        McpMessage::Timecode { digits } if mode.master => {
            let timecode = &mut state.master_mut().timecode;
            // least significant digit arrives first
            for (&slot, &digit) in TIMECODE_DIGIT_SLOTS.iter().rev().zip(digits) {
                timecode[slot] = timecode_digit(digit);
            }
        }
        McpMessage::Lamp { note, on } => match StripLamp::from_note(note) {
            Some((lamp, channel)) => state.strip_mut(channel).set_lamp(lamp, on),
            None if mode.master => apply_global_lamp(state, note, on),
            None => {}
        },
        McpMessage::Meter { channel, value } if (channel as usize) < CHANNELS => {
            state.strip_mut(channel as usize).meter.update(value);
        }
        McpMessage::Segment { controller, value }
            if mode.master && controller & SEGMENT_FLAG != 0 =>
        {
            apply_segment(state, controller, value);
        }
        _ => {}
    }
}

fn apply_global_lamp(state: &mut SurfaceState, note: u8, on: bool) {
    let master = state.master_mut();
    match global_lamp(note) {
        Some(GlobalLamp::Transport(lamp)) => master.transport.set(lamp, on),
        // a mode label is latched by its lamp turning on
        Some(GlobalLamp::Assign(mode)) if on => master.assign_mode = mode,
        Some(GlobalLamp::Separator(separator)) if !on => master.separator = separator,
        _ => {}
    }
}

fn apply_segment(state: &mut SurfaceState, controller: u8, value: u8) {
    let show_timecode = state.mode().timecode();
    let master = state.master_mut();
    let ch = segment_char(value);

    match segment_slot(controller) {
        Some(SegmentSlot::Assign(index)) => master.assign_text[index] = ch,
        Some(SegmentSlot::Timecode(slot)) => {
            master.timecode[slot] = ch;
            if show_timecode {
                master.refresh_separators();
            }
        }
        None => {}
    }
}
