//! Classification of raw MIDI messages into MCP message kinds.

const SYSEX: u8 = 0xF0;
const END_OF_EXCLUSIVE: u8 = 0xF7;
const NOTE_ON: u8 = 0x90;
const CONTROL_CHANGE: u8 = 0xB0;
const CHANNEL_PRESSURE: u8 = 0xD0;

/// Sysex sub-command: LCD text block.
const SUB_TEXT: u8 = 0x12;
/// Sysex sub-command: timecode block.
const SUB_TIMECODE: u8 = 0x10;

/// One message as the surface understands it. Borrows from the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McpMessage<'a> {
    /// `F0 hh hh hh hh 12 col text.. F7`
    Text { column: u8, text: &'a [u8] },
    /// `F0 hh hh hh hh 10 d0..d9 F7`, least significant digit first.
    Timecode { digits: &'a [u8] },
    /// `90 note velocity`: lamp feedback.
    Lamp { note: u8, on: bool },
    /// `D0 cv`: meter, channel in the high nibble.
    Meter { channel: u8, value: u8 },
    /// `B0 cc value`: 7-segment character.
    Segment { controller: u8, value: u8 },
    /// Anything else. Accepted and dropped.
    Ignored,
}

impl<'a> McpMessage<'a> {
    pub fn parse(bytes: &'a [u8]) -> Self {
        match bytes {
            [SYSEX, _, _, _, _, SUB_TEXT, column, text @ ..] => McpMessage::Text {
                column: *column,
                text: strip_eox(text),
            },
            [SYSEX, _, _, _, _, SUB_TIMECODE, digits @ ..] => McpMessage::Timecode {
                digits: strip_eox(digits),
            },
            [NOTE_ON, note, velocity, ..] => McpMessage::Lamp {
                note: *note,
                on: *velocity != 0,
            },
            [CHANNEL_PRESSURE, data, ..] => McpMessage::Meter {
                channel: data >> 4,
                value: data & 0x0F,
            },
            [CONTROL_CHANGE, controller, value, ..] => McpMessage::Segment {
                controller: *controller,
                value: *value,
            },
            _ => McpMessage::Ignored,
        }
    }
}

fn strip_eox(body: &[u8]) -> &[u8] {
    match body {
        [rest @ .., END_OF_EXCLUSIVE] => rest,
        _ => body,
    }
}
