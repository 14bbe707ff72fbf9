/// One MIDI event as delivered inside an audio period.
///
/// Borrowed from the backend's port buffer; valid for one callback only.
#[derive(Debug, Clone, Copy)]
pub struct RawMidiEvent<'a> {
    /// Frame offset within the period.
    pub time: u32,
    /// Status byte followed by data bytes.
    pub bytes: &'a [u8],
}

/// The pass-through output had no room for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThruFull;

/// Pass-through MIDI output for the current period.
///
/// Implementations run on the realtime thread and must not block or
/// allocate.
pub trait MidiThru {
    fn forward(&mut self, event: RawMidiEvent<'_>) -> Result<(), ThruFull>;
}
