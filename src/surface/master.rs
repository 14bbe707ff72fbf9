//! Master section: assignment readout, timecode and transport lamps.
//! Only a master instance ever writes to it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width of the timecode readout, separators included.
pub const TIMECODE_LEN: usize = 13;

/// Positions between digit groups.
pub const SEPARATOR_SLOTS: [usize; 3] = [3, 6, 9];

/// Timecode positions in digit order, most significant first.
pub const TIMECODE_DIGIT_SLOTS: [usize; 10] = [0, 1, 2, 4, 5, 7, 8, 10, 11, 12];

/// Character drawn between timecode digit groups.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Separator {
    /// `:` for SMPTE time.
    Time,
    /// `|` for bars and beats.
    #[default]
    BarsBeats,
}

impl Separator {
    pub fn as_byte(self) -> u8 {
        match self {
            Separator::Time => b':',
            Separator::BarsBeats => b'|',
        }
    }
}

/// V-pot assignment shown next to the transport.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssignMode {
    Track,
    Send,
    Pan,
    Plugin,
    Eq,
    Instrument,
    #[default]
    None,
}

impl AssignMode {
    pub fn label(self) -> &'static str {
        match self {
            AssignMode::Track => "Track",
            AssignMode::Send => "Send",
            AssignMode::Pan => "Pan",
            AssignMode::Plugin => "Plugin",
            AssignMode::Eq => "EQ",
            AssignMode::Instrument => "Instrument",
            AssignMode::None => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportLamp {
    Rewind,
    Forward,
    Stop,
    Play,
    Record,
    Solo,
    Flip,
    View,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportLamps {
    pub rewind: bool,
    pub forward: bool,
    pub stop: bool,
    pub play: bool,
    /// Master record enable.
    pub record: bool,
    /// Some channel is soloed.
    pub solo: bool,
    pub flip: bool,
    pub view: bool,
}

impl TransportLamps {
    pub fn set(&mut self, lamp: TransportLamp, on: bool) {
        let slot = match lamp {
            TransportLamp::Rewind => &mut self.rewind,
            TransportLamp::Forward => &mut self.forward,
            TransportLamp::Stop => &mut self.stop,
            TransportLamp::Play => &mut self.play,
            TransportLamp::Record => &mut self.record,
            TransportLamp::Solo => &mut self.solo,
            TransportLamp::Flip => &mut self.flip,
            TransportLamp::View => &mut self.view,
        };
        *slot = on;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasterSection {
    /// Two-character 7-segment assignment display.
    pub assign_text: [u8; 2],
    /// Ten digits with separators at [`SEPARATOR_SLOTS`].
    pub timecode: [u8; TIMECODE_LEN],
    pub separator: Separator,
    pub transport: TransportLamps,
    pub assign_mode: AssignMode,
}

impl MasterSection {
    /// Write the selected separator into the separator slots.
    pub fn refresh_separators(&mut self) {
        let sep = self.separator.as_byte();
        for slot in SEPARATOR_SLOTS {
            self.timecode[slot] = sep;
        }
    }
}

impl Default for MasterSection {
    fn default() -> Self {
        Self {
            assign_text: [b' '; 2],
            timecode: [b' '; TIMECODE_LEN],
            separator: Separator::default(),
            transport: TransportLamps::default(),
            assign_mode: AssignMode::default(),
        }
    }
}
