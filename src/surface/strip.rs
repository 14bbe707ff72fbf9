use super::meter::Meter;

/// Characters per channel on each LCD row.
pub const STRIP_TEXT_LEN: usize = 7;

/// Lamp group addressed by note numbers 0..32, eight notes per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripLamp {
    Record,
    Solo,
    Mute,
    Select,
}

impl StripLamp {
    /// Split a lamp note (< 32) into lamp and channel.
    pub fn from_note(note: u8) -> Option<(StripLamp, usize)> {
        let lamp = match note / 8 {
            0 => StripLamp::Record,
            1 => StripLamp::Solo,
            2 => StripLamp::Mute,
            3 => StripLamp::Select,
            _ => return None,
        };
        Some((lamp, (note % 8) as usize))
    }
}

/// One of the eight channel strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelStrip {
    pub rec: bool,
    pub solo: bool,
    pub mute: bool,
    pub select: bool,
    pub meter: Meter,
    /// This channel's slice of the top LCD row.
    pub top_text: [u8; STRIP_TEXT_LEN],
    /// This channel's slice of the bottom LCD row.
    pub low_text: [u8; STRIP_TEXT_LEN],
}

impl ChannelStrip {
    pub fn set_lamp(&mut self, lamp: StripLamp, on: bool) {
        match lamp {
            StripLamp::Record => self.rec = on,
            StripLamp::Solo => self.solo = on,
            StripLamp::Mute => self.mute = on,
            StripLamp::Select => self.select = on,
        }
    }

    pub fn lamp(&self, lamp: StripLamp) -> bool {
        match lamp {
            StripLamp::Record => self.rec,
            StripLamp::Solo => self.solo,
            StripLamp::Mute => self.mute,
            StripLamp::Select => self.select,
        }
    }
}

impl Default for ChannelStrip {
    fn default() -> Self {
        Self {
            rec: false,
            solo: false,
            mute: false,
            select: false,
            meter: Meter::default(),
            top_text: [b' '; STRIP_TEXT_LEN],
            low_text: [b' '; STRIP_TEXT_LEN],
        }
    }
}
