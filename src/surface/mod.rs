//! Decoded model of everything the control surface shows.
//!
//! One `SurfaceState` lives on the poll thread for the whole process. The
//! decoder and the meter decay engine write to it through `&mut`; the
//! renderer reads it between ticks.

pub mod master;
pub mod meter;
pub mod strip;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use master::{AssignMode, MasterSection, Separator, TransportLamp, TransportLamps};
pub use meter::{Meter, MeterDecay, METER_MAX};
pub use strip::{ChannelStrip, StripLamp, STRIP_TEXT_LEN};

/// Channel strips per unit.
pub const CHANNELS: usize = 8;

/// Characters per LCD row.
pub const LINE_LEN: usize = CHANNELS * STRIP_TEXT_LEN;

/// Which messages this instance decodes. Fixed at startup.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayMode {
    /// Also decode global messages: transport, assignment, timecode.
    pub master: bool,
    /// Show the timecode readout. Has no effect unless `master` is set.
    pub show_timecode: bool,
}

impl DisplayMode {
    /// Extender unit: channel strips only.
    pub const EXTENDER: DisplayMode = DisplayMode {
        master: false,
        show_timecode: false,
    };

    pub fn new(master: bool, show_timecode: bool) -> Self {
        Self {
            master,
            show_timecode: master && show_timecode,
        }
    }

    /// Timecode readout is shown.
    pub fn timecode(&self) -> bool {
        self.master && self.show_timecode
    }
}

/// LCD row selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceState {
    mode: DisplayMode,
    line1: [u8; LINE_LEN],
    line2: [u8; LINE_LEN],
    strips: [ChannelStrip; CHANNELS],
    master: MasterSection,
}

impl SurfaceState {
    /// Blank surface: spaces, lamps off, meters at zero.
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode: DisplayMode::new(mode.master, mode.show_timecode),
            line1: [b' '; LINE_LEN],
            line2: [b' '; LINE_LEN],
            strips: [ChannelStrip::default(); CHANNELS],
            master: MasterSection::default(),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn line(&self, row: Row) -> &[u8; LINE_LEN] {
        match row {
            Row::Top => &self.line1,
            Row::Bottom => &self.line2,
        }
    }

    pub fn strip(&self, channel: usize) -> &ChannelStrip {
        &self.strips[channel]
    }

    pub fn strips(&self) -> &[ChannelStrip; CHANNELS] {
        &self.strips
    }

    pub fn master(&self) -> &MasterSection {
        &self.master
    }

    pub(crate) fn strip_mut(&mut self, channel: usize) -> &mut ChannelStrip {
        &mut self.strips[channel]
    }

    pub(crate) fn strips_mut(&mut self) -> &mut [ChannelStrip; CHANNELS] {
        &mut self.strips
    }

    pub(crate) fn master_mut(&mut self) -> &mut MasterSection {
        &mut self.master
    }

    /// Write LCD text starting at `column` (0..112, the bottom row starts
    /// at 56). Text running past the end of the top row continues on the
    /// bottom row; text past column 111 is dropped. Channel mirrors whose
    /// slice was touched are refreshed.
    pub(crate) fn write_text(&mut self, column: usize, text: &[u8]) {
        let end = (column + text.len()).min(2 * LINE_LEN);
        if column >= end {
            return;
        }

        for (col, &ch) in (column..end).zip(text) {
            if col < LINE_LEN {
                self.line1[col] = ch;
            } else {
                self.line2[col - LINE_LEN] = ch;
            }
        }

        if column < LINE_LEN {
            self.refresh_mirrors(Row::Top, column, end.min(LINE_LEN));
        }
        if end > LINE_LEN {
            self.refresh_mirrors(Row::Bottom, column.max(LINE_LEN) - LINE_LEN, end - LINE_LEN);
        }
    }

    /// Copy the row into the mirrors of channels overlapping `start..end`.
    fn refresh_mirrors(&mut self, row: Row, start: usize, end: usize) {
        let first = start / STRIP_TEXT_LEN;
        let last = (end - 1) / STRIP_TEXT_LEN;

        for channel in first..=last {
            let from = channel * STRIP_TEXT_LEN;
            let src = match row {
                Row::Top => &self.line1[from..from + STRIP_TEXT_LEN],
                Row::Bottom => &self.line2[from..from + STRIP_TEXT_LEN],
            };
            let strip = &mut self.strips[channel];
            let dst = match row {
                Row::Top => &mut strip.top_text,
                Row::Bottom => &mut strip.low_text,
            };
            dst.copy_from_slice(src);
        }
    }
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self::new(DisplayMode::EXTENDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(state: &SurfaceState, row: Row) -> String {
        String::from_utf8_lossy(state.line(row)).into_owned()
    }

    #[test]
    fn starts_blank() {
        let state = SurfaceState::new(DisplayMode::new(true, true));

        assert!(state.line(Row::Top).iter().all(|&c| c == b' '));
        assert!(state.line(Row::Bottom).iter().all(|&c| c == b' '));
        for strip in state.strips() {
            assert_eq!(strip, &ChannelStrip::default());
        }
        assert_eq!(state.master().timecode, [b' '; master::TIMECODE_LEN]);
        assert_eq!(state.master().assign_mode, AssignMode::None);
    }

    #[test]
    fn timecode_requires_master() {
        assert!(!DisplayMode::new(false, true).timecode());
        assert!(!DisplayMode::new(false, true).show_timecode);
        assert!(DisplayMode::new(true, true).timecode());
        assert!(!DisplayMode::new(true, false).timecode());
    }

    #[test]
    fn write_within_top_row() {
        let mut state = SurfaceState::default();
        state.write_text(7, b"Vocals ");

        assert_eq!(&text(&state, Row::Top)[7..14], "Vocals ");
        assert_eq!(&state.strip(1).top_text, b"Vocals ");
        assert_eq!(&state.strip(0).top_text, b"       ");
        assert_eq!(&state.strip(2).top_text, b"       ");
    }

    #[test]
    fn write_splits_across_rows() {
        let mut state = SurfaceState::default();
        state.write_text(52, b"ABCDEFG");

        assert_eq!(&state.line(Row::Top)[52..56], b"ABCD");
        assert_eq!(&state.line(Row::Bottom)[0..3], b"EFG");
        assert_eq!(&state.strip(7).top_text, b"   ABCD");
        assert_eq!(&state.strip(0).low_text, b"EFG    ");
    }

    #[test]
    fn write_to_bottom_row() {
        let mut state = SurfaceState::default();
        state.write_text(56 + 14, b"-12.5dB");

        assert_eq!(&state.line(Row::Bottom)[14..21], b"-12.5dB");
        assert_eq!(&state.strip(2).low_text, b"-12.5dB");
        assert!(state.line(Row::Top).iter().all(|&c| c == b' '));
    }

    #[test]
    fn write_past_bottom_row_is_truncated() {
        let mut state = SurfaceState::default();
        state.write_text(108, b"ABCDEF");

        assert_eq!(&state.line(Row::Bottom)[52..56], b"ABCD");
        assert_eq!(&state.strip(7).low_text, b"   ABCD");

        let before = state.clone();
        state.write_text(112, b"XYZ");
        assert_eq!(state, before);
    }

    #[test]
    fn write_ending_on_boundary_refreshes_one_channel() {
        let mut state = SurfaceState::default();
        state.write_text(0, b"  Kick ");
        // mirror of channel 1 is stale on purpose: only touched channels refresh
        state.line1[7] = b'X';
        state.write_text(0, b" Snare ");

        assert_eq!(&state.strip(0).top_text, b" Snare ");
        assert_eq!(&state.strip(1).top_text, b"       ");
    }

    #[test]
    fn full_row_refreshes_all_channels() {
        let mut state = SurfaceState::default();
        let row: Vec<u8> = (0..LINE_LEN).map(|i| b'a' + (i / STRIP_TEXT_LEN) as u8).collect();
        state.write_text(0, &row);

        for (i, strip) in state.strips().iter().enumerate() {
            assert_eq!(strip.top_text, [b'a' + i as u8; STRIP_TEXT_LEN]);
        }
    }
}
