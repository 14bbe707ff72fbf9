//! Master-section lamp notes (note numbers 32 and up).

use crate::surface::{AssignMode, Separator, TransportLamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalLamp {
    Transport(TransportLamp),
    Assign(AssignMode),
    /// Selected when the lamp turns *off*.
    Separator(Separator),
}

pub fn global_lamp(note: u8) -> Option<GlobalLamp> {
    let lamp = match note {
        0x28 => GlobalLamp::Assign(AssignMode::Track),
        0x29 => GlobalLamp::Assign(AssignMode::Send),
        0x2A => GlobalLamp::Assign(AssignMode::Pan),
        0x2B => GlobalLamp::Assign(AssignMode::Plugin),
        0x2C => GlobalLamp::Assign(AssignMode::Eq),
        0x2D => GlobalLamp::Assign(AssignMode::Instrument),
        0x32 => GlobalLamp::Transport(TransportLamp::Flip),
        0x33 => GlobalLamp::Transport(TransportLamp::View),
        0x5B => GlobalLamp::Transport(TransportLamp::Rewind),
        0x5C => GlobalLamp::Transport(TransportLamp::Forward),
        0x5D => GlobalLamp::Transport(TransportLamp::Stop),
        0x5E => GlobalLamp::Transport(TransportLamp::Play),
        0x5F => GlobalLamp::Transport(TransportLamp::Record),
        0x71 => GlobalLamp::Separator(Separator::BarsBeats),
        0x72 => GlobalLamp::Separator(Separator::Time),
        0x73 => GlobalLamp::Transport(TransportLamp::Solo),
        // automation, utility and scrub lamps are not shown
        _ => return None,
    };
    Some(lamp)
}
