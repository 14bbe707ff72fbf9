// Purpose - external interfaces: the MIDI ports the realtime callback sees

pub mod jack_session;
pub mod midi;

pub use jack_session::{JackSession, PortNames};
pub use midi::{MidiThru, RawMidiEvent, ThruFull};
