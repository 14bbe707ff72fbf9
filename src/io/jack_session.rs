//! JACK backend: owns the client, the two MIDI ports and the realtime
//! process handler that drives [`Capture`].

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use jack::{
    AsyncClient, Client, ClientOptions, ClientStatus, Control, MidiIn, MidiOut, MidiWriter,
    NotificationHandler, Port, ProcessHandler, ProcessScope, RawMidi,
};

use super::midi::{MidiThru, RawMidiEvent, ThruFull};
use crate::{
    capture::{Capture, CaptureStats},
    error::IoError,
    transport::FrameProducer,
};

impl MidiThru for MidiWriter<'_> {
    fn forward(&mut self, event: RawMidiEvent<'_>) -> Result<(), ThruFull> {
        self.write(&RawMidi {
            time: event.time,
            bytes: event.bytes,
        })
        .map_err(|_| ThruFull)
    }
}

/// Runs inside the JACK process callback.
struct CaptureHandler {
    midi_in: Port<MidiIn>,
    midi_thru: Port<MidiOut>,
    capture: Capture,
}

impl ProcessHandler for CaptureHandler {
    fn process(&mut self, _: &Client, ps: &ProcessScope) -> Control {
        // the writer clears last period's output buffer
        let mut thru = self.midi_thru.writer(ps);
        let events = self.midi_in.iter(ps).map(|raw| RawMidiEvent {
            time: raw.time,
            bytes: raw.bytes,
        });
        self.capture.process(events, &mut thru);
        Control::Continue
    }
}

/// Raises a flag when the server drops us; the poll loop checks it.
struct ServerWatch {
    shut_down: Arc<AtomicBool>,
}

impl NotificationHandler for ServerWatch {
    unsafe fn shutdown(&mut self, _status: ClientStatus, _reason: &str) {
        self.shut_down.store(true, Ordering::SeqCst);
    }
}

/// Full JACK names of the registered ports.
#[derive(Debug, Clone)]
pub struct PortNames {
    pub input: String,
    pub thru: String,
}

/// An active JACK client feeding the frame queue.
pub struct JackSession {
    client: AsyncClient<ServerWatch, CaptureHandler>,
    shut_down: Arc<AtomicBool>,
    client_name: String,
    ports: PortNames,
}

impl JackSession {
    /// Open `client_name` (without starting a server), register
    /// `<name>_in` and `<name>_thru`, and start capturing into `frames`.
    pub fn start(
        client_name: &str,
        frames: FrameProducer,
        stats: Arc<CaptureStats>,
    ) -> Result<Self, IoError> {
        let (client, status) = Client::new(client_name, ClientOptions::NO_START_SERVER)?;
        // the server may have renamed us if the name was taken
        let name = client.name().to_string();
        log::info!("jack client {name:?} opened ({status:?})");

        let midi_in = client.register_port(&format!("{name}_in"), MidiIn::default())?;
        let midi_thru = client.register_port(&format!("{name}_thru"), MidiOut::default())?;
        let ports = PortNames {
            input: midi_in.name()?,
            thru: midi_thru.name()?,
        };
        log::info!("registered ports {} and {}", ports.input, ports.thru);

        let shut_down = Arc::new(AtomicBool::new(false));
        let watch = ServerWatch {
            shut_down: shut_down.clone(),
        };
        let handler = CaptureHandler {
            midi_in,
            midi_thru,
            capture: Capture::new(frames, stats),
        };

        let client = client.activate_async(watch, handler)?;
        log::info!("jack client {name:?} active");

        Ok(Self {
            client,
            shut_down,
            client_name: name,
            ports,
        })
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn ports(&self) -> &PortNames {
        &self.ports
    }

    /// Fails once the server has shut this client down.
    pub fn check_alive(&self) -> Result<(), IoError> {
        if self.shut_down.load(Ordering::SeqCst) {
            Err(IoError::ServerShutdown)
        } else {
            Ok(())
        }
    }

    /// Deactivate the client, then release the handler and the queue
    /// producer it owns. Frames still queued are left for the consumer to
    /// discard.
    pub fn stop(self) -> Result<(), IoError> {
        let (client, _watch, handler) = self.client.deactivate()?;
        drop(handler);
        log::info!("jack client {:?} deactivated", client.name());
        Ok(())
    }
}
