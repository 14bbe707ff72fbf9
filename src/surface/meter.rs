//! Peak-hold meter with fall-off.
//!
//! Explicit updates only move the level up. Coming down is the decay
//! engine's job: once per poll tick every meter advances a counter, and
//! every `interval` ticks a non-zero level drops one step.

/// Highest meter step.
pub const METER_MAX: u8 = 12;

/// Ticks between decay steps when nothing else is configured.
pub const DEFAULT_DECAY_INTERVAL: u8 = 10;

const PEAK_DETECTED: u8 = 0x0E;
const PEAK_CLEARED: u8 = 0x0F;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Meter {
    level: u8,
    peak: bool,
    ticks: u8,
}

impl Meter {
    /// Held level, 0..=12.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Overload lamp.
    pub fn peak(&self) -> bool {
        self.peak
    }

    /// Apply the low nibble of a meter message.
    pub fn update(&mut self, value: u8) {
        match value {
            PEAK_DETECTED => {
                self.peak = true;
                self.level = METER_MAX;
            }
            PEAK_CLEARED => self.peak = false,
            v => {
                let v = v.min(METER_MAX);
                if v >= self.level {
                    self.level = v;
                }
            }
        }
    }

    /// One poll tick. Returns true when the level dropped.
    pub fn decay(&mut self, interval: u8) -> bool {
        if self.level == 0 {
            return false;
        }

        self.ticks += 1;
        if self.ticks < interval.max(1) {
            return false;
        }

        self.ticks = 0;
        self.level -= 1;
        if self.level == 0 {
            self.peak = false;
        }
        true
    }
}

/// Steps every channel meter once per poll tick.
#[derive(Debug, Clone, Copy)]
pub struct MeterDecay {
    interval: u8,
}

impl MeterDecay {
    pub fn new(interval: u8) -> Self {
        Self {
            interval: interval.max(1),
        }
    }

    pub fn interval(&self) -> u8 {
        self.interval
    }

    pub fn tick(&self, state: &mut super::SurfaceState) {
        for strip in state.strips_mut() {
            strip.meter.decay(self.interval);
        }
    }
}

impl Default for MeterDecay {
    fn default() -> Self {
        Self::new(DEFAULT_DECAY_INTERVAL)
    }
}
