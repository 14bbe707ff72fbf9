//! The poll loop: tick, draw, wait for a key.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use color_eyre::eyre::{bail, Result as EyreResult, WrapErr};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use mcpdisp::{io::JackSession, CaptureCounts, CaptureStats, Poller};
use ratatui::DefaultTerminal;

use crate::ui::{self, Status};

pub struct App<'a> {
    poller: Poller,
    session: &'a JackSession,
    stats: Arc<CaptureStats>,
    /// Counts at the last drop report.
    reported: CaptureCounts,
    clock: TickClock,
    should_quit: bool,
}

/// Fixed tick cadence. Key presses between ticks don't move the deadline.
#[derive(Debug, Clone, Copy)]
struct TickClock {
    interval: Duration,
    deadline: Instant,
}

impl TickClock {
    fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            deadline: now + interval,
        }
    }

    /// Time left before the next tick is due.
    fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Schedule the next tick. A loop that fell behind restarts from `now`
    /// rather than firing a burst of catch-up ticks.
    fn advance(&mut self, now: Instant) {
        self.deadline += self.interval;
        if self.deadline <= now {
            self.deadline = now + self.interval;
        }
    }
}

impl<'a> App<'a> {
    pub fn new(
        poller: Poller,
        session: &'a JackSession,
        stats: Arc<CaptureStats>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            poller,
            session,
            stats,
            reported: CaptureCounts::default(),
            clock: TickClock::new(poll_interval, Instant::now()),
            should_quit: false,
        }
    }

    /// Run until the user quits or the pipeline fails.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            if let Err(err) = self.session.check_alive() {
                log::error!("{err}");
                return Err(err).wrap_err("JACK connection lost");
            }
            if self.poller.is_abandoned() {
                log::error!("capture side dropped the frame queue");
                bail!("capture stopped");
            }

            let report = match self.poller.tick() {
                Ok(report) => report,
                Err(err) => {
                    log::error!("{err}");
                    return Err(err).wrap_err("transport queue corrupted");
                }
            };
            if report.decoded > 0 {
                log::debug!("decoded {} messages", report.decoded);
            }

            let counts = self.stats.snapshot();
            self.report_drops(counts);

            let status = Status {
                client_name: self.session.client_name(),
                ports: self.session.ports(),
                counts,
            };
            terminal.draw(|frame| ui::render(frame, self.poller.state(), &status))?;

            self.wait_for_tick()?;
        }

        Ok(())
    }

    /// Handle input until the next tick is due.
    fn wait_for_tick(&mut self) -> EyreResult<()> {
        loop {
            let remaining = self.clock.remaining(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
            if self.should_quit {
                return Ok(());
            }
        }
        self.clock.advance(Instant::now());
        Ok(())
    }

    /// Log drops that happened since the last report.
    fn report_drops(&mut self, counts: CaptureCounts) {
        let new = counts.since(&self.reported);
        if new.dropped() == 0 && new.thru_dropped == 0 {
            return;
        }

        log::warn!(
            "dropped {} events (queue full {}, oversized {}), pass-through dropped {}",
            new.dropped(),
            new.queue_full,
            new.oversized,
            new.thru_dropped
        );
        self.reported = counts;
    }

    fn handle_key(&mut self, key: KeyCode) {
        if let KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc = key {
            self.should_quit = true;
        }
    }
}
