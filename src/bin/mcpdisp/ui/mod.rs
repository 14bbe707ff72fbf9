//! TUI for mcpdisp
//!
//! Draws one [`SurfaceState`] per frame: the LCD, the eight channel
//! strips, the master section (master units only) and a status line.

mod lcd;
mod master;
mod strip;

use mcpdisp::{io::PortNames, surface::SurfaceState, CaptureCounts};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use lcd::render_lcd;
use master::render_master;
use strip::render_strips;

/// Everything on screen that is not surface state.
pub struct Status<'a> {
    pub client_name: &'a str,
    pub ports: &'a PortNames,
    pub counts: CaptureCounts,
}

/// Surface bytes as display text. Anything outside printable ASCII shows
/// as a space.
pub fn printable(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() {
                b as char
            } else {
                ' '
            }
        })
        .collect()
}

pub fn render(frame: &mut Frame, state: &SurfaceState, status: &Status) {
    let master_height = if state.mode().master { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // LCD
            Constraint::Min(6),                // Strips
            Constraint::Length(master_height), // Master section
            Constraint::Length(1),             // Status bar
        ])
        .split(frame.area());

    render_lcd(frame, chunks[0], state);
    render_strips(frame, chunks[1], state);
    if state.mode().master {
        render_master(frame, chunks[2], state);
    }
    render_status(frame, chunks[3], state, status);
}

fn render_status(frame: &mut Frame, area: Rect, state: &SurfaceState, status: &Status) {
    let mode = state.mode();
    let mode = match (mode.master, mode.timecode()) {
        (true, true) => "master+timecode",
        (true, false) => "master",
        _ => "extender",
    };
    let counts = status.counts;
    let drop_color = if counts.dropped() + counts.thru_dropped > 0 {
        Color::Red
    } else {
        Color::DarkGray
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ({mode})  ", status.client_name),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{} -> {}  ", status.ports.input, status.ports.thru),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("events: {}  ", counts.captured),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(
                "dropped: {} full, {} oversized, {} thru  ",
                counts.queue_full, counts.oversized, counts.thru_dropped
            ),
            Style::default().fg(drop_color),
        ),
        Span::styled("[Q] Quit", Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
