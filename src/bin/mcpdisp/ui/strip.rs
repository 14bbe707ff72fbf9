//! Channel strips: text mirrors, lamps and a meter per channel.

use mcpdisp::surface::{ChannelStrip, StripLamp, SurfaceState, CHANNELS, METER_MAX};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::printable;

const LAMPS: [(StripLamp, &str, Color); 4] = [
    (StripLamp::Record, "R", Color::Red),
    (StripLamp::Solo, "S", Color::Yellow),
    (StripLamp::Mute, "M", Color::Blue),
    (StripLamp::Select, "*", Color::Green),
];

pub fn render_strips(frame: &mut Frame, area: Rect, state: &SurfaceState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, CHANNELS as u32); CHANNELS])
        .split(area);

    for (channel, (strip, &column)) in state.strips().iter().zip(columns.iter()).enumerate() {
        render_strip(frame, column, channel, strip);
    }
}

fn render_strip(frame: &mut Frame, area: Rect, channel: usize, strip: &ChannelStrip) {
    let border = if strip.select {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(format!(" {} ", channel + 1))
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Text mirrors
            Constraint::Length(1), // Lamps
            Constraint::Length(1), // Meter
            Constraint::Min(0),
        ])
        .split(inner);

    let text = vec![
        Line::raw(printable(&strip.top_text)),
        Line::raw(printable(&strip.low_text)),
    ];
    frame.render_widget(Paragraph::new(text), rows[0]);

    let lamps: Vec<Span> = LAMPS
        .iter()
        .map(|&(lamp, label, color)| {
            if strip.lamp(lamp) {
                Span::styled(
                    format!("{label} "),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!("{label} "), Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(lamps)), rows[1]);

    let meter = strip.meter;
    let color = if meter.peak() { Color::Red } else { Color::Green };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(f64::from(meter.level()) / f64::from(METER_MAX))
        .label(if meter.peak() { "CLIP" } else { "" });
    frame.render_widget(gauge, rows[2]);
}
