//! Master section - assignment readout, timecode, transport lamps

use mcpdisp::surface::{SurfaceState, TransportLamps};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::printable;

fn lamp(label: &str, on: bool, color: Color) -> Span<'static> {
    let color = if on { color } else { Color::DarkGray };
    Span::styled(format!("{label}  "), Style::default().fg(color))
}

fn transport_spans(lamps: &TransportLamps) -> Vec<Span<'static>> {
    vec![
        lamp("<<", lamps.rewind, Color::White),
        lamp(">>", lamps.forward, Color::White),
        lamp("STOP", lamps.stop, Color::White),
        lamp("PLAY", lamps.play, Color::Green),
        lamp("REC", lamps.record, Color::Red),
        lamp("SOLO", lamps.solo, Color::Yellow),
        lamp("FLIP", lamps.flip, Color::Cyan),
        lamp("VIEW", lamps.view, Color::Cyan),
    ]
}

pub fn render_master(frame: &mut Frame, area: Rect, state: &SurfaceState) {
    let block = Block::default().title(" Master ").borders(Borders::ALL);
    let master = state.master();

    let mut spans = vec![Span::styled(
        format!(" [{}]  ", printable(&master.assign_text)),
        Style::default().fg(Color::LightRed),
    )];

    if state.mode().timecode() {
        spans.push(Span::styled(
            format!("{}  ", printable(&master.timecode)),
            Style::default().fg(Color::LightRed),
        ));
    }

    spans.extend(transport_spans(&master.transport));
    spans.push(Span::styled(
        master.assign_mode.label(),
        Style::default().fg(Color::Magenta),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
