//! The two 56-character LCD rows.

use mcpdisp::surface::{Row, SurfaceState};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::printable;

pub fn render_lcd(frame: &mut Frame, area: Rect, state: &SurfaceState) {
    let block = Block::default().title(" LCD ").borders(Borders::ALL);
    let style = Style::default().fg(Color::LightGreen);

    let lines = vec![
        Line::styled(printable(state.line(Row::Top)), style),
        Line::styled(printable(state.line(Row::Bottom)), style),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
