//! AI summary and recommendations widget

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_insights(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines: Vec<Line> = state
        .snapshot
        .insights
        .iter()
        .map(|insight| {
            let (marker, color) = if insight.warning {
                ("!", Color::Yellow)
            } else {
                ("+", Color::Green)
            };
            Line::from(vec![
                Span::styled(format!(" {} ", marker), Style::default().fg(color)),
                Span::raw(insight.text.clone()),
            ])
        })
        .collect();

    if !state.snapshot.recommendations.is_empty() {
        lines.push(Line::from(Span::styled(
            "Recommendations:",
            Style::default().fg(Color::Magenta),
        )));
        for recommendation in &state.snapshot.recommendations {
            lines.push(Line::from(Span::styled(
                format!(" * {}", recommendation),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    let block = Block::default()
        .title("AI SUMMARY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
