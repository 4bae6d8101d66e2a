//! Aggregate stat cards row

use super::super::state::{DashboardScope, DashboardState};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_aggregates(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let cards = match state.scope {
        DashboardScope::Team => &state.snapshot.team_aggregates,
        DashboardScope::Personal => &state.snapshot.personal_aggregates,
    };
    if cards.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Ratio(1, cards.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (chunk, card) in chunks.iter().zip(cards) {
        let trend = card.trend_percent;
        let (arrow, trend_color) = if trend > 0 {
            ("▲", Color::Green)
        } else if trend < 0 {
            ("▼", Color::Red)
        } else {
            ("-", Color::DarkGray)
        };

        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                card.subtitle.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!("{} {}% vs last sprint", arrow, trend.abs()),
                Style::default().fg(trend_color),
            )),
        ];

        let block = Block::default()
            .title(card.title.clone())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        f.render_widget(Paragraph::new(lines).block(block), *chunk);
    }
}
