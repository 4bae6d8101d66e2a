//! Customize overlay
//!
//! Widget visibility toggles and keyboard reordering over the dashboard

use super::super::state::DashboardState;
use super::super::utils::centered_rect;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

pub fn render_customize(f: &mut Frame, area: Rect, state: &DashboardState) {
    let Some(customize) = &state.customize else {
        return;
    };

    let overlay = centered_rect(area, 50, 70);
    f.render_widget(Clear, overlay);

    let mut lines: Vec<Line> = state
        .prefs
        .iter()
        .enumerate()
        .map(|(index, widget)| {
            let marker = if widget.enabled { "[x]" } else { "[ ]" };
            let mut style = if widget.enabled {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if index == customize.selected {
                style = style.bg(Color::Cyan).fg(Color::Black);
            }
            Line::from(Span::styled(
                format!(" {} {} ", marker, widget.name),
                style,
            ))
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Disabled widgets won't appear on your dashboard.",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    let block = Block::default()
        .title("CUSTOMIZE DASHBOARD")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(Paragraph::new(lines).block(block), overlay);
}
