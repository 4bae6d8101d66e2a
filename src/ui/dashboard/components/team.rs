//! Team overview widget

use super::super::state::DashboardState;
use super::super::utils::text_bar;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

const BAR_WIDTH: usize = 10;

pub fn render_team_overview(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines: Vec<Line> = state
        .snapshot
        .team
        .iter()
        .map(|member| {
            let percent = if member.total == 0 {
                0
            } else {
                member.completed * 100 / member.total
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<3}", member.initials()),
                    Style::default().fg(Color::LightBlue),
                ),
                Span::raw(format!("{:<14}", member.name)),
                Span::styled(
                    format!("{:<11}", member.role),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(text_bar(percent, BAR_WIDTH), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!(" {}/{} tasks", member.completed, member.total),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let block = Block::default()
        .title("TEAM OVERVIEW")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
