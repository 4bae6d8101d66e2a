//! Current work snapshot: tickets and pull requests side by side

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn status_color(status: &str) -> Color {
    match status {
        "in-progress" | "open" => Color::Cyan,
        "dev-done" | "merged" => Color::Green,
        _ => Color::DarkGray,
    }
}

fn priority_color(priority: &str) -> Color {
    match priority {
        "critical" => Color::Red,
        "high" => Color::Yellow,
        "medium" => Color::Cyan,
        _ => Color::DarkGray,
    }
}

pub fn render_work_snapshot(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let ticket_lines: Vec<Line> = state
        .snapshot
        .tickets
        .iter()
        .map(|ticket| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", ticket.id),
                    Style::default().fg(Color::LightBlue),
                ),
                Span::raw(format!("{} ", ticket.title)),
                Span::styled(
                    format!("[{}] ", ticket.status),
                    Style::default().fg(status_color(&ticket.status)),
                ),
                Span::styled(
                    ticket.priority.clone(),
                    Style::default().fg(priority_color(&ticket.priority)),
                ),
            ])
        })
        .collect();

    let tickets_block = Block::default()
        .title("JIRA TICKETS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    f.render_widget(
        Paragraph::new(ticket_lines)
            .block(tickets_block)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let pr_lines: Vec<Line> = state
        .snapshot
        .pull_requests
        .iter()
        .map(|pr| {
            Line::from(vec![
                Span::styled(format!("{} ", pr.id), Style::default().fg(Color::LightBlue)),
                Span::raw(format!("{} ", pr.title)),
                Span::styled(
                    format!("[{}] ", pr.status),
                    Style::default().fg(status_color(&pr.status)),
                ),
                Span::styled(pr.author.clone(), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let prs_block = Block::default()
        .title("PULL REQUESTS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    f.render_widget(
        Paragraph::new(pr_lines)
            .block(prs_block)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}
