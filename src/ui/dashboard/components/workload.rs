//! Workload distribution and sprint progress

use super::super::state::DashboardState;
use super::super::utils::text_bar;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph};

const BAR_WIDTH: usize = 12;

pub fn render_workload(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Per-member utilization bars
    let member_lines: Vec<Line> = state
        .snapshot
        .team
        .iter()
        .map(|member| {
            let utilization = member.utilization_percent();
            let bar_color = if member.is_overloaded() {
                Color::Red
            } else {
                Color::Green
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<3}", member.initials()),
                    Style::default().fg(Color::LightBlue),
                ),
                Span::raw(format!("{:<14}", member.name)),
                Span::styled(text_bar(utilization, BAR_WIDTH), Style::default().fg(bar_color)),
                Span::styled(
                    format!(" {}/{} ({}%)", member.assigned, member.capacity, utilization),
                    Style::default().fg(if member.is_overloaded() {
                        Color::Red
                    } else {
                        Color::DarkGray
                    }),
                ),
            ])
        })
        .collect();

    let workload_block = Block::default()
        .title("WORKLOAD DISTRIBUTION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    f.render_widget(Paragraph::new(member_lines).block(workload_block), chunks[0]);

    // Sprint progress gauge with velocity line
    let sprint = &state.snapshot.sprint;
    let sprint_block = Block::default()
        .title("SPRINT PROGRESS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = sprint_block.inner(chunks[1]);
    f.render_widget(sprint_block, chunks[1]);

    let sprint_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                sprint.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} days left", sprint.days_left),
                Style::default().fg(Color::LightYellow),
            ),
        ])),
        sprint_chunks[0],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(sprint.progress_percent())
        .label(format!("{}/{} SP", sprint.completed, sprint.total));
    f.render_widget(gauge, sprint_chunks[1]);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(
                "Velocity: {} SP (prev {} SP)",
                sprint.velocity_current, sprint.velocity_previous
            ),
            Style::default().fg(Color::DarkGray),
        ))),
        sprint_chunks[3],
    );
}
