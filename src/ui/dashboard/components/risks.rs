//! Risk detection rendering
//!
//! The overview widget shows the top open risks; the dedicated view adds
//! the summary cards, the filter bar, and the full filtered list.

use super::super::state::DashboardState;
use super::super::utils::severity_color;
use crate::risks::{RiskRecord, RiskStatus};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn risk_line(risk: &RiskRecord, detailed: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!("{:<9}", risk.severity.to_string()),
            Style::default()
                .fg(severity_color(risk.severity))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{:<9}", risk.kind.to_string()), Style::default().fg(Color::DarkGray)),
        Span::raw(risk.title.clone()),
    ];
    if risk.status == RiskStatus::Resolved {
        spans.push(Span::styled(
            " [resolved]",
            Style::default().fg(Color::Green),
        ));
    }
    if detailed {
        spans.push(Span::styled(
            format!("  {} | {} | {}", risk.assignee, risk.project, risk.created_at),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Compact widget for the overview: open risks, unfiltered.
pub fn render_risk_widget(f: &mut Frame, area: Rect, state: &DashboardState) {
    let lines: Vec<Line> = state
        .snapshot
        .risks
        .iter()
        .filter(|risk| risk.status == RiskStatus::Open)
        .map(|risk| risk_line(risk, false))
        .collect();

    let block = Block::default()
        .title("RISK DETECTION (v for details)")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// The full risks view: summary cards, filter bar, filtered list.
pub fn render_risks_view(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(area);

    render_summary_cards(f, chunks[0], state);
    render_filter_bar(f, chunks[1], state);
    render_risk_list(f, chunks[2], state);
}

fn render_summary_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let counts = state.risk_summary();
    let cards = [
        ("Critical", counts.critical, Color::Red),
        ("High", counts.high, Color::Yellow),
        ("Medium", counts.medium, Color::Cyan),
        ("Resolved", counts.resolved, Color::Green),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (chunk, (label, count, color)) in chunks.iter().zip(cards) {
        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color));
        let value = Paragraph::new(Line::from(Span::styled(
            count.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .block(block);
        f.render_widget(value, *chunk);
    }
}

fn render_filter_bar(f: &mut Frame, area: Rect, state: &DashboardState) {
    let query_style = if state.search_focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if state.search_focused { "_" } else { "" };

    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}{}", state.criteria.query, cursor), query_style),
        Span::styled("   Severity: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.criteria.severity.to_string(),
            Style::default().fg(Color::LightYellow),
        ),
        Span::styled("   Status: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.criteria.status.to_string(),
            Style::default().fg(Color::LightYellow),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_risk_list(f: &mut Frame, area: Rect, state: &DashboardState) {
    let filtered = state.filtered_risks();

    let paragraph = if filtered.is_empty() {
        let message = match state.criteria.status {
            crate::risks::StatusFilter::Open => {
                "No open risks match your filters. Great job!"
            }
            _ => "No risks match your current filters.",
        };
        Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Green),
        )))
    } else {
        let lines: Vec<Line> = filtered.iter().map(|risk| risk_line(risk, true)).collect();
        Paragraph::new(lines)
    };

    let block = Block::default()
        .title("RISKS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow))
        .padding(Padding::uniform(1));

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}
