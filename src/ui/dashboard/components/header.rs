//! Dashboard header component
//!
//! Renders the title bar and the scope/project/notification strip

use super::super::state::{DashboardScope, DashboardState, DashboardView};
use crate::notifications::unread_count;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the title and the context strip below it.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = match state.scope {
        DashboardScope::Team => format!("WORKTRACKER v{} - TEAM INSIGHTS", version),
        DashboardScope::Personal => format!("WORKTRACKER v{} - MY DASHBOARD", version),
    };

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let view_name = match state.view {
        DashboardView::Overview => "Overview",
        DashboardView::Risks => "Risk Detection",
    };

    let unread = unread_count(&state.notifications);
    let notification_span = match state.notifications.iter().find(|n| n.unread) {
        Some(latest) => Span::styled(
            format!(
                "({} unread) {}: {} ({})",
                unread, latest.kind, latest.message, latest.time
            ),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("(no unread)", Style::default().fg(Color::DarkGray)),
    };

    let strip = Line::from(vec![
        Span::styled(
            format!(" {} ", view_name),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            state.profile.display_name.clone(),
            Style::default().fg(Color::LightGreen),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", state.selected_project()),
            Style::default().fg(Color::LightYellow),
        ),
        Span::raw("  "),
        notification_span,
    ]);

    let strip_widget = Paragraph::new(strip).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(strip_widget, header_chunks[1]);
}
