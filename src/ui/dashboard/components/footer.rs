//! Dashboard footer component
//!
//! Key hints plus the transient status line for report confirmations

use super::super::state::{DashboardState, DashboardView};
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let hints = if state.customize.is_some() {
        "Up/Down select | Space toggle | K/J move | c close"
    } else if state.assistant.open {
        "type to chat | Enter send | 1-4 quick actions | Del clear | Esc close"
    } else if state.search_focused {
        "type to search | Backspace delete | Enter done"
    } else {
        match state.view {
            DashboardView::Overview => {
                "v risks | m scope | p project | c customize | a assistant | g report | q quit"
            }
            DashboardView::Risks => {
                "v overview | / search | f severity | s status | x reset | q quit"
            }
        }
    };

    let uptime = state.start_time.elapsed();
    let uptime_string = if uptime.as_secs() >= 3600 {
        format!(
            "up {}h {}m",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60
        )
    } else {
        format!("up {}m {}s", uptime.as_secs() / 60, uptime.as_secs() % 60)
    };

    let mut spans = vec![
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(uptime_string, Style::default().fg(Color::DarkGray)),
    ];
    if let Some(status) = &state.status_line {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            status.clone(),
            Style::default().fg(Color::LightGreen),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
