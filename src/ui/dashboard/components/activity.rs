//! Recent activity feed panel
//!
//! Renders feed events with per-source coloring

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, get_source_color};
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the activity feed, newest first, as many rows as fit.
pub fn render_activity_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Account for borders and padding
    let max_rows = (area.height.saturating_sub(3)) as usize;
    let row_count = if max_rows > 0 { max_rows } else { 1 };

    let feed_lines: Vec<Line> = state
        .feed
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(row_count)
        .map(|event| {
            let source_color = get_source_color(&event.source);
            let compact_time = format_compact_timestamp(&event.timestamp);

            Line::from(vec![
                Span::styled(
                    format!("{} ", compact_time),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{} ", event.user),
                    Style::default().fg(Color::White),
                ),
                Span::styled(event.msg.clone(), Style::default().fg(source_color)),
            ])
        })
        .collect();

    let feed_paragraph = if feed_lines.is_empty() {
        Paragraph::new(vec![Line::from("Waiting for activity...")])
    } else {
        Paragraph::new(feed_lines)
    };

    let feed_block = Block::default()
        .title("RECENT ACTIVITY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(
        feed_paragraph.block(feed_block).wrap(Wrap { trim: true }),
        area,
    );
}
