//! Assistant chat overlay

use super::super::state::DashboardState;
use super::super::utils::centered_rect;
use crate::assistant::{QUICK_ACTIONS, Role};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

pub fn render_assistant(f: &mut Frame, area: Rect, state: &DashboardState) {
    let overlay = centered_rect(area, 60, 80);
    f.render_widget(Clear, overlay);

    let block = Block::default()
        .title("ASSISTANT")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
        .padding(Padding::uniform(1));
    let inner = block.inner(overlay);
    f.render_widget(block, overlay);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    // Chat transcript, most recent messages last
    let max_rows = chunks[0].height as usize;
    let mut message_lines: Vec<Line> = state
        .assistant
        .messages
        .iter()
        .map(|message| match message.role {
            Role::User => Line::from(vec![
                Span::styled("you> ", Style::default().fg(Color::LightGreen)),
                Span::raw(message.content.clone()),
            ]),
            Role::Assistant => Line::from(vec![
                Span::styled("ai>  ", Style::default().fg(Color::Magenta)),
                Span::styled(message.content.clone(), Style::default().fg(Color::Gray)),
            ]),
        })
        .collect();
    if state.assistant.waiting {
        let dots = ".".repeat(state.tick % 4);
        message_lines.push(Line::from(Span::styled(
            format!("ai>  thinking{}", dots),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let skip = message_lines.len().saturating_sub(max_rows);
    let visible: Vec<Line> = message_lines.into_iter().skip(skip).collect();
    f.render_widget(Paragraph::new(visible).wrap(Wrap { trim: true }), chunks[0]);

    // Quick action strip
    let quick: Vec<Span> = QUICK_ACTIONS
        .iter()
        .enumerate()
        .flat_map(|(index, action)| {
            vec![
                Span::styled(
                    format!("[{}] ", index + 1),
                    Style::default().fg(Color::LightYellow),
                ),
                Span::styled(
                    format!("{}  ", action),
                    Style::default().fg(Color::DarkGray),
                ),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(quick)), chunks[1]);

    // Input line
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Magenta)),
            Span::styled(
                format!("{}_", state.assistant.input),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])),
        chunks[2],
    );
}
