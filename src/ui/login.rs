//! Login screen module

use crate::config::Config;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Renders the login screen with the stored session profile.
///
/// Authentication is simulated; pressing Enter always succeeds.
pub fn render_login(f: &mut Frame, profile: &Config) {
    let size = f.area();

    let block = Block::default()
        .title("Sign in")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let lines = vec![
        Line::from(Span::styled(
            "Welcome back",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Signed in as "),
            Span::styled(
                profile.display_name.clone(),
                Style::default().fg(Color::LightGreen),
            ),
            Span::styled(
                format!(" <{}>", profile.email),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from("Press Enter to open your dashboard"),
        Line::from("Press Esc to exit"),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(paragraph, size);
}
