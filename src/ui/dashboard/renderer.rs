//! Dashboard main renderer
//!
//! Lays the enabled widgets out in preference order and draws whichever
//! overlay is open on top.

use super::components::{
    activity, aggregates, assistant, customize, footer, header, insights, risks, snapshot, team,
    workload,
};
use super::state::{DashboardScope, DashboardState, DashboardView};
use crate::data::widget_ids;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    match state.view {
        DashboardView::Overview => render_overview(f, main_chunks[1], state),
        DashboardView::Risks => risks::render_risks_view(f, main_chunks[1], state),
    }

    footer::render_footer(f, main_chunks[2], state);

    // Overlays draw last so they sit on top of the widgets.
    if state.customize.is_some() {
        customize::render_customize(f, main_chunks[1], state);
    }
    if state.assistant.open {
        assistant::render_assistant(f, main_chunks[1], state);
    }
}

/// Preferred height for a widget row; Fill rows share the remainder.
fn widget_constraint(id: &str) -> Constraint {
    match id {
        widget_ids::AGGREGATES => Constraint::Length(5),
        widget_ids::WORKLOAD => Constraint::Length(9),
        widget_ids::AI_SUMMARY => Constraint::Length(8),
        widget_ids::TEAM => Constraint::Length(8),
        _ => Constraint::Fill(1),
    }
}

/// Render the enabled widgets top to bottom in preference order.
fn render_overview(f: &mut Frame, area: Rect, state: &DashboardState) {
    let mut visible: Vec<&str> = state
        .prefs
        .iter()
        .filter(|w| state.prefs.is_enabled(&w.id))
        .map(|w| w.id.as_str())
        .collect();

    // The team overview only applies to team-wide numbers.
    if state.scope == DashboardScope::Personal {
        visible.retain(|id| *id != widget_ids::TEAM);
    }

    if visible.is_empty() {
        let placeholder = Paragraph::new("All widgets are hidden. Press c to customize.")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(placeholder, area);
        return;
    }

    let constraints: Vec<Constraint> = visible.iter().map(|id| widget_constraint(id)).collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (chunk, id) in chunks.iter().zip(visible) {
        match id {
            widget_ids::AGGREGATES => aggregates::render_aggregates(f, *chunk, state),
            widget_ids::WORK_SNAPSHOT => snapshot::render_work_snapshot(f, *chunk, state),
            widget_ids::WORKLOAD => workload::render_workload(f, *chunk, state),
            widget_ids::ACTIVITY => activity::render_activity_panel(f, *chunk, state),
            widget_ids::RISKS => risks::render_risk_widget(f, *chunk, state),
            widget_ids::AI_SUMMARY => insights::render_insights(f, *chunk, state),
            widget_ids::TEAM => team::render_team_overview(f, *chunk, state),
            // Unknown ids come from newer configs; render nothing rather than fail.
            _ => {}
        }
    }
}
