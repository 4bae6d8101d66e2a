//! Dashboard state update logic
//!
//! Event processing and the interaction handlers behind the key map.
//! Widget preferences and filter criteria are replaced wholesale on each
//! change; the render pass derives everything from the new values.

use super::state::{AssistantState, CustomizeState, DashboardScope, DashboardState, DashboardView};
use crate::assistant::{self, AssistantMessage};
use crate::events::{Event as FeedEvent, FeedSource};
use crate::risks::{self, FilterCriteria, RiskRecord, SummaryCounts};

/// How long a footer status line stays up, in UI ticks.
const STATUS_LINE_TICKS: usize = 50;

impl DashboardState {
    /// Update the dashboard state with a new tick, draining queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(event);
        }

        // Expire the footer status line
        if self.status_line.is_some() && self.tick.saturating_sub(self.status_tick) > STATUS_LINE_TICKS
        {
            self.status_line = None;
        }
    }

    /// Route a single event to the feed, the assistant, or the footer.
    fn process_event(&mut self, event: FeedEvent) {
        match event.source {
            FeedSource::Commits | FeedSource::PullRequests | FeedSource::Tickets => {
                self.add_to_feed(event);
            }
            FeedSource::Assistant => {
                self.assistant
                    .messages
                    .push(AssistantMessage::assistant(event.msg));
                self.assistant.waiting = false;
            }
            FeedSource::Reports => {
                self.status_line = Some(event.msg);
                self.status_tick = self.tick;
            }
        }
    }

    // --- View and scope ---------------------------------------------------

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            DashboardView::Overview => DashboardView::Risks,
            DashboardView::Risks => DashboardView::Overview,
        };
        // Leaving the risks view drops search focus but keeps criteria;
        // they reset only with the session.
        self.search_focused = false;
    }

    pub fn toggle_scope(&mut self) {
        self.scope = match self.scope {
            DashboardScope::Team => DashboardScope::Personal,
            DashboardScope::Personal => DashboardScope::Team,
        };
    }

    pub fn cycle_project(&mut self) {
        if self.snapshot.projects.is_empty() {
            return;
        }
        self.project_index = (self.project_index + 1) % self.snapshot.projects.len();
    }

    pub fn mark_notifications_read(&mut self) {
        for notification in &mut self.notifications {
            notification.unread = false;
        }
    }

    // --- Customize overlay ------------------------------------------------

    pub fn toggle_customize(&mut self) {
        self.customize = match self.customize {
            Some(_) => None,
            None => Some(CustomizeState::default()),
        };
    }

    pub fn customize_select_previous(&mut self) {
        if let Some(customize) = &mut self.customize {
            customize.selected = customize.selected.saturating_sub(1);
        }
    }

    pub fn customize_select_next(&mut self) {
        let last = self.prefs.len().saturating_sub(1);
        if let Some(customize) = &mut self.customize {
            customize.selected = (customize.selected + 1).min(last);
        }
    }

    /// Toggle visibility of the highlighted widget.
    pub fn customize_toggle_selected(&mut self) {
        let Some(customize) = &self.customize else {
            return;
        };
        if let Some(widget) = self.prefs.get(customize.selected) {
            let id = widget.id.clone();
            self.prefs = self.prefs.toggle(&id);
        }
    }

    /// Move the highlighted widget one slot up.
    ///
    /// Expressed as a single drop-time reorder: the dragged widget lands
    /// immediately before its previous neighbour.
    pub fn customize_move_up(&mut self) {
        let Some(customize) = &self.customize else {
            return;
        };
        let selected = customize.selected;
        if selected == 0 {
            return;
        }
        let (Some(dragged), Some(target)) =
            (self.prefs.get(selected), self.prefs.get(selected - 1))
        else {
            return;
        };
        let (dragged_id, target_id) = (dragged.id.clone(), target.id.clone());
        self.prefs = self.prefs.reorder(&dragged_id, &target_id);
        if let Some(customize) = &mut self.customize {
            customize.selected = selected - 1;
        }
    }

    /// Move the highlighted widget one slot down.
    ///
    /// The adjacent swap is the next widget dropped onto the selected
    /// one, so the same pure reorder covers both directions.
    pub fn customize_move_down(&mut self) {
        let Some(customize) = &self.customize else {
            return;
        };
        let selected = customize.selected;
        let (Some(dragged), Some(next)) = (self.prefs.get(selected), self.prefs.get(selected + 1))
        else {
            return;
        };
        let (dragged_id, next_id) = (dragged.id.clone(), next.id.clone());
        self.prefs = self.prefs.reorder(&next_id, &dragged_id);
        if let Some(customize) = &mut self.customize {
            customize.selected = selected + 1;
        }
    }

    // --- Risk filters -----------------------------------------------------

    pub fn cycle_severity_filter(&mut self) {
        self.criteria = FilterCriteria {
            severity: self.criteria.severity.cycle(),
            ..self.criteria.clone()
        };
    }

    pub fn cycle_status_filter(&mut self) {
        self.criteria = FilterCriteria {
            status: self.criteria.status.cycle(),
            ..self.criteria.clone()
        };
    }

    pub fn focus_search(&mut self) {
        self.search_focused = true;
    }

    pub fn unfocus_search(&mut self) {
        self.search_focused = false;
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut query = self.criteria.query.clone();
        query.push(c);
        self.criteria = FilterCriteria {
            query,
            ..self.criteria.clone()
        };
    }

    pub fn pop_search_char(&mut self) {
        let mut query = self.criteria.query.clone();
        query.pop();
        self.criteria = FilterCriteria {
            query,
            ..self.criteria.clone()
        };
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.search_focused = false;
    }

    /// The filtered risk list for the current criteria, input order
    /// preserved.
    pub fn filtered_risks(&self) -> Vec<&RiskRecord> {
        risks::apply(&self.snapshot.risks, &self.criteria)
    }

    /// Summary card counts over the full (unfiltered) record set.
    pub fn risk_summary(&self) -> SummaryCounts {
        risks::summary_counts(&self.snapshot.risks)
    }

    // --- Assistant overlay ------------------------------------------------

    pub fn toggle_assistant(&mut self) {
        self.assistant.open = !self.assistant.open;
    }

    pub fn close_assistant(&mut self) {
        self.assistant.open = false;
    }

    pub fn assistant_push_char(&mut self, c: char) {
        self.assistant.input.push(c);
    }

    pub fn assistant_pop_char(&mut self) {
        self.assistant.input.pop();
    }

    /// Commit the typed message. Returns the request text the caller
    /// should hand to the assistant task, or None for empty input.
    pub fn assistant_send(&mut self) -> Option<String> {
        let text = self.assistant.input.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.assistant.input.clear();
        Some(self.assistant_ask(text))
    }

    /// Send one of the quick actions by its 1-based index.
    pub fn assistant_quick_action(&mut self, index: usize) -> Option<String> {
        let action = assistant::QUICK_ACTIONS.get(index.checked_sub(1)?)?;
        Some(self.assistant_ask(action.to_string()))
    }

    fn assistant_ask(&mut self, text: String) -> String {
        self.assistant.messages.push(AssistantMessage::user(&text));
        self.assistant.waiting = true;
        text
    }

    /// Discard the whole chat, back to the greeting.
    pub fn assistant_reset(&mut self) {
        self.assistant = AssistantState {
            open: self.assistant.open,
            ..AssistantState::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::data::widget_ids;
    use crate::events::{Event, EventType};
    use crate::logging::LogLevel;
    use crate::risks::{SeverityFilter, StatusFilter};
    use crate::source::{StaticSource, WorkspaceSource};
    use crate::ui::app::UIConfig;
    use std::time::Instant;

    async fn state() -> DashboardState {
        let snapshot = StaticSource::new().fetch_snapshot().await.unwrap();
        let profile = Config::new(
            "test-user".to_string(),
            "John Doe".to_string(),
            "john.doe@example.com".to_string(),
        );
        DashboardState::new(profile, snapshot, Instant::now(), UIConfig::new(false))
    }

    fn visible_ids(state: &DashboardState) -> Vec<&str> {
        state.prefs.iter().map(|w| w.id.as_str()).collect()
    }

    #[tokio::test]
    async fn feed_events_land_in_the_feed() {
        let mut state = state().await;
        state.add_event(Event::commit(
            "Sarah Miller".to_string(),
            "pushed 3 commits to feature/auth".to_string(),
        ));
        state.update();
        assert_eq!(state.feed.len(), 1);
        assert!(state.pending_events.is_empty());
    }

    #[tokio::test]
    async fn assistant_replies_land_in_the_chat() {
        let mut state = state().await;
        let request = state.assistant_quick_action(2).unwrap();
        assert_eq!(request, "Sprint status");
        assert!(state.assistant.waiting);

        state.add_event(Event::assistant_reply("Here's a summary".to_string()));
        state.update();
        assert!(!state.assistant.waiting);
        // Greeting, user message, reply.
        assert_eq!(state.assistant.messages.len(), 3);
        assert!(state.feed.is_empty());
    }

    #[tokio::test]
    async fn report_events_set_the_status_line_and_expire() {
        let mut state = state().await;
        state.add_event(Event::report(
            "Report downloaded successfully".to_string(),
            EventType::Success,
            LogLevel::Info,
        ));
        state.update();
        assert_eq!(
            state.status_line.as_deref(),
            Some("Report downloaded successfully")
        );

        for _ in 0..=STATUS_LINE_TICKS {
            state.update();
        }
        assert!(state.status_line.is_none());
    }

    #[tokio::test]
    async fn customize_moves_the_selected_widget() {
        let mut state = state().await;
        state.toggle_customize();
        state.customize_select_next(); // "work-snapshot"
        state.customize_move_up();

        assert_eq!(visible_ids(&state)[0], widget_ids::WORK_SNAPSHOT);
        assert_eq!(state.customize.as_ref().unwrap().selected, 0);

        state.customize_move_down();
        assert_eq!(visible_ids(&state)[0], widget_ids::AGGREGATES);
        assert_eq!(state.customize.as_ref().unwrap().selected, 1);
    }

    #[tokio::test]
    async fn customize_move_at_the_edges_is_noop() {
        let mut state = state().await;
        let before = visible_ids(&state)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        state.toggle_customize();
        state.customize_move_up(); // already first
        for _ in 0..10 {
            state.customize_select_next();
        }
        state.customize_move_down(); // already last

        assert_eq!(
            visible_ids(&state),
            before.iter().map(String::as_str).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn customize_toggle_hides_a_widget_from_the_layout() {
        let mut state = state().await;
        state.toggle_customize();
        state.customize_toggle_selected();
        assert!(!state.prefs.is_enabled(widget_ids::AGGREGATES));
        assert_eq!(state.prefs.iter().filter(|w| w.enabled).count(), 6);
        // Cardinality is preserved; the widget is hidden, not dropped.
        assert_eq!(state.prefs.len(), 7);
    }

    #[tokio::test]
    async fn search_edits_compose_with_filter_cycles() {
        let mut state = state().await;
        state.focus_search();
        for c in "proj-142".chars() {
            state.push_search_char(c);
        }
        state.cycle_status_filter(); // Open -> Resolved
        state.cycle_status_filter(); // Resolved -> All
        assert_eq!(state.criteria.status, StatusFilter::All);
        assert_eq!(state.filtered_risks().len(), 1);

        state.pop_search_char();
        assert_eq!(state.criteria.query, "proj-14");

        state.reset_filters();
        assert_eq!(state.criteria, FilterCriteria::default());
    }

    #[tokio::test]
    async fn severity_cycle_narrows_the_list() {
        let mut state = state().await;
        state.cycle_severity_filter(); // All -> Critical
        assert_eq!(
            state.criteria.severity,
            SeverityFilter::Only(crate::risks::Severity::Critical)
        );
        let filtered = state.filtered_risks();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "PROJ-142 blocked");
    }

    #[tokio::test]
    async fn empty_assistant_input_sends_nothing() {
        let mut state = state().await;
        state.toggle_assistant();
        state.assistant_push_char(' ');
        assert!(state.assistant_send().is_none());
        assert!(!state.assistant.waiting);
    }

    #[tokio::test]
    async fn notifications_can_be_marked_read() {
        let mut state = state().await;
        assert_eq!(crate::notifications::unread_count(&state.notifications), 2);
        state.mark_notifications_read();
        assert_eq!(crate::notifications::unread_count(&state.notifications), 0);
    }
}
