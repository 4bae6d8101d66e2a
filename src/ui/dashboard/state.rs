//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::assistant::{self, AssistantMessage};
use crate::config::Config;
use crate::consts::cli_consts::MAX_ACTIVITY_FEED;
use crate::events::Event as FeedEvent;
use crate::notifications::Notification;
use crate::risks::FilterCriteria;
use crate::source::WorkspaceSnapshot;
use crate::ui::app::UIConfig;
use crate::widgets::WidgetPrefs;

use std::collections::VecDeque;
use std::time::Instant;

/// Which of the two views the session is showing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DashboardView {
    Overview,
    Risks,
}

/// Team-wide numbers or the signed-in user's slice.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DashboardScope {
    Team,
    Personal,
}

/// State of the customize overlay while it is open.
#[derive(Debug, Clone, Default)]
pub struct CustomizeState {
    /// Index of the highlighted widget row.
    pub selected: usize,
}

/// State of the assistant chat overlay.
#[derive(Debug, Clone)]
pub struct AssistantState {
    pub open: bool,
    pub input: String,
    pub messages: Vec<AssistantMessage>,
    /// A reply was requested and has not arrived yet.
    pub waiting: bool,
}

impl Default for AssistantState {
    fn default() -> Self {
        Self {
            open: false,
            input: String::new(),
            messages: vec![assistant::greeting()],
            waiting: false,
        }
    }
}

/// Dashboard session state.
///
/// Widget preferences and filter criteria are owned values replaced on
/// every mutation; they start from defaults each session and are never
/// persisted.
#[derive(Debug)]
pub struct DashboardState {
    /// The signed-in session profile.
    pub profile: Config,
    /// Static workspace data backing the widgets.
    pub snapshot: WorkspaceSnapshot,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Widget visibility and render order.
    pub prefs: WidgetPrefs,
    /// Risk list filter state.
    pub criteria: FilterCriteria,
    /// Current view.
    pub view: DashboardView,
    /// Team or personal numbers.
    pub scope: DashboardScope,
    /// Index into `snapshot.projects` for the header filter.
    pub project_index: usize,
    /// Whether keystrokes go to the risk search box.
    pub search_focused: bool,
    /// Customize overlay, when open.
    pub customize: Option<CustomizeState>,
    /// Assistant overlay state.
    pub assistant: AssistantState,
    /// Header notifications.
    pub notifications: Vec<Notification>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<FeedEvent>,
    /// Activity feed for display (most recent last)
    pub feed: VecDeque<FeedEvent>,
    /// Transient status line for the footer (report confirmations).
    pub status_line: Option<String>,
    /// Tick at which the status line was set.
    pub status_tick: usize,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(
        profile: Config,
        snapshot: WorkspaceSnapshot,
        start_time: Instant,
        ui_config: UIConfig,
    ) -> Self {
        let prefs = snapshot.widgets.clone();
        let notifications = snapshot.notifications.clone();
        Self {
            profile,
            snapshot,
            start_time,
            prefs,
            criteria: FilterCriteria::default(),
            view: DashboardView::Overview,
            scope: DashboardScope::Team,
            project_index: 0,
            search_focused: false,
            customize: None,
            assistant: AssistantState::default(),
            notifications,
            pending_events: VecDeque::new(),
            feed: VecDeque::new(),
            status_line: None,
            status_tick: 0,
            with_background_color: ui_config.with_background_color,
            tick: 0,
        }
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: FeedEvent) {
        self.pending_events.push_back(event);
    }

    /// Add an event to the activity feed with size limit
    pub fn add_to_feed(&mut self, event: FeedEvent) {
        if self.feed.len() >= MAX_ACTIVITY_FEED {
            self.feed.pop_front();
        }
        self.feed.push_back(event);
    }

    /// The project name selected in the header filter.
    pub fn selected_project(&self) -> &str {
        self.snapshot
            .projects
            .get(self.project_index)
            .map(String::as_str)
            .unwrap_or("All Projects")
    }

    /// Whether keystrokes are currently captured by a text input.
    pub fn is_capturing_input(&self) -> bool {
        self.search_focused || self.assistant.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risks::{SeverityFilter, StatusFilter};
    use crate::source::{StaticSource, WorkspaceSource};

    async fn state() -> DashboardState {
        let snapshot = StaticSource::new().fetch_snapshot().await.unwrap();
        let profile = Config::new(
            "test-user".to_string(),
            "John Doe".to_string(),
            "john.doe@example.com".to_string(),
        );
        DashboardState::new(profile, snapshot, Instant::now(), UIConfig::new(false))
    }

    #[tokio::test]
    async fn new_sessions_start_from_defaults() {
        let state = state().await;
        assert_eq!(state.view, DashboardView::Overview);
        assert_eq!(state.scope, DashboardScope::Team);
        assert_eq!(state.criteria.query, "");
        assert_eq!(state.criteria.severity, SeverityFilter::All);
        assert_eq!(state.criteria.status, StatusFilter::Open);
        assert_eq!(state.prefs.iter().filter(|w| w.enabled).count(), 7);
        assert_eq!(state.selected_project(), "All Projects");
    }

    #[tokio::test]
    async fn feed_is_bounded() {
        let mut state = state().await;
        for i in 0..(MAX_ACTIVITY_FEED + 10) {
            state.add_to_feed(crate::events::Event::commit(
                "Sarah Miller".to_string(),
                format!("pushed commit {}", i),
            ));
        }
        assert_eq!(state.feed.len(), MAX_ACTIVITY_FEED);
        // The oldest entries were dropped.
        assert!(state.feed.front().unwrap().msg.contains("10"));
    }
}
