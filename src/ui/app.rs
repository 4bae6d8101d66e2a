//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::assistant;
use crate::config::Config;
use crate::consts::cli_consts::{POLL_INTERVAL_MS, SPLASH_DURATION_MS};
use crate::events::{Event as FeedEvent, EventType};
use crate::logging::LogLevel;
use crate::report::{self, ReportDelivery, ReportRequest};
use crate::source::WorkspaceSnapshot;
use crate::ui::dashboard::state::DashboardView;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::login::render_login;
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Login screen where the mock authentication completes.
    Login,
    /// Dashboard screen displaying the workspace widgets.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The signed-in session profile.
    profile: Config,

    /// Workspace snapshot handed to each new dashboard session.
    snapshot: WorkspaceSnapshot,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from feed workers.
    event_receiver: mpsc::Receiver<FeedEvent>,

    /// Sender for UI-originated events (assistant replies, reports).
    event_sender: mpsc::Sender<FeedEvent>,

    /// Broadcasts shutdown signal to worker threads.
    shutdown_sender: broadcast::Sender<()>,

    /// Whether to enable background colors
    with_background_color: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        profile: Config,
        snapshot: WorkspaceSnapshot,
        event_receiver: mpsc::Receiver<FeedEvent>,
        event_sender: mpsc::Sender<FeedEvent>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            profile,
            snapshot,
            current_screen: Screen::Splash,
            event_receiver,
            event_sender,
            shutdown_sender,
            with_background_color: ui_config.with_background_color,
        }
    }

    /// Completes the mock login, transitioning to the dashboard screen.
    pub fn login(&mut self) {
        let ui_config = UIConfig::new(self.with_background_color);
        let state = DashboardState::new(
            self.profile.clone(),
            self.snapshot.clone(),
            self.start_time,
            ui_config,
        );
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Update the state based on the current screen
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen, &app.profile))?;

        // Handle splash-to-login transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.current_screen = Screen::Login;
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events, unless a text input or overlay
                // owns the keyboard
                let input_captured = match &app.current_screen {
                    Screen::Dashboard(state) => {
                        state.is_capturing_input() || state.customize.is_some()
                    }
                    _ => false,
                };
                if !input_captured && matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                let sender = app.event_sender.clone();
                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any key press will skip the splash screen
                        app.current_screen = Screen::Login;
                    }
                    Screen::Login => {
                        if key.code == KeyCode::Enter {
                            app.login();
                        }
                    }
                    Screen::Dashboard(state) => {
                        handle_dashboard_key(state, key.code, &sender);
                    }
                }
            }
        }
    }
}

/// Route a key press to the dashboard state.
fn handle_dashboard_key(
    state: &mut DashboardState,
    code: KeyCode,
    sender: &mpsc::Sender<FeedEvent>,
) {
    // Overlays take the keyboard first
    if state.assistant.open {
        match code {
            KeyCode::Esc => state.close_assistant(),
            KeyCode::Enter => {
                if let Some(request) = state.assistant_send() {
                    spawn_assistant_task(sender.clone(), request);
                }
            }
            KeyCode::Backspace => state.assistant_pop_char(),
            KeyCode::Delete => state.assistant_reset(),
            KeyCode::Char(c @ '1'..='4') if state.assistant.input.is_empty() => {
                let index = c.to_digit(10).unwrap_or(0) as usize;
                if let Some(request) = state.assistant_quick_action(index) {
                    spawn_assistant_task(sender.clone(), request);
                }
            }
            KeyCode::Char(c) => state.assistant_push_char(c),
            _ => {}
        }
        return;
    }

    if state.customize.is_some() {
        match code {
            KeyCode::Esc | KeyCode::Char('c') => state.toggle_customize(),
            KeyCode::Up | KeyCode::Char('k') => state.customize_select_previous(),
            KeyCode::Down | KeyCode::Char('j') => state.customize_select_next(),
            KeyCode::Char(' ') => state.customize_toggle_selected(),
            KeyCode::Char('K') => state.customize_move_up(),
            KeyCode::Char('J') => state.customize_move_down(),
            _ => {}
        }
        return;
    }

    if state.search_focused {
        match code {
            KeyCode::Esc | KeyCode::Enter => state.unfocus_search(),
            KeyCode::Backspace => state.pop_search_char(),
            KeyCode::Char(c) => state.push_search_char(c),
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Char('v') | KeyCode::Tab => state.toggle_view(),
        KeyCode::Char('m') => state.toggle_scope(),
        KeyCode::Char('p') => state.cycle_project(),
        KeyCode::Char('c') => state.toggle_customize(),
        KeyCode::Char('a') => state.toggle_assistant(),
        KeyCode::Char('n') => state.mark_notifications_read(),
        KeyCode::Char('g') => spawn_report_task(sender.clone()),
        KeyCode::Char('/') if state.view == DashboardView::Risks => state.focus_search(),
        KeyCode::Char('f') if state.view == DashboardView::Risks => state.cycle_severity_filter(),
        KeyCode::Char('s') if state.view == DashboardView::Risks => state.cycle_status_filter(),
        KeyCode::Char('x') if state.view == DashboardView::Risks => state.reset_filters(),
        _ => {}
    }
}

/// Produce the assistant reply off the UI loop; it lands as an event.
fn spawn_assistant_task(sender: mpsc::Sender<FeedEvent>, request: String) {
    tokio::spawn(async move {
        let reply = assistant::respond(&request).await;
        let _ = sender.send(FeedEvent::assistant_reply(reply)).await;
    });
}

/// Generate the mock report off the UI loop, reporting progress and
/// completion as events.
fn spawn_report_task(sender: mpsc::Sender<FeedEvent>) {
    tokio::spawn(async move {
        let _ = sender
            .send(FeedEvent::report(
                "Generating report...".to_string(),
                EventType::Waiting,
                LogLevel::Info,
            ))
            .await;
        let outcome = report::generate(&ReportRequest::default(), &ReportDelivery::Download).await;
        let event = match outcome {
            Ok(confirmation) => {
                FeedEvent::report(confirmation, EventType::Success, LogLevel::Info)
            }
            Err(e) => FeedEvent::report(e.to_string(), EventType::Error, LogLevel::Error),
        };
        let _ = sender.send(event).await;
    });
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen, profile: &Config) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Login => render_login(f, profile),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
