//! Session setup and initialization

use crate::config::Config;
use crate::events::Event;
use crate::runtime::start_feed_workers;
use crate::source::{WorkspaceSnapshot, WorkspaceSource};
use std::error::Error;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Event receiver for feed worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Sender clone for UI-originated events (assistant, reports)
    pub event_sender: mpsc::Sender<Event>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// The signed-in session profile
    pub profile: Config,
    /// Workspace snapshot backing the dashboard widgets
    pub snapshot: WorkspaceSnapshot,
}

/// Sets up a dashboard session
///
/// This function handles the common setup required for both TUI and
/// headless modes:
/// 1. Fetches the workspace snapshot through the data source
/// 2. Sets up the shutdown channel
/// 3. Starts the activity feed workers
///
/// # Arguments
/// * `profile` - The signed-in session profile from the config file
/// * `source` - The workspace data source
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - Session setup failed
pub async fn setup_session(
    profile: Config,
    source: &dyn WorkspaceSource,
) -> Result<SessionData, Box<dyn Error>> {
    let snapshot = source.fetch_snapshot().await?;

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (event_receiver, event_sender, join_handles) = start_feed_workers(&shutdown_sender);

    Ok(SessionData {
        event_receiver,
        event_sender,
        join_handles,
        shutdown_sender,
        profile,
        snapshot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;

    fn profile() -> Config {
        Config::new(
            "test-user".to_string(),
            "John Doe".to_string(),
            "john.doe@example.com".to_string(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn setup_starts_workers_and_carries_the_snapshot() {
        let session = setup_session(profile(), &StaticSource::new()).await.unwrap();
        assert_eq!(session.join_handles.len(), 3);
        assert_eq!(session.snapshot.widgets.len(), 7);

        session.shutdown_sender.send(()).unwrap();
        for handle in session.join_handles {
            handle.await.unwrap();
        }
    }
}
