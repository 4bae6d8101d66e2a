//! Core worker utilities

use crate::events::Event;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event. Send failures mean the UI is gone, so they
    /// are ignored.
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }
}
