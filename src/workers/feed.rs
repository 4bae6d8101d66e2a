//! Activity feed workers
//!
//! Each worker replays its seed entries on a jittered interval,
//! simulating a live integration. Events are fire-and-forget; the only
//! coordination is the shutdown broadcast.

use super::core::EventSender;
use crate::consts::cli_consts::feed;
use crate::events::{Event, FeedSource};
use rand::Rng;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// One seed activity entry: who did what to which target.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub user: String,
    pub action: String,
    pub target: String,
}

impl FeedEntry {
    pub fn new(user: &str, action: &str, target: &str) -> Self {
        Self {
            user: user.to_string(),
            action: action.to_string(),
            target: target.to_string(),
        }
    }

    fn message(&self) -> String {
        format!("{} {}", self.action, self.target)
    }
}

/// Replays a fixed entry list as feed events until shut down.
pub struct FeedWorker {
    source: FeedSource,
    entries: Vec<FeedEntry>,
    interval: Duration,
    event_sender: EventSender,
}

impl FeedWorker {
    pub fn new(
        source: FeedSource,
        entries: Vec<FeedEntry>,
        interval: Duration,
        event_sender: EventSender,
    ) -> Self {
        Self {
            source,
            entries,
            interval,
            event_sender,
        }
    }

    /// Spawn the replay loop. Entries cycle; each wait adds random
    /// jitter so the three feeds do not fire in lockstep.
    pub fn run(self, mut shutdown: broadcast::Receiver<()>) -> JoinHandle<()> {
        tokio::spawn(async move {
            if self.entries.is_empty() {
                return;
            }
            let mut index = 0usize;
            loop {
                let jitter = {
                    let mut rng = rand::thread_rng();
                    Duration::from_millis(rng.gen_range(0..=feed::JITTER_MS))
                };
                tokio::select! {
                    _ = sleep(self.interval + jitter) => {
                        let entry = &self.entries[index % self.entries.len()];
                        index = index.wrapping_add(1);
                        self.event_sender.send_event(self.event_for(entry)).await;
                    }
                    _ = shutdown.recv() => break,
                }
            }
        })
    }

    fn event_for(&self, entry: &FeedEntry) -> Event {
        match self.source {
            FeedSource::Commits => Event::commit(entry.user.clone(), entry.message()),
            FeedSource::PullRequests => Event::pull_request(entry.user.clone(), entry.message()),
            // Assistant and report events originate in the UI, not here.
            _ => Event::ticket(entry.user.clone(), entry.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventType;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn worker_emits_entries_in_order_and_stops_on_shutdown() {
        let (sender, mut receiver) = mpsc::channel(16);
        let (shutdown_sender, _) = broadcast::channel(1);

        let worker = FeedWorker::new(
            FeedSource::Commits,
            vec![
                FeedEntry::new("Sarah Miller", "pushed 3 commits to", "feature/auth"),
                FeedEntry::new("John Doe", "pushed 1 commit to", "main"),
            ],
            Duration::from_secs(1),
            EventSender::new(sender),
        );
        let handle = worker.run(shutdown_sender.subscribe());

        let first = receiver.recv().await.unwrap();
        assert_eq!(first.source, FeedSource::Commits);
        assert_eq!(first.event_type, EventType::Activity);
        assert_eq!(first.user, "Sarah Miller");
        assert_eq!(first.msg, "pushed 3 commits to feature/auth");

        let second = receiver.recv().await.unwrap();
        assert_eq!(second.user, "John Doe");

        // Entries cycle once exhausted.
        let third = receiver.recv().await.unwrap();
        assert_eq!(third.user, "Sarah Miller");

        shutdown_sender.send(()).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn worker_with_no_entries_exits_immediately() {
        let (sender, _receiver) = mpsc::channel(1);
        let (shutdown_sender, _) = broadcast::channel(1);

        let worker = FeedWorker::new(
            FeedSource::Tickets,
            Vec::new(),
            Duration::from_secs(1),
            EventSender::new(sender),
        );
        worker.run(shutdown_sender.subscribe()).await.unwrap();
    }
}
