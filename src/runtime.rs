//! Runtime for coordinating the mock feed workers

use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, feed};
use crate::data;
use crate::events::{Event, FeedSource};
use crate::workers::core::EventSender;
use crate::workers::feed::{FeedEntry, FeedWorker};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

fn entries(rows: Vec<(&str, &str, &str)>) -> Vec<FeedEntry> {
    rows.into_iter()
        .map(|(user, action, target)| FeedEntry::new(user, action, target))
        .collect()
}

/// Start the commit, pull request, and ticket feed workers.
///
/// Returns the event receiver for the UI, a sender clone for
/// UI-originated events (assistant replies, report completions), and the
/// worker join handles.
pub fn start_feed_workers(
    shutdown: &broadcast::Sender<()>,
) -> (mpsc::Receiver<Event>, mpsc::Sender<Event>, Vec<JoinHandle<()>>) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);

    let workers = [
        (
            FeedSource::Commits,
            entries(data::seed_commits()),
            feed::commit_interval(),
        ),
        (
            FeedSource::PullRequests,
            entries(data::seed_pull_requests()),
            feed::pull_request_interval(),
        ),
        (
            FeedSource::Tickets,
            entries(data::seed_tickets()),
            feed::ticket_interval(),
        ),
    ];

    let mut join_handles = Vec::with_capacity(workers.len());
    for (source, entries, interval) in workers {
        let worker = FeedWorker::new(
            source,
            entries,
            interval,
            EventSender::new(event_sender.clone()),
        );
        join_handles.push(worker.run(shutdown.subscribe()));
    }

    (event_receiver, event_sender, join_handles)
}
