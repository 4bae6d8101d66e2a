//! Event System
//!
//! Types and implementations for feed events flowing from the mock
//! activity workers to the UI.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// Which producer emitted an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum FeedSource {
    /// Commit activity from the version-control integration.
    Commits,
    /// Pull request activity.
    PullRequests,
    /// Ticket movements from the issue tracker.
    Tickets,
    /// Replies from the assistant overlay.
    Assistant,
    /// Report generation lifecycle messages.
    Reports,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Activity,
    Success,
    Error,
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: FeedSource,
    pub user: String,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(
        source: FeedSource,
        user: String,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self {
            source,
            user,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn commit(user: String, msg: String) -> Self {
        Self::new(FeedSource::Commits, user, msg, EventType::Activity, LogLevel::Info)
    }

    pub fn pull_request(user: String, msg: String) -> Self {
        Self::new(
            FeedSource::PullRequests,
            user,
            msg,
            EventType::Activity,
            LogLevel::Info,
        )
    }

    pub fn ticket(user: String, msg: String) -> Self {
        Self::new(FeedSource::Tickets, user, msg, EventType::Activity, LogLevel::Info)
    }

    /// A finished assistant reply, delivered after the mock thinking delay.
    pub fn assistant_reply(msg: String) -> Self {
        Self::new(
            FeedSource::Assistant,
            "Assistant".to_string(),
            msg,
            EventType::Success,
            LogLevel::Info,
        )
    }

    pub fn report(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(FeedSource::Reports, "Reports".to_string(), msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show activity and info-or-louder events
        if self.event_type == EventType::Activity || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {} {}", self.source, self.timestamp, self.user, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_tag_the_source() {
        let event = Event::commit("Sarah Miller".into(), "pushed 3 commits to feature/auth".into());
        assert_eq!(event.source, FeedSource::Commits);
        assert_eq!(event.event_type, EventType::Activity);

        let event = Event::ticket("Anna Kim".into(), "moved PROJ-145 to In Progress".into());
        assert_eq!(event.source, FeedSource::Tickets);
    }

    #[test]
    fn activity_events_are_always_displayed() {
        let event = Event::pull_request("Mike Roberts".into(), "opened PR #892".into());
        assert!(event.should_display());
    }

    #[test]
    fn display_includes_user_and_message() {
        let event = Event::commit("John Doe".into(), "pushed 1 commit to main".into());
        let rendered = event.to_string();
        assert!(rendered.contains("John Doe"));
        assert!(rendered.contains("pushed 1 commit to main"));
    }
}
