//! Header notifications and the unread badge

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Slack,
    Jira,
    Pr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub time: String,
    pub unread: bool,
}

impl Notification {
    fn new(kind: NotificationKind, message: &str, time: &str, unread: bool) -> Self {
        Self {
            kind,
            message: message.to_string(),
            time: time.to_string(),
            unread,
        }
    }
}

pub fn sample_notifications() -> Vec<Notification> {
    vec![
        Notification::new(
            NotificationKind::Slack,
            "Sarah mentioned you in #dev-team",
            "5 min ago",
            true,
        ),
        Notification::new(NotificationKind::Jira, "PROJ-123 assigned to you", "1 hour ago", true),
        Notification::new(NotificationKind::Pr, "Your PR was approved", "2 hours ago", false),
        Notification::new(
            NotificationKind::Slack,
            "Mike tagged you in a thread",
            "3 hours ago",
            false,
        ),
    ]
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| n.unread).count()
}
