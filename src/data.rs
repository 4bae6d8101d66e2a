//! Static workspace dataset
//!
//! The fixed collections every view renders from. In a real deployment
//! these would come from the ticketing and VCS integrations; here they
//! are supplied as static configuration.

use crate::risks::{RiskKind, RiskRecord, RiskStatus, Severity};
use crate::source::{Insight, PullRequestSummary, TicketSummary};
use crate::widgets::{WidgetDescriptor, WidgetPrefs};
use crate::workload::{AggregateCard, Sprint, TeamMember};

/// Widget ids known to the dashboard layout.
pub mod widget_ids {
    pub const AGGREGATES: &str = "aggregates";
    pub const WORK_SNAPSHOT: &str = "work-snapshot";
    pub const WORKLOAD: &str = "workload";
    pub const ACTIVITY: &str = "activity";
    pub const RISKS: &str = "risks";
    pub const AI_SUMMARY: &str = "ai-summary";
    pub const TEAM: &str = "team";
}

/// The default widget set, all visible, in default render order.
pub fn initial_widgets() -> WidgetPrefs {
    WidgetPrefs::new(vec![
        WidgetDescriptor::new(widget_ids::AGGREGATES, "Aggregate Cards"),
        WidgetDescriptor::new(widget_ids::WORK_SNAPSHOT, "Work Snapshot"),
        WidgetDescriptor::new(widget_ids::WORKLOAD, "Workload & Sprint"),
        WidgetDescriptor::new(widget_ids::ACTIVITY, "Recent Activity"),
        WidgetDescriptor::new(widget_ids::RISKS, "Risk Detection"),
        WidgetDescriptor::new(widget_ids::AI_SUMMARY, "AI Summary"),
        WidgetDescriptor::new(widget_ids::TEAM, "Team Overview"),
    ])
}

/// Selectable project scopes for the dashboard header filter.
pub fn projects() -> Vec<&'static str> {
    vec!["All Projects", "Project Alpha", "Project Beta", "Project Gamma"]
}

/// The flagged risks across all teams.
pub fn sample_risks() -> Vec<RiskRecord> {
    vec![
        RiskRecord {
            id: 1,
            kind: RiskKind::Stale,
            severity: Severity::High,
            title: "PR #887 stale for 5 days".into(),
            description: "No activity on auth refactor PR. Waiting on code review from senior developers.".into(),
            assignee: "Mike R.".into(),
            project: "Project Alpha".into(),
            created_at: "5 days ago".into(),
            status: RiskStatus::Open,
        },
        RiskRecord {
            id: 2,
            kind: RiskKind::Blocked,
            severity: Severity::Critical,
            title: "PROJ-142 blocked".into(),
            description: "Waiting on external API access from third-party vendor. Escalation ticket created.".into(),
            assignee: "Sarah M.".into(),
            project: "Project Beta".into(),
            created_at: "3 days ago".into(),
            status: RiskStatus::Open,
        },
        RiskRecord {
            id: 3,
            kind: RiskKind::Overdue,
            severity: Severity::Medium,
            title: "Sprint goal at risk".into(),
            description: "3 tickets still in To Do with 2 days left. Consider scope adjustment or resource reallocation.".into(),
            assignee: "Team".into(),
            project: "Project Alpha".into(),
            created_at: "2 days ago".into(),
            status: RiskStatus::Open,
        },
        RiskRecord {
            id: 4,
            kind: RiskKind::Inactive,
            severity: Severity::High,
            title: "High priority inactive - PROJ-145".into(),
            description: "No updates in 24h on critical authentication feature. Developer may need assistance.".into(),
            assignee: "John D.".into(),
            project: "Project Alpha".into(),
            created_at: "1 day ago".into(),
            status: RiskStatus::Open,
        },
        RiskRecord {
            id: 5,
            kind: RiskKind::Blocked,
            severity: Severity::Medium,
            title: "Dependency conflict".into(),
            description: "Package version conflict blocking deployment pipeline.".into(),
            assignee: "Tom C.".into(),
            project: "Project Gamma".into(),
            created_at: "4 hours ago".into(),
            status: RiskStatus::Open,
        },
        RiskRecord {
            id: 6,
            kind: RiskKind::Stale,
            severity: Severity::Low,
            title: "Documentation PR pending".into(),
            description: "Documentation updates waiting on approval for 7 days.".into(),
            assignee: "Anna K.".into(),
            project: "Project Beta".into(),
            created_at: "7 days ago".into(),
            status: RiskStatus::Resolved,
        },
    ]
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember::new("John Doe", "Lead", 8, 10, 12, 15),
        TeamMember::new("Sarah Miller", "Senior Dev", 7, 8, 8, 10),
        TeamMember::new("Mike Roberts", "Dev", 5, 8, 5, 8),
        TeamMember::new("Anna Kim", "Dev", 9, 8, 7, 9),
        TeamMember::new("Tom Chen", "Junior", 4, 6, 4, 6),
    ]
}

pub fn current_sprint() -> Sprint {
    Sprint {
        name: "Sprint 24".into(),
        completed: 48,
        total: 62,
        days_left: 5,
        velocity_current: 48,
        velocity_previous: 46,
    }
}

/// Aggregate cards for the team-wide dashboard.
pub fn team_aggregates() -> Vec<AggregateCard> {
    vec![
        AggregateCard::new("Total Jira Tickets", "42", "To Do: 12 | In Progress: 18 | Done: 12", 8),
        AggregateCard::new("Commits & PRs", "156", "Open PRs: 8 | Merged: 23", 15),
        AggregateCard::new("High Priority Inactive", "3", ">24hrs no activity", 50),
        AggregateCard::new("Total Incidents", "8", "2 critical | 6 high", -12),
        AggregateCard::new("Change Requests", "5", "pending requests", 25),
        AggregateCard::new("Team Velocity", "48 SP", "vs 46 last sprint", 4),
    ]
}

/// Aggregate cards scoped to the signed-in user.
pub fn personal_aggregates() -> Vec<AggregateCard> {
    vec![
        AggregateCard::new("My Jira Tickets", "8", "To Do: 2 | In Progress: 4 | Done: 2", 12),
        AggregateCard::new("My Commits & PRs", "24", "Open PRs: 2 | Merged: 5", 8),
        AggregateCard::new("High Priority Inactive", "1", ">24hrs no activity", -50),
        AggregateCard::new("My Incidents", "2", "0 critical | 2 high", -25),
        AggregateCard::new("Change Requests", "2", "pending requests", 0),
        AggregateCard::new("My Velocity", "12 SP", "vs 10 last sprint", 20),
    ]
}

/// Jira tickets shown in the work snapshot.
pub fn snapshot_tickets() -> Vec<TicketSummary> {
    let rows = [
        ("PROJ-145", "Implement user authentication", "in-progress", "high"),
        ("PROJ-142", "Fix payment gateway timeout", "in-progress", "critical"),
        ("PROJ-138", "Update dashboard charts", "todo", "medium"),
        ("PROJ-136", "Optimize database queries", "dev-done", "high"),
        ("PROJ-133", "Add export functionality", "todo", "low"),
    ];
    rows.into_iter()
        .map(|(id, title, status, priority)| TicketSummary {
            id: id.into(),
            title: title.into(),
            status: status.into(),
            priority: priority.into(),
        })
        .collect()
}

/// Pull requests shown in the work snapshot.
pub fn snapshot_pull_requests() -> Vec<PullRequestSummary> {
    let rows = [
        ("#892", "feat: add OAuth integration", "open", "sarah.m"),
        ("#891", "fix: memory leak in worker", "merged", "mike.r"),
        ("#890", "chore: update dependencies", "open", "john.d"),
        ("#889", "feat: real-time notifications", "merged", "anna.k"),
    ];
    rows.into_iter()
        .map(|(id, title, status, author)| PullRequestSummary {
            id: id.into(),
            title: title.into(),
            status: status.into(),
            author: author.into(),
        })
        .collect()
}

/// Seed activity entries the feed workers replay: (user, action, target).
pub fn seed_commits() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("Sarah Miller", "pushed 3 commits to", "feature/auth"),
        ("John Doe", "pushed 1 commit to", "main"),
        ("Tom Chen", "pushed 2 commits to", "fix/pipeline"),
    ]
}

pub fn seed_pull_requests() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("Mike Roberts", "opened PR", "#892 - OAuth integration"),
        ("Tom Chen", "merged PR", "#889 - Notifications"),
        ("Anna Kim", "requested review on", "#890 - Dependency bump"),
    ]
}

pub fn seed_tickets() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("Anna Kim", "moved", "PROJ-145 to In Progress"),
        ("Sarah Miller", "completed", "PROJ-140"),
        ("John Doe", "reopened", "PROJ-128"),
    ]
}

/// AI summary lines shown above the recommendations.
pub fn insights() -> Vec<Insight> {
    let rows = [
        (false, "Team velocity increased by 4% compared to last sprint"),
        (false, "PR merge time improved to average 8 hours"),
        (true, "Anna Kim workload is at 112% - consider redistributing"),
        (true, "3 high-priority tickets have no activity in 24h"),
    ];
    rows.into_iter()
        .map(|(warning, text)| Insight {
            warning,
            text: text.into(),
        })
        .collect()
}

pub fn recommendations() -> Vec<String> {
    vec![
        "Pair Mike with Anna on PROJ-145 to balance workload".into(),
        "Schedule mid-sprint review to address blocked items".into(),
        "Consider moving PROJ-133 to next sprint given current velocity".into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_risk_ids_are_unique() {
        let records = sample_risks();
        let mut ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn exactly_one_sample_risk_is_resolved() {
        let resolved: Vec<_> = sample_risks()
            .into_iter()
            .filter(|r| r.status == RiskStatus::Resolved)
            .collect();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].title, "Documentation PR pending");
    }

    #[test]
    fn initial_widgets_are_all_enabled() {
        let widgets = initial_widgets();
        assert_eq!(widgets.len(), 7);
        assert_eq!(widgets.iter().filter(|w| w.enabled).count(), 7);
    }

    #[test]
    fn widget_ids_are_unique() {
        let widgets = initial_widgets();
        let mut ids: Vec<&str> = widgets.iter().map(|w| w.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), widgets.len());
    }
}
