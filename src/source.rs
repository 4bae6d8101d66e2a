//! Workspace data source
//!
//! Trait seam between the views and whatever supplies their data. The
//! shipped implementation serves the static dataset; a real integration
//! would sit behind the same trait.

use crate::data;
use crate::notifications::{self, Notification};
use crate::risks::RiskRecord;
use crate::widgets::WidgetPrefs;
use crate::workload::{AggregateCard, Sprint, TeamMember};
use thiserror::Error;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing store could not produce the snapshot.
    #[error("Workspace data unavailable: {0}")]
    Unavailable(String),
}

/// A ticket row in the work snapshot widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketSummary {
    pub id: String,
    pub title: String,
    pub status: String,
    pub priority: String,
}

/// A pull request row in the work snapshot widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSummary {
    pub id: String,
    pub title: String,
    pub status: String,
    pub author: String,
}

/// One line of the AI summary widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub warning: bool,
    pub text: String,
}

/// Everything the dashboard renders, fetched once per session.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceSnapshot {
    pub widgets: WidgetPrefs,
    pub projects: Vec<String>,
    pub risks: Vec<RiskRecord>,
    pub team: Vec<TeamMember>,
    pub sprint: Sprint,
    pub team_aggregates: Vec<AggregateCard>,
    pub personal_aggregates: Vec<AggregateCard>,
    pub tickets: Vec<TicketSummary>,
    pub pull_requests: Vec<PullRequestSummary>,
    pub notifications: Vec<Notification>,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<String>,
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait WorkspaceSource: Send + Sync {
    /// Fetch the workspace snapshot backing the dashboard widgets.
    async fn fetch_snapshot(&self) -> Result<WorkspaceSnapshot, SourceError>;
}

/// The static-data source behind the mock product.
#[derive(Debug, Clone, Default)]
pub struct StaticSource;

impl StaticSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl WorkspaceSource for StaticSource {
    async fn fetch_snapshot(&self) -> Result<WorkspaceSnapshot, SourceError> {
        Ok(WorkspaceSnapshot {
            widgets: data::initial_widgets(),
            projects: data::projects().into_iter().map(String::from).collect(),
            risks: data::sample_risks(),
            team: data::team_members(),
            sprint: data::current_sprint(),
            team_aggregates: data::team_aggregates(),
            personal_aggregates: data::personal_aggregates(),
            tickets: data::snapshot_tickets(),
            pull_requests: data::snapshot_pull_requests(),
            notifications: notifications::sample_notifications(),
            insights: data::insights(),
            recommendations: data::recommendations(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_source_serves_the_full_dataset() {
        let snapshot = StaticSource::new().fetch_snapshot().await.unwrap();
        assert_eq!(snapshot.widgets.len(), 7);
        assert_eq!(snapshot.risks.len(), 6);
        assert_eq!(snapshot.team.len(), 5);
        assert_eq!(snapshot.projects.len(), 4);
        assert!(!snapshot.insights.is_empty());
    }

    #[tokio::test]
    async fn mocked_source_can_fail() {
        let mut source = MockWorkspaceSource::new();
        source.expect_fetch_snapshot().returning(|| {
            Err(SourceError::Unavailable("integration offline".to_string()))
        });
        let err = source.fetch_snapshot().await.unwrap_err();
        assert!(err.to_string().contains("integration offline"));
    }
}
