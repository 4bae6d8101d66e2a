//! Risk records and the filter engine behind the risks view
//!
//! Filtering is a pure function of the record set and the criteria; the
//! view re-applies it after every keystroke or filter change.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// How a risk was detected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RiskKind {
    Stale,
    Blocked,
    Overdue,
    Inactive,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, PartialOrd, Ord, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RiskStatus {
    Open,
    Resolved,
}

/// A flagged issue, independent of the ticket/PR systems it references.
///
/// Records are immutable as far as filtering is concerned; resolving or
/// escalating a risk happens outside this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskRecord {
    pub id: u32,
    pub kind: RiskKind,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub project: String,
    pub created_at: String,
    pub status: RiskStatus,
}

/// Severity gate of the criteria. `All` passes every record.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    /// Advance to the next option, wrapping back to `All`.
    pub fn cycle(self) -> Self {
        match self {
            SeverityFilter::All => SeverityFilter::Only(Severity::Critical),
            SeverityFilter::Only(Severity::Critical) => SeverityFilter::Only(Severity::High),
            SeverityFilter::Only(Severity::High) => SeverityFilter::Only(Severity::Medium),
            SeverityFilter::Only(Severity::Medium) => SeverityFilter::Only(Severity::Low),
            SeverityFilter::Only(Severity::Low) => SeverityFilter::All,
        }
    }

    fn matches(self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(wanted) => severity == wanted,
        }
    }
}

impl Display for SeverityFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SeverityFilter::All => write!(f, "all"),
            SeverityFilter::Only(severity) => write!(f, "{}", severity),
        }
    }
}

impl FromStr for SeverityFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(SeverityFilter::All),
            "critical" => Ok(SeverityFilter::Only(Severity::Critical)),
            "high" => Ok(SeverityFilter::Only(Severity::High)),
            "medium" => Ok(SeverityFilter::Only(Severity::Medium)),
            "low" => Ok(SeverityFilter::Only(Severity::Low)),
            _ => Err(()),
        }
    }
}

/// Status gate of the criteria. `All` passes every record.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum StatusFilter {
    All,
    #[default]
    Open,
    Resolved,
}

impl StatusFilter {
    pub fn cycle(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Open,
            StatusFilter::Open => StatusFilter::Resolved,
            StatusFilter::Resolved => StatusFilter::All,
        }
    }

    fn matches(self, status: RiskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Open => status == RiskStatus::Open,
            StatusFilter::Resolved => status == RiskStatus::Resolved,
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Open => write!(f, "open"),
            StatusFilter::Resolved => write!(f, "resolved"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "open" => Ok(StatusFilter::Open),
            "resolved" => Ok(StatusFilter::Resolved),
            _ => Err(()),
        }
    }
}

/// The combined search/severity/status filter state of the risks view.
///
/// Created with defaults when the view opens, mutated by user input,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub severity: SeverityFilter,
    pub status: StatusFilter,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            severity: SeverityFilter::All,
            status: StatusFilter::Open,
        }
    }
}

/// Open-only counts per severity bucket, plus the resolved total.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct SummaryCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub resolved: usize,
}

/// Apply the criteria to the record set, preserving input order.
///
/// The text query matches case-insensitively against title or
/// description; an empty query matches everything. Severity and status
/// gates are conjunctive with the text match. Unmatched filters yield an
/// empty sequence, not an error.
pub fn apply<'a>(records: &'a [RiskRecord], criteria: &FilterCriteria) -> Vec<&'a RiskRecord> {
    let query = criteria.query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            let matches_query = query.is_empty()
                || record.title.to_lowercase().contains(&query)
                || record.description.to_lowercase().contains(&query);
            matches_query
                && criteria.severity.matches(record.severity)
                && criteria.status.matches(record.status)
        })
        .collect()
}

/// Summary cards shown above the risk list.
///
/// Severity buckets count open records only; `resolved` counts every
/// resolved record regardless of severity. Severity stops mattering once
/// a risk is resolved.
pub fn summary_counts(records: &[RiskRecord]) -> SummaryCounts {
    let mut counts = SummaryCounts::default();
    for record in records {
        match record.status {
            RiskStatus::Resolved => counts.resolved += 1,
            RiskStatus::Open => match record.severity {
                Severity::Critical => counts.critical += 1,
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => {}
            },
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_risks;

    fn criteria(query: &str, severity: SeverityFilter, status: StatusFilter) -> FilterCriteria {
        FilterCriteria {
            query: query.to_string(),
            severity,
            status,
        }
    }

    #[test]
    // The wide-open criteria returns every record in input order.
    fn open_criteria_returns_all_records() {
        let records = sample_risks();
        let filtered = apply(
            &records,
            &criteria("", SeverityFilter::All, StatusFilter::All),
        );
        assert_eq!(filtered.len(), records.len());
        let ids: Vec<u32> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn unmatched_query_returns_empty() {
        let records = sample_risks();
        let filtered = apply(
            &records,
            &criteria("nonexistent-string", SeverityFilter::All, StatusFilter::All),
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn default_status_excludes_resolved() {
        let records = sample_risks();
        let filtered = apply(&records, &FilterCriteria::default());
        assert_eq!(filtered.len(), 5);
        assert!(
            filtered
                .iter()
                .all(|r| r.title != "Documentation PR pending")
        );
    }

    #[test]
    fn search_is_case_insensitive() {
        let records = sample_risks();
        let lower = apply(
            &records,
            &criteria("proj-142", SeverityFilter::All, StatusFilter::All),
        );
        let upper = apply(
            &records,
            &criteria("PROJ-142", SeverityFilter::All, StatusFilter::All),
        );
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].id, 2);
    }

    #[test]
    fn query_matches_description_as_well_as_title() {
        let records = sample_risks();
        // "deployment pipeline" appears only in the description of id 5.
        let filtered = apply(
            &records,
            &criteria("deployment", SeverityFilter::All, StatusFilter::All),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 5);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let records = sample_risks();
        // Two open high records, but only one mentions a PR.
        let filtered = apply(
            &records,
            &criteria(
                "pr",
                SeverityFilter::Only(Severity::High),
                StatusFilter::Open,
            ),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    // Re-applying the same criteria to an already-filtered set changes nothing.
    fn filtering_is_idempotent() {
        let records = sample_risks();
        let c = criteria("proj", SeverityFilter::All, StatusFilter::Open);
        let once: Vec<RiskRecord> = apply(&records, &c).into_iter().cloned().collect();
        let twice: Vec<RiskRecord> = apply(&once, &c).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_collection_filters_to_empty() {
        let filtered = apply(&[], &FilterCriteria::default());
        assert!(filtered.is_empty());
    }

    #[test]
    // Severity buckets count open records only; resolved is severity-agnostic.
    fn summary_counts_on_sample_set() {
        let counts = summary_counts(&sample_risks());
        assert_eq!(counts.critical, 1);
        assert_eq!(counts.high, 2);
        assert_eq!(counts.medium, 2);
        assert_eq!(counts.resolved, 1);
    }

    #[test]
    fn resolved_low_record_is_not_counted_in_severity_buckets() {
        let records = sample_risks();
        let counts = summary_counts(&records);
        // The only low record is resolved, so no severity bucket sees it.
        let open_total = counts.critical + counts.high + counts.medium;
        let open_records = records
            .iter()
            .filter(|r| r.status == RiskStatus::Open && r.severity != Severity::Low)
            .count();
        assert_eq!(open_total, open_records);
    }

    #[test]
    fn filter_cycles_wrap_around() {
        let mut severity = SeverityFilter::All;
        for _ in 0..5 {
            severity = severity.cycle();
        }
        assert_eq!(severity, SeverityFilter::All);

        let mut status = StatusFilter::Open;
        for _ in 0..3 {
            status = status.cycle();
        }
        assert_eq!(status, StatusFilter::Open);
    }

    #[test]
    fn filters_parse_their_display_form() {
        assert_eq!(
            "critical".parse::<SeverityFilter>(),
            Ok(SeverityFilter::Only(Severity::Critical))
        );
        assert_eq!("ALL".parse::<SeverityFilter>(), Ok(SeverityFilter::All));
        assert_eq!("resolved".parse::<StatusFilter>(), Ok(StatusFilter::Resolved));
        assert!("bogus".parse::<StatusFilter>().is_err());
    }
}
