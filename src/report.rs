//! Mock report generation
//!
//! Validates the request, waits out the simulated generation time, and
//! returns a delivery confirmation. Nothing is written or sent anywhere.

use crate::consts::cli_consts::mock_latency;
use thiserror::Error;
use tokio::time::sleep;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// Email delivery was requested without a recipient address.
    #[error("Recipient email is required to send a report")]
    MissingRecipient,
}

/// How the finished report leaves the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDelivery {
    Download,
    Email(String),
}

/// What the report covers. Free-form strings straight from the form
/// controls; "All Projects" and "All Developers" widen the scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub project: String,
    pub developer: String,
    pub date_range: String,
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self {
            project: "All Projects".to_string(),
            developer: "All Developers".to_string(),
            date_range: "This sprint".to_string(),
        }
    }
}

/// Generate the report and deliver it, returning the confirmation line
/// shown to the user.
pub async fn generate(
    request: &ReportRequest,
    delivery: &ReportDelivery,
) -> Result<String, ReportError> {
    if let ReportDelivery::Email(recipient) = delivery {
        if recipient.trim().is_empty() {
            return Err(ReportError::MissingRecipient);
        }
    }

    sleep(mock_latency::report_delay()).await;

    let confirmation = match delivery {
        ReportDelivery::Download => format!(
            "Report for {} ({}) downloaded successfully",
            request.project, request.date_range
        ),
        ReportDelivery::Email(recipient) => format!(
            "Report for {} ({}) sent to {}",
            request.project, request.date_range, recipient
        ),
    };
    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn download_reports_confirm_the_scope() {
        let confirmation = generate(&ReportRequest::default(), &ReportDelivery::Download)
            .await
            .unwrap();
        assert!(confirmation.contains("All Projects"));
        assert!(confirmation.contains("downloaded"));
    }

    #[tokio::test(start_paused = true)]
    async fn email_delivery_includes_the_recipient() {
        let delivery = ReportDelivery::Email("lead@example.com".to_string());
        let confirmation = generate(&ReportRequest::default(), &delivery).await.unwrap();
        assert!(confirmation.ends_with("sent to lead@example.com"));
    }

    #[tokio::test(start_paused = true)]
    async fn email_without_recipient_is_rejected() {
        let delivery = ReportDelivery::Email("   ".to_string());
        let err = generate(&ReportRequest::default(), &delivery).await.unwrap_err();
        assert_eq!(err, ReportError::MissingRecipient);
    }
}
