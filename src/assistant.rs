//! Assistant overlay chat model
//!
//! Replies are a static lookup over the request text; the only
//! asynchrony is the mock thinking delay before a reply event lands.

use crate::consts::cli_consts::mock_latency;
use tokio::time::sleep;

pub const QUICK_ACTIONS: [&str; 4] = [
    "Show my tasks",
    "Sprint status",
    "Generate report",
    "Risk summary",
];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantMessage {
    pub role: Role,
    pub content: String,
}

impl AssistantMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The opening message shown when the overlay is first opened.
pub fn greeting() -> AssistantMessage {
    AssistantMessage::assistant(
        "Hi! I'm your WorkTracker assistant. I can help you with team insights, \
         generate reports, or answer questions about your sprint. How can I help?",
    )
}

/// Canned reply text for a request. Quick actions get the summary form;
/// anything else gets the generic analysis form.
pub fn reply_to(input: &str) -> String {
    if QUICK_ACTIONS.contains(&input) {
        format!(
            "Here's a summary for \"{}\". This feature would connect to your actual \
             project data to provide real-time insights.",
            input
        )
    } else {
        format!(
            "I'm analyzing your request about \"{}\". In a full implementation, I would \
             provide detailed insights based on your team data.",
            input
        )
    }
}

/// Produce the reply after the simulated thinking delay.
pub async fn respond(input: &str) -> String {
    sleep(mock_latency::assistant_delay()).await;
    reply_to(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_actions_get_the_summary_form() {
        let reply = reply_to("Sprint status");
        assert!(reply.starts_with("Here's a summary for \"Sprint status\""));
    }

    #[test]
    fn freeform_input_gets_the_analysis_form() {
        let reply = reply_to("why is the build red?");
        assert!(reply.contains("analyzing your request about \"why is the build red?\""));
    }

    #[test]
    fn greeting_comes_from_the_assistant() {
        assert_eq!(greeting().role, Role::Assistant);
    }

    #[tokio::test(start_paused = true)]
    async fn respond_returns_the_canned_reply() {
        let reply = respond("Risk summary").await;
        assert_eq!(reply, reply_to("Risk summary"));
    }
}
