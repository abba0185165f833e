//! The coordinating brain.

use std::sync::Arc;

use synapse_common::ThoughtLog;
use synapse_llm::CompletionBackend;
use synapse_protocol::{coordinator_prompt, Decision, RoleTable};
use tracing::{debug, warn};

/// Backend role the coordinator's completions run under.
pub const COORDINATOR_ROLE: &str = "brain";

/// Audit label for the coordinator in the reference deployment.
const DEFAULT_LABEL: &str = "Brain (R1)";

/// Turns a situation into a parsed [`Decision`] via the model backend.
///
/// Backend failures are soft here: a failed call converts to empty raw
/// text, which parses to an all-absent decision, and processing continues.
pub struct Coordinator {
    backend: Arc<dyn CompletionBackend>,
    roles: RoleTable,
    label: String,
    log: ThoughtLog,
}

impl Coordinator {
    pub fn new(backend: Arc<dyn CompletionBackend>, roles: RoleTable, log: ThoughtLog) -> Self {
        Self {
            backend,
            roles,
            label: DEFAULT_LABEL.to_string(),
            log,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn roles(&self) -> &RoleTable {
        &self.roles
    }

    /// Ask the backend what commands to send to the edge instances.
    ///
    /// Returns whatever raw text the backend produced; an empty string when
    /// the call failed.
    pub async fn decide(&self, situation: &str) -> String {
        self.log
            .record(&self.label, format!("Analyzing situation: {situation}"));

        let prompt = coordinator_prompt(situation, &self.roles);
        let raw = match self.backend.complete(COORDINATOR_ROLE, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    error = %e,
                    "Coordinator backend call failed; continuing with empty response"
                );
                String::new()
            }
        };

        debug!(raw_len = raw.len(), "Coordinator response received");
        self.log.record(
            &self.label,
            "Generated response with commands for edge instances",
        );
        raw
    }

    /// Parse raw coordinator text into a decision, auditing the thought
    /// process when one was emitted.
    pub fn parse(&self, raw: &str) -> Decision {
        let decision = Decision::parse(raw, &self.roles);
        if let Some(ref thinking) = decision.thinking {
            self.log
                .record(&self.label, format!("Thought process: {thinking}"));
        }
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use synapse_common::{Result, SynapseError};

    struct StaticBackend(&'static str);

    #[async_trait]
    impl CompletionBackend for StaticBackend {
        async fn complete(&self, _role: &str, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl CompletionBackend for FailingBackend {
        async fn complete(&self, _role: &str, _prompt: &str) -> Result<String> {
            Err(SynapseError::Backend("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn decide_returns_backend_text() {
        let coordinator = Coordinator::new(
            Arc::new(StaticBackend("<edge1>cmd</edge1>")),
            RoleTable::default(),
            ThoughtLog::disabled(),
        );

        let raw = coordinator.decide("situation").await;
        assert_eq!(raw, "<edge1>cmd</edge1>");
    }

    #[tokio::test]
    async fn backend_failure_converts_to_empty_text() {
        let coordinator = Coordinator::new(
            Arc::new(FailingBackend),
            RoleTable::default(),
            ThoughtLog::disabled(),
        );

        let raw = coordinator.decide("situation").await;
        assert!(raw.is_empty());
        assert!(coordinator.parse(&raw).is_empty());
    }

    #[tokio::test]
    async fn decide_audits_before_and_after() {
        let log = ThoughtLog::enabled();
        let coordinator = Coordinator::new(
            Arc::new(StaticBackend("text")),
            RoleTable::default(),
            log.clone(),
        );

        coordinator.decide("check the logs").await;

        let entries = log.snapshot();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].agent, "Brain (R1)");
        assert!(entries[0].thought.contains("check the logs"));
        assert!(entries[1].thought.contains("Generated response"));
    }

    #[tokio::test]
    async fn parse_audits_thinking_when_present() {
        let log = ThoughtLog::enabled();
        let coordinator = Coordinator::new(
            Arc::new(StaticBackend("")),
            RoleTable::default(),
            log.clone(),
        );

        coordinator.parse("<thinking>split the work</thinking>");
        assert_eq!(log.len(), 1);
        assert!(log.snapshot()[0].thought.contains("split the work"));

        log.clear();
        coordinator.parse("no thinking tag here");
        assert!(log.is_empty());
    }
}
