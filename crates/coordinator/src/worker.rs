//! Edge workers.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use synapse_common::ThoughtLog;
use synapse_llm::CompletionBackend;
use synapse_protocol::{worker_prompt, WorkerOutput, WorkerRole};
use tracing::warn;

/// The outcome of one worker executing one command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerResult {
    /// Role that produced this result
    pub role: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking: Option<String>,

    /// Tagged response content, or the full raw backend text when the tag
    /// was absent
    pub response: String,
}

/// Wraps one backend role; executes one command per call.
#[derive(Clone)]
pub struct Worker {
    backend: Arc<dyn CompletionBackend>,
    role: WorkerRole,
    log: ThoughtLog,
}

impl Worker {
    pub fn new(backend: Arc<dyn CompletionBackend>, role: WorkerRole, log: ThoughtLog) -> Self {
        Self { backend, role, log }
    }

    pub fn role(&self) -> &WorkerRole {
        &self.role
    }

    /// Execute a command and return the parsed thinking/response pair.
    ///
    /// A failed backend call converts to empty raw text, so the result slot
    /// is kept (with an empty response) and sibling workers are unaffected.
    pub async fn execute(&self, command: &str) -> WorkerResult {
        self.log
            .record(&self.role.label, format!("Executing command: {command}"));

        let prompt = worker_prompt(command);
        let raw = match self.backend.complete(&self.role.name, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    role = %self.role.name,
                    error = %e,
                    "Worker backend call failed; continuing with empty response"
                );
                String::new()
            }
        };

        let output = WorkerOutput::parse(&raw);
        if let Some(ref thinking) = output.thinking {
            self.log
                .record(&self.role.label, format!("Approach: {thinking}"));
        }

        WorkerResult {
            role: self.role.name.clone(),
            thinking: output.thinking,
            response: output.response,
        }
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

    fn worker(backend: &'static str, log: ThoughtLog) -> Worker {
        Worker::new(
            Arc::new(StaticBackend(backend)),
            WorkerRole::new("edge1").with_label("Edge1 (V3)"),
            log,
        )
    }

    #[tokio::test]
    async fn tagged_response_is_extracted() {
        let w = worker(
            "<thinking>count syllables</thinking><response>5-7-5 ocean haiku</response>",
            ThoughtLog::disabled(),
        );
        let result = w.execute("haiku about the ocean").await;

        assert_eq!(result.role, "edge1");
        assert_eq!(result.thinking.as_deref(), Some("count syllables"));
        assert_eq!(result.response, "5-7-5 ocean haiku");
    }

    #[tokio::test]
    async fn missing_response_tag_falls_back_to_raw_text() {
        let w = worker("just plain output, no tags", ThoughtLog::disabled());
        let result = w.execute("do something").await;

        assert!(result.thinking.is_none());
        assert_eq!(result.response, "just plain output, no tags");
    }

    #[tokio::test]
    async fn audits_command_and_thinking() {
        let log = ThoughtLog::enabled();
        let w = worker("<thinking>plan</thinking><response>done</response>", log.clone());
        w.execute("write a haiku").await;

        let entries = log.snapshot();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].agent, "Edge1 (V3)");
        assert!(entries[0].thought.contains("write a haiku"));
        assert!(entries[1].thought.contains("plan"));
    }

    #[tokio::test]
    async fn no_thinking_entry_without_thinking_tag() {
        let log = ThoughtLog::enabled();
        let w = worker("<response>done</response>", log.clone());
        w.execute("cmd").await;

        assert_eq!(log.len(), 1);
    }

    #[tokio::test]
    async fn backend_failure_yields_empty_degraded_result() {
        struct FailingBackend;

        #[async_trait]
        impl CompletionBackend for FailingBackend {
            async fn complete(&self, _role: &str, _prompt: &str) -> Result<String> {
                Err(SynapseError::Backend("rate limited".to_string()))
            }
        }

        let w = Worker::new(
            Arc::new(FailingBackend),
            WorkerRole::new("edge2"),
            ThoughtLog::disabled(),
        );
        let result = w.execute("cmd").await;

        assert_eq!(result.role, "edge2");
        assert!(result.thinking.is_none());
        assert!(result.response.is_empty());
    }
}
