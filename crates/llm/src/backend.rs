//! The narrow backend seam the dispatch layer consumes.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use synapse_common::{Result, SynapseError};
use tracing::debug;

use crate::client::{LlmClient, LlmRequest};

/// A role-addressed completion service.
///
/// The coordinator and workers never pick models themselves; they name a
/// role ("brain", "edge1", ...) and the backend resolves which underlying
/// model, credentials and parameters apply.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, role: &str, prompt: &str) -> Result<String>;
}

/// Maps each role to its wrapped completion client.
pub struct ModelPool {
    clients: HashMap<String, Arc<dyn LlmClient>>,
}

impl ModelPool {
    pub fn new() -> Self {
        Self {
            clients: HashMap::new(),
        }
    }

    pub fn with_client(mut self, role: impl Into<String>, client: Arc<dyn LlmClient>) -> Self {
        self.clients.insert(role.into(), client);
        self
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.clients.contains_key(role)
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.clients.keys().map(String::as_str)
    }
}

impl Default for ModelPool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionBackend for ModelPool {
    async fn complete(&self, role: &str, prompt: &str) -> Result<String> {
        let client = self.clients.get(role).ok_or_else(|| {
            SynapseError::Config(format!("No model configured for role '{role}'"))
        })?;

        debug!(role, model = client.model_name(), "Dispatching completion");

        let response = client.complete(LlmRequest::new(prompt)).await?;
        Ok(response.content)
    }
}
