//! Backend configuration and pool construction.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use synapse_common::{Result, SynapseError};

use crate::backend::ModelPool;
use crate::client::LlmClient;
use crate::fireworks::{models, FireworksClient, ModelParams};
use crate::retry::{RetryConfig, RetryingClient};

/// Environment variable consulted when the config carries no API key.
pub const API_KEY_ENV: &str = "FIREWORKS_API_KEY";

fn default_timeout_ms() -> u64 {
    60_000
}

/// One role's model assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Fireworks model identifier
    pub model: String,

    /// Sampling parameters
    #[serde(default)]
    pub params: ModelParams,
}

impl ModelSpec {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            params: ModelParams::default(),
        }
    }
}

/// Configuration for the Fireworks-backed model pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// API key; falls back to the FIREWORKS_API_KEY environment variable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Override for the completions endpoint (tests, proxies)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default)]
    pub retry: RetryConfig,

    /// Role name -> model assignment
    pub roles: BTreeMap<String, ModelSpec>,
}

impl Default for BackendConfig {
    /// The reference deployment: a DeepSeek-R1 brain and two DeepSeek-V3
    /// edge instances.
    fn default() -> Self {
        let mut roles = BTreeMap::new();
        roles.insert("brain".to_string(), ModelSpec::new(models::DEEPSEEK_R1));
        roles.insert("edge1".to_string(), ModelSpec::new(models::DEEPSEEK_V3));
        roles.insert("edge2".to_string(), ModelSpec::new(models::DEEPSEEK_V3));
        Self {
            api_key: None,
            api_url: None,
            timeout_ms: default_timeout_ms(),
            retry: RetryConfig::default(),
            roles,
        }
    }
}

impl BackendConfig {
    /// Resolve the API key from config or the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(ref key) = self.api_key {
            if !key.is_empty() {
                return Some(key.clone());
            }
        }
        std::env::var(API_KEY_ENV).ok()
    }
}

/// Build the role-addressed pool from configuration.
///
/// Fails fast with a configuration error when no API key can be resolved;
/// no partial pool is ever returned.
pub fn build_model_pool(config: &BackendConfig) -> Result<ModelPool> {
    let api_key = config.resolve_api_key().ok_or_else(|| {
        SynapseError::Config(format!(
            "Fireworks API key not found. Set {API_KEY_ENV} or api_key in config."
        ))
    })?;

    let mut pool = ModelPool::new();
    for (role, spec) in &config.roles {
        let mut client = FireworksClient::with_timeout(
            spec.model.clone(),
            api_key.clone(),
            config.timeout_ms,
        )
        .with_params(spec.params.clone());
        if let Some(ref url) = config.api_url {
            client = client.with_base_url(url.clone());
        }

        let retrying: Arc<dyn LlmClient> =
            Arc::new(RetryingClient::new(client, config.retry.clone()));
        pool = pool.with_client(role.clone(), retrying);
    }

    Ok(pool)
}
