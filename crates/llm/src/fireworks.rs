use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use synapse_common::{Result, SynapseError};

use crate::client::{LlmClient, LlmRequest, LlmResponse, TokenUsage};

const FIREWORKS_API_URL: &str = "https://api.fireworks.ai/inference/v1/chat/completions";

/// Well-known Fireworks model identifiers used by the default deployment.
pub mod models {
    /// Reasoning model driving the coordinating brain
    pub const DEEPSEEK_R1: &str = "accounts/fireworks/models/deepseek-r1";
    /// Instruction model driving the edge workers
    pub const DEEPSEEK_V3: &str = "accounts/fireworks/models/deepseek-v3";
    /// Small model kept around for comparison runs
    pub const LLAMA_8B: &str = "accounts/fireworks/models/llama-v3p1-8b-instruct";
}

/// Sampling parameters sent with every request for one model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            max_tokens: 16384,
            temperature: 0.6,
            top_p: 1.0,
            top_k: 40,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
        }
    }
}

#[derive(Serialize)]
struct FireworksRequest {
    model: String,
    max_tokens: u32,
    top_p: f32,
    top_k: u32,
    presence_penalty: f32,
    frequency_penalty: f32,
    temperature: f32,
    messages: Vec<FireworksMessage>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct FireworksMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct FireworksResponse {
    choices: Vec<FireworksChoice>,
    model: String,
    usage: Option<FireworksUsage>,
}

#[derive(Deserialize)]
struct FireworksChoice {
    message: FireworksMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct FireworksUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

/// Client for the Fireworks chat-completions API.
pub struct FireworksClient {
    base_url: String,
    model: String,
    api_key: String,
    params: ModelParams,
    http_client: reqwest::Client,
}

impl FireworksClient {
    /// Create a client with default sampling parameters and a 60s request
    /// timeout.
    pub fn new(model: String, api_key: String) -> Self {
        Self::with_timeout(model, api_key, 60_000)
    }

    /// Create a client with an explicit per-request timeout. The timeout
    /// bounds every backend call so a stalled completion cannot hang a run.
    pub fn with_timeout(model: String, api_key: String, timeout_ms: u64) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()
            .unwrap_or_default();
        Self {
            base_url: FIREWORKS_API_URL.to_string(),
            model,
            api_key,
            params: ModelParams::default(),
            http_client,
        }
    }

    pub fn with_params(mut self, params: ModelParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_body(&self, request: &LlmRequest) -> FireworksRequest {
        FireworksRequest {
            model: self.model.clone(),
            max_tokens: request.max_tokens.unwrap_or(self.params.max_tokens),
            top_p: self.params.top_p,
            top_k: self.params.top_k,
            presence_penalty: self.params.presence_penalty,
            frequency_penalty: self.params.frequency_penalty,
            temperature: request.temperature.unwrap_or(self.params.temperature),
            messages: vec![FireworksMessage {
                role: "user".to_string(),
                content: request.prompt.clone(),
            }],
        }
    }
}

#[async_trait]
impl LlmClient for FireworksClient {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse> {
        let body = self.build_body(&request);

        let response = self
            .http_client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .header("accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| SynapseError::Backend(format!("Fireworks request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(SynapseError::Backend(format!(
                "Fireworks API error {status}: {body_text}"
            )));
        }

        let fw_response: FireworksResponse = response.json().await.map_err(|e| {
            SynapseError::Backend(format!("Failed to parse Fireworks response: {e}"))
        })?;

        let choice = fw_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| SynapseError::Backend("No choices in Fireworks response".to_string()))?;

        Ok(LlmResponse {
            content: choice.message.content,
            model: fw_response.model,
            usage: fw_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
            }),
            finish_reason: choice.finish_reason,
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_fireworks_format() {
        let client = FireworksClient::new(models::DEEPSEEK_V3.to_string(), "fw-test".to_string());
        let request = LlmRequest::new("write a haiku about the ocean");

        let body = client.build_body(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["model"], models::DEEPSEEK_V3);
        assert_eq!(json["max_tokens"], 16384);
        assert_eq!(json["top_p"], 1.0);
        assert_eq!(json["top_k"], 40);
        assert_eq!(json["presence_penalty"], 0.0);
        assert_eq!(json["frequency_penalty"], 0.0);
        let temp = json["temperature"].as_f64().unwrap();
        assert!((temp - 0.6).abs() < 0.001);

        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "write a haiku about the ocean");
    }

    #[test]
    fn request_overrides_beat_model_params() {
        let client = FireworksClient::new(models::DEEPSEEK_R1.to_string(), "fw-test".to_string());
        let request = LlmRequest {
            prompt: "hi".to_string(),
            temperature: Some(0.2),
            max_tokens: Some(512),
        };

        let body = client.build_body(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["max_tokens"], 512);
        let temp = json["temperature"].as_f64().unwrap();
        assert!((temp - 0.2).abs() < 0.001);
    }

    #[test]
    fn default_base_url_is_fireworks() {
        let client = FireworksClient::new("m".to_string(), "k".to_string());
        assert_eq!(client.base_url, FIREWORKS_API_URL);
        assert_eq!(client.model_name(), "m");
    }
}
