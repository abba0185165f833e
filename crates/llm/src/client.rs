use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use synapse_common::Result;

/// One completion request.
///
/// The dispatch protocol always sends a single self-contained prompt per
/// turn, so there is no conversation history here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmRequest {
    pub prompt: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl LlmRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            max_tokens: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub content: String,
    pub model: String,
    pub usage: Option<TokenUsage>,
    pub finish_reason: Option<String>,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse>;
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serialization_roundtrip() {
        let request = LlmRequest {
            prompt: "write a haiku".to_string(),
            temperature: Some(0.6),
            max_tokens: Some(16384),
        };
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: LlmRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.prompt, "write a haiku");
        assert_eq!(deserialized.temperature, Some(0.6));
        assert_eq!(deserialized.max_tokens, Some(16384));
    }

    #[test]
    fn response_serialization_roundtrip() {
        let response = LlmResponse {
            content: "mountain mist at dawn".to_string(),
            model: "accounts/fireworks/models/deepseek-v3".to_string(),
            usage: Some(TokenUsage {
                prompt_tokens: 42,
                completion_tokens: 17,
            }),
            finish_reason: Some("stop".to_string()),
        };
        let json = serde_json::to_string(&response).unwrap();
        let deserialized: LlmResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.content, "mountain mist at dawn");
        let usage = deserialized.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 42);
        assert_eq!(usage.completion_tokens, 17);
    }
}
