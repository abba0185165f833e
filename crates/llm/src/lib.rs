//! Model backend for Synapse.
//!
//! The dispatch layer consumes one narrow seam, [`CompletionBackend`]:
//! `complete(role, prompt) -> text`. This crate provides the production
//! implementation of that seam — a [`ModelPool`] mapping each role to a
//! Fireworks model wrapped in bounded retries and a per-request timeout —
//! plus the TOML-deserializable configuration it is built from.

pub mod backend;
pub mod client;
pub mod config;
pub mod fireworks;
pub mod retry;

pub use backend::{CompletionBackend, ModelPool};
pub use client::{LlmClient, LlmRequest, LlmResponse, TokenUsage};
pub use config::{build_model_pool, BackendConfig, ModelSpec, API_KEY_ENV};
pub use fireworks::{models, FireworksClient, ModelParams};
pub use retry::{RetryConfig, RetryingClient};
