//! Brain/edge dispatch for Synapse.
//!
//! A single coordinating "brain" analyzes an input situation, emits one
//! tagged command per edge worker, and the workers execute their commands
//! concurrently. Every reasoning step surfaces in an audit log when the
//! system runs in verbose mode.
//!
//! # Architecture
//!
//! ```text
//! situation
//!     │
//!     ▼
//! ┌─────────────┐   raw tagged text   ┌──────────┐
//! │ Coordinator │ ──────────────────► │ Decision │
//! │   (brain)   │                     └────┬─────┘
//! └─────────────┘                          │ populated commands
//!                                          ▼
//!                                   ┌────────────┐
//!                                   │ Dispatcher │
//!                                   └─────┬──────┘
//!                              ┌──────────┴──────────┐
//!                              ▼                     ▼
//!                         [Edge1 worker]       [Edge2 worker]
//!                              └──────────┬──────────┘
//!                                         ▼
//!                              ordered WorkerResults
//! ```
//!
//! All model calls go through the [`CompletionBackend`] seam from
//! `synapse-llm`, so the whole pipeline runs against a scripted backend in
//! tests.
//!
//! [`CompletionBackend`]: synapse_llm::CompletionBackend

pub mod config;
pub mod coordinator;
pub mod dispatcher;
pub mod system;
pub mod worker;

pub use config::SystemConfig;
pub use coordinator::{Coordinator, COORDINATOR_ROLE};
pub use dispatcher::Dispatcher;
pub use system::{BrainEdgeSystem, ProcessResult};
pub use worker::{Worker, WorkerResult};
