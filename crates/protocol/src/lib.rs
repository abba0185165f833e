//! Tagged-text wire protocol for the Synapse dispatch system.
//!
//! The coordinator and its edge workers exchange free text with the model
//! backend, structured by an HTML-style tag convention:
//!
//! ```text
//! Coordinator response:          Worker response:
//! <thinking>...</thinking>       <thinking>...</thinking>
//! <reasoning>...</reasoning>     <response>...</response>
//! <edge1>...</edge1>
//! <edge2>...</edge2>
//! ```
//!
//! This crate owns both directions of that protocol: building the prompt
//! templates that request tagged output, and scanning arbitrary backend text
//! back into typed fields. It performs no I/O.

pub mod decision;
pub mod prompt;
pub mod roles;
pub mod scanner;

pub use decision::{Command, Decision, WorkerOutput};
pub use prompt::{coordinator_prompt, worker_prompt};
pub use roles::{RoleTable, WorkerRole};
pub use scanner::TagScanner;

/// Tag carrying the step-by-step thought process of either agent kind.
pub const THINKING_TAG: &str = "thinking";

/// Tag carrying the coordinator's final decision rationale.
pub const REASONING_TAG: &str = "reasoning";

/// Tag carrying a worker's actual output.
pub const RESPONSE_TAG: &str = "response";
