//! Common types shared across Synapse crates.
//!
//! This crate provides the error taxonomy and the audit-log handle that the
//! protocol, backend and coordination crates all build on.

pub mod error;
pub mod thought;

pub use error::{Result, SynapseError};
pub use thought::{ThoughtLog, ThoughtLogEntry};
