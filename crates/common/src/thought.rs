//! Audit trail of intermediate reasoning.
//!
//! Every agent in a processing run (the coordinating brain and each edge
//! worker) surfaces its intermediate reasoning through a [`ThoughtLog`]
//! handle. The handle is cheap to clone and is passed explicitly into each
//! component rather than hidden behind shared object state, so the
//! serialization of concurrent appends is a contract of the handle itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// One recorded reasoning step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThoughtLogEntry {
    /// When the thought was emitted
    pub timestamp: DateTime<Utc>,

    /// Agent label, e.g. "Brain (R1)" or "Edge1 (V3)"
    pub agent: String,

    /// The thought text
    pub thought: String,
}

/// Append-only, concurrency-safe log of reasoning steps.
///
/// The log is scoped to one system instance and accumulates across runs
/// until [`ThoughtLog::clear`] is called. A disabled log records nothing,
/// so auditing can be switched off without touching call sites.
#[derive(Debug, Clone)]
pub struct ThoughtLog {
    entries: Arc<Mutex<Vec<ThoughtLogEntry>>>,
    enabled: bool,
}

impl ThoughtLog {
    /// Create a log that records every thought.
    pub fn enabled() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            enabled: true,
        }
    }

    /// Create a log that silently drops every thought.
    pub fn disabled() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append a thought. No-op when the log is disabled.
    pub fn record(&self, agent: impl Into<String>, thought: impl Into<String>) {
        if !self.enabled {
            return;
        }
        let entry = ThoughtLogEntry {
            timestamp: Utc::now(),
            agent: agent.into(),
            thought: thought.into(),
        };
        // Lock poisoning only happens if a holder panicked mid-append;
        // recover the data rather than propagating the panic.
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.push(entry);
    }

    /// Clone the entries recorded so far, in emission order.
    pub fn snapshot(&self) -> Vec<ThoughtLogEntry> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.clone()
    }

    /// Drop all recorded entries.
    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.clear();
    }

    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
