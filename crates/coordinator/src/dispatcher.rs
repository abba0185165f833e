//! Maps a decision's populated commands onto the worker pool.

use std::sync::Arc;

use synapse_common::ThoughtLog;
use synapse_llm::CompletionBackend;
use synapse_protocol::{Decision, RoleTable};
use tracing::{debug, warn};

use crate::worker::{Worker, WorkerResult};

/// Runs workers for a decision's populated commands and assembles their
/// results in fixed role order.
pub struct Dispatcher {
    workers: Vec<Worker>,
}

impl Dispatcher {
    /// Build one worker per role in the table, in table order.
    pub fn new(backend: Arc<dyn CompletionBackend>, roles: &RoleTable, log: ThoughtLog) -> Self {
        let workers = roles
            .roles()
            .iter()
            .map(|role| Worker::new(backend.clone(), role.clone(), log.clone()))
            .collect();
        Self { workers }
    }

    pub fn pool_size(&self) -> usize {
        self.workers.len()
    }

    /// Execute every populated command concurrently and return the results
    /// in role order.
    ///
    /// Roles the decision did not address are skipped entirely: no backend
    /// call, no placeholder in the output. Zero populated commands is a
    /// valid degenerate case and yields an empty sequence.
    pub async fn dispatch(&self, decision: &Decision) -> Vec<WorkerResult> {
        let mut handles = Vec::new();
        for worker in &self.workers {
            let Some(command) = decision.command_for(&worker.role().name) else {
                continue;
            };
            let worker = worker.clone();
            let command = command.to_string();
            handles.push((
                worker.role().name.clone(),
                tokio::spawn(async move { worker.execute(&command).await }),
            ));
        }

        debug!(
            dispatched = handles.len(),
            pool_size = self.workers.len(),
            "Dispatching edge commands"
        );

        // Join in spawn order so results follow role order, not completion
        // order.
        let mut results = Vec::with_capacity(handles.len());
        for (role, handle) in handles {
            match handle.await {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!(role = %role, error = %e, "Worker task failed; recording empty result");
                    results.push(WorkerResult {
                        role,
                        thinking: None,
                        response: String::new(),
                    });
                }
            }
        }
        results
    }
}
