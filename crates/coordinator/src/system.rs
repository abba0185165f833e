//! Top-level orchestration of one processing run.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use synapse_common::{Result, SynapseError, ThoughtLog, ThoughtLogEntry};
use synapse_llm::{build_model_pool, CompletionBackend};
use synapse_protocol::{Decision, RoleTable};
use tracing::info;

use crate::config::SystemConfig;
use crate::coordinator::{Coordinator, COORDINATOR_ROLE};
use crate::dispatcher::Dispatcher;
use crate::worker::WorkerResult;

/// The externally visible outcome of one processing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResult {
    /// The coordinator's parsed decision
    pub decision: Decision,

    /// Worker results, in role order, one per populated command
    pub worker_results: Vec<WorkerResult>,

    /// The coordinator's raw backend text, before parsing
    pub raw_coordinator_text: String,

    /// Audit log snapshot; present only when the system is verbose
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought_log: Option<Vec<ThoughtLogEntry>>,
}

/// One coordinator plus its worker pool, reusable across runs.
///
/// The audit log is scoped to this instance: in verbose mode it accumulates
/// across `process` calls until [`BrainEdgeSystem::clear_thought_log`] is
/// called.
pub struct BrainEdgeSystem {
    coordinator: Coordinator,
    dispatcher: Dispatcher,
    log: ThoughtLog,
}

impl std::fmt::Debug for BrainEdgeSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrainEdgeSystem").finish_non_exhaustive()
    }
}

impl BrainEdgeSystem {
    /// Build the system from configuration, constructing the Fireworks
    /// model pool.
    ///
    /// Fails fast when credentials are missing or when the backend role map
    /// does not cover the coordinator role and every worker role; no
    /// partially wired system is ever returned.
    pub fn new(config: SystemConfig) -> Result<Self> {
        let pool = build_model_pool(&config.backend)?;

        if !pool.has_role(COORDINATOR_ROLE) {
            return Err(SynapseError::Config(format!(
                "Backend role map is missing the coordinator role '{COORDINATOR_ROLE}'"
            )));
        }
        for role in config.roles.roles() {
            if !pool.has_role(&role.name) {
                return Err(SynapseError::Config(format!(
                    "Backend role map is missing worker role '{}'",
                    role.name
                )));
            }
        }

        info!(
            pool_size = config.roles.len(),
            verbose = config.verbose,
            "Initializing brain/edge system"
        );

        Ok(Self::with_backend(
            Arc::new(pool),
            config.roles,
            config.verbose,
        ))
    }

    /// Build the system over an arbitrary backend implementation.
    pub fn with_backend(
        backend: Arc<dyn CompletionBackend>,
        roles: RoleTable,
        verbose: bool,
    ) -> Self {
        let log = if verbose {
            ThoughtLog::enabled()
        } else {
            ThoughtLog::disabled()
        };
        let coordinator = Coordinator::new(backend.clone(), roles.clone(), log.clone());
        let dispatcher = Dispatcher::new(backend, &roles, log.clone());
        Self {
            coordinator,
            dispatcher,
            log,
        }
    }

    /// Process one situation end to end: decide, parse, dispatch, aggregate.
    ///
    /// Backend failures along the way degrade the result (empty decision,
    /// empty responses) but never abort the run; only construction can
    /// fail.
    pub async fn process(&self, situation: &str) -> ProcessResult {
        info!(
            situation_preview = %situation.chars().take(50).collect::<String>(),
            "Processing situation"
        );

        let raw = self.coordinator.decide(situation).await;
        let decision = self.coordinator.parse(&raw);
        let worker_results = self.dispatcher.dispatch(&decision).await;

        info!(
            commands = decision.commands.len(),
            results = worker_results.len(),
            "Run complete"
        );

        ProcessResult {
            decision,
            worker_results,
            raw_coordinator_text: raw,
            thought_log: self.log.is_enabled().then(|| self.log.snapshot()),
        }
    }

    pub fn thought_log(&self) -> &ThoughtLog {
        &self.log
    }

    /// Reset the instance-scoped audit log.
    pub fn clear_thought_log(&self) {
        self.log.clear();
    }
}
