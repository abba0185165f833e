//! Configuration for a brain/edge system instance.

use serde::{Deserialize, Serialize};
use synapse_llm::BackendConfig;
use synapse_protocol::RoleTable;

/// Top-level system configuration.
///
/// The worker `roles` table and the backend `roles` map are validated
/// against each other when the system is built; a mismatch is a fatal
/// configuration error, surfaced before any processing begins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Record an audit log of every reasoning step
    #[serde(default)]
    pub verbose: bool,

    /// Ordered worker role table
    #[serde(default)]
    pub roles: RoleTable,

    /// Model backend configuration
    #[serde(default)]
    pub backend: BackendConfig,
}

impl SystemConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use synapse_llm::models;

    const TOML_CONFIG: &str = r#"
verbose = true

[[roles]]
name = "edge1"
tag = "edge1"
label = "Edge1 (V3)"

[[roles]]
name = "edge2"
tag = "edge2"
label = "Edge2 (V3)"

[backend]
api_key = "fw-test"

[backend.roles.brain]
model = "accounts/fireworks/models/deepseek-r1"

[backend.roles.edge1]
model = "accounts/fireworks/models/deepseek-v3"

[backend.roles.edge2]
model = "accounts/fireworks/models/deepseek-v3"
"#;

    #[test]
    fn deserialize_from_toml() {
        let config: SystemConfig = toml::from_str(TOML_CONFIG).unwrap();
        assert!(config.verbose);
        assert_eq!(config.roles.len(), 2);
        assert_eq!(config.roles.tags(), vec!["edge1", "edge2"]);
        assert_eq!(config.backend.api_key.as_deref(), Some("fw-test"));
    }

    #[test]
    fn defaults_match_reference_deployment() {
        let config = SystemConfig::default();
        assert!(!config.verbose);
        assert_eq!(config.roles.tags(), vec!["edge1", "edge2"]);
        assert_eq!(config.backend.roles["brain"].model, models::DEEPSEEK_R1);
    }

    #[test]
    fn from_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TOML_CONFIG.as_bytes()).unwrap();

        let config = SystemConfig::from_file(file.path()).unwrap();
        assert!(config.verbose);
        assert_eq!(config.roles.len(), 2);
    }

    #[test]
    fn from_file_missing_path_errors() {
        assert!(SystemConfig::from_file("/nonexistent/synapse.toml").is_err());
    }
}
