//! Worker role table.
//!
//! The pool of edge workers is an ordered list of `(role, tag)` pairs rather
//! than a structural constant, so pool size is configuration. The order here
//! is the order the coordinator prompt requests commands in and the order
//! the dispatcher invokes workers in.

use serde::{Deserialize, Serialize};

/// One worker role in the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerRole {
    /// Role identifier, also used to select the backend model
    pub name: String,

    /// Tag name the coordinator uses to address this role
    pub tag: String,

    /// Human-readable label used in audit entries
    pub label: String,
}

impl WorkerRole {
    /// A role whose tag matches its name, with a capitalized default label.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let label = capitalize(&name);
        Self {
            tag: name.clone(),
            name,
            label,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }
}

/// Ordered, fixed-for-a-run list of worker roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleTable {
    roles: Vec<WorkerRole>,
}

impl RoleTable {
    pub fn new(roles: Vec<WorkerRole>) -> Self {
        Self { roles }
    }

    pub fn roles(&self) -> &[WorkerRole] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&WorkerRole> {
        self.roles.iter().find(|r| r.name == name)
    }

    /// Tag names in role order.
    pub fn tags(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.tag.as_str()).collect()
    }
}

impl Default for RoleTable {
    /// The two-instance edge pool of the reference deployment.
    fn default() -> Self {
        Self::new(vec![
            WorkerRole::new("edge1").with_label("Edge1 (V3)"),
            WorkerRole::new("edge2").with_label("Edge2 (V3)"),
        ])
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
