//! Parsed forms of coordinator and worker backend output.

use serde::{Deserialize, Serialize};

use crate::roles::RoleTable;
use crate::scanner::TagScanner;
use crate::{REASONING_TAG, RESPONSE_TAG, THINKING_TAG};

/// A command the coordinator addressed to one worker role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// The role this command is addressed to
    pub role: String,

    /// The command text
    pub text: String,
}

/// The parsed result of one coordinator turn.
///
/// Every field is optional in the sense that a tag the backend did not emit
/// is simply absent. `commands` holds only the populated commands, in
/// role-table order; a role the coordinator skipped gets no placeholder, so
/// callers correlate results back to roles through the `role` field of each
/// command rather than by list position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Decision {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,

    pub commands: Vec<Command>,
}

impl Decision {
    /// Parse raw coordinator text against a role table.
    ///
    /// No validation is performed on content; empty-after-trim text still
    /// counts as present.
    pub fn parse(raw: &str, roles: &RoleTable) -> Self {
        let mut vocabulary = vec![THINKING_TAG.to_string(), REASONING_TAG.to_string()];
        vocabulary.extend(roles.roles().iter().map(|r| r.tag.clone()));
        let mut fields = TagScanner::new(vocabulary).scan(raw);

        let commands = roles
            .roles()
            .iter()
            .filter_map(|role| {
                fields.remove(&role.tag).map(|text| Command {
                    role: role.name.clone(),
                    text,
                })
            })
            .collect();

        Self {
            thinking: fields.remove(THINKING_TAG),
            reasoning: fields.remove(REASONING_TAG),
            commands,
        }
    }

    pub fn command_for(&self, role: &str) -> Option<&str> {
        self.commands
            .iter()
            .find(|c| c.role == role)
            .map(|c| c.text.as_str())
    }

    /// True when no tag at all was found in the coordinator text.
    pub fn is_empty(&self) -> bool {
        self.thinking.is_none() && self.reasoning.is_none() && self.commands.is_empty()
    }
}

/// The parsed result of one worker turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking: Option<String>,

    /// Tagged response content, or the full raw backend text when the
    /// `<response>` tag is absent (fallback, not a failure)
    pub response: String,
}

impl WorkerOutput {
    pub fn parse(raw: &str) -> Self {
        let scanner = TagScanner::new([THINKING_TAG, RESPONSE_TAG]);
        let mut fields = scanner.scan(raw);

        Self {
            thinking: fields.remove(THINKING_TAG),
            response: fields
                .remove(RESPONSE_TAG)
                .unwrap_or_else(|| raw.to_string()),
        }
    }
}
