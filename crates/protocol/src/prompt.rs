//! Prompt templates for the two agent kinds.
//!
//! The wording follows the reference deployment's templates, generalized so
//! the coordinator template requests one tagged command per configured role
//! instead of a fixed pair.

use crate::roles::RoleTable;

/// Build the coordinator prompt for a situation.
///
/// Instructs the backend to emit `<thinking>`, `<reasoning>` and one tagged
/// command section per worker role, in any order.
pub fn coordinator_prompt(situation: &str, roles: &RoleTable) -> String {
    let mut prompt = format!(
        "Given this situation: {situation}\n\n\
         Analyze the situation and provide {count} separate commands for our \
         edge instances to execute.\n\
         Use HTML-style tags to structure your response as follows:\n\n\
         <thinking>\n\
         Share your step-by-step thought process here about how you're \
         approaching this task\n\
         </thinking>\n\n\
         <reasoning>\n\
         Explain your final decision-making process here\n\
         </reasoning>\n",
        count = roles.len(),
    );

    for role in roles.roles() {
        prompt.push_str(&format!(
            "\n<{tag}>\nWrite the specific command for the {name} instance here\n</{tag}>\n",
            tag = role.tag,
            name = role.name,
        ));
    }

    prompt.push_str(
        "\nMake sure each command is clear, specific, and self-contained \
         within its tags.\n\
         Do not include any additional tags or thinking process in the edge \
         commands.\n",
    );

    prompt
}

/// Build the worker prompt for one command.
///
/// Instructs the backend to emit a `<thinking>` section followed by a
/// `<response>` section.
pub fn worker_prompt(command: &str) -> String {
    format!(
        "You are an edge instance. Execute this command directly:\n\n\
         {command}\n\n\
         Before providing your response, briefly explain your approach:\n\
         <thinking>Your approach</thinking>\n\n\
         Then give your response:\n\
         <response>Your actual output</response>\n"
    )
}
