use serde::{Deserialize, Serialize};

use super::entity::EntityMeta;

/// Conversation thread. Threads reference the agent, user, task and project
/// that produced them, each optional on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "agentID", skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(default, rename = "userID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, rename = "taskID", skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, rename = "projectID", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// True when this thread is the backing record of an obot rather than a
    /// chat.
    #[serde(default)]
    pub project: bool,
}

impl Thread {
    pub fn id(&self) -> &str {
        &self.meta.id
    }

    /// Name to render for the thread, falling back to the id.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.meta.id,
        }
    }
}
