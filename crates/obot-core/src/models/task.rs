use serde::{Deserialize, Serialize};

use super::entity::EntityMeta;

/// Scheduled or on-demand task attached to an obot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "projectID", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, rename = "agentID", skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
}

impl Task {
    pub fn id(&self) -> &str {
        &self.meta.id
    }
}
