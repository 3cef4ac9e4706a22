use serde::{Deserialize, Serialize};

use super::entity::EntityMeta;

/// Agent definition as served by `/agents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Set on the agent new obots are created from.
    #[serde(default)]
    pub default: bool,
}

impl Agent {
    pub fn id(&self) -> &str {
        &self.meta.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_decode() {
        let agent: Agent = serde_json::from_str(
            r#"{"id":"a1","created":"2024-03-01T12:00:00Z","name":"Support Bot","default":true}"#,
        )
        .unwrap();
        assert_eq!(agent.id(), "a1");
        assert_eq!(agent.name, "Support Bot");
        assert!(agent.default);
    }
}
