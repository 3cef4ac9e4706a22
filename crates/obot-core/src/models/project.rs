use serde::{Deserialize, Serialize};

use super::entity::EntityMeta;

/// A configured agent instance, called an "obot" in the UI. Projects form a
/// tree: copies carry the id of the obot they were created from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Agent definition this obot runs on.
    #[serde(default, rename = "assistantID")]
    pub assistant_id: String,
    /// Parent obot when this one is a shared copy.
    #[serde(default, rename = "parentID", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, rename = "userID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub editor: bool,
}

impl Project {
    pub fn id(&self) -> &str {
        &self.meta.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_decode_id_suffix_fields() {
        let project: Project = serde_json::from_str(
            r#"{"id":"p2","created":"2024-03-02T08:30:00Z","name":"Docs Helper","assistantID":"a1","parentID":"p1","userID":"u9"}"#,
        )
        .unwrap();
        assert_eq!(project.assistant_id, "a1");
        assert_eq!(project.parent_id.as_deref(), Some("p1"));
        assert_eq!(project.user_id.as_deref(), Some("u9"));
        assert!(!project.editor);
    }
}
