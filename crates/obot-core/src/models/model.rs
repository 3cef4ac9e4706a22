use serde::{Deserialize, Serialize};

use super::entity::EntityMeta;

/// LLM made available through a model provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub model_provider: String,
    #[serde(default)]
    pub active: bool,
    /// Marks the model used when an agent does not pick one.
    #[serde(default)]
    pub default: bool,
}

impl Model {
    pub fn id(&self) -> &str {
        &self.meta.id
    }

    /// Name to render for the model, falling back to the raw id.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.meta.id,
        }
    }
}

/// Provider backing one or more models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelProvider {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(default)]
    pub name: String,
    /// Whether the provider has its credentials set up.
    #[serde(default)]
    pub configured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_display_name() {
        let model: Model = serde_json::from_str(
            r#"{"id":"m1","created":"2024-03-01T12:00:00Z","modelProvider":"openai"}"#,
        )
        .unwrap();
        assert_eq!(model.display_name(), "m1");

        let named: Model = serde_json::from_str(
            r#"{"id":"m2","created":"2024-03-01T12:00:00Z","name":"gpt-4o","modelProvider":"openai"}"#,
        )
        .unwrap();
        assert_eq!(named.display_name(), "gpt-4o");
    }
}
