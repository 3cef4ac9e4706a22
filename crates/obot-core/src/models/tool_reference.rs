use serde::{Deserialize, Serialize};

/// Category heading used for tools whose metadata does not carry one.
pub const UNCATEGORIZED_TOOL_CATEGORY: &str = "Uncategorized";

/// Kinds of entries in the tool registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolReferenceType {
    Tool,
    StepTemplate,
    ModelProvider,
    System,
}

impl ToolReferenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tool => "tool",
            Self::StepTemplate => "stepTemplate",
            Self::ModelProvider => "modelProvider",
            Self::System => "system",
        }
    }
}

/// Registry entry for a tool. Bundle entries group the sub-tools they ship
/// with under `tools`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub bundle: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ToolMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolReference>>,
}

/// Registry metadata keys the UI consults. Everything is a string on the
/// wire, including the boolean-ish flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// OAuth app alias the tool authenticates through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth: Option<String>,
    #[serde(
        default,
        rename = "supportsOAuthTokenPrompt",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_oauth_token_prompt: Option<String>,
}

impl ToolReference {
    /// Name to render, falling back to the id with dashes opened up.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => normalize_tool_id(&self.id),
        }
    }

    /// Category heading this tool sorts under.
    pub fn category(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.category.as_deref())
            .unwrap_or(UNCATEGORIZED_TOOL_CATEGORY)
    }

    /// OAuth app alias, when the tool authenticates through one.
    pub fn oauth_alias(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.oauth.as_deref())
    }

    /// Whether the tool can take a personal access token instead of the
    /// OAuth flow.
    pub fn supports_oauth_token_prompt(&self) -> bool {
        self.metadata
            .as_ref()
            .and_then(|m| m.supports_oauth_token_prompt.as_deref())
            == Some("true")
    }

    pub fn subtools(&self) -> &[ToolReference] {
        self.tools.as_deref().unwrap_or_default()
    }
}

/// Tool ids read as names once the dashes become spaces.
pub fn normalize_tool_id(tool_id: &str) -> String {
    tool_id.replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(id: &str) -> ToolReference {
        ToolReference {
            id: id.to_string(),
            name: None,
            description: None,
            bundle: false,
            metadata: None,
            tools: None,
        }
    }

    #[test]
    fn test_display_name_normalizes_id() {
        let reference = tool("google-drive");
        assert_eq!(reference.display_name(), "google drive");
    }

    #[test]
    fn test_category_defaults_to_uncategorized() {
        let reference = tool("memory");
        assert_eq!(reference.category(), UNCATEGORIZED_TOOL_CATEGORY);
    }

    #[test]
    fn test_token_prompt_flag_is_string_true() {
        let mut reference = tool("github");
        reference.metadata = Some(ToolMetadata {
            supports_oauth_token_prompt: Some("true".to_string()),
            ..Default::default()
        });
        assert!(reference.supports_oauth_token_prompt());

        reference.metadata = Some(ToolMetadata {
            supports_oauth_token_prompt: Some("yes".to_string()),
            ..Default::default()
        });
        assert!(!reference.supports_oauth_token_prompt());
    }

    #[test]
    fn test_type_serializes_camel_case() {
        let value = serde_json::to_string(&ToolReferenceType::StepTemplate).unwrap();
        assert_eq!(value, r#""stepTemplate""#);
    }
}
