//! Built-in capabilities that surface alongside catalog tools but are
//! provided by the workspace itself.

use obot_core::models::ToolReference;

/// The workspace's built-in tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityTool {
    Knowledge,
    WorkspaceFiles,
    Database,
    Tasks,
    Projects,
    Threads,
}

impl CapabilityTool {
    pub const ALL: [CapabilityTool; 6] = [
        CapabilityTool::Knowledge,
        CapabilityTool::WorkspaceFiles,
        CapabilityTool::Database,
        CapabilityTool::Tasks,
        CapabilityTool::Projects,
        CapabilityTool::Threads,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Knowledge => "knowledge",
            Self::WorkspaceFiles => "workspace-files",
            Self::Database => "database",
            Self::Tasks => "tasks",
            Self::Projects => "projects",
            Self::Threads => "threads",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|capability| capability.id() == id)
    }
}

/// Whether a catalog entry is really a built-in capability.
pub fn is_capability_tool(tool: &ToolReference) -> bool {
    is_capability_id(&tool.id)
}

pub fn is_capability_id(id: &str) -> bool {
    CapabilityTool::from_id(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_ids_round_trip() {
        for capability in CapabilityTool::ALL {
            assert_eq!(CapabilityTool::from_id(capability.id()), Some(capability));
        }
    }

    #[test]
    fn test_non_capability_id() {
        assert!(!is_capability_id("slack"));
        assert!(is_capability_id("workspace-files"));
    }
}
