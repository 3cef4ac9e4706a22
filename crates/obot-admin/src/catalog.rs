//! Tool catalog selection.
//!
//! Catalog entries are bundles that may carry sub-tools. Selection changes
//! come back as command values: lists of ids to add and remove plus the
//! OAuth alias to register. The caller owns the selected-id list and
//! applies the change wherever tool choices persist.

use std::collections::{BTreeMap, HashSet};

use obot_core::models::{ToolReference, UNCATEGORIZED_TOOL_CATEGORY};

/// A selection change to apply. Removals apply before additions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionChange {
    pub add: Vec<String>,
    pub remove: Vec<String>,
    pub oauth: Option<String>,
}

/// What clicking an available row should do, given its auth setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectAction {
    /// The tool takes a personal token as an OAuth alternative and is not
    /// selected yet: ask which flow to use before selecting.
    PromptAuth,
    /// Select directly, registering the OAuth alias when one applies.
    Select { oauth: Option<String> },
}

/// How the user answered a [`SelectAction::PromptAuth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthChoice {
    OAuth,
    PersonalToken,
}

/// OAuth alias to register for the answered prompt. Choosing the OAuth
/// flow carries the alias even before the app is configured; the personal
/// token flow never does.
pub fn auth_choice_oauth(tool: &ToolReference, choice: AuthChoice) -> Option<String> {
    match choice {
        AuthChoice::OAuth => tool.oauth_alias().map(str::to_string),
        AuthChoice::PersonalToken => None,
    }
}

/// Toggle one sub-tool inside its bundle.
///
/// Deselecting a sub-tool also deselects the bundle, since the bundle row
/// stands for "everything". Selecting the last missing sub-tool selects
/// the bundle too.
pub fn toggle_tool(
    selected: &[String],
    tool_id: &str,
    bundle: &ToolReference,
    oauth: Option<&str>,
) -> SelectionChange {
    if selected.iter().any(|id| id == tool_id) {
        return SelectionChange {
            add: Vec::new(),
            remove: vec![tool_id.to_string(), bundle.id.clone()],
            oauth: oauth.map(str::to_string),
        };
    }

    let mut add = vec![tool_id.to_string()];
    let has_all = match bundle.tools.as_deref() {
        Some(subtools) => subtools
            .iter()
            .all(|tool| tool.id == tool_id || selected.iter().any(|id| *id == tool.id)),
        None => false,
    };
    if has_all {
        add.push(bundle.id.clone());
    }

    SelectionChange {
        add,
        remove: Vec::new(),
        oauth: oauth.map(str::to_string),
    }
}

/// Toggle a whole bundle row: when nothing in the bundle is selected,
/// select the bundle and every sub-tool; otherwise deselect all of it.
pub fn toggle_bundle(
    selected: &[String],
    bundle: &ToolReference,
    oauth: Option<&str>,
) -> SelectionChange {
    let ids = bundle_ids(bundle);
    let any_selected = selected.iter().any(|id| ids.contains(id));

    if any_selected {
        SelectionChange {
            add: Vec::new(),
            remove: ids,
            oauth: oauth.map(str::to_string),
        }
    } else {
        // Also listed as removals so stale per-tool entries are cleared
        // before the full set goes in.
        SelectionChange {
            add: ids.clone(),
            remove: ids,
            oauth: oauth.map(str::to_string),
        }
    }
}

/// Whether the bundle row renders as selected: any of its ids is.
pub fn is_bundle_selected(selected: &[String], bundle: &ToolReference) -> bool {
    let ids = bundle_ids(bundle);
    selected.iter().any(|id| ids.contains(id))
}

/// Whether a row can be interacted with at all.
pub fn is_available(tool: &ToolReference, configured: bool) -> bool {
    configured || tool.supports_oauth_token_prompt()
}

/// Decide what clicking an available row does.
pub fn select_action(tool: &ToolReference, configured: bool, is_selected: bool) -> SelectAction {
    let oauth = tool.oauth_alias();
    if oauth.is_some() && tool.supports_oauth_token_prompt() && !is_selected {
        return SelectAction::PromptAuth;
    }
    SelectAction::Select {
        oauth: if configured {
            oauth.map(str::to_string)
        } else {
            None
        },
    }
}

fn bundle_ids(bundle: &ToolReference) -> Vec<String> {
    let mut ids = vec![bundle.id.clone()];
    ids.extend(bundle.subtools().iter().map(|tool| tool.id.clone()));
    ids
}

/// Group catalog entries by category for rendering. Order inside a
/// category follows the input; categories sort alphabetically.
pub fn group_by_category(tools: &[ToolReference]) -> BTreeMap<String, Vec<&ToolReference>> {
    let mut groups: BTreeMap<String, Vec<&ToolReference>> = BTreeMap::new();
    for tool in tools {
        groups.entry(tool.category().to_string()).or_default().push(tool);
    }
    groups
}

/// Heading to render for a category; uncategorized tools get none.
pub fn category_heading(category: &str) -> Option<&str> {
    if category == UNCATEGORIZED_TOOL_CATEGORY {
        None
    } else {
        Some(category)
    }
}

/// Expand/collapse flags for the catalog tree.
#[derive(Debug, Clone, Default)]
pub struct CatalogExpansion {
    expanded: HashSet<String>,
}

impl CatalogExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only bundles that actually have sub-tools can expand.
    pub fn can_expand(tool: &ToolReference) -> bool {
        !tool.subtools().is_empty()
    }

    pub fn is_expanded(&self, tool_id: &str) -> bool {
        self.expanded.contains(tool_id)
    }

    pub fn set(&mut self, tool_id: &str, expanded: bool) {
        if expanded {
            self.expanded.insert(tool_id.to_string());
        } else {
            self.expanded.remove(tool_id);
        }
    }

    pub fn toggle(&mut self, tool_id: &str) -> bool {
        let expanded = !self.is_expanded(tool_id);
        self.set(tool_id, expanded);
        expanded
    }
}
