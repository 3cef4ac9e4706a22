//! Obots page: query-filtered rows joined against the agent and project
//! lookups, with child and thread counts and the links each cell renders.

use obot_core::models::Project;
use obot_core::store::views::{child_counts, filter_projects, thread_counts};
use obot_core::store::AppDataStore;

use crate::routes::{agent_detail_href, AdminRoute, NavTarget, QueryParam, QueryState};

/// Another obot referenced from a row, with its resolved name when the
/// project list has it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedObot {
    pub id: String,
    pub name: Option<String>,
    pub target: NavTarget,
}

/// One table row of the obots page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObotRow {
    pub id: String,
    pub name: String,
    pub user_id: Option<String>,
    /// Parent obot when this one is a shared copy.
    pub parent: Option<LinkedObot>,
    pub agent_id: String,
    /// Agent name when the agent list has it.
    pub agent_name: Option<String>,
    pub agent_href: String,
    pub child_count: usize,
    /// Set when the row has children to drill into.
    pub children_target: Option<NavTarget>,
    pub thread_count: usize,
    /// Set when the row has chat threads to jump to.
    pub threads_target: Option<NavTarget>,
}

/// Derive the rows for the current query state.
pub fn obot_rows(store: &AppDataStore, state: &QueryState) -> Vec<ObotRow> {
    let obot_id = state.get(QueryParam::ObotId);
    let parent_obot_id = state.get(QueryParam::ParentObotId);

    let visible = filter_projects(&store.projects, obot_id, parent_obot_id);
    let children = child_counts(&store.projects);
    let threads = thread_counts(&store.threads);

    visible
        .into_iter()
        .map(|project| row_for(store, project, &children, &threads))
        .collect()
}

fn row_for(
    store: &AppDataStore,
    project: &Project,
    children: &std::collections::HashMap<String, usize>,
    threads: &std::collections::HashMap<String, usize>,
) -> ObotRow {
    let id = project.meta.id.clone();
    let child_count = children.get(&id).copied().unwrap_or(0);
    let thread_count = threads.get(&id).copied().unwrap_or(0);

    ObotRow {
        parent: project.parent_id.as_deref().map(|parent_id| LinkedObot {
            id: parent_id.to_string(),
            name: store
                .projects_by_id
                .get(parent_id)
                .map(|parent| parent.name.clone()),
            target: obots_target(QueryParam::ObotId, parent_id),
        }),
        agent_id: project.assistant_id.clone(),
        agent_name: store
            .agents_by_id
            .get(&project.assistant_id)
            .map(|agent| agent.name.clone()),
        agent_href: agent_detail_href(&project.assistant_id),
        child_count,
        children_target: (child_count > 0).then(|| obots_target(QueryParam::ParentObotId, &id)),
        thread_count,
        threads_target: (thread_count > 0).then(|| threads_target(&id)),
        name: project.name.clone(),
        user_id: project.user_id.clone(),
        id,
    }
}

fn obots_target(param: QueryParam, id: &str) -> NavTarget {
    let mut query = QueryState::new();
    query.insert(param, id);
    NavTarget::new(AdminRoute::Obots, query)
}

fn threads_target(obot_id: &str) -> NavTarget {
    let mut query = QueryState::new();
    query.insert(QueryParam::ObotId, obot_id);
    query.insert(QueryParam::From, "obots");
    NavTarget::new(AdminRoute::ChatThreads, query)
}

/// Count with the right plural form, "1 child" / "3 children".
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Caption for the children cell.
pub fn child_caption(count: usize) -> String {
    if count == 0 {
        "No children".to_string()
    } else {
        pluralize(count, "child", "children")
    }
}

/// Caption for the threads cell.
pub fn thread_caption(count: usize) -> String {
    if count == 0 {
        "No threads".to_string()
    } else {
        pluralize(count, "thread", "threads")
    }
}
