//! Subcommand implementations.
//!
//! Each command hydrates the slice of the data store it needs, reuses the
//! admin page derivations, and prints either a compact text view or raw
//! JSON with `--pretty`.

use anyhow::Result;
use serde_json::json;

use obot_admin::catalog;
use obot_admin::filters::{self, FilterChip, FilterLookups};
use obot_admin::pages::obots::{child_caption, thread_caption};
use obot_admin::pages::{model_rows, obot_rows, visible_threads};
use obot_admin::routes::{AdminRoute, QueryParam, QueryState};
use obot_core::api::ApiClient;
use obot_core::models::ToolReferenceType;
use obot_core::store::AppDataStore;
use obot_workspace::tools::is_capability_tool;

pub fn version() {
    println!("Version: v{}", env!("CARGO_PKG_VERSION"));
}

fn chip_values(chips: &[FilterChip]) -> Vec<serde_json::Value> {
    chips
        .iter()
        .map(|chip| {
            json!({
                "label": chip.label,
                "value": chip.value,
                "removeHref": chip.on_remove.href(),
            })
        })
        .collect()
}

fn print_chips(chips: &[FilterChip]) {
    if chips.is_empty() {
        return;
    }
    let parts: Vec<String> = chips
        .iter()
        .map(|chip| format!("{}: {}", chip.label, chip.value))
        .collect();
    println!("Filters: {}", parts.join(", "));
}

pub async fn agents(client: &ApiClient, pretty: bool) -> Result<()> {
    let agents = client.get_agents().await?;

    if pretty {
        let rows: Vec<_> = agents
            .iter()
            .map(|agent| {
                json!({
                    "id": agent.meta.id,
                    "name": agent.name,
                    "created": agent.meta.created.to_rfc3339(),
                    "default": agent.default,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for agent in &agents {
        let marker = if agent.default { " (default)" } else { "" };
        println!("{}  {}{}", agent.meta.id, agent.name, marker);
    }
    Ok(())
}

pub async fn obots(
    client: &ApiClient,
    obot_id: Option<&str>,
    parent_obot_id: Option<&str>,
    pretty: bool,
) -> Result<()> {
    let mut store = AppDataStore::new();
    store.set_agents(client.get_agents().await?);
    store.set_projects(client.get_projects().await?);
    store.set_threads(client.get_threads().await?);

    let mut state = QueryState::new();
    if let Some(id) = obot_id {
        state.insert(QueryParam::ObotId, id);
    }
    if let Some(id) = parent_obot_id {
        state.insert(QueryParam::ParentObotId, id);
    }

    // The obots page only surfaces the obot filter; parentObotId narrows
    // the table without a chip.
    let lookups = FilterLookups::new().with_projects(&store.projects_by_id);
    let chips = filters::chips(AdminRoute::Obots, &state, &lookups);
    let rows = obot_rows(&store, &state);

    if pretty {
        let value = json!({
            "filters": chip_values(&chips),
            "obots": rows.iter().map(|row| {
                json!({
                    "id": row.id,
                    "name": row.name,
                    "agent": { "id": row.agent_id, "name": row.agent_name, "href": row.agent_href },
                    "parent": row.parent.as_ref().map(|parent| {
                        json!({ "id": parent.id, "name": parent.name, "href": parent.target.href() })
                    }),
                    "children": row.child_count,
                    "threads": row.thread_count,
                })
            }).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_chips(&chips);
    for row in &rows {
        println!("{}  {}", row.id, row.name);
        let agent = row
            .agent_name
            .clone()
            .unwrap_or_else(|| row.agent_id.clone());
        println!("    agent: {agent}");
        if let Some(parent) = &row.parent {
            let name = parent.name.clone().unwrap_or_else(|| parent.id.clone());
            println!("    parent: {name}");
        }
        println!(
            "    {}, {}",
            child_caption(row.child_count),
            thread_caption(row.thread_count)
        );
    }
    Ok(())
}

pub async fn models(client: &ApiClient, pretty: bool) -> Result<()> {
    let models = client.get_models().await?;
    let providers = client.get_model_providers().await?;
    let rows = model_rows(&models, &providers);

    if pretty {
        let rows: Vec<_> = rows
            .iter()
            .map(|row| {
                json!({
                    "id": row.id,
                    "name": row.display_name,
                    "provider": row.provider,
                    "active": row.active,
                    "default": row.default,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        let marker = if row.default { " (default)" } else { "" };
        println!("{}  {} [{}]{}", row.id, row.display_name, row.provider, marker);
    }
    Ok(())
}

/// Query flags of the threads command, matching the chat-threads page
/// parameters.
#[derive(Debug, Default)]
pub struct ThreadFlags {
    pub agent: Option<String>,
    pub user: Option<String>,
    pub task: Option<String>,
    pub obot: Option<String>,
    pub created_start: Option<String>,
    pub created_end: Option<String>,
}

impl ThreadFlags {
    fn to_query_state(&self) -> QueryState {
        let mut state = QueryState::new();
        if let Some(value) = &self.agent {
            state.insert(QueryParam::AgentId, value);
        }
        if let Some(value) = &self.user {
            state.insert(QueryParam::UserId, value);
        }
        if let Some(value) = &self.task {
            state.insert(QueryParam::TaskId, value);
        }
        if let Some(value) = &self.obot {
            state.insert(QueryParam::ObotId, value);
        }
        if let Some(value) = &self.created_start {
            state.insert(QueryParam::CreatedStart, value);
        }
        if let Some(value) = &self.created_end {
            state.insert(QueryParam::CreatedEnd, value);
        }
        state
    }
}

pub async fn threads(client: &ApiClient, flags: &ThreadFlags, pretty: bool) -> Result<()> {
    let mut store = AppDataStore::new();
    store.set_agents(client.get_agents().await?);
    store.set_users(client.get_users().await?);
    store.set_tasks(client.get_tasks().await?);
    store.set_projects(client.get_projects().await?);
    store.set_threads(client.get_threads().await?);

    let state = flags.to_query_state();
    let lookups = FilterLookups::new()
        .with_agents(&store.agents_by_id)
        .with_users(&store.users_by_id)
        .with_tasks(&store.tasks_by_id)
        .with_projects(&store.projects_by_id);
    let chips = filters::chips(AdminRoute::ChatThreads, &state, &lookups);
    let visible = visible_threads(&store.threads, &state);

    if pretty {
        let value = json!({
            "filters": chip_values(&chips),
            "threads": visible.iter().map(|thread| {
                json!({
                    "id": thread.meta.id,
                    "name": thread.display_name(),
                    "created": thread.meta.created.to_rfc3339(),
                })
            }).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_chips(&chips);
    for thread in &visible {
        println!(
            "{}  {}  {}",
            thread.meta.id,
            thread.meta.created.format("%Y-%m-%d %H:%M"),
            thread.display_name()
        );
    }
    Ok(())
}

pub async fn tools(client: &ApiClient, pretty: bool) -> Result<()> {
    let references = client
        .get_tool_references(Some(ToolReferenceType::Tool))
        .await?;
    let groups = catalog::group_by_category(&references);

    if pretty {
        let value: serde_json::Value = groups
            .iter()
            .map(|(category, tools)| {
                let entries: Vec<_> = tools
                    .iter()
                    .map(|tool| {
                        json!({
                            "id": tool.id,
                            "name": tool.display_name(),
                            "bundle": tool.bundle,
                            "capability": is_capability_tool(tool),
                        })
                    })
                    .collect();
                (category.clone(), serde_json::Value::Array(entries))
            })
            .collect::<serde_json::Map<_, _>>()
            .into();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for (category, tools) in &groups {
        match catalog::category_heading(category) {
            Some(heading) => println!("{heading}:"),
            None => println!("(uncategorized):"),
        }
        for tool in tools {
            let mut notes = Vec::new();
            if tool.bundle {
                notes.push("bundle");
            }
            if is_capability_tool(tool) {
                notes.push("capability");
            }
            let notes = if notes.is_empty() {
                String::new()
            } else {
                format!(" ({})", notes.join(", "))
            };
            println!("  {}  {}{}", tool.id, tool.display_name(), notes);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_flags_to_query_state() {
        let flags = ThreadFlags {
            agent: Some("a1".to_string()),
            obot: Some("p1".to_string()),
            created_start: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        let state = flags.to_query_state();
        assert_eq!(state.get(QueryParam::AgentId), Some("a1"));
        assert_eq!(state.get(QueryParam::ObotId), Some("p1"));
        assert_eq!(state.get(QueryParam::CreatedStart), Some("2024-01-01"));
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_empty_flag_values_stay_absent() {
        let flags = ThreadFlags {
            agent: Some(String::new()),
            ..Default::default()
        };
        assert!(flags.to_query_state().is_empty());
    }
}
