//! Active-filter chips derived from a route's query state.
//!
//! The derivation is pure. A page decodes the current URL through the
//! route codec, supplies whichever entity lookup maps it has loaded, and
//! gets back an ordered list of chips. Removing a chip is pure too: each
//! chip carries the navigation target that clears its key and nothing
//! else.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate};

use obot_core::models::{Agent, Project, Task, User};

use crate::routes::{AdminRoute, NavTarget, QueryParam, QueryState};

/// Chip slots in their fixed derivation order.
///
/// The created range is one slot keyed by `createdStart`; clearing it
/// drops `createdEnd` as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    AgentId,
    UserId,
    TaskId,
    CreatedStart,
    ObotId,
}

impl FilterKey {
    pub const ALL: [FilterKey; 5] = [
        FilterKey::AgentId,
        FilterKey::UserId,
        FilterKey::TaskId,
        FilterKey::CreatedStart,
        FilterKey::ObotId,
    ];

    /// Label shown on the chip.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AgentId => "Agent",
            Self::UserId => "User",
            Self::TaskId => "Task",
            Self::CreatedStart => "Created",
            Self::ObotId => "Obot",
        }
    }

    /// Query parameter holding the chip's value.
    pub fn param(&self) -> QueryParam {
        match self {
            Self::AgentId => QueryParam::AgentId,
            Self::UserId => QueryParam::UserId,
            Self::TaskId => QueryParam::TaskId,
            Self::CreatedStart => QueryParam::CreatedStart,
            Self::ObotId => QueryParam::ObotId,
        }
    }

    /// Parameters cleared when the chip is removed.
    pub fn removes(&self) -> &'static [QueryParam] {
        match self {
            Self::AgentId => &[QueryParam::AgentId],
            Self::UserId => &[QueryParam::UserId],
            Self::TaskId => &[QueryParam::TaskId],
            Self::CreatedStart => &[QueryParam::CreatedStart, QueryParam::CreatedEnd],
            Self::ObotId => &[QueryParam::ObotId],
        }
    }
}

/// One removable filter chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub key: FilterKey,
    pub label: &'static str,
    /// Resolved display value; falls back to the raw id when the lookup
    /// has no entry.
    pub value: String,
    /// Navigating here clears this chip's key(s) and nothing else.
    pub on_remove: NavTarget,
}

/// Entity lookups supplied by the page. A missing map disables the
/// corresponding chip even when the raw parameter is present; pages choose
/// which filters they surface by choosing which maps to pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterLookups<'a> {
    pub agents: Option<&'a HashMap<String, Agent>>,
    pub users: Option<&'a HashMap<String, User>>,
    pub tasks: Option<&'a HashMap<String, Task>>,
    pub projects: Option<&'a HashMap<String, Project>>,
}

impl<'a> FilterLookups<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_agents(mut self, agents: &'a HashMap<String, Agent>) -> Self {
        self.agents = Some(agents);
        self
    }

    pub fn with_users(mut self, users: &'a HashMap<String, User>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn with_tasks(mut self, tasks: &'a HashMap<String, Task>) -> Self {
        self.tasks = Some(tasks);
        self
    }

    pub fn with_projects(mut self, projects: &'a HashMap<String, Project>) -> Self {
        self.projects = Some(projects);
        self
    }
}

/// Derive the chips for `state` in fixed slot order. Safe to call on every
/// render.
pub fn chips(route: AdminRoute, state: &QueryState, lookups: &FilterLookups<'_>) -> Vec<FilterChip> {
    FilterKey::ALL
        .iter()
        .filter_map(|key| chip_for(*key, route, state, lookups))
        .collect()
}

/// Decode `query` for `route` and derive its chips in one step. Decoding
/// is fail-soft, so this never errors.
pub fn chips_from_query(
    route: AdminRoute,
    query: &str,
    lookups: &FilterLookups<'_>,
) -> Vec<FilterChip> {
    chips(route, &route.decode(query), lookups)
}

/// Navigation that clears `key` from `state`, leaving every other
/// parameter untouched.
pub fn remove_target(route: AdminRoute, state: &QueryState, key: FilterKey) -> NavTarget {
    let mut next = state.clone();
    for param in key.removes() {
        next.remove(*param);
    }
    NavTarget::new(route, next)
}

fn chip_for(
    key: FilterKey,
    route: AdminRoute,
    state: &QueryState,
    lookups: &FilterLookups<'_>,
) -> Option<FilterChip> {
    let raw = state.get(key.param())?;

    let value = match key {
        FilterKey::AgentId => {
            let agents = lookups.agents?;
            agents
                .get(raw)
                .map(|agent| agent.name.clone())
                .unwrap_or_else(|| raw.to_string())
        }
        FilterKey::UserId => {
            let users = lookups.users?;
            users
                .get(raw)
                .map(|user| user.email.clone())
                .unwrap_or_else(|| raw.to_string())
        }
        FilterKey::TaskId => {
            let tasks = lookups.tasks?;
            tasks
                .get(raw)
                .map(|task| task.name.clone())
                .unwrap_or_else(|| raw.to_string())
        }
        FilterKey::ObotId => {
            let projects = lookups.projects?;
            projects
                .get(raw)
                .map(|project| project.name.clone())
                .unwrap_or_else(|| raw.to_string())
        }
        FilterKey::CreatedStart => created_range_value(raw, state.get(QueryParam::CreatedEnd)),
    };

    Some(FilterChip {
        key,
        label: key.label(),
        value,
        on_remove: remove_target(route, state, key),
    })
}

fn created_range_value(start: &str, end: Option<&str>) -> String {
    let start_text = format_date(start);
    match end {
        Some(end) if !end.is_empty() => format!("{start_text} - {}", format_date(end)),
        _ => start_text,
    }
}

/// Parse a date parameter: plain `YYYY-MM-DD` and full RFC 3339 timestamps
/// are both accepted.
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

/// Calendar-date rendering, `M/D/YYYY`. Unparseable input comes back
/// verbatim so the chip still shows something removable.
fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => {
            tracing::debug!(value = raw, "date filter value did not parse, showing raw");
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use obot_core::models::EntityMeta;

    fn meta(id: &str) -> EntityMeta {
        EntityMeta {
            id: id.to_string(),
            created: "2024-03-01T12:00:00Z".parse().unwrap(),
            deleted: None,
        }
    }

    fn agents() -> HashMap<String, Agent> {
        let mut map = HashMap::new();
        map.insert(
            "a1".to_string(),
            Agent {
                meta: meta("a1"),
                name: "Support Bot".to_string(),
                description: None,
                default: false,
            },
        );
        map
    }

    fn users() -> HashMap<String, User> {
        let mut map = HashMap::new();
        map.insert(
            "u1".to_string(),
            User {
                meta: meta("u1"),
                email: "sam@example.com".to_string(),
                username: None,
                role: None,
                explicit_admin: None,
            },
        );
        map
    }

    fn projects() -> HashMap<String, Project> {
        let mut map = HashMap::new();
        map.insert(
            "o1".to_string(),
            Project {
                meta: meta("o1"),
                name: "Docs Helper".to_string(),
                description: None,
                assistant_id: "a1".to_string(),
                parent_id: None,
                user_id: None,
                editor: false,
            },
        );
        map
    }

    #[test]
    fn test_chip_resolves_display_name() {
        let agents = agents();
        let lookups = FilterLookups::new().with_agents(&agents);
        let state = AdminRoute::ChatThreads.decode("?agentId=a1");

        let chips = chips(AdminRoute::ChatThreads, &state, &lookups);
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].key, FilterKey::AgentId);
        assert_eq!(chips[0].label, "Agent");
        assert_eq!(chips[0].value, "Support Bot");
    }

    #[test]
    fn test_chip_falls_back_to_raw_id() {
        let agents = agents();
        let lookups = FilterLookups::new().with_agents(&agents);
        let state = AdminRoute::ChatThreads.decode("?agentId=a9");

        let chips = chips(AdminRoute::ChatThreads, &state, &lookups);
        assert_eq!(chips[0].value, "a9");
    }

    #[test]
    fn test_no_lookups_no_id_chips() {
        let state = AdminRoute::ChatThreads.decode("?agentId=a1");
        assert!(chips(AdminRoute::ChatThreads, &state, &FilterLookups::new()).is_empty());
    }

    #[test]
    fn test_missing_lookup_disables_chip() {
        // Only the agent lookup is supplied, so the obot filter stays
        // applied but invisible; removing the agent chip leaves it alone.
        let agents = agents();
        let lookups = FilterLookups::new().with_agents(&agents);
        let state = AdminRoute::ChatThreads.decode("?agentId=a1&obotId=o1");

        let chips = chips(AdminRoute::ChatThreads, &state, &lookups);
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].key, FilterKey::AgentId);
        assert_eq!(chips[0].value, "Support Bot");
        assert_eq!(chips[0].on_remove.href(), "/chat-threads?obotId=o1");
    }

    #[test]
    fn test_remove_keeps_other_params() {
        let agents = agents();
        let projects = projects();
        let lookups = FilterLookups::new()
            .with_agents(&agents)
            .with_projects(&projects);
        let state = AdminRoute::ChatThreads.decode("?agentId=a1&obotId=o1");

        let chips = chips(AdminRoute::ChatThreads, &state, &lookups);
        let agent_chip = chips
            .iter()
            .find(|chip| chip.key == FilterKey::AgentId)
            .unwrap();
        assert_eq!(agent_chip.on_remove.href(), "/chat-threads?obotId=o1");
    }

    #[test]
    fn test_created_range_single_chip_removes_both_params() {
        let lookups = FilterLookups::new();
        let state =
            AdminRoute::ChatThreads.decode("?createdStart=2024-01-01&createdEnd=2024-01-31");

        let chips = chips(AdminRoute::ChatThreads, &state, &lookups);
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].key, FilterKey::CreatedStart);
        assert_eq!(chips[0].label, "Created");
        assert_eq!(chips[0].value, "1/1/2024 - 1/31/2024");
        assert_eq!(chips[0].on_remove.href(), "/chat-threads");
    }

    #[test]
    fn test_created_start_without_end() {
        let lookups = FilterLookups::new();
        let state = AdminRoute::ChatThreads.decode("?createdStart=2024-01-01");

        let chips = chips(AdminRoute::ChatThreads, &state, &lookups);
        assert_eq!(chips[0].value, "1/1/2024");
    }

    #[test]
    fn test_unparseable_date_shows_raw_value() {
        let lookups = FilterLookups::new();
        let state = AdminRoute::ChatThreads.decode("?createdStart=soon");

        let chips = chips(AdminRoute::ChatThreads, &state, &lookups);
        assert_eq!(chips[0].value, "soon");
    }

    #[test]
    fn test_rfc3339_date_renders_calendar_day() {
        let lookups = FilterLookups::new();
        let state = AdminRoute::ChatThreads.decode("?createdStart=2024-01-05T10:30:00Z");

        let chips = chips(AdminRoute::ChatThreads, &state, &lookups);
        assert_eq!(chips[0].value, "1/5/2024");
    }

    #[test]
    fn test_chips_in_fixed_order() {
        let agents = agents();
        let users = users();
        let projects = projects();
        let lookups = FilterLookups::new()
            .with_agents(&agents)
            .with_users(&users)
            .with_projects(&projects);
        let state = AdminRoute::ChatThreads
            .decode("?obotId=o1&createdStart=2024-01-01&userId=u1&agentId=a1");

        let keys: Vec<FilterKey> = chips(AdminRoute::ChatThreads, &state, &lookups)
            .into_iter()
            .map(|chip| chip.key)
            .collect();
        assert_eq!(
            keys,
            vec![
                FilterKey::AgentId,
                FilterKey::UserId,
                FilterKey::CreatedStart,
                FilterKey::ObotId,
            ]
        );
    }

    #[test]
    fn test_removal_is_idempotent_through_codec() {
        let users = users();
        let lookups = FilterLookups::new().with_users(&users);
        let state = AdminRoute::ChatThreads.decode("?userId=u1&agentId=a1");

        let chips_before = chips(AdminRoute::ChatThreads, &state, &lookups);
        let user_chip = chips_before
            .iter()
            .find(|chip| chip.key == FilterKey::UserId)
            .unwrap();

        // Follow the removal link, re-decode, re-derive.
        let href = user_chip.on_remove.href();
        let query = href.split_once('?').map(|(_, q)| q).unwrap_or("");
        let next_state = AdminRoute::ChatThreads.decode(query);
        let chips_after = chips(AdminRoute::ChatThreads, &next_state, &lookups);

        assert!(chips_after.iter().all(|chip| chip.key != FilterKey::UserId));
    }

    #[test]
    fn test_chips_from_query() {
        let users = users();
        let lookups = FilterLookups::new().with_users(&users);

        let chips = chips_from_query(AdminRoute::ChatThreads, "?userId=u1", &lookups);
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].value, "sam@example.com");
    }

    #[test]
    fn test_empty_query_no_chips() {
        let agents = agents();
        let lookups = FilterLookups::new().with_agents(&agents);
        assert!(chips_from_query(AdminRoute::ChatThreads, "", &lookups).is_empty());
    }
}
