//! Typed route identifiers and the query-string codec for the admin
//! console.
//!
//! Every route declares the query parameters it understands. Decoding is
//! fail-soft: unknown keys, keys outside the route's schema, and empty
//! values are dropped instead of raised. Encoding walks parameters in a
//! fixed order, so a decoded state minus some keys re-encodes without
//! surprises.

use std::collections::BTreeMap;
use std::fmt;

use url::form_urlencoded;

/// Query parameter names recognized across the admin routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QueryParam {
    AgentId,
    UserId,
    TaskId,
    ObotId,
    ParentObotId,
    CreatedStart,
    CreatedEnd,
    /// Where a cross-page link came from, used for back navigation.
    From,
}

impl QueryParam {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AgentId => "agentId",
            Self::UserId => "userId",
            Self::TaskId => "taskId",
            Self::ObotId => "obotId",
            Self::ParentObotId => "parentObotId",
            Self::CreatedStart => "createdStart",
            Self::CreatedEnd => "createdEnd",
            Self::From => "from",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "agentId" => Some(Self::AgentId),
            "userId" => Some(Self::UserId),
            "taskId" => Some(Self::TaskId),
            "obotId" => Some(Self::ObotId),
            "parentObotId" => Some(Self::ParentObotId),
            "createdStart" => Some(Self::CreatedStart),
            "createdEnd" => Some(Self::CreatedEnd),
            "from" => Some(Self::From),
            _ => None,
        }
    }
}

impl fmt::Display for QueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Admin routes that can carry query state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminRoute {
    Home,
    Agents,
    ChatThreads,
    Models,
    Obots,
    Tasks,
    TaskRuns,
    Tools,
    Users,
}

impl AdminRoute {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Agents => "/agents",
            Self::ChatThreads => "/chat-threads",
            Self::Models => "/models",
            Self::Obots => "/obots",
            Self::Tasks => "/tasks",
            Self::TaskRuns => "/task-runs",
            Self::Tools => "/tools",
            Self::Users => "/users",
        }
    }

    /// Query parameters this route understands. Everything else is dropped
    /// at decode time.
    pub fn schema(&self) -> &'static [QueryParam] {
        use QueryParam as P;
        match self {
            Self::ChatThreads => &[
                P::AgentId,
                P::UserId,
                P::TaskId,
                P::ObotId,
                P::CreatedStart,
                P::CreatedEnd,
                P::From,
            ],
            Self::TaskRuns => &[P::TaskId, P::UserId, P::CreatedStart, P::CreatedEnd, P::From],
            Self::Obots => &[P::ObotId, P::ParentObotId],
            Self::Tasks => &[P::AgentId, P::UserId],
            Self::Home | Self::Agents | Self::Models | Self::Tools | Self::Users => &[],
        }
    }

    /// Decode a raw query string, with or without the leading `?`, into
    /// this route's typed state. Never fails; unusable input is skipped.
    pub fn decode(&self, query: &str) -> QueryState {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut state = QueryState::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let Some(param) = QueryParam::from_key(key.as_ref()) else {
                tracing::debug!(key = %key, "dropping unknown query parameter");
                continue;
            };
            if !self.schema().contains(&param) {
                tracing::debug!(param = %param, route = self.path(), "dropping out-of-schema parameter");
                continue;
            }
            if value.is_empty() {
                continue;
            }
            state.insert(param, value.as_ref());
        }
        state
    }

    /// Encode state into a query string without the leading `?`. Parameters
    /// outside the route's schema are skipped.
    pub fn encode(&self, state: &QueryState) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (param, value) in state.iter() {
            if self.schema().contains(&param) {
                serializer.append_pair(param.as_str(), value);
            }
        }
        serializer.finish()
    }

    /// Client-side href for this route with the given state.
    pub fn href(&self, state: &QueryState) -> String {
        let query = self.encode(state);
        if query.is_empty() {
            self.path().to_string()
        } else {
            format!("{}?{}", self.path(), query)
        }
    }
}

/// Href for an agent detail page, the one path-parameter link the admin
/// tables render.
pub fn agent_detail_href(agent_id: &str) -> String {
    format!("/agents/{agent_id}")
}

/// Decoded query state for one route.
///
/// The map never holds empty values; inserting one removes the key, which
/// keeps "empty" and "absent" the same thing everywhere downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    values: BTreeMap<QueryParam, String>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, param: QueryParam) -> Option<&str> {
        self.values.get(&param).map(String::as_str)
    }

    pub fn insert(&mut self, param: QueryParam, value: &str) {
        if value.is_empty() {
            self.values.remove(&param);
        } else {
            self.values.insert(param, value.to_string());
        }
    }

    pub fn remove(&mut self, param: QueryParam) -> Option<String> {
        self.values.remove(&param)
    }

    pub fn contains(&self, param: QueryParam) -> bool {
        self.values.contains_key(&param)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QueryParam, &str)> + '_ {
        self.values.iter().map(|(param, value)| (*param, value.as_str()))
    }
}

/// A computed client-side navigation, handed to the router as a value.
/// Fire-and-forget: the next render re-derives everything from the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTarget {
    pub route: AdminRoute,
    pub query: QueryState,
}

impl NavTarget {
    pub fn new(route: AdminRoute, query: QueryState) -> Self {
        Self { route, query }
    }

    pub fn href(&self) -> String {
        self.route.href(&self.query)
    }
}
