//! HTTP client for the platform API.
//!
//! Collection fetches go through a small response cache keyed by route
//! path, so repeated renders of the same page data do not refetch. Writes
//! invalidate by path predicate, which keeps every derived view of the
//! touched collection fresh on its next read.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde::de::DeserializeOwned;

use crate::config::CoreConfig;
use crate::models::{
    Agent, ItemList, Model, ModelProvider, Project, Task, Thread, ToolReference,
    ToolReferenceType, User,
};

use super::routes::{ApiRoutes, ApiUrl};

/// Errors surfaced by the API layer. Nothing here retries; callers decide
/// whether a failure is fatal.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from {path}: {body}")]
    Status {
        status: u16,
        path: String,
        body: String,
    },

    #[error("invalid response body from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// How long a cached response stays fresh.
const CACHE_TTL: Duration = Duration::from_secs(30);

struct CacheEntry {
    value: serde_json::Value,
    stored_at: Instant,
}

/// Response cache keyed by route path.
#[derive(Default)]
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn get(&self, path: &str) -> Option<serde_json::Value> {
        let entries = self.entries.read();
        let entry = entries.get(path)?;
        if entry.stored_at.elapsed() > CACHE_TTL {
            return None;
        }
        Some(entry.value.clone())
    }

    pub fn put(&self, path: &str, value: serde_json::Value) {
        self.entries.write().insert(
            path.to_string(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop every cached response whose path matches the predicate.
    pub fn invalidate_where(&self, filter: impl Fn(&str) -> bool) {
        self.entries.write().retain(|path, _| !filter(path));
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    routes: ApiRoutes,
    cache: ResponseCache,
}

impl ApiClient {
    pub fn new(config: &CoreConfig) -> Result<Self, ApiError> {
        Ok(Self {
            http: reqwest::Client::new(),
            routes: ApiRoutes::new(&config.api_base)?,
            cache: ResponseCache::default(),
        })
    }

    pub fn routes(&self) -> &ApiRoutes {
        &self.routes
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub async fn get_agents(&self) -> Result<Vec<Agent>, ApiError> {
        self.get_items(&self.routes.agents()).await
    }

    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_items(&self.routes.users()).await
    }

    pub async fn get_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get_items(&self.routes.tasks()).await
    }

    pub async fn get_threads(&self) -> Result<Vec<Thread>, ApiError> {
        self.get_items(&self.routes.threads()).await
    }

    pub async fn get_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_items(&self.routes.projects()).await
    }

    pub async fn get_models(&self) -> Result<Vec<Model>, ApiError> {
        self.get_items(&self.routes.models()).await
    }

    pub async fn get_model_providers(&self) -> Result<Vec<ModelProvider>, ApiError> {
        self.get_items(&self.routes.model_providers()).await
    }

    pub async fn get_tool_references(
        &self,
        tool_type: Option<ToolReferenceType>,
    ) -> Result<Vec<ToolReference>, ApiError> {
        self.get_items(&self.routes.tool_references(tool_type)).await
    }

    /// Delete an obot through its owning agent, then invalidate every
    /// project-derived view.
    pub async fn delete_project(&self, agent_id: &str, project_id: &str) -> Result<(), ApiError> {
        let target = self.routes.agent_project(agent_id, project_id);
        let response = self.http.delete(&target.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: target.path,
                body,
            });
        }

        self.cache.invalidate_where(|path| path.contains("/projects"));
        Ok(())
    }

    /// Remove one knowledge file from an agent and refresh its knowledge
    /// views.
    pub async fn delete_agent_knowledge_file(
        &self,
        agent_id: &str,
        file_name: &str,
    ) -> Result<(), ApiError> {
        let target = self.routes.agent_knowledge_file(agent_id, file_name);
        let response = self.http.delete(&target.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: target.path,
                body,
            });
        }

        self.cache.invalidate_where(|path| path.contains("/knowledge"));
        Ok(())
    }

    async fn get_json(&self, target: &ApiUrl) -> Result<serde_json::Value, ApiError> {
        if let Some(hit) = self.cache.get(&target.path) {
            tracing::debug!(path = %target.path, "cache hit");
            return Ok(hit);
        }

        tracing::debug!(url = %target.url, "GET");
        let response = self.http.get(&target.url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: target.path.clone(),
                body,
            });
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|source| ApiError::Decode {
                path: target.path.clone(),
                source,
            })?;
        self.cache.put(&target.path, value.clone());
        Ok(value)
    }

    async fn get_items<T: DeserializeOwned>(&self, target: &ApiUrl) -> Result<Vec<T>, ApiError> {
        let value = self.get_json(target).await?;
        let list: ItemList<T> =
            serde_json::from_value(value).map_err(|source| ApiError::Decode {
                path: target.path.clone(),
                source,
            })?;
        Ok(list.items)
    }
}
