//! Builders for every REST endpoint the front-ends consume.
//!
//! Each builder returns the absolute URL together with the path component,
//! because the response cache is keyed by path. Optional query parameters
//! that are `None` are left out of the URL entirely.

use url::Url;

use crate::models::ToolReferenceType;

/// A fully-built API target plus the path used as its cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrl {
    pub url: String,
    pub path: String,
}

/// Parameters accepted by the thread events stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadEventsParams {
    pub follow: Option<bool>,
    pub run_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiRoutes {
    base: Url,
}

impl ApiRoutes {
    pub fn new(api_base: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(api_base.trim_end_matches('/'))?;
        Ok(Self { base })
    }

    pub fn agents(&self) -> ApiUrl {
        self.build("/agents")
    }

    pub fn agent(&self, agent_id: &str) -> ApiUrl {
        self.build(&format!("/agents/{agent_id}"))
    }

    pub fn agent_knowledge(&self, agent_id: &str) -> ApiUrl {
        self.build(&format!("/agents/{agent_id}/knowledge"))
    }

    pub fn agent_knowledge_file(&self, agent_id: &str, file_name: &str) -> ApiUrl {
        self.build(&format!("/agents/{agent_id}/knowledge/{file_name}"))
    }

    pub fn agent_remote_knowledge_sources(&self, agent_id: &str) -> ApiUrl {
        self.build(&format!("/agents/{agent_id}/remote-knowledge-sources"))
    }

    pub fn agent_remote_knowledge_source(&self, agent_id: &str, source_id: &str) -> ApiUrl {
        self.build(&format!(
            "/agents/{agent_id}/remote-knowledge-sources/{source_id}"
        ))
    }

    pub fn agent_threads(&self, agent_id: &str) -> ApiUrl {
        self.build(&format!("/agents/{agent_id}/threads"))
    }

    pub fn tasks(&self) -> ApiUrl {
        self.build("/tasks")
    }

    pub fn task(&self, task_id: &str) -> ApiUrl {
        self.build(&format!("/tasks/{task_id}"))
    }

    pub fn threads(&self) -> ApiUrl {
        self.build("/threads")
    }

    pub fn thread(&self, thread_id: &str) -> ApiUrl {
        self.build(&format!("/threads/{thread_id}"))
    }

    pub fn thread_events(&self, thread_id: &str, params: &ThreadEventsParams) -> ApiUrl {
        let follow = params.follow.map(|follow| follow.to_string());
        self.build_with_params(
            &format!("/threads/{thread_id}/events"),
            &[
                ("follow", follow.as_deref()),
                ("runID", params.run_id.as_deref()),
            ],
        )
    }

    pub fn thread_knowledge(&self, thread_id: &str) -> ApiUrl {
        self.build(&format!("/threads/{thread_id}/knowledge"))
    }

    pub fn thread_files(&self, thread_id: &str) -> ApiUrl {
        self.build(&format!("/threads/{thread_id}/files"))
    }

    pub fn thread_runs(&self, thread_id: &str) -> ApiUrl {
        self.build(&format!("/threads/{thread_id}/runs"))
    }

    pub fn runs(&self) -> ApiUrl {
        self.build("/runs")
    }

    pub fn run_debug(&self, run_id: &str) -> ApiUrl {
        self.build(&format!("/runs/{run_id}/debug"))
    }

    pub fn tool_references(&self, tool_type: Option<ToolReferenceType>) -> ApiUrl {
        self.build_with_params(
            "/toolreferences",
            &[("type", tool_type.map(|t| t.as_str()))],
        )
    }

    pub fn tool_reference(&self, tool_id: &str) -> ApiUrl {
        self.build(&format!("/toolreferences/{tool_id}"))
    }

    pub fn projects(&self) -> ApiUrl {
        self.build("/projects")
    }

    pub fn project(&self, project_id: &str) -> ApiUrl {
        self.build(&format!("/projects/{project_id}"))
    }

    /// Projects are deleted through their owning agent.
    pub fn agent_project(&self, agent_id: &str, project_id: &str) -> ApiUrl {
        self.build(&format!("/agents/{agent_id}/projects/{project_id}"))
    }

    pub fn users(&self) -> ApiUrl {
        self.build("/users")
    }

    pub fn user(&self, user_id: &str) -> ApiUrl {
        self.build(&format!("/users/{user_id}"))
    }

    pub fn models(&self) -> ApiUrl {
        self.build("/models")
    }

    pub fn model(&self, model_id: &str) -> ApiUrl {
        self.build(&format!("/models/{model_id}"))
    }

    pub fn model_providers(&self) -> ApiUrl {
        self.build("/model-providers")
    }

    pub fn invoke(&self, id: &str, thread_id: Option<&str>) -> ApiUrl {
        match thread_id {
            Some(thread_id) => self.build(&format!("/invoke/{id}/threads/{thread_id}")),
            None => self.build(&format!("/invoke/{id}")),
        }
    }

    pub fn version(&self) -> ApiUrl {
        self.build("/version")
    }

    fn build(&self, path: &str) -> ApiUrl {
        self.build_with_params(path, &[])
    }

    fn build_with_params(&self, path: &str, params: &[(&str, Option<&str>)]) -> ApiUrl {
        let mut url = self.base.clone();
        let full_path = format!("{}{}", self.base.path(), path);
        url.set_path(&full_path);

        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                if let Some(value) = value {
                    pairs.append_pair(key, value);
                }
            }
        }
        // query_pairs_mut leaves an empty query behind when nothing was
        // appended.
        if url.query() == Some("") {
            url.set_query(None);
        }

        ApiUrl {
            path: url.path().to_string(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes() -> ApiRoutes {
        ApiRoutes::new("http://localhost:8080/api").unwrap()
    }

    #[test]
    fn test_collection_url() {
        let target = routes().agents();
        assert_eq!(target.url, "http://localhost:8080/api/agents");
        assert_eq!(target.path, "/api/agents");
    }

    #[test]
    fn test_entity_url() {
        let target = routes().thread("t1");
        assert_eq!(target.url, "http://localhost:8080/api/threads/t1");
    }

    #[test]
    fn test_nested_urls() {
        assert_eq!(
            routes().agent_knowledge_file("a1", "notes.md").url,
            "http://localhost:8080/api/agents/a1/knowledge/notes.md"
        );
        assert_eq!(
            routes().agent_remote_knowledge_source("a1", "rks1").path,
            "/api/agents/a1/remote-knowledge-sources/rks1"
        );
        assert_eq!(
            routes().agent_project("a1", "p1").path,
            "/api/agents/a1/projects/p1"
        );
        assert_eq!(
            routes().run_debug("r1").url,
            "http://localhost:8080/api/runs/r1/debug"
        );
    }

    #[test]
    fn test_none_params_are_skipped() {
        let target = routes().tool_references(None);
        assert_eq!(target.url, "http://localhost:8080/api/toolreferences");

        let typed = routes().tool_references(Some(ToolReferenceType::Tool));
        assert_eq!(
            typed.url,
            "http://localhost:8080/api/toolreferences?type=tool"
        );
    }

    #[test]
    fn test_thread_events_params() {
        let target = routes().thread_events(
            "t1",
            &ThreadEventsParams {
                follow: Some(true),
                run_id: Some("r1".to_string()),
            },
        );
        assert_eq!(
            target.url,
            "http://localhost:8080/api/threads/t1/events?follow=true&runID=r1"
        );

        let bare = routes().thread_events("t1", &ThreadEventsParams::default());
        assert_eq!(bare.url, "http://localhost:8080/api/threads/t1/events");
        assert_eq!(bare.path, "/api/threads/t1/events");
    }

    #[test]
    fn test_invoke_with_and_without_thread() {
        assert_eq!(
            routes().invoke("a1", None).url,
            "http://localhost:8080/api/invoke/a1"
        );
        assert_eq!(
            routes().invoke("a1", Some("t1")).url,
            "http://localhost:8080/api/invoke/a1/threads/t1"
        );
    }

    #[test]
    fn test_trailing_slash_base() {
        let routes = ApiRoutes::new("http://localhost:8080/api/").unwrap();
        assert_eq!(routes.models().url, "http://localhost:8080/api/models");
    }
}
