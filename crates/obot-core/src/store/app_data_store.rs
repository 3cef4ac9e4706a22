use std::collections::HashMap;

use crate::models::{Agent, Model, ModelProvider, Project, Task, Thread, User};

/// In-memory snapshot of the API data a page works from.
///
/// Collections keep their fetch order for listing; the `_by_id` maps are
/// rebuilt on every set so lookups stay in sync with the lists.
#[derive(Debug, Default)]
pub struct AppDataStore {
    pub agents: Vec<Agent>,
    pub agents_by_id: HashMap<String, Agent>,
    pub users: Vec<User>,
    pub users_by_id: HashMap<String, User>,
    pub tasks: Vec<Task>,
    pub tasks_by_id: HashMap<String, Task>,
    pub projects: Vec<Project>,
    pub projects_by_id: HashMap<String, Project>,
    pub threads: Vec<Thread>,
    pub models: Vec<Model>,
    pub providers: Vec<ModelProvider>,
}

impl AppDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_agents(&mut self, agents: Vec<Agent>) {
        self.agents_by_id = agents
            .iter()
            .map(|agent| (agent.meta.id.clone(), agent.clone()))
            .collect();
        self.agents = agents;
    }

    pub fn set_users(&mut self, users: Vec<User>) {
        self.users_by_id = users
            .iter()
            .map(|user| (user.meta.id.clone(), user.clone()))
            .collect();
        self.users = users;
    }

    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks_by_id = tasks
            .iter()
            .map(|task| (task.meta.id.clone(), task.clone()))
            .collect();
        self.tasks = tasks;
    }

    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects_by_id = projects
            .iter()
            .map(|project| (project.meta.id.clone(), project.clone()))
            .collect();
        self.projects = projects;
    }

    pub fn set_threads(&mut self, threads: Vec<Thread>) {
        self.threads = threads;
    }

    pub fn set_models(&mut self, models: Vec<Model>) {
        self.models = models;
    }

    pub fn set_providers(&mut self, providers: Vec<ModelProvider>) {
        self.providers = providers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityMeta;

    fn agent(id: &str, name: &str) -> Agent {
        Agent {
            meta: EntityMeta {
                id: id.to_string(),
                created: "2024-03-01T12:00:00Z".parse().unwrap(),
                deleted: None,
            },
            name: name.to_string(),
            description: None,
            default: false,
        }
    }

    #[test]
    fn test_set_agents_rebuilds_index() {
        let mut store = AppDataStore::new();
        store.set_agents(vec![agent("a1", "First"), agent("a2", "Second")]);
        assert_eq!(store.agents.len(), 2);
        assert_eq!(store.agents_by_id.get("a2").unwrap().name, "Second");

        store.set_agents(vec![agent("a3", "Third")]);
        assert!(store.agents_by_id.get("a1").is_none());
        assert_eq!(store.agents_by_id.get("a3").unwrap().name, "Third");
    }
}
