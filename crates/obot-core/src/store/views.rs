//! Pure derivations over store collections. Pages call these on every
//! render, so everything here borrows and nothing mutates.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Project, Thread};

/// Number of child obots per parent project id.
pub fn child_counts(projects: &[Project]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for project in projects {
        if let Some(parent_id) = &project.parent_id {
            *counts.entry(parent_id.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Number of chat threads per owning project id. Threads without a parent
/// project and obot backing threads are skipped.
pub fn thread_counts(threads: &[Thread]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for thread in threads {
        if thread.project {
            continue;
        }
        let Some(project_id) = &thread.project_id else {
            continue;
        };
        *counts.entry(project_id.clone()).or_insert(0) += 1;
    }
    counts
}

/// Projects visible for the obots page query. With no filter, everything
/// shows; `obot_id` narrows to one obot, `parent_obot_id` to the children
/// of one obot.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    obot_id: Option<&str>,
    parent_obot_id: Option<&str>,
) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| match obot_id {
            Some(id) => project.meta.id == id,
            None => true,
        })
        .filter(|project| match parent_obot_id {
            Some(id) => project.parent_id.as_deref() == Some(id),
            None => true,
        })
        .collect()
}

/// Query-driven thread filter. Every field is optional; an unset field
/// matches everything. Date bounds compare on the calendar day.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadFilter<'a> {
    pub agent_id: Option<&'a str>,
    pub user_id: Option<&'a str>,
    pub task_id: Option<&'a str>,
    pub project_id: Option<&'a str>,
    pub created_start: Option<NaiveDate>,
    pub created_end: Option<NaiveDate>,
}

impl ThreadFilter<'_> {
    pub fn matches(&self, thread: &Thread) -> bool {
        if let Some(agent_id) = self.agent_id {
            if thread.agent_id.as_deref() != Some(agent_id) {
                return false;
            }
        }
        if let Some(user_id) = self.user_id {
            if thread.user_id.as_deref() != Some(user_id) {
                return false;
            }
        }
        if let Some(task_id) = self.task_id {
            if thread.task_id.as_deref() != Some(task_id) {
                return false;
            }
        }
        if let Some(project_id) = self.project_id {
            if thread.project_id.as_deref() != Some(project_id) {
                return false;
            }
        }

        let created = thread.meta.created.date_naive();
        if let Some(start) = self.created_start {
            if created < start {
                return false;
            }
        }
        if let Some(end) = self.created_end {
            if created > end {
                return false;
            }
        }
        true
    }
}

pub fn filter_threads<'a>(threads: &'a [Thread], filter: &ThreadFilter) -> Vec<&'a Thread> {
    threads
        .iter()
        .filter(|thread| filter.matches(thread))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityMeta;

    fn project(id: &str, parent_id: Option<&str>) -> Project {
        Project {
            meta: EntityMeta {
                id: id.to_string(),
                created: "2024-03-01T12:00:00Z".parse().unwrap(),
                deleted: None,
            },
            name: format!("obot {id}"),
            description: None,
            assistant_id: "a1".to_string(),
            parent_id: parent_id.map(str::to_string),
            user_id: None,
            editor: false,
        }
    }

    fn thread(id: &str, project_id: Option<&str>, is_project: bool) -> Thread {
        Thread {
            meta: EntityMeta {
                id: id.to_string(),
                created: "2024-03-05T09:00:00Z".parse().unwrap(),
                deleted: None,
            },
            name: None,
            agent_id: Some("a1".to_string()),
            user_id: None,
            task_id: None,
            project_id: project_id.map(str::to_string),
            project: is_project,
        }
    }

    #[test]
    fn test_child_counts() {
        let projects = vec![
            project("p1", None),
            project("p2", Some("p1")),
            project("p3", Some("p1")),
            project("p4", Some("p2")),
        ];
        let counts = child_counts(&projects);
        assert_eq!(counts.get("p1"), Some(&2));
        assert_eq!(counts.get("p2"), Some(&1));
        assert_eq!(counts.get("p4"), None);
    }

    #[test]
    fn test_thread_counts_skip_orphans_and_backing_threads() {
        let threads = vec![
            thread("t1", Some("p1"), false),
            thread("t2", Some("p1"), false),
            thread("t3", Some("p1"), true),
            thread("t4", None, false),
        ];
        let counts = thread_counts(&threads);
        assert_eq!(counts.get("p1"), Some(&2));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_filter_projects() {
        let projects = vec![
            project("p1", None),
            project("p2", Some("p1")),
            project("p3", Some("p1")),
        ];

        assert_eq!(filter_projects(&projects, None, None).len(), 3);

        let one = filter_projects(&projects, Some("p2"), None);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].meta.id, "p2");

        let children = filter_projects(&projects, None, Some("p1"));
        assert_eq!(children.len(), 2);

        assert!(filter_projects(&projects, Some("p2"), Some("p2")).is_empty());
    }

    #[test]
    fn test_thread_filter_date_bounds() {
        let threads = vec![thread("t1", Some("p1"), false)];

        let inside = ThreadFilter {
            created_start: NaiveDate::from_ymd_opt(2024, 3, 1),
            created_end: NaiveDate::from_ymd_opt(2024, 3, 31),
            ..Default::default()
        };
        assert_eq!(filter_threads(&threads, &inside).len(), 1);

        let before = ThreadFilter {
            created_start: NaiveDate::from_ymd_opt(2024, 3, 6),
            ..Default::default()
        };
        assert!(filter_threads(&threads, &before).is_empty());

        let after = ThreadFilter {
            created_end: NaiveDate::from_ymd_opt(2024, 3, 4),
            ..Default::default()
        };
        assert!(filter_threads(&threads, &after).is_empty());
    }

    #[test]
    fn test_thread_filter_ids() {
        let threads = vec![thread("t1", Some("p1"), false)];

        let matching = ThreadFilter {
            agent_id: Some("a1"),
            project_id: Some("p1"),
            ..Default::default()
        };
        assert_eq!(filter_threads(&threads, &matching).len(), 1);

        let wrong_user = ThreadFilter {
            user_id: Some("u1"),
            ..Default::default()
        };
        assert!(filter_threads(&threads, &wrong_user).is_empty());
    }
}
