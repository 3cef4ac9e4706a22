//! Chat-threads page: the query drives both the visible thread list and
//! the filter chips. This page is the one place every chip lookup is
//! supplied.

use obot_core::models::Thread;
use obot_core::store::views::{filter_threads, ThreadFilter};

use crate::filters::parse_date;
use crate::routes::{QueryParam, QueryState};

/// Translate decoded query state into the store-level thread filter.
/// Unparseable date values are ignored here; the chip row still shows
/// them verbatim.
pub fn thread_filter_from_query(state: &QueryState) -> ThreadFilter<'_> {
    ThreadFilter {
        agent_id: state.get(QueryParam::AgentId),
        user_id: state.get(QueryParam::UserId),
        task_id: state.get(QueryParam::TaskId),
        project_id: state.get(QueryParam::ObotId),
        created_start: state.get(QueryParam::CreatedStart).and_then(parse_date),
        created_end: state.get(QueryParam::CreatedEnd).and_then(parse_date),
    }
}

/// Threads visible for the current query, newest first. Obot backing
/// threads never show in the chat list.
pub fn visible_threads<'a>(threads: &'a [Thread], state: &QueryState) -> Vec<&'a Thread> {
    let filter = thread_filter_from_query(state);
    let mut visible: Vec<&Thread> = filter_threads(threads, &filter)
        .into_iter()
        .filter(|thread| !thread.project)
        .collect();
    visible.sort_by(|a, b| b.meta.created.cmp(&a.meta.created));
    visible
}
