pub mod app_data_store;
pub mod views;

pub use app_data_store::AppDataStore;
pub use views::{child_counts, filter_projects, filter_threads, thread_counts, ThreadFilter};
