pub mod error;
pub mod models;
pub mod obots;
pub mod threads;

pub use error::RouteErrorView;
pub use models::{model_rows, provider_labels, ModelRow};
pub use obots::{obot_rows, ObotRow};
pub use threads::{thread_filter_from_query, visible_threads};
