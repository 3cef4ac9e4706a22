pub mod api;
pub mod config;
pub mod models;
pub mod store;
pub mod tracing_setup;

pub use api::{ApiClient, ApiError, ApiRoutes};
pub use config::CoreConfig;
pub use store::AppDataStore;
