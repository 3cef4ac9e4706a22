pub mod client;
pub mod routes;

pub use client::{ApiClient, ApiError, ResponseCache};
pub use routes::{ApiRoutes, ApiUrl, ThreadEventsParams};
