pub mod catalog;
pub mod filters;
pub mod pages;
pub mod progress;
pub mod routes;

pub use filters::{FilterChip, FilterKey, FilterLookups};
pub use progress::NavigationProgress;
pub use routes::{AdminRoute, NavTarget, QueryParam, QueryState};
