pub mod agent;
pub mod entity;
pub mod model;
pub mod project;
pub mod task;
pub mod thread;
pub mod tool_reference;
pub mod user;

pub use agent::Agent;
pub use entity::{EntityMeta, ItemList};
pub use model::{Model, ModelProvider};
pub use project::Project;
pub use task::Task;
pub use thread::Thread;
pub use tool_reference::{
    ToolMetadata, ToolReference, ToolReferenceType, UNCATEGORIZED_TOOL_CATEGORY,
};
pub use user::User;
