use serde::{Deserialize, Serialize};

use super::entity::EntityMeta;

/// Platform user. Display surfaces show the email address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_admin: Option<bool>,
}

impl User {
    pub fn id(&self) -> &str {
        &self.meta.id
    }
}
