use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata carried by every API entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMeta {
    pub id: String,
    pub created: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<DateTime<Utc>>,
}

/// List envelope used by every collection endpoint. The server sends
/// `"items": null` for an empty collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ItemList<T> {
    #[serde(default, deserialize_with = "null_to_empty")]
    pub items: Vec<T>,
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

fn null_to_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    let value: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_list_null_items() {
        let list: ItemList<String> = serde_json::from_str(r#"{"items":null}"#).unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_item_list_missing_items() {
        let list: ItemList<String> = serde_json::from_str(r#"{}"#).unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_entity_meta_round_trip() {
        let meta: EntityMeta =
            serde_json::from_str(r#"{"id":"a1","created":"2024-03-01T12:00:00Z"}"#).unwrap();
        assert_eq!(meta.id, "a1");
        assert!(meta.deleted.is_none());

        let json = serde_json::to_value(&meta).unwrap();
        assert!(json.get("deleted").is_none());
    }
}
