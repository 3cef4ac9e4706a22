//! Models page: provider label join plus the table's default ordering.

use std::collections::HashMap;

use obot_core::models::{Model, ModelProvider};

/// Provider id to display name, as the page joins it.
pub fn provider_labels(providers: &[ModelProvider]) -> HashMap<String, String> {
    providers
        .iter()
        .map(|provider| (provider.meta.id.clone(), provider.name.clone()))
        .collect()
}

/// One table row of the models page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRow {
    pub id: String,
    /// Model name, falling back to the raw id.
    pub display_name: String,
    /// Provider display name, falling back to the raw provider id.
    pub provider: String,
    pub active: bool,
    pub default: bool,
}

/// Rows for the models table, sorted descending on the display column.
pub fn model_rows(models: &[Model], providers: &[ModelProvider]) -> Vec<ModelRow> {
    let labels = provider_labels(providers);

    let mut rows: Vec<ModelRow> = models
        .iter()
        .map(|model| ModelRow {
            id: model.meta.id.clone(),
            display_name: model.display_name().to_string(),
            provider: labels
                .get(&model.model_provider)
                .cloned()
                .unwrap_or_else(|| model.model_provider.clone()),
            active: model.active,
            default: model.default,
        })
        .collect();
    rows.sort_by(|a, b| b.display_name.cmp(&a.display_name));
    rows
}
