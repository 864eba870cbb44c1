//! Custom field definitions, values and list summaries.
//!
//! Custom fields are per-client, per-module attributes. List screens show one
//! summary column per entity (see [`summarize`]) plus one cell per enabled
//! field (see [`lookup`]).

use serde::{Deserialize, Serialize};

use crate::types::{ClientId, CustomFieldId, CustomFieldValueId, EntityId, Module};

/// Summary text when an entity has nothing to show.
pub const NO_FIELDS: &str = "None";

/// Number of field names shown before the `+N` suffix.
pub const SUMMARY_NAME_LIMIT: usize = 3;

/// Input type of a custom field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Numeric,
    Dropdown,
    Date,
    File,
}

/// A custom field configured for one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldDefinition {
    pub id: CustomFieldId,
    pub client_id: ClientId,
    pub name: String,
    pub field_type: FieldType,
    pub module: Module,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropdown_options: Option<String>,
}

impl CustomFieldDefinition {
    /// Dropdown options, split on commas and trimmed.
    #[must_use]
    pub fn options(&self) -> Vec<&str> {
        self.dropdown_options
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// The value of one custom field on one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldValue {
    pub id: CustomFieldValueId,
    pub custom_field_id: CustomFieldId,
    pub client_id: ClientId,
    pub module: Module,
    pub module_id: EntityId,
    #[serde(default)]
    pub value: String,
}

/// Body of a save-value request. The platform upserts on
/// `(custom_field_id, module, module_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldValueRequest {
    pub custom_field_id: CustomFieldId,
    pub module: Module,
    pub module_id: EntityId,
    pub value: String,
}

/// Summary text for one entity's custom fields.
///
/// - If the entity has values, their field names (in value order, unknown
///   field ids and empty names dropped) are summarized.
/// - Otherwise the names of the enabled definitions are summarized.
/// - With no names at all the result is [`NO_FIELDS`].
///
/// ```
/// use prizent_core::custom_field::summarize;
///
/// assert_eq!(summarize(&[], &[]), "None");
/// ```
#[must_use]
pub fn summarize(definitions: &[CustomFieldDefinition], values: &[CustomFieldValue]) -> String {
    let names: Vec<&str> = if values.is_empty() {
        enabled_fields(definitions).map(|d| d.name.as_str()).collect()
    } else {
        values
            .iter()
            .filter_map(|value| {
                definitions
                    .iter()
                    .find(|d| d.id == value.custom_field_id)
                    .map(|d| d.name.as_str())
            })
            .filter(|name| !name.is_empty())
            .collect()
    };
    truncate_names(&names)
}

/// Join up to [`SUMMARY_NAME_LIMIT`] names, adding `+N` for the rest.
#[must_use]
pub fn truncate_names(names: &[&str]) -> String {
    if names.is_empty() {
        return NO_FIELDS.to_owned();
    }
    if names.len() <= SUMMARY_NAME_LIMIT {
        return names.join(", ");
    }
    let shown = names.get(..SUMMARY_NAME_LIMIT).unwrap_or(names);
    format!("{} +{}", shown.join(", "), names.len() - SUMMARY_NAME_LIMIT)
}

/// The value for `field_id`, if the entity has one.
#[must_use]
pub fn lookup(values: &[CustomFieldValue], field_id: CustomFieldId) -> Option<&CustomFieldValue> {
    values.iter().find(|v| v.custom_field_id == field_id)
}

/// Enabled definitions, in order. These are the list columns.
pub fn enabled_fields(
    definitions: &[CustomFieldDefinition],
) -> impl Iterator<Item = &CustomFieldDefinition> {
    definitions.iter().filter(|d| d.enabled)
}
