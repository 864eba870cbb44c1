//! Rows of the category and brand list screens.

use prizent_core::brand::Brand;
use prizent_core::category::CategoryDisplay;
use prizent_core::custom_field::{self, CustomFieldDefinition, CustomFieldValue};
use prizent_core::{BrandId, CustomFieldId, EntityStatus};
use serde::Serialize;

/// Value of one enabled custom field on one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCell {
    pub field_id: CustomFieldId,
    pub name: String,
    /// `None` when the entity has no value for the field.
    pub value: Option<String>,
}

/// One cell per enabled definition, in definition order.
#[must_use]
pub fn field_cells(
    definitions: &[CustomFieldDefinition],
    values: &[CustomFieldValue],
) -> Vec<FieldCell> {
    custom_field::enabled_fields(definitions)
        .map(|definition| FieldCell {
            field_id: definition.id,
            name: definition.name.clone(),
            value: custom_field::lookup(values, definition.id).map(|v| v.value.clone()),
        })
        .collect()
}

/// A category list row with its custom field cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    #[serde(flatten)]
    pub display: CategoryDisplay,
    pub fields: Vec<FieldCell>,
}

/// Enabled custom field columns plus the rows under them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing<R> {
    pub columns: Vec<String>,
    pub rows: Vec<R>,
}

impl<R> Listing<R> {
    /// Column headers for the enabled definitions.
    #[must_use]
    pub fn new(definitions: &[CustomFieldDefinition], rows: Vec<R>) -> Self {
        Self {
            columns: custom_field::enabled_fields(definitions)
                .map(|d| d.name.clone())
                .collect(),
            rows,
        }
    }
}

/// A brand list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandRow {
    pub id: BrandId,
    pub name: String,
    pub description: String,
    pub status: EntityStatus,
    /// Custom field summary, e.g. `"Color, Size, Fabric +2"`.
    pub custom_fields: String,
    pub fields: Vec<FieldCell>,
}

impl BrandRow {
    #[must_use]
    pub fn new(
        brand: &Brand,
        definitions: &[CustomFieldDefinition],
        values: &[CustomFieldValue],
    ) -> Self {
        Self {
            id: brand.id,
            name: brand.name.clone(),
            description: brand.description.clone().unwrap_or_default(),
            status: brand.status(),
            custom_fields: custom_field::summarize(definitions, values),
            fields: field_cells(definitions, values),
        }
    }
}
