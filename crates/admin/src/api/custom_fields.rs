//! Custom field endpoints.

use prizent_core::custom_field::{CustomFieldDefinition, CustomFieldValue, CustomFieldValueRequest};
use prizent_core::{CustomFieldId, EntityId, Module};
use tracing::{debug, instrument};

use super::types::{ItemBody, ListBody};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// Custom field definitions configured for `module`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or reports `success: false`.
    #[instrument(skip(self), fields(module = module.code()))]
    pub async fn list_custom_fields(
        &self,
        module: Module,
    ) -> Result<Vec<CustomFieldDefinition>, ApiError> {
        let body: ListBody<CustomFieldDefinition> = self
            .get("admin/custom-fields", &[("module", module.code())])
            .await?;
        let fields = body.into_items()?;
        debug!(count = fields.len(), "Listed custom fields");
        Ok(fields)
    }

    /// Values stored for one entity.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or reports `success: false`.
    #[instrument(skip(self), fields(module = module.code(), module_id = %module_id))]
    pub async fn custom_field_values(
        &self,
        module: Module,
        module_id: EntityId,
    ) -> Result<Vec<CustomFieldValue>, ApiError> {
        let module_id = module_id.to_string();
        let body: ListBody<CustomFieldValue> = self
            .get(
                "admin/custom-fields/values",
                &[("module", module.code()), ("moduleId", module_id.as_str())],
            )
            .await?;
        body.into_items()
    }

    /// Create or replace one entity's value for a field.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or is rejected.
    #[instrument(skip(self, request), fields(custom_field_id = %request.custom_field_id))]
    pub async fn save_custom_field_value(
        &self,
        request: &CustomFieldValueRequest,
    ) -> Result<CustomFieldValue, ApiError> {
        let body: ItemBody<CustomFieldValue> =
            self.post("admin/custom-fields/values", request).await?;
        body.into_item("value")
    }

    /// Enable or disable a field definition. Returns the updated definition.
    ///
    /// # Errors
    ///
    /// Returns error if the field is not found or the API request fails.
    #[instrument(skip(self), fields(custom_field_id = %id))]
    pub async fn set_custom_field_enabled(
        &self,
        id: CustomFieldId,
        enabled: bool,
    ) -> Result<CustomFieldDefinition, ApiError> {
        let enabled = enabled.to_string();
        let body: ItemBody<CustomFieldDefinition> = self
            .patch(
                &format!("admin/custom-fields/{id}/enable"),
                &[("enabled", enabled.as_str())],
            )
            .await?;
        body.into_item("customField")
    }

    /// Delete a field definition.
    ///
    /// # Errors
    ///
    /// Returns error if the field is not found or the API request fails.
    #[instrument(skip(self), fields(custom_field_id = %id))]
    pub async fn delete_custom_field(&self, id: CustomFieldId) -> Result<(), ApiError> {
        self.delete(&format!("admin/custom-fields/{id}")).await
    }
}
