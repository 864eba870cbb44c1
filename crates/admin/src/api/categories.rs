//! Category endpoints.

use prizent_core::CategoryId;
use prizent_core::category::Category;
use tracing::{debug, instrument};

use super::types::{ItemBody, ListBody};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// List every category of the tenant, roots included.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or reports `success: false`.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let body: ListBody<Category> = self.get("admin/categories", &[]).await?;
        let categories = body.into_items()?;
        debug!(count = categories.len(), "Listed categories");
        Ok(categories)
    }

    /// Enable or disable a category. Returns the updated category.
    ///
    /// # Errors
    ///
    /// Returns error if the category is not found or the API request fails.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn set_category_enabled(
        &self,
        id: CategoryId,
        enabled: bool,
    ) -> Result<Category, ApiError> {
        let action = if enabled { "enable" } else { "disable" };
        let body: ItemBody<Category> = self
            .patch(&format!("admin/categories/{id}/{action}"), &[])
            .await?;
        body.into_item("category")
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns error if the category is not found or the API request fails.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), ApiError> {
        self.delete(&format!("admin/categories/{id}")).await?;
        debug!("Deleted category");
        Ok(())
    }
}
