//! Brand endpoints.

use prizent_core::BrandId;
use prizent_core::brand::Brand;
use tracing::{debug, instrument};

use super::types::{ItemBody, ListBody};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// List the tenant's brands.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or reports `success: false`.
    #[instrument(skip(self))]
    pub async fn list_brands(&self) -> Result<Vec<Brand>, ApiError> {
        let body: ListBody<Brand> = self.get("admin/brands", &[]).await?;
        let brands = body.into_items()?;
        debug!(count = brands.len(), "Listed brands");
        Ok(brands)
    }

    /// Get a single brand.
    ///
    /// # Errors
    ///
    /// Returns error if the brand is not found or the API request fails.
    #[instrument(skip(self), fields(brand_id = %id))]
    pub async fn get_brand(&self, id: BrandId) -> Result<Brand, ApiError> {
        let body: ItemBody<Brand> = self.get(&format!("admin/brands/{id}"), &[]).await?;
        body.into_item("brand")
    }
}
