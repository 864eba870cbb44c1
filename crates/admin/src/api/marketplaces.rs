//! Marketplace endpoints.

use prizent_core::marketplace::{Marketplace, MarketplaceRequest};
use prizent_core::MarketplaceId;
use serde::Deserialize;
use tracing::{debug, error, instrument};

use super::types::{ItemBody, Page, StatusBody, succeeded};
use super::{ApiClient, ApiError};

/// `{ success, message, marketplaces: Page }`
#[derive(Deserialize)]
struct MarketplacePageBody {
    #[serde(default = "succeeded")]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    marketplaces: Option<Page<Marketplace>>,
}

impl ApiClient {
    /// List marketplaces, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or reports `success: false`.
    #[instrument(skip(self))]
    pub async fn list_marketplaces(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Page<Marketplace>, ApiError> {
        let page = page.to_string();
        let size = size.to_string();
        let body: MarketplacePageBody = self
            .get("admin/marketplaces", &[("page", page.as_str()), ("size", size.as_str())])
            .await?;

        if !body.success {
            return Err(ApiError::Unsuccessful(
                body.message.unwrap_or_else(|| "failed to list marketplaces".to_string()),
            ));
        }
        let listing = body
            .marketplaces
            .ok_or_else(|| ApiError::Parse("marketplaces missing from response".to_string()))?;
        debug!(count = listing.content.len(), total = listing.total_elements, "Listed marketplaces");
        Ok(listing)
    }

    /// Get a single marketplace with its cost records.
    ///
    /// # Errors
    ///
    /// Returns error if the marketplace is not found or the API request fails.
    #[instrument(skip(self), fields(marketplace_id = %id))]
    pub async fn get_marketplace(&self, id: MarketplaceId) -> Result<Marketplace, ApiError> {
        let body: ItemBody<Marketplace> = self.get(&format!("admin/marketplaces/{id}"), &[]).await?;
        let marketplace = body.into_item("marketplace").inspect_err(|e| {
            error!(error = %e, "Marketplace response unusable");
        })?;
        debug!(costs = marketplace.costs.len(), "Fetched marketplace");
        Ok(marketplace)
    }

    /// Create a marketplace. Returns the stored marketplace when the platform
    /// echoes it back.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or is rejected.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_marketplace(
        &self,
        request: &MarketplaceRequest,
    ) -> Result<Option<Marketplace>, ApiError> {
        let body: ItemBody<Marketplace> = self.post("admin/marketplaces", request).await?;
        let marketplace = body.into_optional_item().inspect_err(|e| {
            error!(error = %e, "Marketplace create rejected");
        })?;
        debug!(echoed = marketplace.is_some(), "Created marketplace");
        Ok(marketplace)
    }

    /// Replace a marketplace's fields and cost records. Returns the stored
    /// marketplace when the platform echoes it back.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or is rejected.
    #[instrument(skip(self, request), fields(marketplace_id = %id, costs = request.costs.len()))]
    pub async fn update_marketplace(
        &self,
        id: MarketplaceId,
        request: &MarketplaceRequest,
    ) -> Result<Option<Marketplace>, ApiError> {
        let body: ItemBody<Marketplace> =
            self.put(&format!("admin/marketplaces/{id}"), request).await?;
        let marketplace = body.into_optional_item().inspect_err(|e| {
            error!(error = %e, "Marketplace update rejected");
        })?;
        debug!(echoed = marketplace.is_some(), "Updated marketplace");
        Ok(marketplace)
    }

    /// Enable or disable a marketplace.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or is rejected.
    #[instrument(skip(self), fields(marketplace_id = %id))]
    pub async fn set_marketplace_enabled(
        &self,
        id: MarketplaceId,
        enabled: bool,
    ) -> Result<(), ApiError> {
        let enabled = enabled.to_string();
        let body: StatusBody = self
            .patch(
                &format!("admin/marketplaces/{id}/enable"),
                &[("enabled", enabled.as_str())],
            )
            .await?;
        body.check()
    }
}
