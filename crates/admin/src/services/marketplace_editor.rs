//! Load and save marketplaces through the cost editor view.

use prizent_core::MarketplaceId;
use prizent_core::marketplace::Marketplace;
use tracing::{info, instrument};

use crate::api::{ApiClient, ApiError, Page};
use crate::error::AppError;
use crate::models::MarketplaceForm;

/// Marketplace editor service.
#[derive(Debug, Clone)]
pub struct MarketplaceEditor {
    client: ApiClient,
}

impl MarketplaceEditor {
    /// Create a new marketplace editor.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// One page of marketplaces.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn list(&self, page: u32, size: u32) -> Result<Page<Marketplace>, AppError> {
        Ok(self.client.list_marketplaces(page, size).await?)
    }

    /// Fetch a marketplace and decode its costs into editor form.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the marketplace does not exist, or
    /// the API error otherwise.
    #[instrument(skip(self), fields(marketplace_id = %id))]
    pub async fn load(&self, id: MarketplaceId) -> Result<MarketplaceForm, AppError> {
        let marketplace = self.client.get_marketplace(id).await.map_err(|e| match e {
            ApiError::NotFound(_) => AppError::NotFound(format!("marketplace {id}")),
            other => AppError::Api(other),
        })?;
        Ok(MarketplaceForm::from_marketplace(&marketplace))
    }

    /// Validate the form, then replace the marketplace with it.
    ///
    /// Nothing is sent if validation fails.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for bad input, or the API error.
    #[instrument(skip(self, form), fields(marketplace_id = %id))]
    pub async fn save(
        &self,
        id: MarketplaceId,
        form: &MarketplaceForm,
    ) -> Result<Option<Marketplace>, AppError> {
        form.validate()?;
        let request = form.to_request();
        let saved = self.client.update_marketplace(id, &request).await?;
        info!(costs = request.costs.len(), "Saved marketplace");
        Ok(saved)
    }

    /// Validate the form, then create a marketplace from it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for bad input, or the API error.
    #[instrument(skip(self, form))]
    pub async fn create(&self, form: &MarketplaceForm) -> Result<Option<Marketplace>, AppError> {
        form.validate()?;
        let request = form.to_request();
        let created = self.client.create_marketplace(&request).await?;
        info!(name = %request.name, costs = request.costs.len(), "Created marketplace");
        Ok(created)
    }

    /// Enable or disable a marketplace.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn set_enabled(&self, id: MarketplaceId, enabled: bool) -> Result<(), AppError> {
        Ok(self.client.set_marketplace_enabled(id, enabled).await?)
    }
}
