//! Brand list screen.

use prizent_core::{EntityId, Module};
use tracing::instrument;

use super::custom_fields::{definitions_or_empty, fetch_values_for_entities};
use crate::api::ApiClient;
use crate::error::AppError;
use crate::models::{BrandRow, Listing};

/// Brand list service.
#[derive(Debug, Clone)]
pub struct BrandList {
    client: ApiClient,
    concurrency: usize,
}

impl BrandList {
    #[must_use]
    pub const fn new(client: ApiClient, concurrency: usize) -> Self {
        Self {
            client,
            concurrency,
        }
    }

    /// Brands with their custom field summaries.
    ///
    /// # Errors
    ///
    /// Returns error if the brand list cannot be fetched.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Listing<BrandRow>, AppError> {
        let brands = self.client.list_brands().await?;
        let definitions = definitions_or_empty(&self.client, Module::Brand).await;
        let values = fetch_values_for_entities(
            &self.client,
            Module::Brand,
            brands.iter().map(|b| EntityId::from(b.id)),
            self.concurrency,
        )
        .await;

        let rows = brands
            .iter()
            .map(|brand| {
                let values = values
                    .get(&EntityId::from(brand.id))
                    .map_or(&[][..], Vec::as_slice);
                BrandRow::new(brand, &definitions, values)
            })
            .collect();
        Ok(Listing::new(&definitions, rows))
    }
}
