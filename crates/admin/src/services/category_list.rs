//! Category list screen: flattened rows with custom field values.

use prizent_core::category::{self, Category};
use prizent_core::custom_field;
use prizent_core::{CategoryId, EntityId, Module};
use tracing::{debug, info, instrument};

use super::custom_fields::{definitions_or_empty, fetch_values_for_entities};
use crate::api::ApiClient;
use crate::error::AppError;
use crate::models::{CategoryRow, Listing, field_cells};

/// Category list service.
#[derive(Debug, Clone)]
pub struct CategoryList {
    client: ApiClient,
    concurrency: usize,
}

impl CategoryList {
    /// Create a new category list service fetching at most `concurrency`
    /// value sets at once.
    #[must_use]
    pub const fn new(client: ApiClient, concurrency: usize) -> Self {
        Self {
            client,
            concurrency,
        }
    }

    /// Build the list rows.
    ///
    /// Values are fetched only for the level-1 categories that become rows.
    ///
    /// # Errors
    ///
    /// Returns error if the category list cannot be fetched. Missing
    /// definitions or values only leave cells empty.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Listing<CategoryRow>, AppError> {
        let categories = self.client.list_categories().await?;
        let definitions = definitions_or_empty(&self.client, Module::Category).await;

        let displays = category::flatten(&categories);
        let mut values = fetch_values_for_entities(
            &self.client,
            Module::Category,
            displays.iter().map(|d| EntityId::from(d.id)),
            self.concurrency,
        )
        .await;

        let rows: Vec<CategoryRow> = displays
            .into_iter()
            .map(|mut display| {
                let values = values.remove(&EntityId::from(display.id)).unwrap_or_default();
                display.attributes = custom_field::summarize(&definitions, &values);
                CategoryRow {
                    fields: field_cells(&definitions, &values),
                    display,
                }
            })
            .collect();

        debug!(categories = categories.len(), rows = rows.len(), "Built category rows");
        Ok(Listing::new(&definitions, rows))
    }

    /// Enable or disable a category.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn toggle(&self, id: CategoryId, enabled: bool) -> Result<Category, AppError> {
        let category = self.client.set_category_enabled(id, enabled).await?;
        info!(enabled = category.enabled, "Toggled category");
        Ok(category)
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn delete(&self, id: CategoryId) -> Result<(), AppError> {
        self.client.delete_category(id).await?;
        info!("Deleted category");
        Ok(())
    }
}
