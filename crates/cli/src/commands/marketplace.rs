//! Marketplace commands.
//!
//! # Usage
//!
//! ```bash
//! # Show a marketplace in editor form (three cost sections)
//! pz-cli marketplace show 4 > myntra.json
//!
//! # Edit myntra.json, then save it back
//! pz-cli marketplace save 4 --file myntra.json
//! ```

use prizent_admin::models::MarketplaceForm;
use prizent_admin::services::MarketplaceEditor;
use prizent_core::MarketplaceId;

use super::{CliError, Context, print_json, read_json};

/// List one page of marketplaces.
pub async fn list(ctx: &Context, page: u32, size: u32) -> Result<(), CliError> {
    let editor = MarketplaceEditor::new(ctx.client.clone());
    let listing = editor.list(page, size).await?;
    tracing::info!(
        page = listing.page_number,
        total = listing.total_elements,
        "Fetched marketplaces"
    );
    print_json(&listing.content)
}

/// Print the editor form of a marketplace.
pub async fn show(ctx: &Context, id: i64) -> Result<(), CliError> {
    let editor = MarketplaceEditor::new(ctx.client.clone());
    let form = editor.load(MarketplaceId::new(id)).await?;
    print_json(&form)
}

/// Save an edited form from `file`.
pub async fn save(ctx: &Context, id: i64, file: &str) -> Result<(), CliError> {
    let form: MarketplaceForm = read_json(file)?;
    let editor = MarketplaceEditor::new(ctx.client.clone());
    match editor.save(MarketplaceId::new(id), &form).await? {
        Some(saved) => print_json(&MarketplaceForm::from_marketplace(&saved)),
        None => {
            tracing::info!(marketplace_id = id, "Marketplace saved");
            Ok(())
        }
    }
}

/// Create a marketplace from the form in `file`.
pub async fn create(ctx: &Context, file: &str) -> Result<(), CliError> {
    let form: MarketplaceForm = read_json(file)?;
    let editor = MarketplaceEditor::new(ctx.client.clone());
    match editor.create(&form).await? {
        Some(created) => print_json(&created),
        None => {
            tracing::info!(name = %form.name.trim(), "Marketplace created");
            Ok(())
        }
    }
}

/// Enable or disable a marketplace.
pub async fn set_enabled(ctx: &Context, id: i64, enabled: bool) -> Result<(), CliError> {
    let editor = MarketplaceEditor::new(ctx.client.clone());
    editor.set_enabled(MarketplaceId::new(id), enabled).await?;
    tracing::info!(marketplace_id = id, enabled, "Marketplace updated");
    Ok(())
}
